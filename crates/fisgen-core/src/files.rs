//! Files input rendering: the data-library index FISPACT reads first.

use std::collections::HashMap;

use crate::constants::LIBRARY_ORDER;
use crate::error::Result;
use crate::template::Template;

/// Build the padded `category  path` listing. Categories render in
/// [`LIBRARY_ORDER`] regardless of the mapping's iteration order; unrecognized
/// categories are skipped. Paths are aligned to a common column two spaces
/// past the longest mapped category name.
pub fn library_listing(datalib: &HashMap<String, String>) -> String {
    let max_len = datalib.keys().map(|k| k.len()).max().unwrap_or(0);

    let lines: Vec<String> = LIBRARY_ORDER
        .iter()
        .filter_map(|name| {
            datalib
                .get(*name)
                .map(|path| format!("{name}{}{path}", " ".repeat(max_len - name.len() + 2)))
        })
        .collect();

    lines.join("\n")
}

/// Fill the outer files template's `{datalib}` slot with the listing.
pub fn files_text(files_temp: &str, datalib: &HashMap<String, String>) -> Result<String> {
    let listing = library_listing(datalib);
    let named: HashMap<&str, &str> = HashMap::from([("datalib", listing.as_str())]);
    Template::parse(files_temp).render(&[], &named)
}
