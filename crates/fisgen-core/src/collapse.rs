//! Collapse input rendering: instructs FISPACT to fold the neutron spectrum
//! into the cross-section library group structure.

use std::collections::HashMap;

use crate::error::{RenderError, Result};
use crate::template::Template;

/// Fill the collapse template. `libxs` selects the library form: -1 for
/// binary, +1 for text. `groups` is the number of energy groups in the
/// neutron spectrum (`{nestrc}` slot).
pub fn collapse_text(collapse_temp: &str, libxs: i32, groups: u32) -> Result<String> {
    if libxs != -1 && libxs != 1 {
        return Err(RenderError::InvalidInput(format!(
            "libxs must be -1 (binary library) or 1 (text library), got {libxs}"
        )));
    }

    let libxs_str = libxs.to_string();
    let groups_str = groups.to_string();
    let named: HashMap<&str, &str> =
        HashMap::from([("libxs", libxs_str.as_str()), ("nestrc", groups_str.as_str())]);
    Template::parse(collapse_temp).render(&[], &named)
}
