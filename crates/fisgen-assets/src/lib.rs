//! Template resources and file output for the FISPACT input generator.
//!
//! Owns the two I/O edges the core deliberately avoids: where template text
//! comes from (built-in resources with an optional override directory) and
//! where rendered text goes (`create_file`).

mod error;
mod templates;
mod writer;

pub use error::{AssetError, Result};
pub use templates::TemplateStore;
pub use writer::create_file;
