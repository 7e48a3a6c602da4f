//! FISPACT input-file template engine.
//!
//! Renders the text of FISPACT inventory, files, collapse and arbitrary-flux
//! input files from templates: scans an irradiation scenario for FLUX markers,
//! derives per-step normalization coefficients, and substitutes fixed-width
//! scientific-notation values and material descriptions into slotted templates.
//!
//! Zero I/O — pure string construction with no opinions about where templates
//! come from or where rendered text goes.

pub mod arbflux;
pub mod collapse;
pub mod constants;
pub mod error;
pub mod files;
pub mod format;
pub mod inventory;
pub mod session;
pub mod template;

pub use arbflux::arb_flux_text;
pub use collapse::collapse_text;
pub use constants::{COLLAPSE_GROUPS, EV_PER_MEV, LIBRARY_ORDER, VALUES_PER_LINE};
pub use error::{RenderError, Result};
pub use files::{files_text, library_listing};
pub use format::sci;
pub use inventory::InventoryTemplate;
pub use session::RenderSession;
pub use template::{Segment, Template};
