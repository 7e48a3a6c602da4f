//! Irradiation scenario (inventory input) rendering.
//!
//! A raw scenario template carries literal `FLUX <value>` lines describing the
//! reference irradiation profile. Scanning replaces each well-formed marker
//! with an indexed `FLUX {i}` slot and records `value / norm_flux` as that
//! step's coefficient; rendering scales the coefficients by the actual flux at
//! a point and fills the slots back in.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RenderError, Result};
use crate::format::sci;
use crate::template::Template;

/// `FLUX` followed by spaces and a float in scientific notation. Anything
/// deviating from this shape (e.g. `FLUX 0.0` shutdown steps) is left as
/// literal text, not an error.
static FLUX_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FLUX +([0-9]+\.[0-9]+E[+-]?[0-9]+)").unwrap());

#[derive(Debug, Clone)]
pub struct InventoryTemplate {
    template: Template,
    coeffs: Vec<f64>,
}

impl InventoryTemplate {
    /// Scan `raw` for FLUX markers and build the slotted template, normalizing
    /// each marker value by `norm_flux` (must be finite and nonzero).
    pub fn from_scenario(raw: &str, norm_flux: f64) -> Result<Self> {
        if norm_flux == 0.0 || !norm_flux.is_finite() {
            return Err(RenderError::InvalidInput(format!(
                "normalization flux must be finite and nonzero, got {norm_flux}"
            )));
        }

        let mut coeffs = Vec::new();
        let mut rewritten = String::with_capacity(raw.len());
        let mut last = 0;

        for caps in FLUX_MARKER.captures_iter(raw) {
            let m = caps.get(0).unwrap();
            // The capture is shaped like a float by construction.
            let value: f64 = caps[1]
                .parse()
                .map_err(|e| RenderError::InvalidInput(format!("flux marker '{}': {e}", &caps[1])))?;

            rewritten.push_str(&raw[last..m.start()]);
            rewritten.push_str(&format!("FLUX {{{}}}", coeffs.len()));
            coeffs.push(value / norm_flux);
            last = m.end();
        }
        rewritten.push_str(&raw[last..]);

        Ok(InventoryTemplate {
            template: Template::parse(&rewritten),
            coeffs,
        })
    }

    /// Per-marker coefficients, in order of appearance in the scenario.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Render the inventory input for a nominal `flux` and a material
    /// description. Each slot receives `flux * coeff` in 4-decimal
    /// scientific notation.
    pub fn render(&self, flux: f64, material: &str) -> Result<String> {
        let values: Vec<String> = self.coeffs.iter().map(|c| sci(flux * c, 4)).collect();
        let named: HashMap<&str, &str> = HashMap::from([("material", material)]);
        self.template.render(&values, &named)
    }
}
