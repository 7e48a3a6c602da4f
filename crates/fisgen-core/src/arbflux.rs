//! Arbitrary-flux block: converts a caller-supplied group structure into the
//! fixed 709-group structure FISPACT collapses against.

use crate::constants::{EV_PER_MEV, VALUES_PER_LINE};
use crate::error::{RenderError, Result};
use crate::format::sci;

/// Emit `values` six per line, each formatted to 6-decimal scientific
/// notation, in reverse order. The final value is always newline-terminated.
fn push_block(out: &mut String, values: &[f64], scale: f64) {
    let count = values.len();
    for (i, v) in values.iter().rev().enumerate() {
        out.push_str(&sci(v * scale, 6));
        if (i + 1) % VALUES_PER_LINE == 0 || i + 1 == count {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
}

/// Build the arb_flux file text for `ebins` (energy bin boundaries in MeV,
/// descending) and `flux` (group fluxes in the same order). Pure string
/// construction, no I/O.
pub fn arb_flux_text(ebins: &[f64], flux: &[f64]) -> Result<String> {
    if ebins.len() != flux.len() {
        return Err(RenderError::InvalidInput(format!(
            "energy bins ({}) and flux ({}) must have equal length",
            ebins.len(),
            flux.len()
        )));
    }
    if ebins.is_empty() {
        return Err(RenderError::InvalidInput(
            "energy bins must not be empty".to_string(),
        ));
    }

    let mut out = String::new();
    push_block(&mut out, ebins, EV_PER_MEV);
    push_block(&mut out, flux, 1.0);
    out.push_str("1.0\n");

    let total: f64 = flux.iter().sum();
    out.push_str(&format!("total flux={}", sci(total, 6)));
    Ok(out)
}
