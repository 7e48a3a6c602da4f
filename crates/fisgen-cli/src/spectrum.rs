//! Two-column spectrum file parsing for the arbflux command.
//!
//! Format: one `energy_MeV flux` pair per line, descending energy, `#`
//! comments and blank lines skipped. Pure parsing here; the file read stays
//! in main.

use anyhow::{Context, Result, bail};

pub fn parse_spectrum(text: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut ebins = Vec::new();
    let mut flux = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cols = line.split_whitespace();
        let (Some(e), Some(f)) = (cols.next(), cols.next()) else {
            bail!("line {}: expected 'energy flux', got '{line}'", lineno + 1);
        };
        if cols.next().is_some() {
            bail!("line {}: more than two columns: '{line}'", lineno + 1);
        }

        ebins.push(
            e.parse::<f64>()
                .with_context(|| format!("line {}: bad energy '{e}'", lineno + 1))?,
        );
        flux.push(
            f.parse::<f64>()
                .with_context(|| format!("line {}: bad flux '{f}'", lineno + 1))?,
        );
    }

    if ebins.is_empty() {
        bail!("spectrum file contains no data lines");
    }

    Ok((ebins, flux))
}
