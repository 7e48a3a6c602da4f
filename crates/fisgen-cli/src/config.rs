//! TOML job configuration.
//!
//! A job file carries the data-library mapping and the default numeric
//! parameters; command-line flags override the config values.
//!
//! ```toml
//! norm_flux = 1.0e14
//! libxs = -1
//! groups = 709
//!
//! [datalib]
//! ind_nuc = "/libs/TENDL2017/ind_nuc"
//! xs_endf = "/libs/TENDL2017/gxs-709"
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Flux value the scenario markers are normalized against.
    pub norm_flux: Option<f64>,
    /// -1 binary cross-section library, 1 text library.
    pub libxs: Option<i32>,
    /// Energy groups in the neutron spectrum.
    pub groups: Option<u32>,
    /// Library category → path.
    #[serde(default)]
    pub datalib: HashMap<String, String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg: Config = toml::from_str(
            r#"
norm_flux = 1.0e14
libxs = -1
groups = 709

[datalib]
ind_nuc = "/libs/ind_nuc"
"#,
        )
        .unwrap();
        assert_eq!(cfg.norm_flux, Some(1.0e14));
        assert_eq!(cfg.libxs, Some(-1));
        assert_eq!(cfg.groups, Some(709));
        assert_eq!(cfg.datalib["ind_nuc"], "/libs/ind_nuc");
    }

    #[test]
    fn test_empty_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.norm_flux.is_none());
        assert!(cfg.datalib.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("normflux = 1.0");
        assert!(result.is_err());
    }
}
