//! Render session: owns the initialized templates for one FISPACT task.
//!
//! The original design kept these as process-wide globals; a session object
//! makes the init/use lifecycle explicit and lets the borrow checker enforce
//! the single-writer rule (`&mut self` to initialize, `&self` to render).

use std::collections::HashMap;

use crate::collapse::collapse_text;
use crate::error::{RenderError, Result};
use crate::files::files_text;
use crate::inventory::InventoryTemplate;

#[derive(Debug, Default)]
pub struct RenderSession {
    inventory: Option<InventoryTemplate>,
    files: Option<String>,
    collapse: Option<String>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the raw irradiation scenario and store the slotted inventory
    /// template. Overwrites any previous inventory state; on error the
    /// previous state is kept untouched.
    pub fn init_inventory(&mut self, raw: &str, norm_flux: f64) -> Result<()> {
        let built = InventoryTemplate::from_scenario(raw, norm_flux)?;
        self.inventory = Some(built);
        Ok(())
    }

    /// Render and store the files input text from the outer template and the
    /// library mapping.
    pub fn init_files(
        &mut self,
        files_temp: &str,
        datalib: &HashMap<String, String>,
    ) -> Result<()> {
        let text = files_text(files_temp, datalib)?;
        self.files = Some(text);
        Ok(())
    }

    /// Render and store the collapse input text.
    pub fn init_collapse(&mut self, collapse_temp: &str, libxs: i32, groups: u32) -> Result<()> {
        let text = collapse_text(collapse_temp, libxs, groups)?;
        self.collapse = Some(text);
        Ok(())
    }

    /// The stored inventory template, if initialized.
    pub fn inventory(&self) -> Option<&InventoryTemplate> {
        self.inventory.as_ref()
    }

    pub fn render_inventory(&self, flux: f64, material: &str) -> Result<String> {
        self.inventory
            .as_ref()
            .ok_or(RenderError::Uninitialized("inventory"))?
            .render(flux, material)
    }

    pub fn render_files(&self) -> Result<&str> {
        self.files
            .as_deref()
            .ok_or(RenderError::Uninitialized("files"))
    }

    pub fn render_collapse(&self) -> Result<&str> {
        self.collapse
            .as_deref()
            .ok_or(RenderError::Uninitialized("collapse"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "{material}\nFLUX 2.0000E+14\nTIME 1.0 YEARS\nEND\n";
    const FILES_TEMP: &str = "{datalib}\nfluxes  fluxes\n";
    const COLLAPSE_TEMP: &str = "GETXS {libxs} {nestrc}\n";

    fn datalib() -> HashMap<String, String> {
        HashMap::from([("ind_nuc".to_string(), "/data/ind_nuc".to_string())])
    }

    #[test]
    fn test_render_before_init_fails() {
        let session = RenderSession::new();
        assert!(matches!(
            session.render_inventory(1.0, "STEEL").unwrap_err(),
            RenderError::Uninitialized("inventory")
        ));
        assert!(matches!(
            session.render_files().unwrap_err(),
            RenderError::Uninitialized("files")
        ));
        assert!(matches!(
            session.render_collapse().unwrap_err(),
            RenderError::Uninitialized("collapse")
        ));
    }

    #[test]
    fn test_init_then_render() {
        let mut session = RenderSession::new();
        session.init_inventory(SCENARIO, 1.0e14).unwrap();
        session.init_files(FILES_TEMP, &datalib()).unwrap();
        session.init_collapse(COLLAPSE_TEMP, -1, 709).unwrap();

        let inv = session.render_inventory(1.0e14, "STEEL").unwrap();
        assert!(inv.contains("FLUX 2.0000e+14"));
        assert!(inv.starts_with("STEEL\n"));
        assert!(session.render_files().unwrap().contains("ind_nuc"));
        assert!(session.render_collapse().unwrap().contains("GETXS -1 709"));
    }

    #[test]
    fn test_reinit_fully_overwrites() {
        let mut session = RenderSession::new();
        session
            .init_inventory("FLUX 4.0000E+14\nFLUX 1.0000E+14\n", 1.0e14)
            .unwrap();
        assert_eq!(session.inventory().unwrap().coeffs().len(), 2);

        session.init_inventory("FLUX 8.0000E+14\n", 2.0e14).unwrap();
        assert_eq!(session.inventory().unwrap().coeffs(), &[4.0]);

        let text = session.render_inventory(1.0e14, "X").unwrap();
        assert_eq!(text, "FLUX 4.0000e+14\n");
    }

    #[test]
    fn test_failed_init_keeps_previous_state() {
        let mut session = RenderSession::new();
        session.init_inventory(SCENARIO, 1.0e14).unwrap();
        session.init_collapse(COLLAPSE_TEMP, 1, 709).unwrap();

        assert!(session.init_inventory(SCENARIO, 0.0).is_err());
        assert!(session.init_collapse(COLLAPSE_TEMP, 7, 709).is_err());

        // prior state still renders
        assert!(session.render_inventory(1.0e14, "STEEL").is_ok());
        assert!(session.render_collapse().unwrap().contains("GETXS 1 709"));
    }
}
