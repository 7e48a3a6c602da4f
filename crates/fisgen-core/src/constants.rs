/// Recognized data-library categories, in the order FISPACT expects them
/// in the files input. Mapping entries outside this list are never rendered.
pub const LIBRARY_ORDER: [&str; 11] = [
    "ind_nuc", "xs_endf", "xs_endfb", "prob_tab", "fy_endf", "sf_endf", "dk_endf", "hazards",
    "clear", "a2data", "absorp",
];

/// FISPACT wants energy bin boundaries in eV; spectra arrive in MeV.
pub const EV_PER_MEV: f64 = 1.0e6;

/// Values per line in the arbitrary-flux block.
pub const VALUES_PER_LINE: usize = 6;

/// Target group structure for flux collapse.
pub const COLLAPSE_GROUPS: u32 = 709;
