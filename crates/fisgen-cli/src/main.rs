mod config;
mod spectrum;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use fisgen_assets::{TemplateStore, create_file};
use fisgen_core::{COLLAPSE_GROUPS, RenderSession, arb_flux_text};

use crate::config::Config;
use crate::spectrum::parse_spectrum;

#[derive(Parser)]
#[command(name = "fisgen", about = "Generate FISPACT input files from templates")]
struct Cli {
    /// TOML job configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with template overrides (falls back to built-ins)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Output directory (must exist)
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the data-library files input
    Files {
        /// Output file name
        #[arg(long, default_value = "files")]
        output: String,
    },

    /// Render the spectrum collapse input
    Collapse {
        /// -1 binary cross-section library, 1 text library
        #[arg(long, allow_hyphen_values = true)]
        libxs: Option<i32>,

        /// Energy groups in the neutron spectrum
        #[arg(long)]
        groups: Option<u32>,

        #[arg(long, default_value = "collapse.i")]
        output: String,
    },

    /// Render the inventory (irradiation scenario) input
    Inventory {
        /// Nominal flux at the point of interest
        #[arg(long)]
        flux: f64,

        /// File with the material description text
        #[arg(long)]
        material: PathBuf,

        /// Raw scenario template (defaults to the built-in inventory.temp)
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Normalization flux for the scenario markers
        #[arg(long)]
        norm_flux: Option<f64>,

        #[arg(long, default_value = "inventory.i")]
        output: String,
    },

    /// Build an arbitrary-flux conversion file from a two-column spectrum
    Arbflux {
        /// Spectrum file: `energy_MeV flux` per line, descending energy
        spectrum: PathBuf,

        #[arg(long, default_value = "arb_flux")]
        output: String,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = match &cli.templates {
        Some(dir) => TemplateStore::with_override_dir(dir),
        None => TemplateStore::builtin(),
    };
    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match &cli.command {
        Commands::Files { output } => cmd_files(&cli, &store, &cfg, output),
        Commands::Collapse {
            libxs,
            groups,
            output,
        } => cmd_collapse(&cli, &store, &cfg, *libxs, *groups, output),
        Commands::Inventory {
            flux,
            material,
            scenario,
            norm_flux,
            output,
        } => cmd_inventory(
            &cli,
            &store,
            &cfg,
            *flux,
            material,
            scenario.as_deref(),
            *norm_flux,
            output,
        ),
        Commands::Arbflux { spectrum, output } => cmd_arbflux(&cli, spectrum, output),
    }
}

fn write_output(cli: &Cli, name: &str, text: &str) -> Result<()> {
    let path = create_file(name, &cli.out_dir, text)
        .with_context(|| format!("failed to write {name}"))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_files(cli: &Cli, store: &TemplateStore, cfg: &Config, output: &str) -> Result<()> {
    if cfg.datalib.is_empty() {
        bail!("config has no [datalib] section (use --config)");
    }

    let files_temp = store.load("files.temp").context("loading files template")?;
    let mut session = RenderSession::new();
    session.init_files(&files_temp, &cfg.datalib)?;
    tracing::info!("files input rendered with {} libraries", cfg.datalib.len());

    write_output(cli, output, session.render_files()?)
}

fn cmd_collapse(
    cli: &Cli,
    store: &TemplateStore,
    cfg: &Config,
    libxs: Option<i32>,
    groups: Option<u32>,
    output: &str,
) -> Result<()> {
    let Some(libxs) = libxs.or(cfg.libxs) else {
        bail!("libxs not given (flag --libxs or config key)");
    };
    let groups = groups.or(cfg.groups).unwrap_or(COLLAPSE_GROUPS);

    let collapse_temp = store
        .load("collapse.temp")
        .context("loading collapse template")?;
    let mut session = RenderSession::new();
    session.init_collapse(&collapse_temp, libxs, groups)?;
    tracing::info!("collapse input rendered: libxs={libxs}, groups={groups}");

    write_output(cli, output, session.render_collapse()?)
}

#[allow(clippy::too_many_arguments)]
fn cmd_inventory(
    cli: &Cli,
    store: &TemplateStore,
    cfg: &Config,
    flux: f64,
    material: &Path,
    scenario: Option<&Path>,
    norm_flux: Option<f64>,
    output: &str,
) -> Result<()> {
    let Some(norm_flux) = norm_flux.or(cfg.norm_flux) else {
        bail!("norm_flux not given (flag --norm-flux or config key)");
    };

    let raw = match scenario {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?,
        None => store
            .load("inventory.temp")
            .context("loading built-in scenario")?,
    };
    let material = std::fs::read_to_string(material)
        .with_context(|| format!("failed to read material {}", material.display()))?;

    let mut session = RenderSession::new();
    session.init_inventory(&raw, norm_flux)?;
    let coeffs = session.inventory().map(|i| i.coeffs().len()).unwrap_or(0);
    tracing::info!("scenario scanned: {coeffs} flux markers, norm_flux={norm_flux}");

    let text = session.render_inventory(flux, material.trim_end())?;
    write_output(cli, output, &text)
}

fn cmd_arbflux(cli: &Cli, spectrum: &Path, output: &str) -> Result<()> {
    let text = std::fs::read_to_string(spectrum)
        .with_context(|| format!("failed to read spectrum {}", spectrum.display()))?;
    let (ebins, flux) = parse_spectrum(&text)?;
    tracing::info!("spectrum parsed: {} groups", ebins.len());

    write_output(cli, output, &arb_flux_text(&ebins, &flux)?)
}
