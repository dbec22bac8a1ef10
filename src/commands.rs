//! Command handlers for the headless subcommands

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::fit;
use crate::matcher;
use crate::output::{self, CapacityReport};
use crate::store::DimensionStore;
use crate::types::{Axis, PresetBox};

/// Fill a store from command line text.
///
/// Values that are not plain decimals are logged and left empty, so the
/// report shows the sentinel instead of failing.
pub fn store_from_args(width: &str, length: &str, height: &str) -> DimensionStore {
    let mut store = DimensionStore::new();
    for (axis, text) in [(Axis::Width, width), (Axis::Length, length), (Axis::Height, height)] {
        let text = text.trim();
        if !store.set(axis, text) {
            warn!("Ignoring invalid {} '{}'", axis, text);
        }
    }
    store
}

/// Print the capacity of every truck for the box in `store`
pub fn calc<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    store: &DimensionStore,
    format: OutputFormat,
) -> Result<()> {
    let bx = store.dimensions();
    match &bx {
        Some(bx) => info!("Calculating capacity for {}", bx),
        None => warn!("Box dimensions incomplete; every truck shows {}", fit::SENTINEL),
    }

    let rows = fit::capacity_table(bx.as_ref(), &catalog.trucks);
    let matches = matcher::matching_presets(bx.as_ref(), &catalog.presets);
    let report = CapacityReport::new(bx, matches, &rows);
    output::write_capacity_report(out, format, &report)?;
    Ok(())
}

/// Print the capacity for a named preset
pub fn calc_preset<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    name: &str,
    format: OutputFormat,
) -> Result<()> {
    let preset = catalog.require_preset(name)?;
    let mut store = DimensionStore::new();
    store.apply_preset(preset);
    calc(out, catalog, &store, format)
}

/// Print the presets, optionally only those equal to a box
pub fn presets<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    matching: Option<&DimensionStore>,
    format: OutputFormat,
) -> Result<()> {
    let selected: Vec<&PresetBox> = match matching {
        Some(store) => {
            let bx = store.dimensions();
            catalog
                .presets
                .iter()
                .filter(|p| matcher::is_match(bx.as_ref(), p))
                .collect()
        }
        None => catalog.presets.iter().collect(),
    };
    output::write_presets(out, format, &selected)?;
    Ok(())
}

/// Validate a catalog file, printing the outcome.
///
/// The verdict goes to `out` on success and to `err` on failure. Returns
/// `Ok(false)` when the file cannot be loaded or is invalid; write failures
/// are errors.
pub fn validate<W: Write, E: Write>(out: &mut W, err: &mut E, path: &Path) -> Result<bool> {
    info!("Validating catalog file: {:?}", path);
    match Catalog::load_from_file(path) {
        Ok(catalog) => {
            writeln!(
                out,
                "✓ Catalog file is valid: {} trucks, {} presets",
                catalog.trucks.len(),
                catalog.presets.len()
            )
            .context("Failed to write validation result")?;
            Ok(true)
        }
        Err(e) => {
            warn!("Catalog validation failed: {:#}", e);
            writeln!(err, "✗ Catalog validation failed: {:#}", e)
                .context("Failed to write validation result")?;
            Ok(false)
        }
    }
}

/// Write the active catalog to `path`
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    catalog.save_to_file(path)?;
    info!("Catalog exported to {:?}", path);
    println!("✓ Catalog written to {}", path.display());
    Ok(())
}

/// Run a headless command against stdout.
///
/// Returns false when the command ran but reported a failure.
pub fn run(command: crate::cli::Commands, catalog: &Catalog) -> Result<bool> {
    use crate::cli::Commands;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tui => anyhow::bail!("The interactive UI is not a headless command"),
        Commands::Calc {
            width,
            length,
            height,
            preset,
            format,
        } => match preset {
            Some(name) => calc_preset(&mut out, catalog, &name, format)?,
            None => {
                let store = store_from_args(
                    width.as_deref().unwrap_or_default(),
                    length.as_deref().unwrap_or_default(),
                    height.as_deref().unwrap_or_default(),
                );
                calc(&mut out, catalog, &store, format)?;
            }
        },
        Commands::Trucks { format } => output::write_trucks(&mut out, format, &catalog.trucks)?,
        Commands::Presets { matching, format } => {
            let store = match matching.as_deref() {
                Some([w, l, h]) => Some(store_from_args(w, l, h)),
                Some(_) => anyhow::bail!("--match takes exactly three values"),
                None => None,
            };
            presets(&mut out, catalog, store.as_ref(), format)?;
        }
        Commands::Validate { catalog: path } => {
            let valid = validate(&mut out, &mut io::stderr().lock(), &path)?;
            out.flush()?;
            return Ok(valid);
        }
        Commands::ExportCatalog { path } => {
            export_catalog(catalog, &path).context("Failed to export catalog")?
        }
    }

    out.flush()?;
    Ok(true)
}
