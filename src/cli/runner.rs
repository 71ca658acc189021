use std::io::Write;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use iconprep::{IconParams, IconReport, generate_icons, rollback};

use super::args::CliArgs;
use super::errors::AppError;

/// Merge the optional config file with explicit flags.
fn resolve_params(args: &CliArgs) -> Result<IconParams, AppError> {
    let mut params = match &args.config {
        Some(path) => IconParams::from_json_file(path)?,
        None => IconParams::default(),
    };
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    params.pad |= args.pad;
    params.manifest |= args.manifest;
    debug!("Resolved parameters: {:?}", params);
    Ok(params)
}

fn process(args: &CliArgs) -> Result<IconReport, AppError> {
    let params = resolve_params(args)?;

    info!("Source: {:?}", args.input);
    info!("Destinations: {:?}, {:?}", args.src_dir, args.dist_dir);

    Ok(generate_icons(
        &args.input,
        &args.src_dir,
        &args.dist_dir,
        &params,
    )?)
}

/// Run one job and report it as text on `out`.
///
/// Failures are printed, not returned: only a broken `out` is an error here.
pub fn execute<W: Write>(args: &CliArgs, out: &mut W) -> std::io::Result<()> {
    match process(args) {
        Ok(report) => {
            for icon in &report.outputs {
                writeln!(out, "Saved {}", icon.path.display())?;
            }
            for manifest in &report.manifests {
                writeln!(out, "Saved {}", manifest.display())?;
            }
        }
        Err(e) => {
            let written = match &e {
                AppError::Library(err) => err.written_paths().to_vec(),
            };
            for path in &written {
                writeln!(out, "Saved {}", path.display())?;
            }
            if args.rollback && !written.is_empty() {
                match rollback(&written) {
                    Ok(removed) => info!("Removed {} partially written icon(s)", removed),
                    Err(rb) => warn!("Rollback incomplete: {}", rb),
                }
            }
            writeln!(out, "Error processing image: {}", e)?;
        }
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)?;
    Ok(())
}
