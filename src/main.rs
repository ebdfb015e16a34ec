use clap::Parser;
use gridscale::{config::Config, output, process, roots, scan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridscale")]
#[command(version)]
#[command(about = "Batch classifier and rescaler for grid-aligned raster images")]
#[command(long_about = "\
Batch classifier and rescaler for grid-aligned raster images

Walks the given paths (default: the current directory) and sorts every GIF,
JPEG, and PNG into one of four outcomes:

  converted        both dimensions are exact multiples of --in-multiple;
                   resampled onto --resize-multiple and saved as PNG under
                   the output root, named '<base> - <W>x<H>.png' in grid cells
  already correct  both dimensions are exact multiples of --resize-multiple;
                   copied verbatim to the derived destination
  half suitable    (--half only) dimensions align to half the input grid;
                   resampled at half scale
  unsuitable       everything else; copied unchanged into the unsuitable root

Hidden files and directories are skipped. Per-file failures are logged and
counted but never stop the run; set RUST_LOG=error to see them.")]
struct Cli {
    /// Location to store the converted images
    #[arg(long, default_value = "revised_images")]
    output: PathBuf,

    /// Location to store the images that were unsuitable for conversion
    #[arg(long, default_value = "unsuitable_images")]
    unsuitable: PathBuf,

    /// Only process image files whose dimensions are exact multiples of this value
    #[arg(long, default_value_t = 200)]
    in_multiple: u32,

    /// Resize images to a multiple of this value
    #[arg(long, default_value_t = 140)]
    resize_multiple: u32,

    /// Also process images whose width or height is half of an exact multiple
    /// of the in_multiple value
    #[arg(long)]
    half: bool,

    /// Worker pool size (default: one per logical CPU; capped at available cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Paths to scan
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config {
        output_root: cli.output,
        unsuitable_root: cli.unsuitable,
        in_multiple: cli.in_multiple,
        resize_multiple: cli.resize_multiple,
        half: cli.half,
        threads: cli.threads,
    };

    match run(&config, cli.paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridscale: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Validate, resolve roots, enumerate, dispatch, report.
///
/// Anything that errors here is fatal and happens before any image work; the
/// dispatch phase itself cannot fail (per-file errors are counted instead).
fn run(config: &Config, paths: Vec<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let paths = if paths.is_empty() {
        vec![std::env::current_dir()?]
    } else {
        paths
    };

    let roots = roots::dedupe_roots(&paths)?;
    let files = scan::collect_files(&roots)?;
    let summary = process::run(config, &files);
    output::print_summary(&summary);
    Ok(())
}
