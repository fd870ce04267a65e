use std::{fs, path::PathBuf, process::ExitCode, sync::Once, time::Instant};

use clap::Parser;
use icss::{display_diagnostic, display_error, pipeline::pipeline::Pipeline};

#[derive(Parser)]
#[command(
    name = "icss",
    version,
    about = "Compiles ICSS stylesheets to CSS",
    long_about = "Compiles ICSS stylesheets to CSS. Set RUST_LOG (e.g. RUST_LOG=icss=debug) for pass timings."
)]
struct Cli {
    /// ICSS source file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write the generated CSS here instead of stdout
    #[arg(short, long, value_name = "OUT")]
    output: Option<PathBuf>,

    /// Stop after checking; no CSS is generated
    #[arg(long)]
    check: bool,
}

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read {}: {}", cli.file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let pipeline = Pipeline::new(file_name);
    match run(&pipeline, &source, cli.check) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(css)) => write_output(&css, cli.output.as_ref()),
        Err(()) => ExitCode::FAILURE,
    }
}

/// Runs the passes, printing every problem to stderr. Returns the CSS, or
/// `None` when only checking.
fn run(pipeline: &Pipeline, source: &str, check_only: bool) -> Result<Option<String>, ()> {
    let start = Instant::now();

    let mut root = pipeline
        .parse(source)
        .map_err(|error| eprint!("{}", display_error(&error, source)))?;
    tracing::debug!(elapsed = ?start.elapsed(), "parsed");

    let check_start = Instant::now();
    let diagnostics = pipeline
        .check(&root)
        .map_err(|error| eprint!("{}", display_error(&error, source)))?;
    tracing::debug!(elapsed = ?check_start.elapsed(), "checked");

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprint!("{}", display_diagnostic(diagnostic, source));
        }
        eprintln!("{} error(s) in {}", diagnostics.len(), pipeline.file_name());
        return Err(());
    }

    if check_only {
        return Ok(None);
    }

    let transform_start = Instant::now();
    pipeline
        .transform(&mut root)
        .map_err(|error| eprint!("{}", display_error(&error, source)))?;
    tracing::debug!(elapsed = ?transform_start.elapsed(), "evaluated");

    let css = pipeline
        .generate(&root)
        .map_err(|error| eprint!("{}", display_error(&error, source)))?;
    tracing::debug!(elapsed = ?start.elapsed(), "compiled");

    Ok(Some(css))
}

fn write_output(css: &str, output: Option<&PathBuf>) -> ExitCode {
    let Some(path) = output else {
        print!("{}", css);
        return ExitCode::SUCCESS;
    };

    match fs::write(path, css) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: could not write {}: {}", path.display(), error);
            ExitCode::FAILURE
        }
    }
}
