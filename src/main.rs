/*!
 * Command-line interface for dumptxt
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use dumptxt::concat::Concatenator;
use dumptxt::config::{Args, Config};
use dumptxt::report::{ReportFormat, Reporter, ScanReport};
use dumptxt::utils::count_files;

fn main() -> io::Result<()> {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let quiet = args.quiet;
    let config = Config::from_args(args);

    // Validate before drawing anything
    config.validate()?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new(0);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    };

    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.source_dir.display()
    ));

    // Count files for progress tracking
    let total_files = count_files(&config);
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");

    let concatenator = Concatenator::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let result = concatenator.run();
    let duration = start_time.elapsed();

    progress.finish_and_clear();
    let statistics = result?;

    if !quiet {
        let report = ScanReport {
            output_file: config.output_file.display().to_string(),
            duration,
            statistics,
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
