use std::path::PathBuf;

use clap::Parser;
use sweepgen::{Mode, RunOptions, Settings, init_logging, run};

#[derive(Parser, Debug)]
#[command(name = "sweepgen")]
#[command(about = "Expand a parameter sweep template into concrete configuration files")]
struct Args {
    /// Template property file; values may embed [min,max] or [min,max,increment]
    template: PathBuf,

    /// Directory for generated files (default: next to the template)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Settings file (default: <config dir>/sweepgen/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print identifiers without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print the number of configurations and exit
    #[arg(long, conflicts_with = "dry_run")]
    count: bool,

    /// Refuse sweeps with more configurations than this
    #[arg(long)]
    limit: Option<u64>,

    /// Also write <template>-manifest.yaml listing every generated file
    #[arg(long)]
    manifest: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let settings = Settings::load_or_default(args.config.as_deref())?;

    let log_level = args.log_level.unwrap_or(settings.log_level);
    let log_file = args.log_file.or(settings.log_file);
    init_logging(&log_level, log_file.as_deref(), settings.log_rotation)?;

    let mode = if args.count {
        Mode::Count
    } else if args.dry_run {
        Mode::DryRun
    } else {
        Mode::Write
    };

    let options = RunOptions {
        template: args.template,
        output_dir: args.output_dir.or(settings.output_dir),
        mode,
        limit: args.limit.or(settings.max_configurations),
        manifest: args.manifest || settings.manifest,
    };

    let summary = run(&options, &mut std::io::stdout().lock())?;
    tracing::debug!(
        generated = summary.generated,
        strategy = %summary.strategy,
        "run finished"
    );

    Ok(())
}
