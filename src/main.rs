use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use rankgrid::serve::{CategoriesReport, Dashboard};
use rankgrid::{report, Grid, LayoutParams, Preset, Selection};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rankgrid")]
#[command(author, version, about = "The 10 most-watched nonsports broadcasts, ranked by year")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Layout preset: compact or classic
    #[arg(long, global = true, default_value = "compact")]
    preset: Preset,

    /// YAML/JSON file overriding layout parameters
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start interactive web dashboard
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Don't open a browser window
        #[arg(long)]
        no_open: bool,
    },

    /// Write the chart to a file (.svg, .html, .json)
    Render {
        /// Broadcast type to highlight (all, parade, awards, 60m, ncis, other)
        #[arg(short, long, default_value = "all")]
        selection: Selection,

        /// Output file; format follows the extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for auto-named output
        #[arg(long, default_value = "rankgrid-reports")]
        report_dir: PathBuf,
    },

    /// List broadcast types with colors and counts
    Categories {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let layout = load_layout(args.preset, args.layout.as_deref())?;
    let grid = Grid::broadcasts();

    match args.command {
        Command::Serve { port, no_open } => {
            rankgrid::serve::start(port, !no_open, Dashboard::new(grid, layout)).context("server error")?;
        }

        Command::Render { selection, output, report_dir } => {
            let path = match output {
                Some(path) => path,
                None => {
                    std::fs::create_dir_all(&report_dir)
                        .with_context(|| format!("cannot create {}", report_dir.display()))?;
                    report_dir.join(report::default_file_name(selection, Local::now()))
                }
            };

            let format = report::generate(&path, &grid, selection, &layout)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("\x1b[32mSaved {:?} chart: {}\x1b[0m", format, path.display());
        }

        Command::Categories { json } => {
            let info = CategoriesReport::from_grid(&grid);
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{:<8} {:<16} {:<8} {}", "KEY", "NAME", "COLOR", "CELLS");
                println!("{}", "-".repeat(44));
                for c in &info.categories {
                    println!("{:<8} {:<16} {:<8} {}", c.key, c.name, c.color, c.cells);
                }
            }
        }
    }

    Ok(())
}

fn load_layout(preset: Preset, file: Option<&std::path::Path>) -> Result<LayoutParams> {
    let base = preset.params();
    let layout = match file {
        // overrides are validated while loading
        Some(path) => LayoutParams::load(path, &base)?,
        None => {
            base.validate()?;
            base
        }
    };
    tracing::debug!(%preset, ?layout, "layout ready");
    Ok(layout)
}
