use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use flock_line_report::ingest::{self, InputFormat};
use flock_line_report::{build_dashboard, report, Dashboard, DashboardConfig, LineId, MatchPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flock-line-report")]
#[command(about = "Production line status and rate series from a shift log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Production log export (CSV or JSON array of rows)
    #[arg(long)]
    input: PathBuf,
    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,
    /// TOML file overriding the dashboard title, lines, and match policy
    #[arg(long)]
    config: Option<PathBuf>,
    /// Snap each slot to the closest reading instead of the first one in range
    #[arg(long)]
    nearest: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current part status for each line
    Status {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the chart series as JSON
    Series {
        #[command(flatten)]
        input: InputArgs,
        /// Only emit this line
        #[arg(long)]
        line: Option<String>,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Status { input } => {
            let dashboard = load_dashboard(&input)?;
            for line in &dashboard.lines {
                let status = line.status.display();
                println!("Current Part Line {}", line.line);
                println!("  Part Number: {}", status.part_number);
                println!("  Part Name: {}", status.part_name);
                println!("  Total Quantity / Shift: {}", status.total_quantity);
                println!("  Parts / Hour: {}", status.parts_per_hour);
            }
        }
        Commands::Series { input, line } => {
            let dashboard = load_dashboard(&input)?;
            let json = match line {
                Some(id) => {
                    let id = LineId::new(id);
                    let report = dashboard
                        .line(&id)
                        .with_context(|| format!("line {id} is not configured"))?;
                    serde_json::to_string_pretty(report)?
                }
                None => serde_json::to_string_pretty(&dashboard)?,
            };
            println!("{json}");
        }
        Commands::Report { input, out } => {
            let dashboard = load_dashboard(&input)?;
            let report = report::build_report(&dashboard, &input.input.display().to_string());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), "report written");
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn load_dashboard(input: &InputArgs) -> anyhow::Result<Dashboard> {
    let mut config = load_config(input.config.as_deref())?;
    if input.nearest {
        config.match_policy = MatchPolicy::Nearest;
    }

    let rows = ingest::load_rows(&input.input, input.format)
        .with_context(|| format!("failed to read {}", input.input.display()))?;
    if rows.is_empty() {
        info!(path = %input.input.display(), "production log has no rows");
    }

    Ok(build_dashboard(&rows, &config))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::read_config_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}
