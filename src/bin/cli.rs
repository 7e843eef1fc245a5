//! Sales Overview CLI
//!
//! Offline access to the same data the dashboard serves:
//! - Export filtered data as CSV
//! - Print per-region totals, the monthly pivot, and summary statistics
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use sales_overview::config::{generate_default_config, Config};
use sales_overview::logging::init_tracing;
use sales_overview::sales::{
    export::write_csv, load_filtered, pivot, summary, totals, SalesDataset, CSV_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "sales-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sales overview data tools")]
#[command(long_about = "Generate, filter, summarize, and export the sample sales dataset\nwithout running the dashboard server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the dataset seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export filtered data as CSV
    Export {
        /// Regions to keep, comma-separated (default: all)
        #[arg(short, long)]
        regions: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print totals and statistics for the filtered data
    Summary {
        /// Regions to keep, comma-separated (default: all)
        #[arg(short, long)]
        regions: Option<String>,
        /// Also print the monthly pivot table
        #[arg(long)]
        monthly: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config from {:?}", path))?;
            (config, Some(path.clone()))
        }
        None => Config::load_default().context("loading config")?,
    };
    if let Some(seed) = cli.seed {
        config.dataset.seed = seed;
    }

    init_tracing(&config.logging);
    if let Some(path) = source {
        tracing::debug!("Loaded config from {:?}", path);
    }

    let params = config.dataset.to_params();

    match cli.command {
        Commands::Export { regions, output } => {
            let filtered = load_filtered(&params, regions.as_deref())?;

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {:?}", path))?;
                    write_csv(file, filtered.records())?;
                    eprintln!("Exported {} rows to {:?}", filtered.len(), path);
                }
                None => {
                    let stdout = std::io::stdout();
                    write_csv(stdout.lock(), filtered.records())?;
                }
            }
        }

        Commands::Summary { regions, monthly } => {
            let filtered = load_filtered(&params, regions.as_deref())?;
            let stdout = std::io::stdout();
            write_summary(&mut stdout.lock(), &filtered, monthly)?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, content)
                    .with_context(|| format!("writing {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

fn write_summary<W: Write>(out: &mut W, filtered: &SalesDataset, monthly: bool) -> anyhow::Result<()> {
    if filtered.is_empty() {
        writeln!(out, "No data for the selected regions")?;
        return Ok(());
    }

    let stats = summary(filtered);
    writeln!(out, "Sales Overview v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "  Rows:          {}", stats.rows)?;
    writeln!(out, "  Total sales:   {}", stats.total)?;
    if let Some(mean) = stats.mean {
        writeln!(out, "  Average month: {:.0}", mean)?;
    }
    if let (Some(min), Some(max)) = (stats.min, stats.max) {
        writeln!(out, "  Range:         {} - {}", min, max)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<10} {:>12}", "Region", "Total")?;
    writeln!(out, "{}", "-".repeat(23))?;
    for total in totals(filtered) {
        writeln!(out, "{:<10} {:>12}", total.region, total.total)?;
    }

    if monthly {
        let table = pivot(filtered)?;
        writeln!(out)?;
        write!(out, "{:<12}", "Date")?;
        for region in &table.columns {
            write!(out, " {:>8}", region)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(12 + table.columns.len() * 9))?;
        for row in &table.rows {
            write!(out, "{:<12}", row.date.format("%Y-%m-%d"))?;
            for value in &row.values {
                match value {
                    Some(v) => write!(out, " {:>8}", v)?,
                    None => write!(out, " {:>8}", "-")?,
                }
            }
            writeln!(out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Export with: sales-cli export --output {}", CSV_FILE_NAME)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_overview::sales::GeneratorParams;

    fn render(regions: Option<&str>, monthly: bool) -> String {
        let filtered = load_filtered(&GeneratorParams::default(), regions).unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &filtered, monthly).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_export_args() {
        let cli = Cli::try_parse_from([
            "sales-cli", "--seed", "7", "export", "--regions", "North,East", "-o", "out.csv",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Export { regions, output } => {
                assert_eq!(regions.as_deref(), Some("North,East"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_parse_summary_args() {
        let cli = Cli::try_parse_from(["sales-cli", "summary", "-r", "West", "--monthly"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Summary { regions: Some(ref r), monthly: true } if r == "West"
        ));
    }

    #[test]
    fn test_summary_lists_selected_regions() {
        let text = render(Some("North,East"), false);

        assert!(text.contains("Rows:          24"));
        assert!(text.contains("North"));
        assert!(text.contains("East"));
        assert!(!text.contains("West"));
        assert!(!text.contains("Date"));
    }

    #[test]
    fn test_summary_monthly_pivot() {
        let text = render(Some("South"), true);

        assert!(text.contains("2023-01-31"));
        assert!(text.contains("2023-12-31"));
        assert_eq!(text.lines().filter(|l| l.starts_with("2023-")).count(), 12);
    }

    #[test]
    fn test_summary_empty_selection() {
        assert_eq!(render(Some(""), true), "No data for the selected regions\n");
    }
}
