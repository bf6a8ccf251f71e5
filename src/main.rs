mod error;
mod filter;
mod model;
mod parser;
mod settings;
mod store;

use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use parser::StructureCounts;
use settings::Settings;

#[derive(Parser)]
#[command(name = "catalog_structurer", about = "Normalize scraped course catalogs into one schema")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Raw scraper JSON -> canonical course array
    Structure {
        /// Raw catalog (mapping of course id to record)
        #[arg(long)]
        input: Option<String>,
        /// Where to write the canonical array
        #[arg(long)]
        output: Option<String>,
    },
    /// Keep only one department's courses from a canonical array
    Filter {
        /// Canonical course array
        #[arg(long)]
        input: Option<String>,
        /// Where to write the filtered array
        #[arg(long)]
        output: Option<String>,
        /// Department code, e.g. "CS"
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Structure + filter in one go
    Run {
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        filtered_output: Option<String>,
        #[arg(short, long)]
        prefix: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    parser::sessions::validate_field_tables()?;
    let settings = Settings::load()?;
    info!(?settings, "settings loaded");

    match cli.command {
        Commands::Structure { input, output } => {
            let input = store::normalize_path(input.as_deref().unwrap_or(&settings.input));
            let output = store::normalize_path(output.as_deref().unwrap_or(&settings.output));
            run_structure(&input, &output)?;
        }
        Commands::Filter { input, output, prefix } => {
            let input = store::normalize_path(input.as_deref().unwrap_or(&settings.output));
            let output =
                store::normalize_path(output.as_deref().unwrap_or(&settings.filtered_output));
            let prefix = department(prefix, &settings)?;
            let catalog = store::load_json(&input)?;
            let kept = filter::filter_catalog(catalog, &prefix)?;
            store::write_json(&output, &kept)?;
            println!("Kept {} {} courses -> {}", kept.len(), prefix, output.display());
        }
        Commands::Run {
            input,
            output,
            filtered_output,
            prefix,
        } => {
            let input = store::normalize_path(input.as_deref().unwrap_or(&settings.input));
            let output = store::normalize_path(output.as_deref().unwrap_or(&settings.output));
            let filtered_output = store::normalize_path(
                filtered_output.as_deref().unwrap_or(&settings.filtered_output),
            );
            let prefix = department(prefix, &settings)?;

            let records = run_structure(&input, &output)?;
            let kept = filter::filter_records(&records, &prefix);
            store::write_json(&filtered_output, &kept)?;
            println!("Kept {} {} courses -> {}", kept.len(), prefix, filtered_output.display());
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn run_structure(input: &Path, output: &Path) -> anyhow::Result<Vec<model::CanonicalCourseRecord>> {
    let raw = store::load_json(input)?;
    let records = parser::structure_catalog(&raw)?;
    store::write_json(output, &records)?;

    let counts = StructureCounts::tally(&records);
    info!(?counts, "structured catalog");
    println!("Processed {} courses -> {}", records.len(), output.display());
    counts.print();
    Ok(records)
}

fn department(flag: Option<String>, settings: &Settings) -> anyhow::Result<String> {
    let prefix = flag.unwrap_or_else(|| settings.department.clone());
    let prefix = prefix.trim();
    if prefix.is_empty() {
        anyhow::bail!("department prefix must not be empty");
    }
    Ok(prefix.to_string())
}
