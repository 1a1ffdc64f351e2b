use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use ddc_builder::config::DatasetConfig;
use ddc_builder::domain::DatasetKind;
use ddc_builder::observability::logging;
use ddc_builder::pipeline::{BuildReport, DatasetPipeline};
use ddc_builder::registry::LookupRegistry;

#[derive(Parser)]
#[command(name = "ddc-builder")]
#[command(about = "Dallas dataset builder with lookup-based enrichment pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one dataset from a base CSV
    Build {
        /// Dataset id: restaurants, causes, or creators
        #[arg(long)]
        dataset: String,
        /// Base CSV to load
        #[arg(long)]
        input: PathBuf,
        /// Destination CSV (overwritten)
        #[arg(long)]
        output: PathBuf,
        /// Registry directory holding lookups/ and datasets/
        #[arg(long, default_value = "registry")]
        registry: PathBuf,
    },
    /// Build all three datasets in sequence
    BuildAll {
        /// Directory of base CSVs, one per dataset id
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Output directory
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        /// Registry directory holding lookups/ and datasets/
        #[arg(long, default_value = "registry")]
        registry: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging();

    match cli.command {
        Commands::Build {
            dataset,
            input,
            output,
            registry,
        } => {
            let report = build_dataset(&dataset, &input, &output, &registry)?;
            println!(
                "✅ Built {}: {} records -> {}",
                report.dataset_id,
                report.records_out,
                output.display()
            );
        }
        Commands::BuildAll {
            data_dir,
            out_dir,
            registry,
        } => {
            std::fs::create_dir_all(&out_dir)?;
            let mut total = 0;
            for kind in DatasetKind::all() {
                let input = data_dir.join(format!("{}.csv", kind.id()));
                let output = out_dir.join(format!("{}.csv", kind.id()));
                let report = build_dataset(kind.id(), &input, &output, &registry)?;
                println!(
                    "✅ Built {}: {} records -> {}",
                    report.dataset_id,
                    report.records_out,
                    output.display()
                );
                total += report.records_out;
            }
            println!("🎉 Complete! {} records across all datasets", total);
        }
    }

    Ok(())
}

fn build_dataset(
    dataset: &str,
    input: &Path,
    output: &Path,
    registry_dir: &Path,
) -> anyhow::Result<BuildReport> {
    info!("Loading lookup registry from {}", registry_dir.display());
    let registry = LookupRegistry::load_from_directory(registry_dir.join("lookups"))?;
    let config = DatasetConfig::load_for_dataset(registry_dir.join("datasets"), dataset)?;
    let pipeline = DatasetPipeline::from_config(config, &registry)?;
    let report = pipeline.build(input, output)?;
    Ok(report)
}
