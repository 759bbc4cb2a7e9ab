//! ixview CLI - inspect an iXBRL viewer fact payload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use ixview::{labels, Report};

/// Inline XBRL report viewer core
#[derive(Parser)]
#[command(name = "ixview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all facts with their readable values
    Facts {
        /// Report payload (JSON)
        input: PathBuf,

        /// Label language
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// Show one fact in detail
    Inspect {
        /// Report payload (JSON)
        input: PathBuf,

        /// Fact id
        fact_id: String,

        /// Label language
        #[arg(short, long, default_value = "en")]
        lang: String,
    },

    /// List the languages available in the report
    Languages {
        /// Report payload (JSON)
        input: PathBuf,
    },
}

fn load(input: &PathBuf) -> Result<Report> {
    Report::from_file(input).with_context(|| format!("Failed to load report {}", input.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Facts { input, lang } => {
            let report = load(&input)?;
            println!("{} {}", "✓".green().bold(), input.display());
            println!("  Facts: {}", report.fact_count());

            for id in report.fact_ids() {
                let fact = report.require_fact(id)?;
                let label = fact
                    .label(labels::STD_ROLE, &lang)
                    .unwrap_or_else(|| fact.concept_name());
                // A malformed fact gets a placeholder; the rest still print.
                let value = match fact.readable_value() {
                    Ok(v) => v,
                    Err(e) => format!("<error: {e}>").red().to_string(),
                };
                println!(
                    "  {} {} = {} [{}]",
                    id.cyan(),
                    label.bold(),
                    value,
                    fact.period_string()
                );
            }
        }

        Commands::Inspect { input, fact_id, lang } => {
            let report = load(&input)?;
            let fact = report.require_fact(&fact_id)?;

            println!("{} {}", "✓".green().bold(), fact_id.cyan());
            println!("  Concept: {}", fact.concept_name());
            if let Some(label) = fact.label(labels::STD_ROLE, &lang) {
                println!("  Label: {label}");
            }
            match fact.readable_value() {
                Ok(v) => println!("  Value: {v}"),
                Err(e) => println!("  Value: {} {}", "error:".red(), e),
            }
            if let Some(d) = fact.decimals() {
                println!("  Decimals: {d}");
            }
            if let Ok(Some(unit)) = fact.unit() {
                println!("  Unit: {}", unit.value());
                println!("  Monetary: {}", unit.is_monetary());
            }
            println!("  Period: {}", fact.period_string());
            for (dim, member) in fact.dimensions() {
                println!("  Dimension: {dim} = {member}");
            }
            for fnid in fact.footnote_refs() {
                println!("  Footnote: {fnid}");
            }
        }

        Commands::Languages { input } => {
            let report = load(&input)?;
            let names = report.language_names();
            let mut langs: Vec<String> = report.available_languages().into_iter().collect();
            langs.sort();

            for lang in langs {
                match names.get(&lang) {
                    Some(name) => println!("{} - {}", lang.bold(), name),
                    None => println!("{}", lang.bold()),
                }
            }
        }
    }

    Ok(())
}
