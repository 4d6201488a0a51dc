use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use code_analysis::{load_sources, read_source, AnalysisReport, AnalyzerConfig};

#[derive(Parser)]
#[command(
    name = "code-analysis",
    about = "Score source code for security, performance, best practices and maintainability",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// File name hint for code read from stdin
    #[arg(long)]
    file_name: Option<String>,

    /// Merge all files into a single project result
    #[arg(long, requires = "files")]
    project: bool,

    /// Config file (default: ./code-analysis.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip language-aware enrichment
    #[arg(long)]
    no_enrich: bool,

    /// Issues kept when merging a project
    #[arg(long)]
    max_issues: Option<usize>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let report = AnalysisReport::for_code(&input, cli.file_name.as_deref(), &config)?;
        print_report(&report, cli.compact)?;
        return Ok(());
    }

    if cli.project {
        let sources = load_sources(&cli.files);
        let report = AnalysisReport::for_project(&sources, &config)?;
        print_report(&report, cli.compact)?;
    } else {
        for path in &cli.files {
            let source = read_source(path)?;
            let report = AnalysisReport::for_code(&source.content, Some(&source.name), &config)
                .with_context(|| format!("cannot analyze {}", source.name))?;
            print_report(&report, cli.compact)?;
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::discover(&std::env::current_dir()?)?,
    };
    if cli.no_enrich {
        config.enrich = false;
    }
    if let Some(max) = cli.max_issues {
        config.max_issues = max;
    }
    Ok(config)
}

fn print_report(report: &AnalysisReport, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_needs_files() {
        assert!(Cli::try_parse_from(["code-analysis", "--project"]).is_err());
        let cli = Cli::try_parse_from(["code-analysis", "--project", "a.js"]).unwrap();
        assert!(cli.project);
        assert_eq!(cli.files, vec![PathBuf::from("a.js")]);
    }
}
