#![deny(missing_docs)]
//! Accessibility report command-line interface.
//!
//! Reads ESLint JSON results, writes the accessibility compliance report and
//! prints a summary for CI logs.

use a11y_report_core::{
    Report, ReportGenerator, RuleCatalog, StdFileSystem, load_catalog, render_catalog_markdown,
    render_json, render_markdown, render_schema, render_status, render_text,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::fmt::Write;
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(
    name = "a11y-report",
    version,
    about = "Accessibility compliance reports from ESLint jsx-a11y results"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
struct CatalogArgs {
    /// JSON file with extra or overriding rule catalog entries.
    #[arg(long, env = "A11Y_REPORT_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
struct OutputArgs {
    /// What to print on stdout once the report is written.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
    /// Print nothing on stdout.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Summary,
    Text,
    Json,
    Markdown,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum RulesFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an accessibility report from ESLint JSON output.
    Generate {
        /// ESLint JSON results (`eslint -f json`).
        #[arg(
            short,
            long,
            env = "A11Y_REPORT_INPUT",
            default_value = "eslint-report.json"
        )]
        input: PathBuf,
        /// Where to write the JSON report.
        #[arg(
            short,
            long,
            env = "A11Y_REPORT_OUTPUT",
            default_value = "accessibility-report.json"
        )]
        output: PathBuf,
        #[command(flatten)]
        catalog: CatalogArgs,
        #[command(flatten)]
        report: OutputArgs,
    },
    /// List the rules the report knows about.
    Rules {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Output format for the rule list.
        #[arg(long, value_enum, default_value_t = RulesFormat::Text)]
        format: RulesFormat,
    },
    /// Print the OpenAPI schema of the report document.
    Schema,
}

#[cfg(not(test))]
fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            catalog,
            report,
        } => {
            let generated = run_generate(&input, &output, &catalog)?;
            emit_report(&generated, &report)?;
        }
        Commands::Rules { catalog, format } => {
            let catalog = resolve_catalog(&catalog)?;
            print!("{}", render_rules(&catalog, format)?);
        }
        Commands::Schema => {
            println!("{}", render_schema()?);
        }
    }

    Ok(())
}

#[cfg(test)]
fn main() {}

fn run_generate(input: &Path, output: &Path, catalog: &CatalogArgs) -> CliResult<Report> {
    let fs = StdFileSystem::new();
    let generator = match &catalog.catalog {
        Some(extension) => ReportGenerator::with_catalog_extension(fs, extension),
        None => ReportGenerator::new(fs),
    };

    let report = generator.generate(input);
    generator.write(&report, output)?;
    info!("accessibility report written to {}", output.display());
    Ok(report)
}

fn resolve_catalog(args: &CatalogArgs) -> CliResult<RuleCatalog> {
    Ok(load_catalog(&StdFileSystem::new(), args.catalog.as_deref())?)
}

fn emit_report(report: &Report, output: &OutputArgs) -> CliResult<()> {
    if output.quiet {
        return Ok(());
    }
    if report.is_error() && output.format == OutputFormat::Summary {
        eprint!("{}", render_status(report));
        return Ok(());
    }
    print!("{}", render_report(report, output.format)?);
    Ok(())
}

fn render_report(report: &Report, format: OutputFormat) -> CliResult<String> {
    let contents = match format {
        OutputFormat::Summary => render_status(report),
        OutputFormat::Text => render_text(report),
        OutputFormat::Markdown => render_markdown(report),
        OutputFormat::Json => format!("{}\n", render_json(report)?),
    };
    Ok(contents)
}

fn render_rules(catalog: &RuleCatalog, format: RulesFormat) -> CliResult<String> {
    let contents = match format {
        RulesFormat::Text => render_rules_text(catalog),
        RulesFormat::Markdown => render_catalog_markdown(catalog),
        RulesFormat::Json => {
            let rules: Vec<_> = catalog.iter().collect();
            format!("{}\n", render_json(&rules)?)
        }
    };
    Ok(contents)
}

fn render_rules_text(catalog: &RuleCatalog) -> String {
    let mut output = String::new();
    for rule in catalog.iter() {
        let _ = writeln!(
            output,
            "{} {} [WCAG {} {}] {}",
            rule.severity.icon(),
            rule.id,
            rule.conformance_ref,
            rule.conformance_level,
            rule.title
        );
        let _ = writeln!(output, "   fix: {}", rule.fix);
    }
    output
}
