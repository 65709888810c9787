//! # Print the per-year rate table
//! admissions-metrics rates --data data/university_student_dashboard_data.csv
//!
//! # Correlation matrix as JSON for a downstream renderer
//! admissions-metrics correlations --json
//!
//! # Run the dataset integrity checks
//! admissions-metrics validate

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use admissions_metrics::analytics::{department_breakdown, summarize_columns, term_comparison};
use admissions_metrics::data::{DataLoader, StudentRecord, Term};
use admissions_metrics::metrics::{CorrelationMatrix, MetricsCalculator, RateRow};
use admissions_metrics::validation::RecordValidator;

const SEPARATOR: &str = "------------------------------------------------------------";

/// Admissions metrics CLI.
#[derive(Parser)]
#[command(name = "admissions-metrics")]
#[command(about = "Derived metrics for university admissions dashboard data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the admissions CSV
    #[arg(
        long,
        global = true,
        default_value = "data/university_student_dashboard_data.csv"
    )]
    data: PathBuf,

    /// Emit JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Dataset overview and per-column summary statistics
    Summary,

    /// Per-year admission and enrollment rate table
    Rates,

    /// Feature correlation matrix over numeric columns
    Correlations,

    /// Department and term enrollment breakdowns
    Breakdown {
        /// Restrict the term comparison to one term
        #[arg(long, value_parser = parse_term)]
        term: Option<Term>,
    },

    /// Run dataset integrity checks
    Validate,
}

fn parse_term(s: &str) -> Result<Term, String> {
    Term::from_str(s).ok_or_else(|| format!("unknown term '{s}' (expected Spring or Fall)"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let records = DataLoader::new(&cli.data)
        .load()
        .with_context(|| format!("loading {}", cli.data.display()))?;

    match cli.command {
        Commands::Summary => print_summary(&records, cli.json),
        Commands::Rates => print_rates(&records, cli.json),
        Commands::Correlations => print_correlations(&records, cli.json),
        Commands::Breakdown { term } => print_breakdown(&records, term, cli.json),
        Commands::Validate => print_validation(&records, cli.json),
    }
}

fn print_summary(records: &[StudentRecord], json: bool) -> Result<()> {
    let summaries = summarize_columns(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    match (years.iter().min(), years.iter().max()) {
        (Some(first), Some(last)) => {
            println!("Dataset: {} rows, years {first}-{last}", records.len());
        }
        _ => println!("Dataset: 0 rows"),
    }
    println!("{SEPARATOR}");
    println!(
        "{:<26} {:>6} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Count", "Mean", "Std Dev", "Min", "Max"
    );
    for s in &summaries {
        println!(
            "{:<26} {:>6} {:>10} {:>10} {:>10} {:>10}",
            s.column,
            s.count,
            fmt_opt(s.mean),
            fmt_opt(s.std_dev),
            fmt_opt(s.min),
            fmt_opt(s.max)
        );
    }
    Ok(())
}

fn print_rates(records: &[StudentRecord], json: bool) -> Result<()> {
    let rates = MetricsCalculator::yearly_rates(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<7} {:>12} {:>9} {:>12} {:>9} {:>13} {:>10}",
        "Year", "Term", "Applications", "Admitted", "Admission %", "Enrolled", "Enrollment %", "Overall %"
    );
    for row in &rates {
        let r = &row.record;
        println!(
            "{:<6} {:<7} {:>12} {:>9} {:>12} {:>9} {:>13} {:>10}",
            r.year,
            r.term.as_str(),
            r.applications,
            r.admitted,
            fmt_opt(row.admission_rate),
            r.enrolled,
            fmt_opt(row.enrollment_rate),
            fmt_opt(row.overall_enrollment_rate)
        );
    }
    print_rate_averages(&rates);
    Ok(())
}

/// Averages over rows where the rate is defined; undefined rows are
/// skipped, not counted as zero.
fn print_rate_averages(rates: &[RateRow]) {
    let avg = |values: Vec<f64>| -> String {
        if values.is_empty() {
            "n/a".to_string()
        } else {
            format!("{:.2}", values.iter().sum::<f64>() / values.len() as f64)
        }
    };

    println!("{SEPARATOR}");
    println!(
        "Averages: admission {}, enrollment {}, overall {}",
        avg(rates.iter().filter_map(|r| r.admission_rate).collect()),
        avg(rates.iter().filter_map(|r| r.enrollment_rate).collect()),
        avg(rates.iter().filter_map(|r| r.overall_enrollment_rate).collect())
    );
}

fn print_correlations(records: &[StudentRecord], json: bool) -> Result<()> {
    let matrix = MetricsCalculator::correlation_matrix(records)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    print_matrix(&matrix);
    Ok(())
}

fn print_matrix(matrix: &CorrelationMatrix) {
    println!("Columns:");
    for (i, col) in matrix.columns().iter().enumerate() {
        println!("  [{i}] {col}");
    }
    println!("{SEPARATOR}");

    print!("{:>5}", "");
    for i in 0..matrix.len() {
        print!("{:>7}", format!("[{i}]"));
    }
    println!();

    for i in 0..matrix.len() {
        print!("{:>5}", format!("[{i}]"));
        for cell in matrix.row(i) {
            match cell {
                Some(r) => print!("{r:>7.2}"),
                None => print!("{:>7}", "n/a"),
            }
        }
        println!();
    }
}

fn print_breakdown(records: &[StudentRecord], term: Option<Term>, json: bool) -> Result<()> {
    let departments = department_breakdown(records);
    let terms: Vec<_> = term_comparison(records)
        .into_iter()
        .filter(|s| term.map_or(true, |t| s.term == t))
        .collect();

    if json {
        let payload = serde_json::json!({
            "departments": departments,
            "terms": terms,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Enrollment by department ({} total)", departments.department_total);
    for share in &departments.shares {
        let pct = share
            .share
            .map(|s| format!("{:.1}%", s * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<12} {:>8} {:>8}",
            share.department.as_str(),
            share.enrolled,
            pct
        );
    }

    println!("{SEPARATOR}");
    println!(
        "{:<8} {:>5} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Term", "Rows", "Total", "Mean", "Min", "Median", "Max"
    );
    for s in &terms {
        println!(
            "{:<8} {:>5} {:>8} {:>8} {:>8} {:>8} {:>8}",
            s.term.as_str(),
            s.rows,
            s.total_enrolled,
            fmt_opt(s.mean_enrolled),
            s.min_enrolled
                .map(|v| v.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            fmt_opt(s.median_enrolled),
            s.max_enrolled
                .map(|v| v.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );
    }
    Ok(())
}

fn print_validation(records: &[StudentRecord], json: bool) -> Result<()> {
    let report = RecordValidator::validate(records);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
        for check in &report.checks {
            let status = if check.passed { "PASS" } else { "FAIL" };
            println!("  [{status}] {}: {}", check.name, check.message);
            if let Some(details) = &check.details {
                println!("         {details}");
            }
        }
    }

    if !report.all_passed() {
        bail!("dataset failed {} integrity checks", report.failed_checks().len());
    }
    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "n/a".to_string(),
    }
}
