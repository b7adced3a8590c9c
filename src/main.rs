use anyhow::{bail, Context};
use clap::Parser;
use matchlens::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rank and explain precomputed property-to-user match records
#[derive(Parser, Debug)]
#[command(name = "matchlens")]
#[command(about = "Rank and explain property match records", long_about = None)]
struct Args {
    /// Path to the match recommendations CSV
    #[arg(short, long)]
    input: PathBuf,

    /// User ID to rank candidates for (defaults to the first user)
    #[arg(short, long)]
    user: Option<String>,

    /// Number of top results to show
    #[arg(long, default_value_t = 10)]
    top_k: usize,

    /// Minimum match score
    #[arg(long)]
    min_score: Option<f64>,

    /// Minimum budget gate (0-1)
    #[arg(long)]
    min_budget_gate: Option<f64>,

    /// Accepted location (repeatable)
    #[arg(long = "location")]
    locations: Vec<String>,

    /// Accepted property type (repeatable)
    #[arg(long = "property-type")]
    property_types: Vec<String>,

    /// Accepted condition (repeatable)
    #[arg(long = "condition")]
    conditions: Vec<String>,

    /// Lower price bound
    #[arg(long)]
    price_min: Option<f64>,

    /// Upper price bound
    #[arg(long)]
    price_max: Option<f64>,

    /// Lower size bound (sqft)
    #[arg(long)]
    size_min: Option<f64>,

    /// Upper size bound (sqft)
    #[arg(long)]
    size_max: Option<f64>,

    /// Sort key: match_score, price, size, year_built or budget_gate
    #[arg(long, default_value = "match_score")]
    sort_by: String,

    /// Sort ascending instead of descending
    #[arg(long, default_value_t = false)]
    ascending: bool,

    /// Substring to search for in property IDs
    #[arg(long, default_value = "")]
    search: String,

    /// Print the per-component contribution breakdown for each row
    #[arg(long, default_value_t = false)]
    show_components: bool,

    /// Write the shown table as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting matchlens v{}", env!("CARGO_PKG_VERSION"));
    info!("Input table: {:?}", args.input);

    let rows = load_rows(&args.input)?;
    let table = MatchTable::from_rows(&rows);
    info!("Loaded {} records for {} users", table.len(), table.user_count());

    let user_ids = table.user_ids();
    if user_ids.is_empty() {
        bail!("no identifiable users in {}", args.input.display());
    }

    let user = match args.user.clone() {
        Some(u) => u,
        None => user_ids[0].clone(),
    };
    if !table.contains_user(&user) {
        bail!(
            "user '{}' not found in {} (available: {})",
            user,
            args.input.display(),
            preview_ids(&user_ids)
        );
    }

    let options = QueryOptions {
        criteria: FilterCriteria {
            locations: to_set(&args.locations),
            property_types: to_set(&args.property_types),
            conditions: to_set(&args.conditions),
            price_range: to_range(args.price_min, args.price_max),
            size_range: to_range(args.size_min, args.size_max),
            min_score: args.min_score,
            min_budget_gate: args.min_budget_gate,
        },
        sort: SortSpec {
            key: args.sort_by.parse::<SortKey>()?,
            ascending: args.ascending,
        },
        search: args.search.trim().to_string(),
        top_k: args.top_k,
    };

    let weights = WeightProfile::default();
    let selection = select(table.records_for(&user), &options, &weights)?;

    print_selection(&user, &selection, args.show_components);

    if let Some(path) = &args.export {
        let csv_text = to_csv(&selection.matches, args.show_components)?;
        std::fs::write(path, csv_text)
            .with_context(|| format!("writing export to {}", path.display()))?;
        info!("Exported {} rows to {:?}", selection.matches.len(), path);
    }

    Ok(())
}

/// Read the CSV into raw rows; every cell enters as text and the
/// normalizer takes it from there.
fn load_rows(path: &Path) -> anyhow::Result<Vec<Value>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("reading match table from {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = serde_json::Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(cell.to_string()));
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

fn to_set(values: &[String]) -> HashSet<String> {
    values.iter().cloned().collect()
}

fn to_range(min: Option<f64>, max: Option<f64>) -> Option<(f64, f64)> {
    match (min, max) {
        (None, None) => None,
        (lo, hi) => Some((lo.unwrap_or(f64::NEG_INFINITY), hi.unwrap_or(f64::INFINITY))),
    }
}

fn preview_ids(ids: &[String]) -> String {
    let shown: Vec<&str> = ids.iter().take(10).map(String::as_str).collect();
    if ids.len() > shown.len() {
        format!("{}, ...", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

fn print_selection(user: &str, selection: &Selection, show_components: bool) {
    let stats = &selection.stats;
    println!("Recommendations for user {user}");
    println!(
        "  candidates: {}   after filters: {}   shown: {}",
        stats.total_candidates, stats.after_filters, stats.returned
    );
    println!(
        "  top score: {}   avg score (filtered): {}",
        fmt_score(stats.best_score),
        fmt_score(stats.avg_filtered_score)
    );
    println!();

    if selection.is_empty() {
        println!("No rows match the current filters.");
        return;
    }

    for (i, m) in selection.matches.iter().enumerate() {
        let r = &m.record;
        println!(
            "{:>3}. #{:<10} score {:<8} gate {}",
            i + 1,
            r.property_id,
            fmt_num(r.match_score, 2),
            fmt_num(r.budget_gate, 2)
        );
        println!(
            "     {} | {} | {} | {} bd | {} ba | {} sqft | built {} | price {}",
            r.location,
            r.property_type,
            r.condition,
            fmt_num(r.bedrooms, 0),
            fmt_num(r.bathrooms, 0),
            fmt_num(r.size, 0),
            fmt_num(r.year_built, 0),
            fmt_money(r.price)
        );
        println!("     why: {}", m.reason);
        if show_components {
            let parts: Vec<String> = m
                .contributions
                .iter()
                .map(|c| format!("{} {:.3}", c.component, c.value))
                .collect();
            println!("     contributions: {}", parts.join(", "));
        }
    }
}

fn fmt_num(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "—".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

fn fmt_score(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.2}"))
}

fn fmt_money(value: f64) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
