use std::io::Write;

use calopt_catalog::{CatalogSummary, DropReport};
use calopt_solver::{Item, Scenario, SolveResult};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{describe_solve_error, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Pretty,
    /// JSON documents
    Json,
}

/// Format an integer with comma thousands separators
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_result(out: &mut impl Write, result: &SolveResult, format: OutputFormat) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        return write_json(out, result);
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "CALORIE OPTIMIZATION RESULTS")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Budget: {}円", group_thousands(result.budget))?;
    writeln!(out, "Maximum Calories: {} kcal", group_thousands(result.max_benefit))?;
    writeln!(out, "Total Cost: {}円", group_thousands(result.total_cost))?;
    writeln!(out, "Remaining Budget: {}円", group_thousands(result.remaining_budget))?;
    writeln!(out, "Number of Items: {}", result.num_items)?;
    writeln!(out, "Average Calories per Yen: {:.2}", result.benefit_per_cost)?;

    writeln!(out)?;
    writeln!(out, "Selected Items:")?;
    writeln!(out, "{}", "-".repeat(90))?;
    writeln!(out, "{:<40}\t{:>10}\t{:>10}\t{:>10}", "Item Name", "Calories", "Price", "Cal/¥")?;
    writeln!(out, "{}", "-".repeat(90))?;
    for item in &result.selected {
        writeln!(
            out,
            "{:<40}\t{:>10}\t{:>10}円\t{:>10.2}",
            item.name,
            item.benefit,
            item.cost,
            item.efficiency()
        )?;
    }
    writeln!(out, "{}", "-".repeat(90))?;
    writeln!(out, "{:<40} {:>10} {:>10}円", "TOTAL", result.max_benefit, result.total_cost)?;
    Ok(())
}

#[derive(Serialize)]
struct ScenarioRow<'a> {
    budget: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a SolveResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn write_scenarios(out: &mut impl Write, scenarios: &[Scenario], format: OutputFormat) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let rows: Vec<ScenarioRow> = scenarios
            .iter()
            .map(|s| ScenarioRow {
                budget: s.budget,
                result: s.result(),
                error: s.error().map(describe_solve_error),
            })
            .collect();
        return write_json(out, &rows);
    }

    writeln!(out)?;
    writeln!(out, "BUDGET SCENARIO ANALYSIS")?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(
        out,
        "{:<10} {:<12} {:<8} {:<10} {:<12} {:<10}",
        "Budget", "Max Calories", "Items", "Cost", "Remaining", "Cal/¥"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for scenario in scenarios {
        match &scenario.outcome {
            Ok(r) => writeln!(
                out,
                "{:<10}円 {:<12} {:<8} {:<10}円 {:<12}円 {:<10.2}",
                r.budget, r.max_benefit, r.num_items, r.total_cost, r.remaining_budget, r.benefit_per_cost
            )?,
            Err(e) => writeln!(out, "{:<10}円 {}", scenario.budget, describe_solve_error(e))?,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RankedItem<'a> {
    #[serde(flatten)]
    item: &'a Item,
    efficiency: f64,
}

pub fn write_top_items(out: &mut impl Write, items: &[&Item], requested: usize, format: OutputFormat) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let ranked: Vec<RankedItem> = items
            .iter()
            .map(|&item| RankedItem {
                item,
                efficiency: item.efficiency(),
            })
            .collect();
        return write_json(out, &ranked);
    }

    writeln!(out)?;
    writeln!(out, "TOP {} MOST CALORIE-EFFICIENT ITEMS", requested)?;
    writeln!(out, "{}", "=".repeat(70))?;
    writeln!(out, "{:<40} {:<10} {:<10} {:<10}", "Item Name", "Calories", "Price", "Cal/¥")?;
    writeln!(out, "{}", "-".repeat(70))?;
    for item in items {
        writeln!(
            out,
            "{:<40} {:<10} {:<10}円 {:<10.2}",
            item.name,
            item.benefit,
            item.cost,
            item.efficiency()
        )?;
    }
    Ok(())
}

pub fn write_check(
    out: &mut impl Write,
    summary: Option<&CatalogSummary>,
    dropped: &DropReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let value = serde_json::json!({
            "items": summary.map_or(0, |s| s.count),
            "mean_calories": summary.map(|s| s.mean_calories),
            "mean_price": summary.map(|s| s.mean_price),
            "price_range": summary.map(|s| [s.min_price, s.max_price]),
            "calorie_range": summary.map(|s| [s.min_calories, s.max_calories]),
            "dropped": {
                "incomplete": dropped.incomplete,
                "non_positive": dropped.non_positive,
                "duplicates": dropped.duplicates,
            },
        });
        return write_json(out, &value);
    }

    match summary {
        Some(s) => {
            writeln!(out, "Total products: {}", group_thousands(s.count as i64))?;
            writeln!(out, "Average calories: {:.1}", s.mean_calories)?;
            writeln!(out, "Average price: {:.1}円", s.mean_price)?;
            writeln!(out, "Price range: {}-{}円", group_thousands(s.min_price), group_thousands(s.max_price))?;
            writeln!(
                out,
                "Calorie range: {}-{}kcal",
                group_thousands(s.min_calories),
                group_thousands(s.max_calories)
            )?;
        }
        None => writeln!(out, "Total products: 0")?,
    }
    writeln!(out, "Dropped records:")?;
    writeln!(out, "  {} incomplete", dropped.incomplete)?;
    writeln!(out, "  {} non-positive calories or price", dropped.non_positive)?;
    writeln!(out, "  {} duplicate names", dropped.duplicates)?;
    Ok(())
}
