use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use insight_cli::run::RunResult;
use insight_model::{AnalysisKind, ColumnDecision, InsightRecord};
use insight_narrative::CorrelationStrength;

use crate::commands::ProfileResult;

pub fn print_run_summary(result: &RunResult, top: usize) {
    println!("Dataset: {} ({})", result.dataset_id, result.input.display());
    println!("Rows: {}  Columns: {}", result.rows, result.columns);
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Analysis"),
        header_cell("Test"),
        header_cell("Candidates"),
        header_cell("Records"),
        header_cell("Skipped"),
    ]);
    apply_table_style(&mut table);
    for index in 2..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let output = &result.output;
    for (kind, candidates) in output.candidates.counts() {
        let records = output.records_for(kind).count();
        let skipped = output
            .skipped
            .iter()
            .filter(|entry| entry.pair.kind == kind)
            .count();
        table.add_row(vec![
            Cell::new(kind.as_str()).fg(Color::Blue),
            Cell::new(kind.test().as_str()),
            count_cell(candidates, Color::Reset),
            count_cell(records, Color::Green),
            count_cell(skipped, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(output.candidates.len()).add_attribute(Attribute::Bold),
        count_cell(output.records.len(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(output.skipped.len(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_insight_table(&output.records, top);

    if !output.skipped.is_empty() {
        eprintln!("Skipped pairs:");
        for entry in &output.skipped {
            eprintln!(
                "- {} ({}, {}): {}",
                entry.pair.kind, entry.pair.first, entry.pair.second, entry.reason
            );
        }
    }
}

fn print_insight_table(records: &[InsightRecord], top: usize) {
    if records.is_empty() || top == 0 {
        return;
    }
    let mut ordered: Vec<&InsightRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.p_value.total_cmp(&b.p_value));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Analysis"),
        header_cell("Columns"),
        header_cell("p-value"),
        header_cell("Strength"),
        header_cell("Insight"),
    ]);
    apply_insight_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for record in ordered.iter().take(top) {
        table.add_row(vec![
            Cell::new(record.analysis_kind.as_str()).fg(Color::Blue),
            Cell::new(format!("{} / {}", record.column_1, record.column_2)),
            Cell::new(format!("{:.4}", record.p_value)),
            strength_cell(record),
            Cell::new(record.insight_text.trim_end()),
        ]);
    }
    println!();
    if ordered.len() > top {
        println!("Insights (top {top} of {} by p-value):", ordered.len());
    } else {
        println!("Insights:");
    }
    println!("{table}");
}

pub fn print_profile_summary(result: &ProfileResult) {
    println!("Dataset: {}", result.input.display());
    println!("Rows: {}  Columns: {}", result.rows, result.profiles.len());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Distinct"),
        header_cell("Mode"),
        header_cell("Semantic tag"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for profile in &result.profiles {
        let decision = result.classification.decision_for(&profile.name);
        table.add_row(vec![
            Cell::new(&profile.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(profile.type_code.as_str()),
            Cell::new(profile.distinct_count),
            match &profile.mode {
                Some(mode) => Cell::new(mode.to_string()),
                None => dim_cell("-"),
            },
            decision_cell(decision),
        ]);
    }
    println!("{table}");

    let rewrites = &result.classification.rewrites;
    if !rewrites.is_empty() {
        println!("Recoded columns:");
        for rewrite in rewrites {
            println!("- {}", rewrite.column());
        }
    }
}

fn strength_cell(record: &InsightRecord) -> Cell {
    if record.analysis_kind != AnalysisKind::ContCont {
        return dim_cell("-");
    }
    match record.magnitude.and_then(CorrelationStrength::classify) {
        Some(strength @ CorrelationStrength::StrongPositive) => {
            Cell::new(strength.as_str()).fg(Color::Green)
        }
        Some(strength @ CorrelationStrength::StrongNegative) => {
            Cell::new(strength.as_str()).fg(Color::Red)
        }
        Some(strength) => Cell::new(strength.as_str()),
        None => dim_cell("moderate"),
    }
}

fn decision_cell(decision: Option<ColumnDecision>) -> Cell {
    match decision {
        Some(ColumnDecision::Tagged(tag)) if tag.is_analyzable() => {
            Cell::new(tag.as_str()).fg(Color::Green)
        }
        Some(ColumnDecision::Tagged(tag)) => Cell::new(tag.as_str()),
        Some(ColumnDecision::Excluded(reason)) => {
            Cell::new(format!("excluded ({reason})")).fg(Color::Yellow)
        }
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_insight_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
