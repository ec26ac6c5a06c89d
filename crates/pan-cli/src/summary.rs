use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pan_cli::types::{CheckRow, RunResult};
use pan_model::{Category, CheckFailure, Classification, SummaryReport};
use pan_report::failure_counts;

use crate::cli::ShowArg;

/// Full text printed after `validate`: input, report paths, and tables.
pub fn render_summary(result: &RunResult, show: ShowArg, styled: bool) -> String {
    let mut lines = vec![format!("Input: {}", result.input.display())];
    if let Some(paths) = &result.reports {
        lines.push(format!("Classifications: {}", paths.classifications.display()));
        lines.push(format!("Summary: {}", paths.summary.display()));
    }
    lines.push(summary_table(&result.outcome.summary, styled).to_string());

    if let Some(table) = failure_table(&result.outcome.classifications, styled) {
        lines.push(String::new());
        lines.push("Failed checks:".to_string());
        lines.push(table.to_string());
    }

    let listed: Vec<&Classification> = result
        .outcome
        .classifications
        .iter()
        .filter(|classification| match show {
            ShowArg::None => false,
            ShowArg::Invalid => !classification.is_valid(),
            ShowArg::Valid => classification.is_valid(),
            ShowArg::All => true,
        })
        .collect();
    if !listed.is_empty() {
        lines.push(String::new());
        lines.push("Classifications:".to_string());
        lines.push(classification_table(&listed, styled).to_string());
    }
    lines.join("\n")
}

pub fn summary_table(summary: &SummaryReport, styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total processed"),
        Cell::new(summary.total_processed).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Valid PAN"),
        count_cell(summary.total_valid, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid PAN"),
        count_cell(summary.total_invalid, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Blank or not classified"),
        count_cell(summary.total_blank, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("Blank: null or empty"),
        dim_cell(summary.blank_records),
    ]);
    table.add_row(vec![
        dim_cell("Blank: duplicates"),
        dim_cell(summary.duplicate_records),
    ]);
    table
}

/// Values rejected per check, in check order; `None` when nothing failed.
pub fn failure_table(classifications: &[Classification], styled: bool) -> Option<Table> {
    let counts = failure_counts(classifications);
    if counts.is_empty() {
        return None;
    }
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Check"),
        header_cell("Values"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for failure in [
        CheckFailure::FormatMismatch,
        CheckFailure::AdjacentRepeat,
        CheckFailure::SequentialLetters,
        CheckFailure::SequentialDigits,
    ] {
        let Some(count) = counts.get(failure.code()) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(failure.code()).fg(Color::Blue),
            Cell::new(failure.description()),
            count_cell(*count, Color::Red),
        ]);
    }
    Some(table)
}

pub fn classification_table(classifications: &[&Classification], styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("PAN"),
        header_cell("Category"),
        header_cell("Failed checks"),
    ]);
    apply_table_style(&mut table);
    for classification in classifications {
        table.add_row(vec![
            Cell::new(classification.value.as_str()),
            category_cell(classification.category),
            failures_cell(&classification.failures),
        ]);
    }
    table
}

pub fn check_table(rows: &[CheckRow], styled: bool) -> Table {
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Cleaned"),
        header_cell("Category"),
        header_cell("Failed checks"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let cleaned = row
            .cleaned
            .as_ref()
            .map_or_else(|| dim_cell("-"), |value| Cell::new(value.as_str()));
        let category = match row.category {
            Some(category) => category_cell(category),
            None => Cell::new("BLANK").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(format!("{:?}", row.input)),
            cleaned,
            category,
            failures_cell(&row.failures),
        ]);
    }
    table
}

/// Table with ANSI styling forced on or off instead of sniffing stdout.
fn new_table(styled: bool) -> Table {
    let mut table = Table::new();
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_cell(category: Category) -> Cell {
    match category {
        Category::Valid => Cell::new(category.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Category::Invalid => Cell::new(category.label()).fg(Color::Red),
    }
}

fn failures_cell(failures: &[CheckFailure]) -> Cell {
    if failures.is_empty() {
        return dim_cell("-");
    }
    let text = failures
        .iter()
        .map(|failure| format!("{} {}", failure.code(), failure.description()))
        .collect::<Vec<_>>()
        .join("\n");
    Cell::new(text)
}

fn count_cell(count: u64, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
