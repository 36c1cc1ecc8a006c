use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pls_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_file.display());
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Subjects"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Scored"), Cell::new(result.scored)]);
    table.add_row(vec![
        Cell::new("Flagged (age not covered)"),
        count_cell(result.flags.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (missing age)"),
        count_cell(result.dropped_missing_age, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_subjects()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_flag_table(result);
}

fn print_flag_table(result: &RunResult) {
    if result.flags.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Subject"), header_cell("Age")]);
    apply_table_style(&mut table);
    for flag in &result.flags {
        table.add_row(vec![
            Cell::new(&flag.subject_id),
            Cell::new(&flag.age).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Flagged subjects:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
