use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use survey_standards::default_catalog;
use survey_transform::ColumnReport;

use crate::types::TranslateResult;

pub fn print_summary(result: &TranslateResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!("Rows: {}", result.report.rows);
    if result.question_headers {
        println!("Headers: question text");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Question"),
        header_cell("Translated"),
        header_cell("Missing"),
        header_cell("Unmatched"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_translated = 0usize;
    let mut total_missing = 0usize;
    let mut total_unmatched = 0usize;
    for column in &result.report.columns {
        if column.coded {
            total_translated += column.translated;
            total_missing += column.missing;
            total_unmatched += column.unmatched;
        }
        table.add_row(column_row(column));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} coded columns",
            result.report.coded_columns().count()
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        Cell::new(total_translated).add_attribute(Attribute::Bold),
        dim_cell(total_missing).add_attribute(Attribute::Bold),
        count_cell(total_unmatched, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn column_row(column: &ColumnReport) -> Vec<Cell> {
    if !column.coded {
        return vec![
            Cell::new(&column.column).fg(Color::DarkGrey),
            dim_cell("not a survey variable"),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ];
    }
    let question = default_catalog()
        .question(&column.column)
        .unwrap_or_default();
    vec![
        Cell::new(&column.column)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(question),
        Cell::new(column.translated),
        dim_cell(column.missing),
        count_cell(column.unmatched, Color::Yellow),
    ]
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() == 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(80)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
