//! Terminal rendering of predictions, attributions and label tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use obesity_model::{Prediction, RiskClass};
use obesity_pipeline::{ChartRow, Explanation, MappingRow};

use crate::questionnaire::OptionGroup;

/// Width of the longest bar in the attribution chart, in characters.
pub const BAR_WIDTH: usize = 24;

const BAR_CHAR: char = '█';

pub fn print_prediction(prediction: &Prediction, model: &str) {
    let color = match prediction.class {
        RiskClass::High => Color::Red,
        RiskClass::Low => Color::Green,
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(prediction.class.headline())
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new(format!(
        "Probabilidade de risco: {}",
        prediction.probability_display()
    ))]);
    println!("{table}");
    println!("Modelo: {model}");
}

pub fn print_explanation(explanation: &Explanation, max_display: usize) {
    println!();
    println!("Fatores que influenciaram a predição:");
    println!("{}", attribution_table(explanation, max_display));
    println!(
        "Valor base: {:+.3}   Saída do modelo: {:+.3} (log-odds)",
        explanation.base_value,
        explanation.output()
    );
}

/// Waterfall-style table of the largest contributions.
#[must_use]
pub fn attribution_table(explanation: &Explanation, max_display: usize) -> Table {
    let rows = explanation.top(max_display);
    let max_abs = rows
        .iter()
        .map(|row| row.contribution.abs())
        .fold(0.0_f64, f64::max);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variável"),
        header_cell("Valor"),
        header_cell("Contribuição"),
        header_cell("Efeito"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &rows {
        table.add_row(chart_row(row, max_abs));
    }
    table
}

fn chart_row(row: &ChartRow, max_abs: f64) -> Vec<Cell> {
    let label = if row.value.is_some() {
        Cell::new(&row.label)
    } else {
        dim_cell(&row.label)
    };
    let value = match row.value {
        Some(value) => Cell::new(format_value(value)),
        None => dim_cell("-"),
    };
    let color = contribution_color(row.contribution);
    vec![
        label,
        value,
        Cell::new(format!("{:+.3}", row.contribution)).fg(color),
        Cell::new(bar(row.contribution, max_abs, BAR_WIDTH)).fg(color),
    ]
}

/// Horizontal bar proportional to `|contribution| / max_abs`. Non-zero
/// contributions always get at least one character.
#[must_use]
pub fn bar(contribution: f64, max_abs: f64, width: usize) -> String {
    if contribution == 0.0 || max_abs <= 0.0 || !contribution.is_finite() {
        return String::new();
    }
    let ratio = (contribution.abs() / max_abs).min(1.0);
    let length = ((ratio * width as f64).round() as usize).max(1);
    std::iter::repeat_n(BAR_CHAR, length).collect()
}

/// Raw identifier, label and encoded value for every feature.
#[must_use]
pub fn mapping_table(rows: &[MappingRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Identificador"),
        header_cell("Rótulo"),
        header_cell("Valor codificado"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            dim_cell(&row.feature),
            Cell::new(&row.label),
            Cell::new(format_value(row.value)),
        ]);
    }
    table
}

/// Identifier to label pairs, in input order.
#[must_use]
pub fn labels_table<S: AsRef<str>>(identifiers: &[S], labels: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Identificador"),
        header_cell("Rótulo"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, (identifier, label)) in identifiers.iter().zip(labels).enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(identifier.as_ref()),
            Cell::new(label),
        ]);
    }
    table
}

#[must_use]
pub fn options_table(groups: &[OptionGroup]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pergunta"),
        header_cell("Opção"),
        header_cell("Valor"),
    ]);
    apply_table_style(&mut table);
    for group in groups {
        for (index, choice) in group.choices.iter().enumerate() {
            let question = if index == 0 {
                Cell::new(format!("{}\n{}", group.question, group.flag))
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![question, Cell::new(choice.label), dim_cell(choice.key)]);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

fn contribution_color(contribution: f64) -> Color {
    if contribution > 0.0 {
        Color::Red
    } else if contribution < 0.0 {
        Color::Green
    } else {
        Color::DarkGrey
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_with_largest_contribution() {
        assert_eq!(bar(2.0, 2.0, 10).chars().count(), 10);
        assert_eq!(bar(-1.0, 2.0, 10).chars().count(), 5);
        assert_eq!(bar(0.001, 2.0, 10).chars().count(), 1);
        assert!(bar(0.0, 2.0, 10).is_empty());
        assert!(bar(1.0, 0.0, 10).is_empty());
    }

    #[test]
    fn values_drop_needless_decimals() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.123_45), "-0.123");
    }
}
