use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use nbnames::Tag;

pub(super) fn cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_row(titles: &[&str], use_color: bool) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| cell(title, use_color.then_some(Color::Cyan), true))
        .collect()
}

/// UTF8 table with inner borders and a single-line header separator (├─┼─┤).
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}

/// Print one item per line, the plain-text counterpart of a JSON array.
pub(crate) fn print_lines<T: std::fmt::Display>(items: &[T]) {
    for item in items {
        println!("{item}");
    }
}

fn tags_table(use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(header_row(&["Tag", "Marker", "Value"], use_color));
    for tag in Tag::ALL {
        table.add_row(vec![
            cell(tag.name(), None, false),
            cell(tag.marker(), use_color.then_some(Color::Yellow), true),
            cell(tag.value_format().unwrap_or("range of ids"), None, false),
        ]);
    }
    table
}

pub(crate) fn print_tags_table(use_color: bool) {
    println!("{}", tags_table(use_color));
}
