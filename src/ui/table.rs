//! Plain-text table rendering for scan reports.

use crate::app::ScanReport;
use crate::domain::EnrichedItem;

const HEADERS: [&str; 7] = [
    "Item",
    "Buy (GE)",
    "Sell (GE)",
    "High Alch",
    "Net Profit",
    "Category",
    "F2P",
];

/// Formats a GP amount with thousands separators, e.g. `1,234,567`.
pub fn format_gp(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Net profit carries an explicit sign so gains and losses read apart.
fn format_profit(value: i64) -> String {
    if value > 0 {
        format!("+{}", format_gp(value))
    } else {
        format_gp(value)
    }
}

fn cells(row: &EnrichedItem) -> [String; 7] {
    [
        row.name.clone(),
        format!("{} GP", format_gp(row.buy)),
        format!("{} GP", format_gp(row.sell)),
        format!("{} GP", format_gp(row.highalch)),
        format!("{} GP", format_profit(row.net_profit)),
        row.category.to_string(),
        if row.f2p { "yes" } else { "no" }.to_string(),
    ]
}

/// Renders the report as an aligned text table. Returns a short notice
/// instead when no rows survived the filters.
pub fn render(report: &ScanReport) -> String {
    if report.rows.is_empty() {
        return "No items matched the current filters.\n".to_string();
    }

    let rows: Vec<[String; 7]> = report.rows.iter().map(cells).collect();

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(str::to_string), &widths);
    for (width, _) in widths.iter().zip(HEADERS.iter()) {
        out.push_str(&"-".repeat(width + 2));
    }
    out.push('\n');
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out.push_str(&format!(
        "\n{} item(s), nature rune cost {} GP{}\n",
        report.rows.len(),
        format_gp(report.reagent_cost),
        if report.reagent_fallback {
            " (default, live price unavailable)"
        } else {
            ""
        },
    ));
    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        out.push_str(&format!("{cell:<width$}  "));
    }
    // Trim the trailing pad so lines end cleanly.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
