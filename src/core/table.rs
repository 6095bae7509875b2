//! Results table rendering.
//!
//! Renders an ordered sequence of promotions as a plain-text table with a
//! fixed column order: id, title, code, type, amount, is_site_wide, start,
//! end, product_id. The sequence is displayed in server order and never
//! re-sorted here. An empty sequence renders the header and zero body rows.

use crate::entities::Promotion;
use std::fmt::Write as _;

const HEADERS: [&str; 9] = [
    "ID",
    "Title",
    "Code",
    "Type",
    "Amount",
    "Is_Site_Wide",
    "Start",
    "End",
    "Product_id",
];

/// Renders `promotions` as a text table, one body row per entity.
#[must_use]
pub fn render(promotions: &[Promotion]) -> String {
    let rows: Vec<[String; 9]> = promotions.iter().map(row).collect();

    // Column widths fit the widest cell, header included.
    let mut widths: [usize; 9] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn row(promotion: &Promotion) -> [String; 9] {
    [
        promotion.id.to_string(),
        promotion.title.clone(),
        promotion.promo_code.clone(),
        promotion.promo_type.clone(),
        promotion.amount.to_string(),
        promotion.is_site_wide.to_string(),
        promotion.start_date.to_string(),
        promotion.end_date.to_string(),
        promotion
            .product_id
            .map_or_else(String::new, |id| id.to_string()),
    ]
}

fn write_row(out: &mut String, cells: &[String; 9], widths: &[usize; 9]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        // Infallible: writing to a String cannot fail.
        let _ = write!(out, "{cell:<width$}");
    }
    // Trailing padding on the last column is noise.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::midnight_promotion;

    #[test]
    fn empty_sequence_renders_header_and_zero_body_rows() {
        let table = render(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2); // header + rule, nothing else
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Is_Site_Wide"));
        assert!(lines[0].contains("Product_id"));
    }

    #[test]
    fn one_body_row_per_promotion_in_server_order() {
        // Deliberately out of id order; the renderer must not re-sort.
        let promotions = vec![
            midnight_promotion(9),
            midnight_promotion(2),
            midnight_promotion(5),
        ];
        let table = render(&promotions);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with('9'));
        assert!(lines[3].starts_with('2'));
        assert!(lines[4].starts_with('5'));
    }

    #[test]
    fn cells_show_wire_values() {
        let mut promotion = midnight_promotion(1);
        promotion.product_id = Some(17);
        promotion.is_site_wide = false;
        let table = render(&[promotion]);
        let body = table.lines().nth(2).unwrap_or_default();
        assert!(body.contains("Summer Sale"));
        assert!(body.contains("false"));
        assert!(body.contains("2024-06-01 00:00:00"));
        assert!(body.contains("17"));
    }
}
