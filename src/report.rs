use std::io;

use crate::types::{AnalysisResult, OrderRecord};

/// Writes the three human-readable result blocks.
pub fn write_report<W: io::Write>(result: &AnalysisResult, mut out: W) -> io::Result<()> {
    writeln!(out, "\nRecord with the highest total amount:")?;
    write_order(&mut out, &result.highest_total)?;
    writeln!(out, "Total without discount: {}", result.highest_total_amount)?;

    writeln!(out, "\nRecord with the highest quantity:")?;
    write_order(&mut out, &result.highest_quantity)?;

    writeln!(
        out,
        "\nRecord with the largest difference between total without discount and total with discount:"
    )?;
    write_order(&mut out, &result.highest_difference)?;
    writeln!(out, "Difference: {}", result.highest_difference_amount)?;

    out.flush()
}

fn write_order<W: io::Write>(out: &mut W, order: &OrderRecord) -> io::Result<()> {
    writeln!(
        out,
        "Id: {}, Article Name: {}, Quantity: {}, Unit price: {}, Percentage discount: {}, Buyer: {}",
        order.id,
        order.article_name,
        order.quantity,
        order.unit_price,
        order.percentage_discount,
        order.buyer
    )
}
