use rust_decimal::Decimal;

use crate::error::AnalysisError;
use crate::types::{AnnotatedOrder, DerivedMetrics, OrderRecord};

/// Line total and discount amount for one order line.
///
/// The percentage applies once to `unit_price * quantity`, not per unit.
/// Returns `None` when a product leaves the decimal range or cannot be held
/// without rounding.
pub fn compute(
    unit_price: Decimal,
    quantity: i64,
    percentage_discount: Decimal,
) -> Option<DerivedMetrics> {
    let total_without_discount = exact_mul(unit_price, Decimal::from(quantity))?;
    let difference = exact_mul(
        exact_mul(total_without_discount, percentage_discount)?,
        Decimal::new(1, 2),
    )?;

    Some(DerivedMetrics {
        total_without_discount,
        difference,
    })
}

/// `checked_mul` that also fails when the product had to be rescaled.
///
/// An untouched product carries the sum of the operand scales; a zero
/// product is always exact. The normalized retry accepts products that only
/// lost trailing zeros.
fn exact_mul(a: Decimal, b: Decimal) -> Option<Decimal> {
    let keeps_scale = |x: Decimal, y: Decimal| {
        x.checked_mul(y)
            .filter(|p| p.is_zero() || p.scale() == x.scale() + y.scale())
    };
    keeps_scale(a, b).or_else(|| keeps_scale(a.normalize(), b.normalize()))
}

pub fn annotate(record: OrderRecord) -> Result<AnnotatedOrder, AnalysisError> {
    match compute(record.unit_price, record.quantity, record.percentage_discount) {
        Some(metrics) => Ok(AnnotatedOrder { record, metrics }),
        None => Err(AnalysisError::Overflow { id: record.id }),
    }
}
