use rust_decimal::Decimal;

use crate::error::RowError;
use crate::types::{OrderRecord, RawRow};

pub const ID: &str = "Id";
pub const ARTICLE_NAME: &str = "Article_Name";
pub const QUANTITY: &str = "Quantity";
pub const UNIT_PRICE: &str = "Unit_Price";
pub const PERCENTAGE_DISCOUNT: &str = "Percentage_Discount";
pub const BUYER: &str = "Buyer";

/// Coerces a raw row into an [`OrderRecord`].
///
/// Values are taken as written: no rounding, and no range checks on the
/// quantity or the discount percentage.
pub fn parse_order(row: &RawRow) -> Result<OrderRecord, RowError> {
    Ok(OrderRecord {
        id: required(&row.id, ID)?.to_owned(),
        article_name: required(&row.article_name, ARTICLE_NAME)?.to_owned(),
        quantity: integer(&row.quantity, QUANTITY)?,
        unit_price: decimal(&row.unit_price, UNIT_PRICE)?,
        percentage_discount: decimal(&row.percentage_discount, PERCENTAGE_DISCOUNT)?,
        buyer: required(&row.buyer, BUYER)?.to_owned(),
    })
}

fn required<'a>(field: &'a Option<String>, column: &'static str) -> Result<&'a str, RowError> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RowError::MissingField { column }),
    }
}

fn integer(field: &Option<String>, column: &'static str) -> Result<i64, RowError> {
    let value = required(field, column)?;
    value.parse().map_err(|_| invalid(column, value))
}

/// Refuses digit-group underscores and any value that would need rounding
/// to fit a `Decimal`.
fn decimal(field: &Option<String>, column: &'static str) -> Result<Decimal, RowError> {
    let value = required(field, column)?;
    if value.contains('_') {
        return Err(invalid(column, value));
    }
    Decimal::from_str_exact(value).map_err(|_| invalid(column, value))
}

fn invalid(column: &'static str, value: &str) -> RowError {
    RowError::InvalidNumber {
        column,
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(fields: [&str; 6]) -> RawRow {
        let cell = |s: &str| Some(s.to_owned());
        RawRow {
            line: 2,
            id: cell(fields[0]),
            article_name: cell(fields[1]),
            quantity: cell(fields[2]),
            unit_price: cell(fields[3]),
            percentage_discount: cell(fields[4]),
            buyer: cell(fields[5]),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_a_well_formed_row() {
        let record = parse_order(&row(["7", "Pen", "12", "1.25", "7.5", "Ada"])).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.article_name, "Pen");
        assert_eq!(record.quantity, 12);
        assert_eq!(record.unit_price, dec("1.25"));
        assert_eq!(record.percentage_discount, dec("7.5"));
        assert_eq!(record.buyer, "Ada");
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        let err = parse_order(&row(["1", "A", "abc", "2", "10", "X"])).unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidNumber {
                column: QUANTITY,
                value: "abc".into()
            }
        );
    }

    #[test]
    fn rejects_fractional_quantity() {
        let err = parse_order(&row(["1", "A", "2.5", "2", "10", "X"])).unwrap_err();
        assert!(matches!(err, RowError::InvalidNumber { column: QUANTITY, .. }));
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err = parse_order(&row(["1", "A", "2", "two", "10", "X"])).unwrap_err();
        assert!(matches!(err, RowError::InvalidNumber { column: UNIT_PRICE, .. }));
    }

    #[test]
    fn rejects_missing_discount() {
        let mut raw = row(["1", "A", "2", "2", "10", "X"]);
        raw.percentage_discount = None;
        assert_eq!(
            parse_order(&raw).unwrap_err(),
            RowError::MissingField {
                column: PERCENTAGE_DISCOUNT
            }
        );
    }

    #[test]
    fn rejects_blank_buyer() {
        let err = parse_order(&row(["1", "A", "2", "2", "10", "  "])).unwrap_err();
        assert_eq!(err, RowError::MissingField { column: BUYER });
    }

    #[test]
    fn out_of_range_values_are_kept_as_is() {
        let record = parse_order(&row(["1", "A", "-4", "3", "150", "X"])).unwrap();
        assert_eq!(record.quantity, -4);
        assert_eq!(record.percentage_discount, dec("150"));
    }

    #[test]
    fn rejects_digit_group_underscores_in_prices() {
        let err = parse_order(&row(["1", "A", "2", "1_000", "10", "X"])).unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidNumber {
                column: UNIT_PRICE,
                value: "1_000".into()
            }
        );
    }

    #[test]
    fn rejects_prices_that_would_be_rounded() {
        let tiny = "0.00000000000000000000000000001";
        let err = parse_order(&row(["1", "A", "1", tiny, "0", "X"])).unwrap_err();
        assert_eq!(
            err,
            RowError::InvalidNumber {
                column: UNIT_PRICE,
                value: tiny.into()
            }
        );
    }

    #[test]
    fn keeps_the_written_scale() {
        let record = parse_order(&row(["1", "A", "1", "2.50", "10.0", "X"])).unwrap();
        assert_eq!(record.unit_price.to_string(), "2.50");
        assert_eq!(record.percentage_discount.to_string(), "10.0");
    }
}
