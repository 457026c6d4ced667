use rust_decimal::Decimal;
use serde::Deserialize;

/// One data row as it arrives from the input file, before numeric coercion.
///
/// Every field is optional because a column may be absent from the header or
/// left empty; the parser decides which of those are fatal.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawRow {
    /// 1-based line in the source file. Not part of the CSV payload.
    #[serde(skip)]
    pub line: u64,
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Article_Name")]
    pub article_name: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<String>,
    #[serde(rename = "Unit_Price")]
    pub unit_price: Option<String>,
    #[serde(rename = "Percentage_Discount")]
    pub percentage_discount: Option<String>,
    #[serde(rename = "Buyer")]
    pub buyer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: String,
    pub article_name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub percentage_discount: Decimal,
    pub buyer: String,
}

/// Values computed from an order, never read from the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub total_without_discount: Decimal,
    /// Discount amount, taken once on the whole line total.
    pub difference: Decimal,
}

/// An order paired with its metrics for the duration of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedOrder {
    pub record: OrderRecord,
    pub metrics: DerivedMetrics,
}

/// The three independently selected leaders of a run.
///
/// The same order may hold any number of the three slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub highest_total: OrderRecord,
    pub highest_total_amount: Decimal,
    pub highest_quantity: OrderRecord,
    pub highest_difference: OrderRecord,
    pub highest_difference_amount: Decimal,
}
