use log::{debug, info};

use crate::error::AnalysisError;
use crate::metrics;
use crate::parser;
use crate::types::{AnalysisResult, AnnotatedOrder, OrderRecord, RawRow};

/// Running leaders of a reduction. Only exists once a first order was seen,
/// so an empty dataset can never produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaders {
    highest_total: AnnotatedOrder,
    highest_quantity: OrderRecord,
    highest_difference: AnnotatedOrder,
}

impl Leaders {
    pub fn new(first: AnnotatedOrder) -> Self {
        Self {
            highest_total: first.clone(),
            highest_quantity: first.record.clone(),
            highest_difference: first,
        }
    }

    /// Folds one more order in. Each slot is replaced only on a strictly
    /// greater value, so the earliest order wins a tie.
    pub fn observe(mut self, candidate: AnnotatedOrder) -> Self {
        if candidate.metrics.total_without_discount
            > self.highest_total.metrics.total_without_discount
        {
            debug!("order {} leads on total", candidate.record.id);
            self.highest_total = candidate.clone();
        }

        if candidate.record.quantity > self.highest_quantity.quantity {
            debug!("order {} leads on quantity", candidate.record.id);
            self.highest_quantity = candidate.record.clone();
        }

        if candidate.metrics.difference > self.highest_difference.metrics.difference {
            debug!("order {} leads on difference", candidate.record.id);
            self.highest_difference = candidate;
        }

        self
    }

    pub fn finish(self) -> AnalysisResult {
        AnalysisResult {
            highest_total_amount: self.highest_total.metrics.total_without_discount,
            highest_total: self.highest_total.record,
            highest_quantity: self.highest_quantity,
            highest_difference_amount: self.highest_difference.metrics.difference,
            highest_difference: self.highest_difference.record,
        }
    }
}

/// Reduces a non-empty sequence of annotated orders.
///
/// Returns `None` for an empty sequence; callers turn that into
/// [`AnalysisError::EmptyDataset`].
pub fn reduce<I>(orders: I) -> Option<AnalysisResult>
where
    I: IntoIterator<Item = AnnotatedOrder>,
{
    let mut orders = orders.into_iter();
    let first = orders.next()?;
    Some(orders.fold(Leaders::new(first), Leaders::observe).finish())
}

/// Parses, annotates and reduces a row stream in order, stopping at the
/// first failing row.
pub fn analyze_orders<I>(rows: I) -> Result<AnalysisResult, AnalysisError>
where
    I: IntoIterator<Item = Result<RawRow, AnalysisError>>,
{
    let mut failure = None;
    let mut count = 0u64;

    let orders = rows
        .into_iter()
        .map(annotate_row)
        .map_while(|order| order.map_err(|e| failure = Some(e)).ok())
        .inspect(|_| count += 1);
    let result = reduce(orders);

    if let Some(e) = failure {
        return Err(e);
    }
    let result = result.ok_or(AnalysisError::EmptyDataset)?;

    info!("analyzed {count} order(s)");
    Ok(result)
}

fn annotate_row(row: Result<RawRow, AnalysisError>) -> Result<AnnotatedOrder, AnalysisError> {
    let row = row?;
    let record = parser::parse_order(&row).map_err(|source| AnalysisError::MalformedRow {
        line: row.line,
        source,
    })?;
    metrics::annotate(record)
}
