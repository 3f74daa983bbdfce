use serde::{Deserialize, Serialize};

/// Rolling financial statistics derived from the full transaction collection.
///
/// A single instance lives on the store and is overwritten wholesale after
/// every mutation; observers never see a partially updated snapshot. The
/// monthly figures are scoped to the calendar month and year of the moment
/// recomputation ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_expenses: f64,
    pub total_income: f64,
    pub balance: f64,
    pub monthly_expenses: f64,
    pub monthly_income: f64,
}
