use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A spending guardrail for a specific category.
///
/// Both limits are always stored; `period` selects which one is authoritative.
/// At most one budget per category is a UI-layer convention; the store does
/// not reject duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub monthly_limit: f64,
    pub yearly_limit: f64,
    pub period: BudgetPeriod,
    pub alert_threshold: f64,
    pub is_active: bool,
}

impl Budget {
    pub fn new(draft: BudgetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            category_id: draft.category_id,
            category_name: draft.category_name,
            monthly_limit: draft.monthly_limit,
            yearly_limit: draft.yearly_limit,
            period: draft.period,
            alert_threshold: draft.alert_threshold,
            is_active: draft.is_active,
        }
    }

    /// The limit selected by this budget's period.
    pub fn limit(&self) -> f64 {
        match self.period {
            BudgetPeriod::Monthly => self.monthly_limit,
            BudgetPeriod::Yearly => self.yearly_limit,
        }
    }

    /// Merges the present fields of `patch` into this budget.
    pub fn apply(&mut self, patch: BudgetPatch) {
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(category_name) = patch.category_name {
            self.category_name = category_name;
        }
        if let Some(monthly_limit) = patch.monthly_limit {
            self.monthly_limit = monthly_limit;
        }
        if let Some(yearly_limit) = patch.yearly_limit {
            self.yearly_limit = yearly_limit;
        }
        if let Some(period) = patch.period {
            self.period = period;
        }
        if let Some(alert_threshold) = patch.alert_threshold {
            self.alert_threshold = alert_threshold;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}

/// Every budget field except the store-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetDraft {
    pub category_id: Uuid,
    pub category_name: String,
    pub monthly_limit: f64,
    pub yearly_limit: f64,
    pub period: BudgetPeriod,
    pub alert_threshold: f64,
    pub is_active: bool,
}

impl BudgetDraft {
    /// A monthly budget with the common defaults (80% alert, active).
    pub fn monthly(category_id: Uuid, category_name: impl Into<String>, limit: f64) -> Self {
        Self {
            category_id,
            category_name: category_name.into(),
            monthly_limit: limit,
            yearly_limit: 0.0,
            period: BudgetPeriod::Monthly,
            alert_threshold: 80.0,
            is_active: true,
        }
    }

    /// A yearly budget with the common defaults (80% alert, active).
    pub fn yearly(category_id: Uuid, category_name: impl Into<String>, limit: f64) -> Self {
        Self {
            category_id,
            category_name: category_name.into(),
            monthly_limit: 0.0,
            yearly_limit: limit,
            period: BudgetPeriod::Yearly,
            alert_threshold: 80.0,
            is_active: true,
        }
    }

    pub fn with_alert_threshold(mut self, threshold: f64) -> Self {
        self.alert_threshold = threshold;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Partial update for a budget; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub category_id: Option<Uuid>,
    pub category_name: Option<String>,
    pub monthly_limit: Option<f64>,
    pub yearly_limit: Option<f64>,
    pub period: Option<BudgetPeriod>,
    pub alert_threshold: Option<f64>,
    pub is_active: Option<bool>,
}

/// Derived spend and alert state for one active budget.
///
/// Fully recomputed on every ledger or budget mutation; never persisted.
/// `remaining_amount` may be negative; callers floor it for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category_name: String,
    pub budget_amount: f64,
    pub spent_amount: f64,
    pub remaining_amount: f64,
    pub percentage_used: f64,
    pub is_over_budget: bool,
    pub days_left: i64,
}

impl BudgetProgress {
    /// Presentation-level alert: spend has reached the budget's alert threshold.
    pub fn is_near_limit(&self, threshold: f64) -> bool {
        self.percentage_used >= threshold
    }
}
