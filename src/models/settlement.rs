use super::month::YearMonth;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Finalized gross/deduction/net figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySettlement {
    pub month: YearMonth,
    pub payable: f64,
    pub labor_deduction: f64,
    pub health_deduction: f64,
    pub net: f64,
    pub saved_at: DateTime<Local>,
}

impl MonthlySettlement {
    pub fn total_deductions(&self) -> f64 {
        self.labor_deduction + self.health_deduction
    }
}
