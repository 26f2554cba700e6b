//! Net pay and the monthly settlement history.

use crate::errors::{AppError, AppResult};
use crate::models::month::YearMonth;
use crate::models::settlement::MonthlySettlement;
use chrono::{DateTime, Local};

/// Net pay, never below zero.
pub fn compute_net(payable: f64, labor_deduction: f64, health_deduction: f64) -> f64 {
    (payable - labor_deduction - health_deduction).max(0.0)
}

fn check_amount(name: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Settlement history, one record per month, newest month first.
#[derive(Debug, Clone, Default)]
pub struct SettlementBook {
    records: Vec<MonthlySettlement>,
}

impl SettlementBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<MonthlySettlement>) -> Self {
        let mut book = Self { records };
        book.sort();
        book
    }

    fn sort(&mut self) {
        self.records.sort_by(|a, b| b.month.key().cmp(&a.month.key()));
    }

    /// Record the settlement for `month`, replacing any earlier one.
    ///
    /// A month with no earned wages cannot be settled.
    pub fn save(
        &mut self,
        month: YearMonth,
        payable: f64,
        labor_deduction: f64,
        health_deduction: f64,
        now: DateTime<Local>,
    ) -> AppResult<MonthlySettlement> {
        check_amount("payable", payable)?;
        check_amount("labor deduction", labor_deduction)?;
        check_amount("health deduction", health_deduction)?;

        if payable == 0.0 {
            return Err(AppError::ZeroPayable(month.key()));
        }

        let record = MonthlySettlement {
            month,
            payable,
            labor_deduction,
            health_deduction,
            net: compute_net(payable, labor_deduction, health_deduction),
            saved_at: now,
        };

        match self.records.iter_mut().find(|r| r.month == month) {
            Some(existing) => *existing = record.clone(),
            None => self.records.push(record.clone()),
        }
        self.sort();

        Ok(record)
    }

    pub fn get(&self, month: YearMonth) -> Option<&MonthlySettlement> {
        self.records.iter().find(|r| r.month == month)
    }

    pub fn records(&self) -> &[MonthlySettlement] {
        &self.records
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
