use serde::{Deserialize, Serialize};

/// Placeholder hourly rate restored by an explicit reset.
pub const DEFAULT_HOURLY_RATE: f64 = 183.0;

/// Scalar user preferences. Each value is persisted on its own and
/// defaults to zero when it was never saved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub labor_deduction: f64,
    #[serde(default)]
    pub health_deduction: f64,
}

impl Preferences {
    /// Values applied by `pref --reset`.
    pub fn reset() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            labor_deduction: 0.0,
            health_deduction: 0.0,
        }
    }

    /// Storage keys, in the order they are listed.
    pub const KEYS: [&'static str; 3] = ["hourly_rate", "labor_deduction", "health_deduction"];

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "hourly_rate" => Some(self.hourly_rate),
            "labor_deduction" => Some(self.labor_deduction),
            "health_deduction" => Some(self.health_deduction),
            _ => None,
        }
    }

    /// Set a value by storage key. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: f64) {
        match key {
            "hourly_rate" => self.hourly_rate = value,
            "labor_deduction" => self.labor_deduction = value,
            "health_deduction" => self.health_deduction = value,
            _ => {}
        }
    }
}
