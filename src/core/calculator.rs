use crate::errors::{AppError, AppResult};
use crate::models::tip::Tip;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the calculated amounts are rounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Exact amounts
    #[default]
    None,
    /// Round the tip up to the next whole unit
    Tip,
    /// Round the total up to the next whole unit; the tip absorbs the difference
    Total,
}

impl Rounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rounding::None => "none",
            Rounding::Tip => "tip",
            Rounding::Total => "total",
        }
    }
}

/// Outcome of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipResult {
    pub bill_amount: f64,
    pub tip_amount: f64,
    pub total_amount: f64,
    /// Percent actually paid after rounding, as a fraction.
    pub effective_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipCalculator {
    pub bill_amount: f64,
    pub tip_percent: f64,
    pub rounding: Rounding,
}

impl TipCalculator {
    pub fn new(bill_amount: f64, tip_percent: f64, rounding: Rounding) -> AppResult<Self> {
        if !bill_amount.is_finite() || bill_amount < 0.0 {
            return Err(AppError::InvalidAmount(bill_amount.to_string()));
        }
        if !tip_percent.is_finite() || tip_percent < 0.0 {
            return Err(AppError::InvalidPercent(tip_percent.to_string()));
        }

        Ok(Self {
            bill_amount,
            tip_percent,
            rounding,
        })
    }

    pub fn calculate(&self) -> TipResult {
        let bill = self.bill_amount;
        let exact_tip = bill * self.tip_percent;

        let tip = match self.rounding {
            Rounding::None => exact_tip,
            Rounding::Tip => round_up(exact_tip),
            Rounding::Total => round_up(bill + exact_tip) - bill,
        };

        let effective_percent = if bill > 0.0 { tip / bill } else { self.tip_percent };

        TipResult {
            bill_amount: bill,
            tip_amount: tip,
            total_amount: bill + tip,
            effective_percent,
        }
    }

    /// An unsaved [`Tip`] carrying the effective percent, stamped now.
    pub fn to_tip(&self) -> Tip {
        Tip::now(self.bill_amount, self.calculate().effective_percent)
    }
}

// cents are rounded first so 12.0000001 does not become 13
fn round_up(amount: f64) -> f64 {
    ((amount * 100.0).round() / 100.0).ceil()
}
