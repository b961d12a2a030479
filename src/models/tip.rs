use crate::utils::date;
use crate::utils::formatting::{format_money, format_percent};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One saved tip calculation.
///
/// `id <= 0` means the tip has not been stored yet and lets the store
/// assign the key on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: i64,          // ⇔ tip._id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub date_millis: i64, // ⇔ tip.tip_date (INTEGER, ms since epoch)
    pub bill_amount: f64, // ⇔ tip.bill_amount (FLOAT)
    pub tip_percent: f64, // ⇔ tip.tip_percent (FLOAT, 0.15 = 15%)
}

impl Tip {
    pub fn new(id: i64, date_millis: i64, bill_amount: f64, tip_percent: f64) -> Self {
        Self {
            id,
            date_millis,
            bill_amount,
            tip_percent,
        }
    }

    /// Unsaved tip stamped with the current time.
    pub fn now(bill_amount: f64, tip_percent: f64) -> Self {
        Self::new(0, date::now_millis(), bill_amount, tip_percent)
    }

    pub fn is_saved(&self) -> bool {
        self.id > 0
    }

    pub fn tip_amount(&self) -> f64 {
        self.bill_amount * self.tip_percent
    }

    pub fn total_amount(&self) -> f64 {
        self.bill_amount + self.tip_amount()
    }

    pub fn date(&self) -> Option<DateTime<Local>> {
        date::millis_to_local(self.date_millis)
    }

    /// `YYYY-MM-DD HH:MM`, or the raw millis when out of range.
    pub fn date_str(&self) -> String {
        match self.date() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.date_millis.to_string(),
        }
    }

    pub fn percent_str(&self) -> String {
        format_percent(self.tip_percent)
    }

    pub fn bill_str(&self, symbol: &str) -> String {
        format_money(self.bill_amount, symbol)
    }

    pub fn tip_str(&self, symbol: &str) -> String {
        format_money(self.tip_amount(), symbol)
    }

    pub fn total_str(&self, symbol: &str) -> String {
        format_money(self.total_amount(), symbol)
    }
}
