use crate::db::tips::TipCalcDb;
use crate::errors::{AppError, AppResult};
use crate::models::tip::Tip;
use crate::utils::date;

/// Fields to overwrite; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct TipChanges<'a> {
    pub bill_amount: Option<f64>,
    pub tip_percent: Option<f64>,
    pub date: Option<&'a str>,
}

impl TipChanges<'_> {
    pub fn is_empty(&self) -> bool {
        self.bill_amount.is_none() && self.tip_percent.is_none() && self.date.is_none()
    }
}

pub struct UpdateLogic;

impl UpdateLogic {
    pub fn apply(db: &TipCalcDb, id: i64, changes: &TipChanges) -> AppResult<Tip> {
        let mut tip = db.get_tip(id)?.ok_or(AppError::TipNotFound(id))?;

        if let Some(bill) = changes.bill_amount {
            tip.bill_amount = bill;
        }
        if let Some(pct) = changes.tip_percent {
            tip.tip_percent = pct;
        }
        if let Some(d) = changes.date {
            tip.date_millis = date::parse_to_millis(d).map_err(AppError::InvalidDate)?;
        }

        // the row can vanish between the read and the write
        if db.update_tip(&tip)? == 0 {
            return Err(AppError::TipNotFound(id));
        }
        Ok(tip)
    }
}
