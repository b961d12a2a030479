use crate::db::tips::{INSERT_FAILED, TipCalcDb};
use crate::errors::{AppError, AppResult};
use crate::models::tip::Tip;
use crate::utils::date;

pub struct AddLogic;

impl AddLogic {
    /// Insert a tip built from CLI-level values.
    ///
    /// - `date`: optional user date (see [`date::parse_to_millis`]), now if absent
    /// - `id`: optional explicit key; `None` lets the store assign one
    ///
    /// Returns the stored tip with its final id.
    pub fn apply(
        db: &TipCalcDb,
        bill_amount: f64,
        tip_percent: f64,
        date: Option<&str>,
        id: Option<i64>,
    ) -> AppResult<Tip> {
        let date_millis = match date {
            Some(d) => date::parse_to_millis(d).map_err(AppError::InvalidDate)?,
            None => date::now_millis(),
        };

        let mut tip = Tip::new(id.unwrap_or(0), date_millis, bill_amount, tip_percent);
        Self::save(db, &mut tip)?;
        Ok(tip)
    }

    /// Insert `tip` and write the assigned id back into it.
    pub fn save(db: &TipCalcDb, tip: &mut Tip) -> AppResult<i64> {
        let row_id = db.insert_tip(tip)?;
        if row_id == INSERT_FAILED {
            return Err(AppError::Other(format!(
                "tip could not be saved (id #{} may already exist)",
                tip.id
            )));
        }

        tip.id = row_id;
        Ok(row_id)
    }
}
