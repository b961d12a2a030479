use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::models::tip::Tip;
use serde::Serialize;

/// Summary of the saved history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipStats {
    pub count: i64,
    pub last_tip: Option<Tip>,
    pub average_tip_percent: Option<f64>,
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn collect(db: &TipCalcDb) -> AppResult<TipStats> {
        Ok(TipStats {
            count: db.count_tips()?,
            last_tip: db.get_last_tip()?,
            average_tip_percent: db.average_tip_percent()?,
        })
    }
}
