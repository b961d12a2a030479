use crate::db::tips::TipCalcDb;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::debug;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(db: &TipCalcDb, id: i64) -> AppResult<()> {
        match db.delete_tip(id)? {
            0 => Err(AppError::TipNotFound(id)),
            n => {
                debug(format!("Deleted {} row(s) for tip #{}", n, id));
                Ok(())
            }
        }
    }
}
