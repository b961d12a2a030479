use super::{amount_arg, percent_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        bill,
        percent,
        date,
        id,
    } = cmd
    {
        let bill = amount_arg(bill)?;
        let pct = percent_arg(percent)?;

        let db = TipCalcDb::new(&cfg.database);
        let tip = AddLogic::apply(&db, bill, pct, date.as_deref(), *id)?;

        success(format!(
            "Tip #{} saved: {} bill, {} tip ({})",
            tip.id,
            tip.bill_str(&cfg.currency_symbol),
            tip.tip_str(&cfg.currency_symbol),
            tip.percent_str()
        ));
    }
    Ok(())
}
