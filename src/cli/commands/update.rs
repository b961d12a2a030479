use super::{amount_arg, percent_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::{TipChanges, UpdateLogic};
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        bill,
        percent,
        date,
    } = cmd
    {
        let changes = TipChanges {
            bill_amount: bill.as_deref().map(amount_arg).transpose()?,
            tip_percent: percent.as_deref().map(percent_arg).transpose()?,
            date: date.as_deref(),
        };

        if changes.is_empty() {
            info("Nothing to update: use --bill, --percent or --date.");
            return Ok(());
        }

        let db = TipCalcDb::new(&cfg.database);
        let tip = UpdateLogic::apply(&db, *id, &changes)?;

        success(format!(
            "Tip #{} updated: {} bill, {} ({}) on {}",
            tip.id,
            tip.bill_str(&cfg.currency_symbol),
            tip.percent_str(),
            tip.tip_str(&cfg.currency_symbol),
            tip.date_str()
        ));
    }
    Ok(())
}
