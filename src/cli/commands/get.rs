use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::tips::TipCalcDb;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Get { id } = cmd {
        let db = TipCalcDb::new(&cfg.database);
        let tip = db.get_tip(*id)?.ok_or(AppError::TipNotFound(*id))?;
        let sym = cfg.currency_symbol.as_str();

        println!("{} #{}", pad_right("Tip", 10), tip.id);
        println!("{} {}", pad_right("Date:", 10), tip.date_str());
        println!("{} {}", pad_right("Bill:", 10), tip.bill_str(sym));
        println!("{} {}", pad_right("Percent:", 10), tip.percent_str());
        println!("{} {}", pad_right("Tip:", 10), tip.tip_str(sym));
        println!("{} {}", pad_right("Total:", 10), tip.total_str(sym));
    }
    Ok(())
}
