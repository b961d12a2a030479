use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::utils::formatting::{format_percent, pad_right};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let db = TipCalcDb::new(&cfg.database);
    let stats = StatsLogic::collect(&db)?;

    println!("{} {}", pad_right("Tips saved:", 16), stats.count);

    let last = stats
        .last_tip
        .as_ref()
        .map(|t| t.date_str())
        .unwrap_or_else(|| "--".to_string());
    println!("{} {}", pad_right("Last saved:", 16), last);

    let avg = stats
        .average_tip_percent
        .map(format_percent)
        .unwrap_or_else(|| "--".to_string());
    println!("{} {}", pad_right("Average tip:", 16), avg);

    Ok(())
}
