use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::models::tip::Tip;
use crate::ui::messages::{header, info};
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let db = TipCalcDb::new(&cfg.database);
        let tips = db.get_tips()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&tips)?);
            return Ok(());
        }

        if tips.is_empty() {
            info("No tips saved.");
            return Ok(());
        }

        header(format!("Saved tips ({})", tips.len()));
        print!("{}", build_table(&tips, &cfg.currency_symbol).render());
    }
    Ok(())
}

fn build_table(tips: &[Tip], symbol: &str) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", Align::Right),
        Column::new("DATE", Align::Left),
        Column::new("BILL", Align::Right),
        Column::new("PERCENT", Align::Right),
        Column::new("TIP", Align::Right),
        Column::new("TOTAL", Align::Right),
    ]);

    for tip in tips {
        table.add_row(vec![
            tip.id.to_string(),
            tip.date_str(),
            tip.bill_str(symbol),
            tip.percent_str(),
            tip.tip_str(symbol),
            tip.total_str(symbol),
        ]);
    }
    table
}
