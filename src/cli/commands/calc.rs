use super::{amount_arg, percent_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::{Rounding, TipCalculator};
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::{format_money, format_percent, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        bill,
        percent,
        round,
        save,
    } = cmd
    {
        let bill = amount_arg(bill)?;
        let pct = match percent {
            Some(p) => percent_arg(p)?,
            None => cfg.default_tip_percent,
        };
        let rounding = round.unwrap_or(cfg.rounding);

        let calc = TipCalculator::new(bill, pct, rounding)?;
        let res = calc.calculate();
        let sym = cfg.currency_symbol.as_str();

        println!("{} {}", pad_right("Bill:", 10), format_money(res.bill_amount, sym));
        println!(
            "{} {} ({})",
            pad_right("Tip:", 10),
            format_money(res.tip_amount, sym),
            format_percent(res.effective_percent)
        );
        println!("{} {}", pad_right("Total:", 10), format_money(res.total_amount, sym));
        if rounding != Rounding::None {
            println!("{} {}", pad_right("Rounding:", 10), rounding.as_str());
        }

        if *save {
            let db = TipCalcDb::new(&cfg.database);
            let mut tip = calc.to_tip();
            AddLogic::save(&db, &mut tip)?;
            success(format!("Tip saved as #{}", tip.id));
        }
    }
    Ok(())
}
