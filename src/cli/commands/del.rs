use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !ask_confirmation(&format!("Delete tip #{}? This action is irreversible.", id)) {
            info("Operation cancelled.");
            return Ok(());
        }

        let db = TipCalcDb::new(&cfg.database);
        DeleteLogic::apply(&db, *id)?;
        success(format!("Tip #{} has been deleted.", id));
    }
    Ok(())
}
