use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::helper::DbHelper;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { reset, yes } = cmd {
        if !*reset {
            info("Nothing to do: use --reset.");
            return Ok(());
        }

        if !*yes
            && !ask_confirmation("Reset the tip table? All saved tips will be lost.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        DbHelper::new(&cfg.database).reset()?;
        success("Tip table recreated with the default rows.");
    }
    Ok(())
}
