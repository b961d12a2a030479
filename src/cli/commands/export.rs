use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let db = TipCalcDb::new(&cfg.database);
        ExportLogic::export(&db, *format, file, *force)?;
    }
    Ok(())
}
