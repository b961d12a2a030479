use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::tips::TipCalcDb;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database, created and seeded on first run
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing tipcalc…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let db = TipCalcDb::new(&cfg.database);
    // opening for write runs create/upgrade
    db.helper().writable()?;
    let count = db.count_tips()?;

    success(format!(
        "Database initialized at {} (schema v{}, {} tip(s) stored)",
        db.helper().path().display(),
        db.helper().version(),
        count
    ));
    Ok(())
}
