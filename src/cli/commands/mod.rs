pub mod add;
pub mod calc;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod get;
pub mod init;
pub mod list;
pub mod stats;
pub mod update;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::formatting::{parse_amount, parse_percent};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub(crate) fn amount_arg(s: &str) -> AppResult<f64> {
    parse_amount(s).map_err(AppError::InvalidAmount)
}

pub(crate) fn percent_arg(s: &str) -> AppResult<f64> {
    parse_percent(s).map_err(AppError::InvalidPercent)
}
