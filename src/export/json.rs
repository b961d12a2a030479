use crate::errors::AppResult;
use crate::models::tip::Tip;
use std::path::Path;

/// Pretty printed JSON array of the stored tips.
pub fn write_json(path: &Path, tips: &[Tip]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(tips)?;
    std::fs::write(path, json)?;
    Ok(())
}
