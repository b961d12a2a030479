use crate::errors::AppResult;
use crate::models::tip::Tip;
use csv::Writer;
use std::path::Path;

/// One CSV line per tip, raw stored values plus the derived amounts.
pub fn write_csv(path: &Path, tips: &[Tip]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "date_millis",
        "date",
        "bill_amount",
        "tip_percent",
        "tip_amount",
        "total_amount",
    ])?;

    for tip in tips {
        wtr.write_record(&[
            tip.id.to_string(),
            tip.date_millis.to_string(),
            tip.date_str(),
            format!("{:.2}", tip.bill_amount),
            tip.tip_percent.to_string(),
            format!("{:.2}", tip.tip_amount()),
            format!("{:.2}", tip.total_amount()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
