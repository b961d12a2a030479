pub mod helper;
pub mod initialize;
pub mod schema;
pub mod tips;

pub use helper::DbHelper;
pub use tips::{INSERT_FAILED, TipCalcDb};
