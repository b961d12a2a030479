pub mod tip;
