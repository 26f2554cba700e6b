pub mod day_kind;
pub mod entry;
pub mod entry_kind;
pub mod month;
pub mod preferences;
pub mod settlement;
