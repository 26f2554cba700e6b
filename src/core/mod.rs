pub mod aggregate;
pub mod backup;
pub mod calendar;
pub mod duration;
pub mod log;
pub mod settlement;
pub mod storage;
pub mod store;
pub mod tracker;
