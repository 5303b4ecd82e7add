pub mod close;
pub mod config;
pub mod count;
pub mod delete;
pub mod init;
pub mod log;
pub mod report;
pub mod start;
pub mod time;
pub mod toggle;
pub mod truncate;
