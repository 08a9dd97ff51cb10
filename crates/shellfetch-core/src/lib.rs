pub mod config;
pub mod logging;

pub mod fetcher;
pub mod release;
pub mod storage;
pub mod transfer;
