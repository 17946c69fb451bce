pub mod config;
pub mod export;
pub mod init;
pub mod summary;
pub mod year;
