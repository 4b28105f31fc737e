pub mod clock;
pub mod config;
pub mod data;
pub mod display_id;
pub mod export;
pub mod format;
pub mod lens;
