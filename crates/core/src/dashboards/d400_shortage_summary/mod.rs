pub mod charts;
pub mod service;
