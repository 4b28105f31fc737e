//! VisuLab back office core: lens input normalization, report exports,
//! mock data services and dashboard statistics

pub mod dashboards;
pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
pub mod usecases;
