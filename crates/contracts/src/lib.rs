//! Shared types for the VisuLab shortage tracker
//!
//! Aggregates, report DTOs and dashboard DTOs. No I/O lives here.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod reports;
pub mod system;
