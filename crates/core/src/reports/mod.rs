//! Report generators: CSV, grouped plain text and the dashboard PDF
//!
//! Generators are independent of each other. Each one validates its
//! input, builds the whole file in memory and hands it to an
//! [`ExportSink`](crate::shared::export::ExportSink) only at the end, so a
//! failed export never leaves a partial file behind.

pub mod csv_report;
pub mod error;
pub mod pdf;
pub mod txt_report;

pub use error::ReportError;

use crate::shared::clock::Clock;
use crate::shared::config::ReportConfig;
use crate::shared::export::ExportSink;

/// Collaborators shared by every export
#[derive(Clone, Copy)]
pub struct ExportContext<'a> {
    /// Generation date provider
    pub clock: &'a dyn Clock,
    /// Where finished files go
    pub sink: &'a dyn ExportSink,
    pub settings: &'a ReportConfig,
}
