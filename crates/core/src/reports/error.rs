use thiserror::Error;

use super::pdf::raster::CaptureError;

/// Why an export did not produce a file
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no data to export")]
    NoData,

    #[error(
        "missing elements for the PDF layout: {kpi_cards} of 4 KPI cards and {charts} of 3 charts present"
    )]
    MissingElements { kpi_cards: usize, charts: usize },

    #[error("failed to capture region '{region}': {source}")]
    Capture {
        region: String,
        #[source]
        source: CaptureError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to save report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Notice shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            ReportError::NoData => "No data to export.",
            ReportError::MissingElements { .. }
            | ReportError::Capture { .. }
            | ReportError::Pdf(_) => "Error generating the PDF report.",
            ReportError::Csv(_) | ReportError::Io(_) => "Error generating the report.",
        }
    }
}
