//! Saving generated reports ("downloads")

pub mod sink;

pub use sink::{
    DirectorySink, ExportSink, ExportedFile, MemorySink, CONTENT_TYPE_CSV, CONTENT_TYPE_PDF,
    CONTENT_TYPE_TXT,
};
