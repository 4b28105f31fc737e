use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const CONTENT_TYPE_CSV: &str = "text/csv;charset=utf-8;";
pub const CONTENT_TYPE_TXT: &str = "text/plain;charset=utf-8";
pub const CONTENT_TYPE_PDF: &str = "application/pdf";

/// A generated report ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Content as UTF-8 text, when it is text
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Destination of generated reports
pub trait ExportSink: Send + Sync {
    fn save(&self, file: &ExportedFile) -> std::io::Result<()>;
}

/// Writes reports into a directory, creating it when needed
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, file: &ExportedFile) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&file.file_name);
        std::fs::write(&path, &file.bytes)?;
        tracing::info!(
            "Saved {} ({} bytes) to {}",
            file.file_name,
            file.bytes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Keeps saved reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<ExportedFile>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far
    pub fn files(&self) -> Vec<ExportedFile> {
        match self.files.lock() {
            Ok(files) => files.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ExportSink for MemorySink {
    fn save(&self, file: &ExportedFile) -> std::io::Result<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "sink lock poisoned"))?;
        files.push(file.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExportedFile {
        ExportedFile {
            file_name: "compras_20240305.csv".into(),
            content_type: CONTENT_TYPE_CSV,
            bytes: b"a,b\n1,2\n".to_vec(),
        }
    }

    #[test]
    fn test_memory_sink_keeps_files_in_order() {
        let sink = MemorySink::new();
        sink.save(&sample()).unwrap();
        let mut second = sample();
        second.file_name = "other.csv".into();
        sink.save(&second).unwrap();

        let names: Vec<_> = sink.files().into_iter().map(|f| f.file_name).collect();
        assert_eq!(names, vec!["compras_20240305.csv", "other.csv"]);
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = std::env::temp_dir().join(format!("visulab-sink-{}", uuid::Uuid::new_v4()));
        let sink = DirectorySink::new(&dir);
        sink.save(&sample()).unwrap();

        let written = std::fs::read(dir.join("compras_20240305.csv")).unwrap();
        assert_eq!(written, b"a,b\n1,2\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_text_view() {
        assert_eq!(sample().text(), Some("a,b\n1,2\n"));
    }
}
