use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub export: ExportConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory where generated reports are saved
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MockConfig {
    /// Simulated latency of every repository call, in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Brand named in report footers
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Title line of the PDF report
    #[serde(default = "default_pdf_title")]
    pub pdf_title: String,
    /// Upscale factor applied when capturing PDF regions
    #[serde(default = "default_capture_scale")]
    pub capture_scale: f32,
}

fn default_brand() -> String {
    "VisuLab".into()
}

fn default_pdf_title() -> String {
    "Analysis Report - VisuLab".into()
}

fn default_capture_scale() -> f32 {
    1.2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            pdf_title: default_pdf_title(),
            capture_scale: default_capture_scale(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[export]
dir = "target/exports"

[mock]
latency_ms = 0

[report]
brand = "VisuLab"
pdf_title = "Analysis Report - VisuLab"
capture_scale = 1.2
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Parse configuration text
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    let scale = config.report.capture_scale;
    if !scale.is_finite() || scale <= 0.0 {
        anyhow::bail!(
            "report.capture_scale must be positive, got {}",
            scale
        );
    }
    Ok(config)
}

/// Get the export directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_export_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir_str = &config.export.dir;
    let dir = Path::new(dir_str);

    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(dir));
        }
    }

    // Fallback: relative to the current directory
    Ok(PathBuf::from(dir_str))
}
