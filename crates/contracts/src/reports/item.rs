use serde::{Deserialize, Serialize};

/// One line of the grouped text report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    /// Grouping key (refractive index, order id, ...)
    pub index: String,
    /// Primary text
    #[serde(rename = "esfCil")]
    pub esf_cil: String,
    /// Secondary text
    pub treatment: String,
    pub quantity: u32,
    pub user: Option<String>,
    pub time: Option<String>,
}
