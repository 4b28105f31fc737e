use crate::domain::a004_shortage::aggregate::Shortage;
use serde::{Deserialize, Serialize};

/// One bar/slice of a dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// Category (treatment name, refractive index)
    pub name: String,
    /// Raw value (quantity for treatments, percentage for indices)
    pub value: u32,
    /// Share of the total quantity, rounded to an integer percent
    pub percentage: u32,
    /// Hex color (e.g. "#3b82f6")
    pub color: String,
}

/// Shortage dashboard data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortageSummary {
    /// Sum of quantities over all shortages
    pub total_quantity: u32,
    /// Quantity per treatment, largest first
    pub treatment_distribution: Vec<ChartSlice>,
    /// Percentage per refractive index, largest first, at most 5 entries
    pub index_distribution: Vec<ChartSlice>,
    /// Quantity per company, largest first
    pub company_distribution: Vec<ChartSlice>,
    /// Most recent shortages (first 4)
    pub recent: Vec<Shortage>,
}
