use anyhow::Result;
use contracts::dashboards::d400_shortage_summary::{ChartSlice, ShortageSummary};
use contracts::domain::a004_shortage::aggregate::Shortage;
use maplit::hashmap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::shared::data::{Repository, Store};

/// Bar colors per refractive index
pub static INDEX_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    hashmap! {
        "1.49" => "#94a3b8",
        "1.53" => "#a8a29e",
        "1.56" => "#3b82f6",
        "1.59" => "#0ea5e9",
        "1.60" => "#10b981",
        "1.67" => "#f59e0b",
        "1.74" => "#8b5cf6",
    }
});

/// Slice colors per treatment
pub static TREATMENT_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    hashmap! {
        "Incolor" => "#94a3b8",
        "White" => "#cbd5e1",
        "AR" => "#60a5fa",
        "HMC" => "#60a5fa",
        "Blue Cut" => "#2563eb",
        "AR Premium" => "#8b5cf6",
        "Photo" => "#f97316",
        OTHERS => "#64748b",
    }
});

pub const DEFAULT_INDEX_COLOR: &str = "#94a3b8";
pub const DEFAULT_TREATMENT_COLOR: &str = "#3b82f6";
pub const COMPANY_COLOR: &str = "#64748b";

/// Bucket for records without a category
pub const OTHERS: &str = "Others";

const TOP_INDICES: usize = 5;
const RECENT_COUNT: usize = 4;

/// Dashboard figures over every registered shortage
pub async fn get_shortage_summary(store: &Store) -> Result<ShortageSummary> {
    let shortages = store.shortages.list().await?;
    let summary = summarize(&shortages);
    tracing::info!(
        "Shortage summary: {} records, total quantity {}",
        shortages.len(),
        summary.total_quantity
    );
    Ok(summary)
}

/// Pure aggregation behind [`get_shortage_summary`]
pub fn summarize(shortages: &[Shortage]) -> ShortageSummary {
    if shortages.is_empty() {
        return ShortageSummary::default();
    }

    let total: u32 = shortages.iter().map(counted_quantity).sum();

    let mut treatment_distribution = quantities_by(shortages, |s| &s.treatment)
        .into_iter()
        .map(|(name, quantity)| ChartSlice {
            color: color_for(&TREATMENT_COLORS, &name, DEFAULT_TREATMENT_COLOR),
            percentage: percent(quantity, total),
            value: quantity,
            name,
        })
        .collect::<Vec<_>>();

    let mut index_distribution = quantities_by(shortages, |s| &s.index)
        .into_iter()
        .map(|(name, quantity)| {
            let share = percent(quantity, total);
            ChartSlice {
                color: color_for(&INDEX_COLORS, &name, DEFAULT_INDEX_COLOR),
                percentage: share,
                value: share,
                name,
            }
        })
        .collect::<Vec<_>>();

    let mut company_distribution = quantities_by(shortages, |s| &s.company)
        .into_iter()
        .map(|(name, quantity)| ChartSlice {
            color: COMPANY_COLOR.to_string(),
            percentage: percent(quantity, total),
            value: quantity,
            name,
        })
        .collect::<Vec<_>>();

    sort_by_value_desc(&mut treatment_distribution);
    sort_by_value_desc(&mut index_distribution);
    sort_by_value_desc(&mut company_distribution);
    index_distribution.truncate(TOP_INDICES);

    ShortageSummary {
        total_quantity: total,
        treatment_distribution,
        index_distribution,
        company_distribution,
        recent: shortages.iter().take(RECENT_COUNT).cloned().collect(),
    }
}

/// A zero quantity still counts as one unit
fn counted_quantity(shortage: &Shortage) -> u32 {
    shortage.quantity.max(1)
}

/// Quantity sums per key, in order of first appearance
fn quantities_by<F>(shortages: &[Shortage], key: F) -> Vec<(String, u32)>
where
    F: Fn(&Shortage) -> &String,
{
    let mut sums: Vec<(String, u32)> = Vec::new();
    for shortage in shortages {
        let name = match key(shortage).as_str() {
            "" => OTHERS,
            other => other,
        };
        let quantity = counted_quantity(shortage);
        match sums.iter().position(|(existing, _)| existing == name) {
            Some(at) => sums[at].1 += quantity,
            None => sums.push((name.to_string(), quantity)),
        }
    }
    sums
}

/// Stable, so ties keep their first-appearance order
fn sort_by_value_desc(slices: &mut [ChartSlice]) {
    slices.sort_by(|a, b| b.value.cmp(&a.value));
}

/// Integer percentage, halves rounded up
fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0 + 0.5).floor() as u32
}

fn color_for(
    palette: &HashMap<&'static str, &'static str>,
    name: &str,
    default: &str,
) -> String {
    palette.get(name).copied().unwrap_or(default).to_string()
}
