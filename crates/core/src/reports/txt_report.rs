//! Grouped plain-text report

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDateTime;
use contracts::reports::{ReportFilter, ReportItem};

use super::{ExportContext, ReportError};
use crate::shared::export::{ExportedFile, CONTENT_TYPE_TXT};
use crate::shared::format::{display_date, display_time, file_minute_stamp};

pub const DEFAULT_TITLE: &str = "STOCK SHORTAGE REPORT";
pub const DEFAULT_GROUP_LABEL: &str = "GROUP";
pub const DEFAULT_COMPANY: &str = "All";

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "__________________________________________________";
const GROUP_MARKER: &str = "📍";

/// Minimum width of the primary column
const PRIMARY_WIDTH: usize = 25;

/// Partition items by grouping key
///
/// Keys iterate in lexicographic order of the key string; items keep their
/// input order inside each group.
pub fn group_items(items: &[ReportItem]) -> BTreeMap<&str, Vec<&ReportItem>> {
    let mut groups: BTreeMap<&str, Vec<&ReportItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.index.as_str()).or_default().push(item);
    }
    groups
}

/// Render the report text as of `at`
pub fn render_txt(
    filter: &ReportFilter,
    items: &[ReportItem],
    at: NaiveDateTime,
    brand: &str,
) -> String {
    let title = non_empty(filter.title.as_deref()).unwrap_or(DEFAULT_TITLE);
    let group_label = non_empty(filter.group_by_label.as_deref()).unwrap_or(DEFAULT_GROUP_LABEL);
    let company = non_empty(filter.company.as_deref()).unwrap_or(DEFAULT_COMPANY);

    // Writing into a String cannot fail
    let mut out = String::new();

    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}\n", HEAVY_RULE);

    let _ = writeln!(out, "Date: {}", display_date(at.date()));
    let _ = writeln!(out, "Time: {}\n", display_time(at));

    let _ = writeln!(out, "Company: {}", company);
    if let Some((start, end)) = filter.period() {
        let _ = writeln!(
            out,
            "Period: {} to {}",
            display_date(start),
            display_date(end)
        );
    }
    let _ = writeln!(out, "Total Items: {}", items.len());
    let _ = writeln!(out, "{}\n", LIGHT_RULE);

    let groups = group_items(items);
    if groups.is_empty() {
        out.push_str("\nNo records found for the selected filters.\n");
    } else {
        for (key, group) in &groups {
            let _ = writeln!(out, "\n{} {}: {}\n", GROUP_MARKER, group_label, key);
            for item in group {
                let _ = writeln!(
                    out,
                    "   {:<width$} {} ({})",
                    item.esf_cil,
                    item.treatment,
                    item.quantity,
                    width = PRIMARY_WIDTH
                );
            }
            let _ = writeln!(out, "\n{}", LIGHT_RULE);
        }
    }

    out.push_str("\n\n");
    let _ = writeln!(out, "Report generated automatically by {}", brand);
    let _ = writeln!(out, "{}", HEAVY_RULE);

    out
}

/// Build `relatorio_{YYYYMMDD_HHmm}.txt` and save it
pub fn generate_txt_report(
    filter: &ReportFilter,
    items: &[ReportItem],
    ctx: &ExportContext<'_>,
) -> Result<ExportedFile, ReportError> {
    let at = ctx.clock.now();
    let content = render_txt(filter, items, at, &ctx.settings.brand);

    let file = ExportedFile {
        file_name: format!("relatorio_{}.txt", file_minute_stamp(at)),
        content_type: CONTENT_TYPE_TXT,
        bytes: content.into_bytes(),
    };

    ctx.sink.save(&file)?;
    tracing::info!(
        "Text report {} ready: {} items",
        file.file_name,
        items.len()
    );
    Ok(file)
}

/// Empty overrides count as absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::clock::FixedClock;
    use crate::shared::config::ReportConfig;
    use crate::shared::export::MemorySink;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    fn item(index: &str, primary: &str, secondary: &str, quantity: u32) -> ReportItem {
        ReportItem {
            index: index.into(),
            esf_cil: primary.into(),
            treatment: secondary.into(),
            quantity,
            user: None,
            time: None,
        }
    }

    #[test]
    fn test_full_layout() {
        let filter = ReportFilter::default()
            .with_company("Matriz")
            .with_group_label("REFRACTIVE INDEX")
            .with_period(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            );
        let items = vec![item("1.56", "+2.00 -1.00", "HMC", 2)];

        let expected = "\
STOCK SHORTAGE REPORT
==================================================

Date: 05/03/2024
Time: 14:07:09

Company: Matriz
Period: 01/03/2024 to 04/03/2024
Total Items: 1
__________________________________________________


📍 REFRACTIVE INDEX: 1.56

   +2.00 -1.00               HMC (2)

__________________________________________________


Report generated automatically by VisuLab
==================================================
";
        assert_eq!(render_txt(&filter, &items, at(), "VisuLab"), expected);
    }

    #[test]
    fn test_groups_are_sorted_lexicographically() {
        let items = vec![
            item("2", "b", "x", 1),
            item("1", "a", "y", 1),
            item("10", "c", "z", 1),
            item("2", "d", "w", 3),
        ];
        let text = render_txt(&ReportFilter::default(), &items, at(), "VisuLab");

        let first = text.find("GROUP: 1\n").unwrap();
        let tenth = text.find("GROUP: 10\n").unwrap();
        let second = text.find("GROUP: 2\n").unwrap();
        assert!(first < tenth && tenth < second);

        let groups = group_items(&items);
        let in_two: Vec<_> = groups["2"].iter().map(|i| i.esf_cil.as_str()).collect();
        assert_eq!(in_two, vec!["b", "d"]);
    }

    #[test]
    fn test_empty_input_reports_no_records() {
        let text = render_txt(&ReportFilter::default(), &[], at(), "VisuLab");
        assert!(text.contains("Company: All\n"));
        assert!(text.contains("Total Items: 0\n"));
        assert!(text.contains("\nNo records found for the selected filters.\n"));
        assert!(!text.contains(GROUP_MARKER));
    }

    #[test]
    fn test_period_needs_both_dates() {
        let mut filter = ReportFilter::default();
        filter.start_date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let text = render_txt(&filter, &[], at(), "VisuLab");
        assert!(!text.contains("Period:"));
    }

    #[test]
    fn test_overrides_and_empty_overrides() {
        let filter = ReportFilter::default()
            .with_title("PURCHASE HISTORY")
            .with_company("");
        let text = render_txt(&filter, &[item("#PO-1", "Hoya", "Pending", 1)], at(), "VisuLab");
        assert!(text.starts_with("PURCHASE HISTORY\n"));
        assert!(text.contains("Company: All\n"));
        assert!(text.contains("📍 GROUP: #PO-1\n"));
    }

    #[test]
    fn test_long_primary_is_not_truncated() {
        let long = "Essilor International Lens Division";
        let text = render_txt(
            &ReportFilter::default(),
            &[item("x", long, "Received", 1)],
            at(),
            "VisuLab",
        );
        assert!(text.contains(&format!("   {} Received (1)\n", long)));
    }

    #[test]
    fn test_generate_names_file_by_minute() {
        let sink = MemorySink::new();
        let clock = FixedClock(at());
        let settings = ReportConfig::default();
        let ctx = ExportContext {
            clock: &clock,
            sink: &sink,
            settings: &settings,
        };
        let file = generate_txt_report(&ReportFilter::default(), &[], &ctx).unwrap();
        assert_eq!(file.file_name, "relatorio_20240305_1407.txt");
        assert_eq!(file.content_type, CONTENT_TYPE_TXT);

        let again = generate_txt_report(&ReportFilter::default(), &[], &ctx).unwrap();
        assert_eq!(file, again);
        assert_eq!(sink.files().len(), 2);
    }
}
