use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scope of a text report: header overrides and the selected filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    /// Company label, "All" when absent
    pub company: Option<String>,
    /// Custom report title
    pub title: Option<String>,
    /// Label of the grouping header (e.g. "REFRACTIVE INDEX", "ORDER")
    #[serde(rename = "groupByLabel")]
    pub group_by_label: Option<String>,
}

impl ReportFilter {
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_group_label(mut self, label: impl Into<String>) -> Self {
        self.group_by_label = Some(label.into());
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Both ends of the period, only when both are set
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }
}
