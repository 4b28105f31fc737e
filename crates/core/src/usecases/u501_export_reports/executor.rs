use std::sync::Arc;

use anyhow::Result;
use contracts::domain::a003_purchase::aggregate::{Purchase, PurchaseStatus};
use contracts::reports::ReportFilter;

use super::adapters::{purchase_item, shortage_item};
use crate::dashboards::d400_shortage_summary::charts::{
    dashboard_kpis, BarChartRegion, KpiCardRegion,
};
use crate::dashboards::d400_shortage_summary::service::summarize;
use crate::domain::{a003_purchase, a004_shortage};
use crate::reports::csv_report::generate_csv_report;
use crate::reports::pdf::raster::RenderRegion;
use crate::reports::pdf::{generate_pdf_report, PdfElements};
use crate::reports::txt_report::generate_txt_report;
use crate::reports::ExportContext;
use crate::shared::clock::Clock;
use crate::shared::config::ReportConfig;
use crate::shared::data::Store;
use crate::shared::export::{ExportSink, ExportedFile};

const PURCHASES_CSV_PREFIX: &str = "compras";
const SHORTAGES_CSV_PREFIX: &str = "faltas";

const PURCHASES_TITLE: &str = "PURCHASE HISTORY";
const PURCHASES_GROUP_LABEL: &str = "ORDER";
const PURCHASES_COMPANY: &str = "All (Purchases)";
const SHORTAGES_GROUP_LABEL: &str = "REFRACTIVE INDEX";

/// Executor of the report downloads offered by the back office pages
#[derive(Clone)]
pub struct ExportExecutor {
    store: Arc<Store>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn ExportSink>,
    settings: ReportConfig,
}

impl ExportExecutor {
    pub fn new(
        store: Arc<Store>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn ExportSink>,
        settings: ReportConfig,
    ) -> Self {
        Self {
            store,
            clock,
            sink,
            settings,
        }
    }

    fn ctx(&self) -> ExportContext<'_> {
        ExportContext {
            clock: self.clock.as_ref(),
            sink: self.sink.as_ref(),
            settings: &self.settings,
        }
    }

    /// Purchases table as CSV, optionally narrowed to one status
    pub async fn export_purchases_csv(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<ExportedFile> {
        let purchases = a003_purchase::service::list_by_status(&self.store, status).await?;
        Ok(generate_csv_report(
            &purchases,
            PURCHASES_CSV_PREFIX,
            &self.ctx(),
        )?)
    }

    /// Purchase history as a text report, one group per order
    pub async fn export_purchases_txt(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<ExportedFile> {
        let purchases = a003_purchase::service::list_by_status(&self.store, status).await?;
        let items: Vec<_> = purchases.iter().map(purchase_item).collect();
        let filter = ReportFilter::default()
            .with_title(PURCHASES_TITLE)
            .with_group_label(PURCHASES_GROUP_LABEL)
            .with_company(PURCHASES_COMPANY);
        Ok(generate_txt_report(&filter, &items, &self.ctx())?)
    }

    pub async fn export_shortages_csv(&self) -> Result<ExportedFile> {
        let shortages = a004_shortage::service::list_all(&self.store).await?;
        Ok(generate_csv_report(
            &shortages,
            SHORTAGES_CSV_PREFIX,
            &self.ctx(),
        )?)
    }

    /// Recent shortages shown on the dashboard as a text report, grouped by
    /// refractive index unless the filter names another group label
    pub async fn export_dashboard_txt(&self, filter: ReportFilter) -> Result<ExportedFile> {
        let shortages = a004_shortage::service::list_all(&self.store).await?;
        let summary = summarize(&shortages);
        let items: Vec<_> = summary.recent.iter().map(shortage_item).collect();
        let filter = ReportFilter {
            group_by_label: filter
                .group_by_label
                .clone()
                .or_else(|| Some(SHORTAGES_GROUP_LABEL.to_string())),
            ..filter
        };
        Ok(generate_txt_report(&filter, &items, &self.ctx())?)
    }

    /// Dashboard KPI cards and charts as a PDF
    pub async fn export_dashboard_pdf(&self) -> Result<ExportedFile> {
        let shortages = a004_shortage::service::list_all(&self.store).await?;
        let purchases = a003_purchase::service::list_all(&self.store).await?;
        let summary = summarize(&shortages);

        let cards = dashboard_kpis(&summary, shortages.len(), last_purchase_date(&purchases));
        let card_regions: Vec<KpiCardRegion> = cards
            .into_iter()
            .enumerate()
            .map(|(n, card)| KpiCardRegion::new(format!("kpi-{}", n + 1), card))
            .collect();
        let chart_regions = [
            BarChartRegion::new("chart-index", summary.index_distribution.clone()),
            BarChartRegion::new("chart-treatment", summary.treatment_distribution.clone()),
            BarChartRegion::new("chart-company", summary.company_distribution.clone()),
        ];

        let kpi_cards: Vec<&dyn RenderRegion> = card_regions
            .iter()
            .map(|r| r as &dyn RenderRegion)
            .collect();
        let charts: Vec<&dyn RenderRegion> = chart_regions
            .iter()
            .map(|r| r as &dyn RenderRegion)
            .collect();
        let elements = PdfElements {
            kpi_cards: &kpi_cards,
            charts: &charts,
        };

        Ok(generate_pdf_report(&elements, &self.ctx()).await?)
    }
}

fn last_purchase_date(purchases: &[Purchase]) -> Option<chrono::NaiveDate> {
    purchases.iter().map(|p| p.date).max()
}
