//! Dashboard PDF: four KPI cards and three charts captured as images
//! and composed onto A4 pages

pub mod layout;
pub mod raster;
pub mod render;

use self::layout::{layout_report, PageGeometry};
use self::raster::{Raster, RenderRegion, Rgb};
use self::render::{render_pdf, PdfHeader};
use super::{ExportContext, ReportError};
use crate::shared::export::{ExportedFile, CONTENT_TYPE_PDF};
use crate::shared::format::{display_date_time, file_date_stamp};

pub const KPI_CARD_COUNT: usize = 4;
pub const CHART_COUNT: usize = 3;

type Regions<'a> = (
    [&'a dyn RenderRegion; KPI_CARD_COUNT],
    [&'a dyn RenderRegion; CHART_COUNT],
);

/// Regions captured into the report, in reading order
#[derive(Clone, Copy)]
pub struct PdfElements<'a> {
    pub kpi_cards: &'a [&'a dyn RenderRegion],
    pub charts: &'a [&'a dyn RenderRegion],
}

impl<'a> PdfElements<'a> {
    /// Exactly four KPI cards and three charts
    pub fn validate(&self) -> Result<Regions<'a>, ReportError> {
        let missing = || ReportError::MissingElements {
            kpi_cards: self.kpi_cards.len(),
            charts: self.charts.len(),
        };
        let kpis = <[&dyn RenderRegion; KPI_CARD_COUNT]>::try_from(self.kpi_cards)
            .map_err(|_| missing())?;
        let charts =
            <[&dyn RenderRegion; CHART_COUNT]>::try_from(self.charts).map_err(|_| missing())?;
        Ok((kpis, charts))
    }
}

/// Capture every region, lay the images out and save `relatorio_{YYYYMMDD}.pdf`
///
/// Captures run one after another. Nothing is saved unless every step
/// succeeds.
pub async fn generate_pdf_report(
    elements: &PdfElements<'_>,
    ctx: &ExportContext<'_>,
) -> Result<ExportedFile, ReportError> {
    let (kpis, charts) = match elements.validate() {
        Ok(regions) => regions,
        Err(e) => {
            tracing::error!("PDF export aborted: {}", e);
            return Err(e);
        }
    };

    match build_pdf(&kpis, &charts, ctx).await {
        Ok(file) => {
            ctx.sink.save(&file)?;
            tracing::info!("PDF report {} ready", file.file_name);
            Ok(file)
        }
        Err(e) => {
            tracing::error!("PDF export failed: {}", e);
            Err(e)
        }
    }
}

async fn build_pdf(
    kpis: &[&dyn RenderRegion; KPI_CARD_COUNT],
    charts: &[&dyn RenderRegion; CHART_COUNT],
    ctx: &ExportContext<'_>,
) -> Result<ExportedFile, ReportError> {
    let generated_at = ctx.clock.now();
    let scale = ctx.settings.capture_scale;

    let mut rasters = Vec::with_capacity(KPI_CARD_COUNT + CHART_COUNT);
    for region in kpis.iter().chain(charts.iter()) {
        rasters.push(capture(*region, scale).await?);
    }

    let sizes: Vec<_> = rasters.iter().map(Raster::size).collect();
    let layout = layout_report(
        PageGeometry::A4_PORTRAIT,
        [sizes[0], sizes[1], sizes[2], sizes[3]],
        [sizes[4], sizes[5], sizes[6]],
    );
    tracing::debug!("PDF layout: {} page(s)", layout.pages.len());

    let header = PdfHeader {
        title: ctx.settings.pdf_title.clone(),
        subtitle: format!("Generated at: {}", display_date_time(generated_at)),
    };
    let bytes = render_pdf(&layout, &rasters, &header)?;

    Ok(ExportedFile {
        file_name: format!("relatorio_{}.pdf", file_date_stamp(generated_at)),
        content_type: CONTENT_TYPE_PDF,
        bytes,
    })
}

async fn capture(region: &dyn RenderRegion, scale: f32) -> Result<Raster, ReportError> {
    let wrap = |source| ReportError::Capture {
        region: region.name().to_string(),
        source,
    };
    let raster = region
        .capture_as_raster(scale, Rgb::WHITE)
        .await
        .map_err(wrap)?;
    raster.validate().map_err(wrap)?;
    tracing::debug!(
        "Captured {} at {}x{}",
        region.name(),
        raster.width,
        raster.height
    );
    Ok(raster)
}
