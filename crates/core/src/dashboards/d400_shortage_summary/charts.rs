//! Dashboard panels drawn straight into rasters for the PDF export

use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::dashboards::d400_shortage_summary::{ChartSlice, ShortageSummary};

use crate::reports::pdf::raster::{CaptureError, Raster, RenderRegion, Rgb};

const CARD_SIZE: (u32, u32) = (240, 110);
const CHART_SIZE: (u32, u32) = (600, 260);

const BORDER: Rgb = Rgb(226, 232, 240);
const INK: Rgb = Rgb(15, 23, 42);
const AXIS: Rgb = Rgb(148, 163, 184);
const FALLBACK_BAR: Rgb = Rgb(148, 163, 184);

/// Text and accent of one KPI card
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub accent: Rgb,
}

/// The four cards of the dashboard header
pub fn dashboard_kpis(
    summary: &ShortageSummary,
    record_count: usize,
    last_purchase: Option<NaiveDate>,
) -> [KpiCard; 4] {
    let top_index = summary
        .index_distribution
        .first()
        .map(|slice| slice.name.clone())
        .unwrap_or_else(|| "-".into());
    let last_purchase = last_purchase
        .map(|date| date.format("%d/%m/%y").to_string())
        .unwrap_or_else(|| "-".into());

    [
        KpiCard {
            title: "Total Shortages".into(),
            value: summary.total_quantity.to_string(),
            accent: Rgb(220, 38, 38),
        },
        KpiCard {
            title: "Registered Entries".into(),
            value: record_count.to_string(),
            accent: Rgb(5, 150, 105),
        },
        KpiCard {
            title: "Top Shortage".into(),
            value: top_index,
            accent: Rgb(217, 119, 6),
        },
        KpiCard {
            title: "Last Purchase".into(),
            value: last_purchase,
            accent: Rgb(37, 99, 235),
        },
    ]
}

/// KPI card rendered as a panel with its value in block digits
pub struct KpiCardRegion {
    name: String,
    card: KpiCard,
}

impl KpiCardRegion {
    pub fn new(name: impl Into<String>, card: KpiCard) -> Self {
        Self {
            name: name.into(),
            card,
        }
    }
}

#[async_trait]
impl RenderRegion for KpiCardRegion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn capture_as_raster(
        &self,
        scale: f32,
        background: Rgb,
    ) -> Result<Raster, CaptureError> {
        let (w, h) = (scaled(CARD_SIZE.0, scale), scaled(CARD_SIZE.1, scale));
        let mut raster = Raster::filled(w, h, background);
        frame(&mut raster, scaled(1, scale), BORDER);

        let pad = scaled(16, scale);
        raster.fill_rect(pad, pad, scaled(36, scale), scaled(36, scale), INK);
        raster.fill_rect(
            w.saturating_sub(pad + scaled(40, scale)),
            pad,
            scaled(40, scale),
            scaled(14, scale),
            self.card.accent,
        );
        draw_text(
            &mut raster,
            &self.card.value,
            pad,
            scaled(64, scale),
            scaled(6, scale),
            INK,
        );
        Ok(raster)
    }
}

/// Vertical bar chart, one bar per slice
pub struct BarChartRegion {
    name: String,
    slices: Vec<ChartSlice>,
}

impl BarChartRegion {
    pub fn new(name: impl Into<String>, slices: Vec<ChartSlice>) -> Self {
        Self {
            name: name.into(),
            slices,
        }
    }
}

#[async_trait]
impl RenderRegion for BarChartRegion {
    fn name(&self) -> &str {
        &self.name
    }

    async fn capture_as_raster(
        &self,
        scale: f32,
        background: Rgb,
    ) -> Result<Raster, CaptureError> {
        let (w, h) = (scaled(CHART_SIZE.0, scale), scaled(CHART_SIZE.1, scale));
        let mut raster = Raster::filled(w, h, background);
        frame(&mut raster, scaled(1, scale), BORDER);

        let pad = scaled(24, scale);
        let plot_w = w.saturating_sub(2 * pad);
        let plot_h = h.saturating_sub(2 * pad);
        let baseline = pad + plot_h;
        raster.fill_rect(pad, baseline, plot_w, scaled(2, scale), AXIS);

        let max = self.slices.iter().map(|s| s.value).max().unwrap_or(0);
        if self.slices.is_empty() || max == 0 {
            return Ok(raster);
        }

        let step = plot_w / self.slices.len() as u32;
        let bar_w = (step * 3 / 5).max(1);
        for (n, slice) in self.slices.iter().enumerate() {
            let bar_h = (plot_h as u64 * slice.value as u64 / max as u64) as u32;
            let x = pad + step * n as u32 + step.saturating_sub(bar_w) / 2;
            let color = Rgb::from_hex(&slice.color).unwrap_or(FALLBACK_BAR);
            raster.fill_rect(x, baseline - bar_h, bar_w, bar_h, color);
        }
        Ok(raster)
    }
}

/// Base size multiplied by the capture scale, at least one pixel
fn scaled(base: u32, scale: f32) -> u32 {
    ((base as f32 * scale).round() as u32).max(1)
}

fn frame(raster: &mut Raster, thickness: u32, color: Rgb) {
    let (w, h) = (raster.width, raster.height);
    raster.fill_rect(0, 0, w, thickness, color);
    raster.fill_rect(0, h.saturating_sub(thickness), w, thickness, color);
    raster.fill_rect(0, 0, thickness, h, color);
    raster.fill_rect(w.saturating_sub(thickness), 0, thickness, h, color);
}

/// 3x5 block glyph, one row per entry, high bit on the left
fn glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        _ => [0; 5],
    }
}

/// Draw `text` with its top-left corner at (x, y), `px` pixels per dot
fn draw_text(raster: &mut Raster, text: &str, x: u32, y: u32, px: u32, color: Rgb) {
    for (n, c) in text.chars().enumerate() {
        let left = x + n as u32 * 4 * px;
        for (row, bits) in glyph(c).into_iter().enumerate() {
            for col in 0..3u32 {
                if (bits >> (2 - col)) & 1 == 1 {
                    raster.fill_rect(left + col * px, y + row as u32 * px, px, px, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(name: &str, value: u32, color: &str) -> ChartSlice {
        ChartSlice {
            name: name.into(),
            value,
            percentage: value,
            color: color.into(),
        }
    }

    fn pixel(raster: &Raster, x: u32, y: u32) -> Rgb {
        let at = (y as usize * raster.width as usize + x as usize) * 3;
        Rgb(raster.pixels[at], raster.pixels[at + 1], raster.pixels[at + 2])
    }

    #[tokio::test]
    async fn test_card_size_follows_scale() {
        let region = KpiCardRegion::new(
            "total",
            KpiCard {
                title: "Total Shortages".into(),
                value: "8".into(),
                accent: Rgb(220, 38, 38),
            },
        );
        let raster = region.capture_as_raster(1.2, Rgb::WHITE).await.unwrap();
        assert_eq!((raster.width, raster.height), (288, 132));
        assert!(raster.validate().is_ok());
        assert_eq!(pixel(&raster, 0, 0), BORDER);
        assert_eq!(pixel(&raster, 30, 30), INK);
    }

    #[tokio::test]
    async fn test_tallest_bar_fills_plot() {
        let region = BarChartRegion::new(
            "index",
            vec![slice("1.59", 50, "#0ea5e9"), slice("1.56", 25, "not-a-color")],
        );
        let raster = region.capture_as_raster(1.0, Rgb::WHITE).await.unwrap();
        assert_eq!((raster.width, raster.height), CHART_SIZE);

        // First bar is centred in the first half of the plot and reaches the top
        let step = (600 - 48) / 2;
        let first_x = 24 + step / 2;
        assert_eq!(pixel(&raster, first_x, 25), Rgb(0x0e, 0xa5, 0xe9));
        // Second bar is half as tall and falls back to gray
        let second_x = 24 + step + step / 2;
        assert_eq!(pixel(&raster, second_x, 25), Rgb::WHITE);
        assert_eq!(pixel(&raster, second_x, 230), FALLBACK_BAR);
    }

    #[tokio::test]
    async fn test_empty_chart_still_renders() {
        let region = BarChartRegion::new("empty", Vec::new());
        let raster = region.capture_as_raster(1.0, Rgb::WHITE).await.unwrap();
        assert!(raster.validate().is_ok());
    }

    #[test]
    fn test_dashboard_kpis() {
        let summary = ShortageSummary {
            total_quantity: 8,
            index_distribution: vec![slice("1.59", 50, "#0ea5e9")],
            ..Default::default()
        };
        let cards = dashboard_kpis(&summary, 4, NaiveDate::from_ymd_opt(2023, 10, 25));
        assert_eq!(cards[0].value, "8");
        assert_eq!(cards[1].value, "4");
        assert_eq!(cards[2].value, "1.59");
        assert_eq!(cards[3].value, "25/10/23");

        let empty = dashboard_kpis(&ShortageSummary::default(), 0, None);
        assert_eq!(empty[2].value, "-");
        assert_eq!(empty[3].value, "-");
    }
}
