//! Page geometry of the dashboard PDF, in millimetres
//!
//! Rows, top to bottom: two KPI cards, two KPI cards, a full-width chart,
//! a full-width chart, and a last full-width chart that is squashed or
//! moved to a new page when the first page runs out.

/// Fixed page measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    /// Space between cards and between rows
    pub gutter: f32,
}

impl PageGeometry {
    pub const A4_PORTRAIT: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin: 10.0,
        gutter: 3.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Width of one card in a two-card row
    pub fn card_width(&self) -> f32 {
        (self.content_width() - self.gutter) / 2.0
    }
}

/// Baseline of the title line
pub const TITLE_Y: f32 = 12.0;
/// Advance after the title line
pub const TITLE_ADVANCE: f32 = 5.0;
/// Advance after the "Generated at" line
pub const SUBTITLE_ADVANCE: f32 = 6.0;
/// Below this much free space the last chart goes to a new page
pub const MIN_SQUASH_HEIGHT: f32 = 30.0;

/// Pixel size of a captured raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Drawn height at `width` with the aspect ratio kept
    fn height_at(&self, width: f32) -> f32 {
        self.height as f32 * width / self.width as f32
    }
}

/// Where one captured image lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the image in capture order
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdfPage {
    pub images: Vec<Placement>,
}

/// Full document layout, header on the first page
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub geometry: PageGeometry,
    pub title_y: f32,
    pub subtitle_y: f32,
    pub pages: Vec<PdfPage>,
}

/// Places images one row at a time, advancing a vertical cursor
#[derive(Debug)]
pub struct LayoutBuilder {
    geometry: PageGeometry,
    cursor: f32,
    slot: usize,
    layout: PdfLayout,
}

impl LayoutBuilder {
    pub fn new(geometry: PageGeometry) -> Self {
        let title_y = TITLE_Y;
        let subtitle_y = title_y + TITLE_ADVANCE;
        Self {
            geometry,
            cursor: subtitle_y + SUBTITLE_ADVANCE,
            slot: 0,
            layout: PdfLayout {
                geometry,
                title_y,
                subtitle_y,
                pages: vec![PdfPage::default()],
            },
        }
    }

    /// Current vertical position
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Two cards side by side; the row is as tall as the taller card
    pub fn place_pair(&mut self, left: RasterSize, right: RasterSize) {
        let g = self.geometry;
        let width = g.card_width();
        let left_h = left.height_at(width);
        let right_h = right.height_at(width);

        self.push(g.margin, self.cursor, width, left_h);
        self.push(g.margin + width + g.gutter, self.cursor, width, right_h);
        self.cursor += left_h.max(right_h) + g.gutter;
    }

    /// One image across the content width
    pub fn place_full(&mut self, size: RasterSize) {
        let g = self.geometry;
        let width = g.content_width();
        let height = size.height_at(width);

        self.push(g.margin, self.cursor, width, height);
        self.cursor += height + g.gutter;
    }

    /// Final image: natural size if it fits, squashed into the remaining
    /// space when that is still worth it, otherwise on a new page
    pub fn place_last(&mut self, size: RasterSize) {
        let g = self.geometry;
        let width = g.content_width();
        let natural = size.height_at(width);
        let remaining = g.height - self.cursor - g.margin;

        if natural <= remaining {
            self.push(g.margin, self.cursor, width, natural);
            self.cursor += natural;
        } else if remaining > MIN_SQUASH_HEIGHT {
            self.push(g.margin, self.cursor, width, remaining);
            self.cursor += remaining;
        } else {
            self.layout.pages.push(PdfPage::default());
            self.cursor = g.margin;
            self.push(g.margin, self.cursor, width, natural);
            self.cursor += natural;
        }
    }

    pub fn finish(self) -> PdfLayout {
        self.layout
    }

    fn push(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let placement = Placement {
            slot: self.slot,
            x,
            y,
            width,
            height,
        };
        self.slot += 1;
        if let Some(page) = self.layout.pages.last_mut() {
            page.images.push(placement);
        }
    }
}

/// Layout of four KPI cards followed by three charts, in capture order
pub fn layout_report(
    geometry: PageGeometry,
    kpis: [RasterSize; 4],
    charts: [RasterSize; 3],
) -> PdfLayout {
    let mut builder = LayoutBuilder::new(geometry);
    builder.place_pair(kpis[0], kpis[1]);
    builder.place_pair(kpis[2], kpis[3]);
    builder.place_full(charts[0]);
    builder.place_full(charts[1]);
    builder.place_last(charts[2]);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const A4: PageGeometry = PageGeometry::A4_PORTRAIT;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_geometry() {
        assert!(close(A4.content_width(), 190.0));
        assert!(close(A4.card_width(), 93.5));
    }

    #[test]
    fn test_header_leaves_cursor_at_23() {
        let builder = LayoutBuilder::new(A4);
        assert!(close(builder.cursor(), 23.0));
        let layout = builder.finish();
        assert!(close(layout.title_y, 12.0));
        assert!(close(layout.subtitle_y, 17.0));
    }

    #[test]
    fn test_pair_advances_by_taller_card() {
        let mut builder = LayoutBuilder::new(A4);
        // 187x100 px at 93.5 mm wide is 50 mm tall; 187x50 is 25 mm
        builder.place_pair(RasterSize::new(187, 100), RasterSize::new(187, 50));
        assert!(close(builder.cursor(), 23.0 + 50.0 + 3.0));

        let layout = builder.finish();
        let images = &layout.pages[0].images;
        assert_eq!(images.len(), 2);
        assert!(close(images[0].x, 10.0));
        assert!(close(images[1].x, 10.0 + 93.5 + 3.0));
        assert!(close(images[1].height, 25.0));
        assert!(close(images[1].y, 23.0));
    }

    #[test]
    fn test_last_chart_fits_at_natural_size() {
        let kpi = RasterSize::new(187, 40); // 20 mm
        let chart = RasterSize::new(190, 40); // 40 mm
        let layout = layout_report(A4, [kpi; 4], [chart; 3]);

        assert_eq!(layout.pages.len(), 1);
        let images = &layout.pages[0].images;
        assert_eq!(images.len(), 7);
        // 23 + 23 + 23 + 43 + 43
        let last = images[6];
        assert_eq!(last.slot, 6);
        assert!(close(last.y, 155.0));
        assert!(close(last.height, 40.0));
    }

    #[test]
    fn test_last_chart_is_squashed_into_remaining_space() {
        let kpi = RasterSize::new(187, 40); // 20 mm
        let chart = RasterSize::new(190, 80); // 80 mm
        let layout = layout_report(A4, [kpi; 4], [chart; 3]);

        // Cursor before the last chart: 23 + 23 + 23 + 83 + 83 = 235
        assert_eq!(layout.pages.len(), 1);
        let last = layout.pages[0].images[6];
        assert!(close(last.y, 235.0));
        assert!(close(last.height, 297.0 - 235.0 - 10.0));
    }

    #[test]
    fn test_last_chart_moves_to_new_page() {
        let kpi = RasterSize::new(187, 60); // 30 mm
        let chart = RasterSize::new(190, 90); // 90 mm
        let layout = layout_report(A4, [kpi; 4], [chart; 3]);

        // Cursor before the last chart: 23 + 33 + 33 + 93 + 93 = 275
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].images.len(), 6);
        let last = layout.pages[1].images[0];
        assert_eq!(last.slot, 6);
        assert!(close(last.y, 10.0));
        assert!(close(last.height, 90.0));
    }

    #[test]
    fn test_last_chart_filling_the_page_exactly_keeps_natural_size() {
        let kpi = RasterSize::new(187, 40); // 20 mm
        let chart = RasterSize::new(190, 80); // 80 mm
        let last_chart = RasterSize::new(190, 52); // 52 mm, the space left
        let layout = layout_report(A4, [kpi; 4], [chart, chart, last_chart]);

        assert_eq!(layout.pages.len(), 1);
        let last = layout.pages[0].images[6];
        assert!(close(last.y, 235.0));
        assert!(close(last.height, 52.0));
        assert!(close(last.y + last.height, 297.0 - 10.0));
    }

    #[test]
    fn test_exactly_min_squash_height_left_moves_to_new_page() {
        let kpi = RasterSize::new(187, 40); // 20 mm
        let chart = RasterSize::new(190, 91); // 91 mm
        let last_chart = RasterSize::new(190, 40); // 40 mm
        let layout = layout_report(A4, [kpi; 4], [chart, chart, last_chart]);

        // Cursor before the last chart: 23 + 23 + 23 + 94 + 94 = 257,
        // which leaves exactly MIN_SQUASH_HEIGHT
        assert_eq!(layout.pages.len(), 2);
        assert_eq!(layout.pages[0].images.len(), 6);
        let last = layout.pages[1].images[0];
        assert_eq!(last.slot, 6);
        assert!(close(last.y, 10.0));
        assert!(close(last.height, 40.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let kpis = [
            RasterSize::new(300, 120),
            RasterSize::new(310, 118),
            RasterSize::new(290, 130),
            RasterSize::new(305, 121),
        ];
        let charts = [
            RasterSize::new(900, 300),
            RasterSize::new(900, 420),
            RasterSize::new(880, 500),
        ];
        assert_eq!(layout_report(A4, kpis, charts), layout_report(A4, kpis, charts));
    }
}
