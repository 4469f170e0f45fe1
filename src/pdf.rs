use std::io::BufWriter;

use printpdf::*;

use crate::error::{ReportError, Result};
use crate::fmt::summary_rows;
use crate::report::Report;

// A4 dimensions (mm)
const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN_TOP: f32 = 25.0;
const MARGIN_LEFT: f32 = 25.0;
const ROW_H: f32 = 7.0;
const CELL_PAD: f32 = 2.0;
const FONT_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 18.0;
const SUBTITLE_SIZE: f32 = 10.0;

// Label and value column widths (mm)
const COLS: [f32; 2] = [49.4, 84.7];

fn grid_color() -> Color {
    // #E5E7EB
    Color::Rgb(Rgb::new(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0, None))
}

struct PdfWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    y: f32,
}

impl PdfWriter {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;
        Ok(Self {
            doc,
            font,
            font_bold,
            page,
            layer,
            y: MARGIN_TOP,
        })
    }

    fn current_layer(&self) -> PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer)
    }

    /// Text with its baseline at `y` mm from the top of the page.
    fn text_at(&self, s: &str, x: f32, y: f32, size: f32, bold: bool) {
        let font = if bold { &self.font_bold } else { &self.font };
        self.current_layer()
            .use_text(s, size, Mm(x), Mm(PAGE_H - y), font);
    }

    fn line(&self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let layer = self.current_layer();
        layer.set_outline_color(grid_color());
        layer.set_outline_thickness(0.25);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(PAGE_H - y1)), false),
                (Point::new(Mm(x2), Mm(PAGE_H - y2)), false),
            ],
            is_closed: false,
        });
    }

    fn header(&mut self, title: &str, subtitle: &str) {
        self.text_at(title, MARGIN_LEFT, self.y, TITLE_SIZE, true);
        self.y += 9.0;
        self.text_at(subtitle, MARGIN_LEFT, self.y, SUBTITLE_SIZE, false);
        self.y += 5.0;
        let ts = chrono::Local::now()
            .format("Generated %Y-%m-%d %H:%M")
            .to_string();
        self.text_at(&ts, MARGIN_LEFT, self.y, 8.0, false);
        // spacer below the header block
        self.y += 8.0;
    }

    fn grid_table(&mut self, rows: &[(&str, String)]) {
        let width: f32 = COLS.iter().sum();
        let top = self.y;
        for (label, value) in rows {
            self.line(MARGIN_LEFT, self.y, MARGIN_LEFT + width, self.y);
            let baseline = self.y + ROW_H - CELL_PAD - 0.5;
            self.text_at(label, MARGIN_LEFT + CELL_PAD, baseline, FONT_SIZE, false);
            self.text_at(value, MARGIN_LEFT + COLS[0] + CELL_PAD, baseline, FONT_SIZE, false);
            self.y += ROW_H;
        }
        self.line(MARGIN_LEFT, self.y, MARGIN_LEFT + width, self.y);

        let mut x = MARGIN_LEFT;
        self.line(x, top, x, self.y);
        for w in COLS {
            x += w;
            self.line(x, top, x, self.y);
        }
    }

    fn to_bytes(self) -> Result<Vec<u8>> {
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| ReportError::Pdf(format!("{e:?}")))?;
        buf.into_inner().map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

/// Render the one-page KPI report.
pub fn render_report(report: &Report) -> Result<Vec<u8>> {
    let mut pdf = PdfWriter::new(&format!("{} - Annual report", report.organization))?;
    pdf.header(&report.organization, &report.period);
    pdf.grid_table(&summary_rows(&report.kpis));
    let bytes = pdf.to_bytes()?;
    tracing::debug!(bytes = bytes.len(), "rendered PDF");
    Ok(bytes)
}
