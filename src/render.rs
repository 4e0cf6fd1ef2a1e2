//! Lowering of a [`DocumentDescription`] into a rendered PDF.
//!
//! This module owns the only rendering-facing code path.  It maps content
//! blocks onto `genpdf` elements, applies the style sheet that travels with
//! the document, honors per-block page break flags during the layout pass,
//! and streams the finished bytes into a caller-supplied writer.

use std::io::Write;
use std::path::Path;

use image::GenericImageView;

use genpdf::elements::{
    Break, FrameCellDecorator, Image, PageBreak, Paragraph, StyledElement, TableLayout,
};
use genpdf::error::{Context as _, Error};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins, Mm, PaperSize, Scale, SimplePageDecorator};

use crate::fonts;
use crate::model::{
    BlockBody, BlockStyle, ChartBlock, ChartImage, ContentBlock, DisplayTable,
    DocumentDescription, HorizontalAlignment, StyleId, StyleSheet,
};

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
const PAGE_MARGIN_MM: f64 = 10.0;
const CELL_PADDING_MM: f64 = 1.0;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn alignment(value: HorizontalAlignment) -> Alignment {
    match value {
        HorizontalAlignment::Left => Alignment::Left,
        HorizontalAlignment::Center => Alignment::Center,
        HorizontalAlignment::Right => Alignment::Right,
    }
}

fn text_style(rule: BlockStyle) -> Style {
    let mut style = Style::new();
    style.set_font_size(rule.font_size);
    if rule.bold {
        style.set_bold();
    }
    style
}

fn bottom_margin(rule: BlockStyle) -> Margins {
    Margins::trbl(
        mm_from_f64(0.0),
        mm_from_f64(0.0),
        mm_from_f64(rule.margin_bottom_mm),
        mm_from_f64(0.0),
    )
}

fn cell_padding() -> Margins {
    Margins::trbl(
        mm_from_f64(CELL_PADDING_MM / 2.0),
        mm_from_f64(CELL_PADDING_MM),
        mm_from_f64(CELL_PADDING_MM / 2.0),
        mm_from_f64(CELL_PADDING_MM),
    )
}

fn styled_paragraph(text: &str, rule: BlockStyle) -> StyledElement<Paragraph> {
    let mut paragraph = Paragraph::new(text);
    paragraph.set_alignment(alignment(rule.alignment));
    paragraph.styled(text_style(rule))
}

/// Loads the chart from in-memory bytes using the [`image`] crate with
/// descriptive errors.
fn decode_chart_from_bytes(bytes: &[u8]) -> Result<image::DynamicImage, Error> {
    image::load_from_memory(bytes).context("Failed to decode chart image from provided bytes")
}

/// Loads the chart from the given path using the [`image`] crate with
/// descriptive errors.
fn decode_chart_from_path(path: &Path) -> Result<image::DynamicImage, Error> {
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open chart image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine chart image format")?
        .decode()
        .with_context(|| format!("Failed to decode chart image file {}", path.display()))
}

fn decode_chart(source: &ChartImage) -> Result<image::DynamicImage, Error> {
    match source {
        ChartImage::Bytes(bytes) => decode_chart_from_bytes(bytes),
        ChartImage::Path(path) => decode_chart_from_path(path),
    }
}

/// Returns the scale factor that maps an image of `px_width` pixels onto
/// `desired_mm` millimetres, assuming the default print resolution.
fn chart_scale(px_width: u32, desired_mm: f64) -> f64 {
    let natural_mm = MM_PER_INCH * (px_width as f64) / DEFAULT_IMAGE_DPI;
    if natural_mm > f64::EPSILON {
        desired_mm / natural_mm
    } else {
        1.0
    }
}

fn chart_element(chart: &ChartBlock) -> Result<Image, Error> {
    let dynamic = decode_chart(chart.source())?;
    let (px_width, _) = dynamic.dimensions();
    let scale = chart_scale(px_width, chart.width_mm());

    let mut element = Image::from_dynamic_image(dynamic)?;
    element.set_alignment(alignment(chart.alignment()));
    element.set_scale(Scale::new(scale, scale));
    Ok(element)
}

fn table_layout(table: &DisplayTable, styles: &StyleSheet) -> Result<TableLayout, Error> {
    let mut layout = TableLayout::new(table.column_weights().to_vec());
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    for row in table.rows() {
        let mut builder = layout.row();
        for cell in row {
            let rule = styles.resolve(cell.style().unwrap_or(StyleId::Body));
            builder.push_element(styled_paragraph(cell.text(), rule).padded(cell_padding()));
        }
        builder.push()?;
    }

    Ok(layout)
}

fn push_block(
    doc: &mut genpdf::Document,
    block: &ContentBlock,
    styles: &StyleSheet,
) -> Result<(), Error> {
    let rule = styles.resolve(block.style());
    match block.body() {
        BlockBody::Heading(text) | BlockBody::Subheading(text) | BlockBody::TimestampLine(text) => {
            doc.push(styled_paragraph(text, rule).padded(bottom_margin(rule)));
        }
        BlockBody::Spacer => {
            doc.push(Break::new(1.0));
        }
        BlockBody::Table(table) => {
            doc.push(table_layout(table, styles)?.padded(bottom_margin(rule)));
        }
        BlockBody::Image(chart) => {
            doc.push(chart_element(chart)?.padded(bottom_margin(rule)));
        }
    }
    Ok(())
}

/// Renders document descriptions into PDF byte streams.
///
/// The renderer is stateless.  Fonts are resolved per render, so the same
/// instance stays valid across font directory changes in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    /// Creates a renderer with the standard page geometry.
    pub fn new() -> Self {
        Self
    }

    /// Renders `document` into `out`.
    ///
    /// Blocks are laid out in order on A4 paper.  A block flagged with a
    /// leading page break is preceded by an explicit break element, and the
    /// first heading doubles as the PDF title metadata.
    pub fn render_into<W: Write>(
        &self,
        document: &DocumentDescription,
        out: W,
    ) -> Result<(), Error> {
        let family = fonts::default_font_family()?;
        let mut doc = genpdf::Document::new(family);
        doc.set_paper_size(PaperSize::A4);

        if let Some(title) = document.blocks().iter().find_map(|block| match block.body() {
            BlockBody::Heading(text) => Some(text.clone()),
            _ => None,
        }) {
            doc.set_title(title);
        }

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
            mm_from_f64(PAGE_MARGIN_MM),
        ));
        doc.set_page_decorator(decorator);

        for block in document.blocks() {
            if block.page_break_before() {
                doc.push(PageBreak::new());
            }
            push_block(&mut doc, block, document.styles())?;
        }

        doc.render(out)
    }
}
