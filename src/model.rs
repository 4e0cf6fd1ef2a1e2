//! Data structures describing the logical content of a report document.
//!
//! The types in this module form a render-ready model that mirrors the
//! building blocks expected by `genpdf`.  They intentionally avoid referencing
//! the rendering crate directly so a document can be assembled and inspected
//! in tests before any layout work happens.

use std::path::PathBuf;

/// Rendered width of the chart image in millimetres.
pub const CHART_WIDTH_MM: f64 = 120.0;

/// Metadata that controls how textual and visual elements are aligned once
/// they are converted into [`genpdf::elements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// Style labels attached to content blocks and table cells.
///
/// Blocks never carry raw styling values.  Each label resolves to a concrete
/// font size, weight and alignment through the [`StyleSheet`] that travels
/// with the document, so restyling a report never touches block construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleId {
    /// The document title heading.
    Title,
    /// The generation timestamp line shown under the title.
    Timestamp,
    /// Section subheadings such as the status and annotation headers.
    Subheading,
    /// Bold header cells in tables.
    TableHeader,
    /// Regular body text and table cells.
    Body,
}

/// Resolved layout rule for a single [`StyleId`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockStyle {
    /// Font size in points.
    pub font_size: u8,
    /// Whether the text is set in the bold face.
    pub bold: bool,
    /// Horizontal alignment of the block.
    pub alignment: HorizontalAlignment,
    /// Vertical gap inserted after the block, in millimetres.
    pub margin_bottom_mm: f64,
}

/// Mapping from style labels to layout rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSheet {
    title: BlockStyle,
    timestamp: BlockStyle,
    subheading: BlockStyle,
    table_header: BlockStyle,
    body: BlockStyle,
}

impl StyleSheet {
    /// Returns the layout rule registered for the given label.
    pub fn resolve(&self, id: StyleId) -> BlockStyle {
        match id {
            StyleId::Title => self.title,
            StyleId::Timestamp => self.timestamp,
            StyleId::Subheading => self.subheading,
            StyleId::TableHeader => self.table_header,
            StyleId::Body => self.body,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            title: BlockStyle {
                font_size: 22,
                bold: true,
                alignment: HorizontalAlignment::Center,
                margin_bottom_mm: 4.0,
            },
            timestamp: BlockStyle {
                font_size: 10,
                bold: false,
                alignment: HorizontalAlignment::Center,
                margin_bottom_mm: 2.0,
            },
            subheading: BlockStyle {
                font_size: 14,
                bold: true,
                alignment: HorizontalAlignment::Left,
                margin_bottom_mm: 2.0,
            },
            table_header: BlockStyle {
                font_size: 11,
                bold: true,
                alignment: HorizontalAlignment::Left,
                margin_bottom_mm: 0.0,
            },
            body: BlockStyle {
                font_size: 11,
                bold: false,
                alignment: HorizontalAlignment::Left,
                margin_bottom_mm: 2.0,
            },
        }
    }
}

/// Representation of chart image sources accepted by the assembler.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartImage {
    /// Encoded image data (PNG or JPEG) held in memory.
    Bytes(Vec<u8>),
    /// Image referenced by a file path.
    Path(PathBuf),
}

impl ChartImage {
    /// Creates an in-memory chart from encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Creates a chart sourced from an image file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// Returns `true` when the handle references no content at all.
    ///
    /// An empty byte buffer and an empty path both count as missing; neither
    /// can ever decode into an image.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Path(path) => path.as_os_str().is_empty(),
        }
    }
}

/// The chart image together with its fixed display geometry.
///
/// Every report shows the chart at the same physical width so documents for
/// different targets line up when printed side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBlock {
    source: ChartImage,
    width_mm: f64,
    alignment: HorizontalAlignment,
}

impl ChartBlock {
    /// Creates a chart block with the standard report geometry.
    pub fn new(source: ChartImage) -> Self {
        Self {
            source,
            width_mm: CHART_WIDTH_MM,
            alignment: HorizontalAlignment::Center,
        }
    }

    /// Returns the chart image source.
    pub fn source(&self) -> &ChartImage {
        &self.source
    }

    /// Returns the rendered width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Returns the configured alignment.
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }
}

/// A single table cell, either plain text or text tagged with a style label.
#[derive(Clone, Debug, PartialEq)]
pub enum TableCell {
    /// Body text rendered with the default cell style.
    Plain(String),
    /// Text rendered with an explicit style label.
    Styled(String, StyleId),
}

impl TableCell {
    /// Returns the textual content of the cell.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Styled(text, _) => text,
        }
    }

    /// Returns the explicit style label, if any.
    pub fn style(&self) -> Option<StyleId> {
        match self {
            Self::Plain(_) => None,
            Self::Styled(_, style) => Some(*style),
        }
    }
}

/// A render-ready row and column structure.
///
/// The table is distinct from the raw records it is derived from: rows hold
/// already formatted display text, and the column weights describe relative
/// widths in the same unit-less terms `genpdf` table layouts use.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayTable {
    column_weights: Vec<usize>,
    rows: Vec<Vec<TableCell>>,
}

impl DisplayTable {
    /// Creates an empty table with the given relative column widths.
    pub fn new(column_weights: Vec<usize>) -> Self {
        Self {
            column_weights,
            rows: Vec::new(),
        }
    }

    /// Returns the relative column widths.
    pub fn column_weights(&self) -> &[usize] {
        &self.column_weights
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }

    /// Appends a row to the table.
    pub fn push_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Appends a row and returns the updated table.
    pub fn with_row(mut self, row: Vec<TableCell>) -> Self {
        self.rows.push(row);
        self
    }
}

/// Payload carried by a [`ContentBlock`].
#[derive(Clone, Debug, PartialEq)]
pub enum BlockBody {
    /// The document title.
    Heading(String),
    /// A section subheading.
    Subheading(String),
    /// The caller-supplied generation timestamp.
    TimestampLine(String),
    /// A blank separator line.
    Spacer,
    /// A derived display table.
    Table(DisplayTable),
    /// The chart image.
    Image(ChartBlock),
}

/// One discrete unit of the document description.
///
/// Page breaks are a structural property of the block they precede rather
/// than a standalone block, so reordering or filtering blocks can never strand
/// a break away from the content it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentBlock {
    body: BlockBody,
    style: StyleId,
    page_break_before: bool,
}

impl ContentBlock {
    /// Creates a block from a body and a style label.
    pub fn new(body: BlockBody, style: StyleId) -> Self {
        Self {
            body,
            style,
            page_break_before: false,
        }
    }

    /// Convenience helper for the document title heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(BlockBody::Heading(text.into()), StyleId::Title)
    }

    /// Convenience helper for a section subheading.
    pub fn subheading(text: impl Into<String>) -> Self {
        Self::new(BlockBody::Subheading(text.into()), StyleId::Subheading)
    }

    /// Convenience helper for the generation timestamp line.
    pub fn timestamp_line(text: impl Into<String>) -> Self {
        Self::new(BlockBody::TimestampLine(text.into()), StyleId::Timestamp)
    }

    /// Convenience helper for a blank separator line.
    pub fn spacer() -> Self {
        Self::new(BlockBody::Spacer, StyleId::Body)
    }

    /// Convenience helper for a table block.
    pub fn table(table: DisplayTable) -> Self {
        Self::new(BlockBody::Table(table), StyleId::Body)
    }

    /// Convenience helper for the chart image block.
    pub fn image(chart: ChartBlock) -> Self {
        Self::new(BlockBody::Image(chart), StyleId::Body)
    }

    /// Requests a page break before this block and returns the updated block.
    pub fn with_page_break(mut self) -> Self {
        self.page_break_before = true;
        self
    }

    /// Returns the block payload.
    pub fn body(&self) -> &BlockBody {
        &self.body
    }

    /// Returns the style label attached to the block.
    pub fn style(&self) -> StyleId {
        self.style
    }

    /// Returns whether a page break precedes this block.
    pub fn page_break_before(&self) -> bool {
        self.page_break_before
    }
}

/// The sole artifact handed to the renderer: ordered content blocks plus the
/// style table they reference.
///
/// Blocks are append-only.  Once pushed they are never reordered or removed,
/// which keeps the visual order identical to construction order.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentDescription {
    blocks: Vec<ContentBlock>,
    styles: StyleSheet,
}

impl DocumentDescription {
    /// Creates an empty document with the default style sheet.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            styles: StyleSheet::default(),
        }
    }

    /// Appends a block to the end of the document.
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Returns the blocks in insertion order.
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Returns the style sheet used to resolve block styles.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }
}

impl Default for DocumentDescription {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartImage, ContentBlock, DocumentDescription, StyleId, StyleSheet};

    #[test]
    fn blocks_keep_insertion_order() {
        let mut document = DocumentDescription::new();
        document.push(ContentBlock::heading("Title"));
        document.push(ContentBlock::timestamp_line("2026-08-25 10:00"));
        document.push(ContentBlock::spacer());

        let styles: Vec<_> = document.blocks().iter().map(|block| block.style()).collect();
        assert_eq!(styles, vec![StyleId::Title, StyleId::Timestamp, StyleId::Body]);
    }

    #[test]
    fn page_break_defaults_to_false() {
        let block = ContentBlock::subheading("Status");
        assert!(!block.page_break_before());
        assert!(block.with_page_break().page_break_before());
    }

    #[test]
    fn empty_handles_are_detected() {
        assert!(ChartImage::from_bytes(Vec::new()).is_empty());
        assert!(ChartImage::from_path("").is_empty());
        assert!(!ChartImage::from_bytes(vec![0x89]).is_empty());
        assert!(!ChartImage::from_path("chart.png").is_empty());
    }

    #[test]
    fn style_sheet_resolves_distinct_rules() {
        let styles = StyleSheet::default();
        let title = styles.resolve(StyleId::Title);
        let body = styles.resolve(StyleId::Body);

        assert!(title.bold);
        assert!(title.font_size > body.font_size);
        assert!(styles.resolve(StyleId::TableHeader).bold);
    }
}
