//! Rendering smoke tests.  Skipped when the bundled fonts are not installed.

mod common;

use epi_report::fonts;
use epi_report::model::{
    ChartBlock, ChartImage, ContentBlock, DisplayTable, DocumentDescription, TableCell,
};
use epi_report::render::PdfRenderer;

fn render(document: &DocumentDescription) -> Vec<u8> {
    let mut bytes = Vec::new();
    PdfRenderer::new()
        .render_into(document, &mut bytes)
        .expect("render document");
    bytes
}

fn minimal_document() -> DocumentDescription {
    let mut document = DocumentDescription::new();
    document.push(ContentBlock::heading("Sample Report"));
    document.push(ContentBlock::timestamp_line("2026-08-25 10:00"));
    document
}

#[test]
fn renders_non_empty_output() {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping renders_non_empty_output: bundled fonts missing. Set EPI_REPORT_FONTS_DIR or copy assets/fonts into the crate."
        );
        return;
    }

    let bytes = render(&minimal_document());
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn every_block_kind_renders() {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping every_block_kind_renders: bundled fonts missing. Set EPI_REPORT_FONTS_DIR or copy assets/fonts into the crate."
        );
        return;
    }

    let table = DisplayTable::new(vec![1, 1])
        .with_row(vec![
            TableCell::Plain("Cases".to_string()),
            TableCell::Plain("1,234".to_string()),
        ])
        .with_row(vec![
            TableCell::Plain("Deaths".to_string()),
            TableCell::Plain("n/a".to_string()),
        ]);

    let mut document = minimal_document();
    document.push(ContentBlock::spacer());
    document.push(ContentBlock::table(table));
    document.push(ContentBlock::subheading("Case Trend"));
    document.push(ContentBlock::image(ChartBlock::new(ChartImage::from_bytes(
        common::chart_png(),
    ))));

    let bytes = render(&document);
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn page_break_flag_grows_the_output() {
    if !fonts::default_fonts_available() {
        eprintln!(
            "Skipping page_break_flag_grows_the_output: bundled fonts missing. Set EPI_REPORT_FONTS_DIR or copy assets/fonts into the crate."
        );
        return;
    }

    let single_page = render(&minimal_document());

    let mut broken = minimal_document();
    broken.push(ContentBlock::subheading("Annotations").with_page_break());
    let two_pages = render(&broken);

    // The forced break adds a second page object on top of the extra text.
    assert!(two_pages.len() > single_page.len());
}
