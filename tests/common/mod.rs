#![allow(dead_code)]

use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageOutputFormat, Rgb};

use epi_report::stats::StatisticsRecord;

/// Renders a small gradient PNG usable as a chart fixture.
pub fn chart_png() -> Vec<u8> {
    let width = 120u32;
    let height = 80u32;
    let buffer = ImageBuffer::from_fn(width, height, |x, y| {
        let horizontal = (x * 255 / (width - 1)) as u8;
        let vertical = (y * 255 / (height - 1)) as u8;
        Rgb([horizontal, vertical, 160])
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("encode chart fixture");
    bytes
}

/// A fully populated statistics record with recognizable values.
pub fn sample_record() -> StatisticsRecord {
    StatisticsRecord {
        population: Some(7_800_000_000),
        active: Some(1_000),
        critical: Some(50),
        recovered: Some(900),
        cases: Some(2_000),
        deaths: Some(30),
        tests: Some(500_000),
    }
}
