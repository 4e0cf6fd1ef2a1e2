use std::fs;
use std::io::Cursor;

use assert_cmd::Command;
use image::{DynamicImage, ImageBuffer, ImageOutputFormat, Rgb};
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("epi-report").unwrap()
}

fn chart_png() -> Vec<u8> {
    let buffer = ImageBuffer::from_fn(60, 40, |x, y| Rgb([(x * 4) as u8, (y * 6) as u8, 160]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(buffer)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("encode chart fixture");
    bytes
}

#[test]
fn help_lists_the_chart_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--chart"))
        .stdout(contains("--annotations"));
}

#[test]
fn an_empty_chart_value_is_rejected() {
    // clap refuses the empty value, so no report pipeline ever starts.
    cmd()
        .args(["all", "--chart", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("--chart"));
}

#[test]
fn generates_a_report_without_reaching_the_statistics_service() {
    if !epi_report::fonts::default_fonts_available() {
        eprintln!(
            "Skipping generates_a_report_without_reaching_the_statistics_service: bundled fonts missing. Set EPI_REPORT_FONTS_DIR or copy assets/fonts into the crate."
        );
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let chart = dir.path().join("chart.png");
    fs::write(&chart, chart_png()).unwrap();
    let out_dir = dir.path().join("out");

    // An unroutable base URL forces the degraded path without network access.
    cmd()
        .args([
            "de",
            "--chart",
            chart.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--base-url",
            "http://127.0.0.1:9/stats",
            "--timestamp",
            "2026-08-25 10:00",
        ])
        .assert()
        .success()
        .stdout(contains("has been saved."));

    let produced: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(produced.len(), 1);
    assert!(produced[0].starts_with("Report-de-"));
    assert!(produced[0].ends_with(".pdf"));
}
