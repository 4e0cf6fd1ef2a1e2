//! The report assembler: fetch, derive, compose, render, persist.
//!
//! [`ReportAssembler`] drives one report build per call.  It validates the
//! chart handle, pulls statistics and annotations through injectable seams,
//! derives display tables from the raw numbers, composes the block sequence
//! in its fixed order, and hands the finished description to the renderer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use log::{error, info};

use crate::annotations::{AnnotationEntry, AnnotationStore, JsonAnnotationStore, MemoryAnnotationStore};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::format::{count_or_absent, ANNOTATION_TIME_FORMAT};
use crate::localize::{EnglishCountryNames, Localizer};
use crate::model::{
    ChartBlock, ChartImage, ContentBlock, DisplayTable, DocumentDescription, StyleId, TableCell,
};
use crate::render::PdfRenderer;
use crate::stats::{HttpStatisticsSource, StatisticsRecord, StatisticsSource};

/// Title heading shown at the top of every report.
const REPORT_TITLE: &str = "COVID-19 Report";
/// Subheading above the status table.
const STATUS_HEADING: &str = "Status";
/// Subheading above the chart image.
const CHART_HEADING: &str = "Case Trend";
/// Subheading that opens the annotation section on a fresh page.
const ANNOTATIONS_HEADING: &str = "Annotations";

/// `chrono` format string for the file-naming timestamp.
const FILE_TOKEN_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Assembles one PDF situation report per [`assemble`][Self::assemble] call.
///
/// The external collaborators are trait objects, so tests can swap the
/// network and the annotation file for in-memory fakes while exercising the
/// real derivation and composition logic.
pub struct ReportAssembler {
    config: ReportConfig,
    statistics: Box<dyn StatisticsSource>,
    annotations: Box<dyn AnnotationStore>,
    localizer: Box<dyn Localizer>,
    renderer: PdfRenderer,
}

impl ReportAssembler {
    /// Creates an assembler with the default collaborators wired from `config`.
    ///
    /// Statistics come from the HTTP service named in the config.  The
    /// annotation store reads the configured JSON file, or stays empty when
    /// no file is configured.
    pub fn new(config: ReportConfig) -> Self {
        let statistics = Box::new(HttpStatisticsSource::new(
            config.base_url.clone(),
            config.request_timeout,
        ));
        let annotations: Box<dyn AnnotationStore> = match &config.annotations_file {
            Some(path) => Box::new(JsonAnnotationStore::new(path)),
            None => Box::new(MemoryAnnotationStore::new()),
        };

        Self {
            config,
            statistics,
            annotations,
            localizer: Box::new(EnglishCountryNames),
            renderer: PdfRenderer::new(),
        }
    }

    /// Replaces the statistics source and returns the updated assembler.
    pub fn with_statistics_source(mut self, source: Box<dyn StatisticsSource>) -> Self {
        self.statistics = source;
        self
    }

    /// Replaces the annotation store and returns the updated assembler.
    pub fn with_annotation_store(mut self, store: Box<dyn AnnotationStore>) -> Self {
        self.annotations = store;
        self
    }

    /// Replaces the localizer and returns the updated assembler.
    pub fn with_localizer(mut self, localizer: Box<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Builds, renders and writes one report, returning the output path.
    ///
    /// `timestamp` is the display timestamp shown under the title; the file
    /// name carries its own timestamp taken at write time.  An empty chart
    /// handle aborts before any fetch with [`ReportError::MissingChart`].  A
    /// failed statistics fetch degrades the document instead of failing it;
    /// only render and write problems surface as errors.
    pub fn assemble(
        &self,
        timestamp: &str,
        target: &str,
        chart: ChartImage,
    ) -> Result<PathBuf, ReportError> {
        if chart.is_empty() {
            return Err(ReportError::MissingChart);
        }

        let statistics = self.statistics.fetch(target);
        let annotations = self.annotations.annotations_for(target);
        let document =
            self.build_document(timestamp, target, statistics.as_ref(), &annotations, &chart);

        let path = self.output_path(target);
        match self.persist(&document, &path) {
            Ok(()) => {
                info!("{} has been saved.", path.display());
                Ok(path)
            }
            Err(err) => {
                error!("report for '{target}' was not saved: {err:?}");
                Err(err)
            }
        }
    }

    /// Composes the content blocks for one report in their fixed order.
    ///
    /// The base sequence is title, timestamp line, spacer, status
    /// subheading, chart subheading and chart image.  A successful fetch adds
    /// the identity table after the spacer and the status table after its
    /// subheading.  One or more annotations add the page-break-marked
    /// annotation subheading and the annotation table at the end.
    pub fn build_document(
        &self,
        timestamp: &str,
        target: &str,
        statistics: Option<&StatisticsRecord>,
        annotations: &[AnnotationEntry],
        chart: &ChartImage,
    ) -> DocumentDescription {
        let mut document = DocumentDescription::new();

        document.push(ContentBlock::heading(REPORT_TITLE));
        document.push(ContentBlock::timestamp_line(timestamp));
        document.push(ContentBlock::spacer());

        if let Some(record) = statistics {
            document.push(ContentBlock::table(self.identity_table(target, record)));
        }

        document.push(ContentBlock::subheading(STATUS_HEADING));
        if let Some(record) = statistics {
            document.push(ContentBlock::table(status_table(record)));
        }

        document.push(ContentBlock::subheading(CHART_HEADING));
        document.push(ContentBlock::image(ChartBlock::new(chart.clone())));

        if !annotations.is_empty() {
            document.push(ContentBlock::subheading(ANNOTATIONS_HEADING).with_page_break());
            document.push(ContentBlock::table(annotation_table(annotations)));
        }

        document
    }

    fn identity_table(&self, target: &str, record: &StatisticsRecord) -> DisplayTable {
        let name = self
            .localizer
            .translate(target)
            .unwrap_or_else(|| target.to_string());

        DisplayTable::new(vec![1, 1])
            .with_row(vec![
                TableCell::Styled("Country".to_string(), StyleId::TableHeader),
                TableCell::Styled("Population".to_string(), StyleId::TableHeader),
            ])
            .with_row(vec![
                TableCell::Plain(name),
                TableCell::Plain(count_or_absent(record.population)),
            ])
    }

    fn output_path(&self, target: &str) -> PathBuf {
        let token = Utc::now().format(FILE_TOKEN_FORMAT);
        self.config
            .output_dir
            .join(format!("Report-{target}-{token}.pdf"))
    }

    fn persist(
        &self,
        document: &DocumentDescription,
        path: &std::path::Path,
    ) -> Result<(), ReportError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.renderer.render_into(document, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn status_table(record: &StatisticsRecord) -> DisplayTable {
    let rows = [
        ("Active", record.active),
        ("Critical", record.critical),
        ("Recovered", record.recovered),
        ("Cases", record.cases),
        ("Deaths", record.deaths),
        ("Tests", record.tests),
    ];

    let mut table = DisplayTable::new(vec![1, 1]);
    for (label, value) in rows {
        table.push_row(vec![
            TableCell::Plain(label.to_string()),
            TableCell::Plain(count_or_absent(value)),
        ]);
    }
    table
}

fn annotation_table(entries: &[AnnotationEntry]) -> DisplayTable {
    let mut table = DisplayTable::new(vec![1, 2]).with_row(vec![
        TableCell::Styled("Date/Time".to_string(), StyleId::TableHeader),
        TableCell::Styled("Comment".to_string(), StyleId::TableHeader),
    ]);

    for entry in entries {
        table.push_row(vec![
            TableCell::Plain(entry.datetime.format(ANNOTATION_TIME_FORMAT).to_string()),
            TableCell::Plain(entry.text.clone()),
        ]);
    }
    table
}
