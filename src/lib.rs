//! Core entry point for the epi_report crate.
//!
//! The crate builds COVID-19 situation reports: statistics fetched from a
//! remote service and annotations read from a local store are composed into
//! a declarative document description and rendered to a paginated PDF.

pub mod annotations;
pub mod assembler;
pub mod config;
pub mod error;
pub mod fonts;
pub mod format;
pub mod localize;
pub mod model;
pub mod render;
pub mod stats;
