//! # shield-report
//!
//! PDF forensic reports for JobShield scans.
//!
//! Rendering is split in two: [`layout`] composes the report sections and
//! flows them onto A4 pages, and the renderer draws the placed lines with
//! `printpdf`'s built-in Helvetica fonts. Text is sanitized to ASCII and
//! word-wrapped by estimated glyph width.

mod error;
pub mod layout;
mod render;
pub mod text;

pub use error::RenderError;
pub use render::{RenderedReport, render_report};
