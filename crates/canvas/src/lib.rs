//! Paginated PDF canvas backend.
//!
//! This crate provides [`PdfCanvas`], a page-layout surface with a top-down
//! cursor, automatic page breaks, and per-page header/footer chrome, plus a
//! buffered `lopdf` writer that assembles the final document. Positions and
//! cell sizes are in millimetres; font sizes are in points.

mod canvas;
mod chrome;
mod encoding;
mod error;
mod metrics;
mod writer;

pub use canvas::{Ln, PageConfig, PdfCanvas};
pub use chrome::PageChrome;
pub use encoding::encode_win_ansi;
pub use error::CanvasError;
pub use metrics::text_advance;
pub use writer::PdfWriter;
