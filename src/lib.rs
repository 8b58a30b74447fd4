//! Dark-photon exclusion limit comparison plotter.
//!
//! A linear pipeline: load seven fixed two-column limit files, rescale
//! the Dark SUSY curve from log10(ε²) to ε, and render everything as a
//! log-log comparison chart with filled exclusion regions, a manual
//! legend, and a dated PNG filename.

pub mod data;
pub mod render;
pub mod style;
