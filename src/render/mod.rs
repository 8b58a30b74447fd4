//! Chart rendering.
//!
//! Split in two steps so everything that can fail on bad input fails
//! before any output file exists:
//! * [`plan`] resolves data + style into a backend-independent draw plan;
//! * [`chart`] feeds that plan to the `plotters` bitmap backend.

use thiserror::Error;

use crate::data::model::{Category, Region};

pub mod chart;
pub mod plan;

pub use chart::{output_filename, render_chart};
pub use plan::{build_plan, DrawPlan, LegendEntry, Shape, ShapeKind};

// ---------------------------------------------------------------------------
// Axis domain (fixed, log-log)
// ---------------------------------------------------------------------------

pub const X_MIN: f64 = 0.1;
pub const X_MAX: f64 = 1e2;
pub const Y_MIN: f64 = 1e-10;
pub const Y_MAX: f64 = 1e-2;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while planning or drawing the chart.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("invalid version {0}: expected 0 or 1")]
    InvalidVersion(u8),

    #[error("no style entry for {category} region {region}")]
    MissingStyleEntry { category: Category, region: Region },

    #[error("failed to draw chart: {0}")]
    Drawing(String),
}

// ---------------------------------------------------------------------------
// Variant – the two label/legend presentations of the same chart
// ---------------------------------------------------------------------------

/// Style variant selector. Variant 0 uses the full journal-style labels,
/// variant 1 the shorter emphasised ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    V0,
    V1,
}

impl Variant {
    /// Validate the raw CLI value. Anything outside {0, 1} is rejected
    /// here, before any file is read or written.
    pub fn new(version: u8) -> Result<Self, PlotError> {
        match version {
            0 => Ok(Variant::V0),
            1 => Ok(Variant::V1),
            other => Err(PlotError::InvalidVersion(other)),
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Variant::V0 => 0,
            Variant::V1 => 1,
        }
    }

    pub fn x_label(self) -> &'static str {
        match self {
            Variant::V0 => "Dark boson mass [GeV]",
            Variant::V1 => "m(Z_D) [GeV]",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            Variant::V0 => "Kinetic mixing parameter ε",
            Variant::V1 => "ε",
        }
    }
}
