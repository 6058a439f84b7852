//! Command line options
//!
//! Flags override whatever was loaded from the settings file for this run;
//! the next save persists them.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::error::{CoreError, CoreResult};
use super::resources::SQUARE_SIZE_RANGE;
use super::GameSettings;
use crate::rendering::board::coordinates::Orientation;

pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Big drag-and-drop chessboard.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bigchess", version, about)]
pub struct Cli {
    /// Start with black at the bottom.
    #[arg(long)]
    pub flipped: bool,

    /// Start with legal-move hints switched off.
    #[arg(long)]
    pub no_hints: bool,

    /// Side of one board square in pixels (32 to 160).
    #[arg(long, value_name = "PX")]
    pub square_size: Option<f32>,

    /// Font file with chess glyphs, tried before the built-in candidates.
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Settings file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Log filter directives, e.g. "debug" or "info,bigchess=trace".
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Cli {
    pub fn apply_to(&self, settings: &mut GameSettings) -> CoreResult<()> {
        if self.flipped {
            settings.view.orientation = Orientation::Flipped;
        }
        if self.no_hints {
            settings.view.show_hints = false;
        }
        if let Some(size) = self.square_size {
            if !SQUARE_SIZE_RANGE.contains(&size) {
                return Err(CoreError::InvalidSquareSize {
                    size,
                    min: *SQUARE_SIZE_RANGE.start(),
                    max: *SQUARE_SIZE_RANGE.end(),
                });
            }
            settings.square_size = size;
        }
        Ok(())
    }

    /// Validated filter string for the log plugin
    pub fn log_filter(&self) -> CoreResult<String> {
        let filter = self
            .log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::try_new(&filter).map_err(|e| CoreError::InvalidLogFilter {
            filter: filter.clone(),
            message: e.to_string(),
        })?;
        Ok(filter)
    }
}
