//! Chart configuration and partial overrides.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::HistoResult;

/// Default chart width in pixels (one column per tone bucket).
pub const DEFAULT_WIDTH: u32 = 255;

/// Default chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 128;

/// Configuration for one chart render.
///
/// Immutable while a render is in progress; build one from defaults and
/// merge caller overrides with [`ChartConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Fill color for the red channel polygon
    pub red: Rgba,
    /// Fill color for the green channel polygon
    pub green: Rgba,
    /// Fill color for the blue channel polygon
    pub blue: Rgba,
    /// Fill color for the polygon covering tone mass common to all
    /// three channels
    pub black: Rgba,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            red: Rgba::opaque(0xdd, 0x55, 0x55),
            green: Rgba::opaque(0x55, 0xdd, 0x55),
            blue: Rgba::opaque(0x55, 0x55, 0xdd),
            black: Rgba::opaque(0x55, 0x55, 0x55),
        }
    }
}

impl ChartConfig {
    /// Merge caller-supplied overrides into this configuration.
    ///
    /// Omitted fields keep their current values. Color overrides are hex
    /// strings and fail with `InvalidColor` if unparseable, leaving the
    /// already-applied fields in place.
    pub fn apply(&mut self, options: &ChartOptions) -> HistoResult<()> {
        if let Some(width) = options.width {
            self.width = width;
        }
        if let Some(height) = options.height {
            self.height = height;
        }
        if let Some(ref hex) = options.red {
            self.red = hex.parse()?;
        }
        if let Some(ref hex) = options.green {
            self.green = hex.parse()?;
        }
        if let Some(ref hex) = options.blue {
            self.blue = hex.parse()?;
        }
        if let Some(ref hex) = options.black {
            self.black = hex.parse()?;
        }
        Ok(())
    }
}

/// Partial configuration overrides, typically parsed from JSON.
///
/// Only the fields named here can affect rendering; unknown keys are
/// dropped during deserialization and never stored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub red: Option<String>,
    pub green: Option<String>,
    pub blue: Option<String>,
    pub black: Option<String>,
}

impl ChartOptions {
    /// Parse overrides from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
