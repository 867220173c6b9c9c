//! Chart rendering for image tone histograms.
//!
//! Turns per-channel tone frequency tables into a blended filled-polygon
//! chart:
//! - Red, green and blue polygons under additive compositing
//! - A fourth polygon for the tone mass shared by all three channels
//! - PNG output, plain bytes or a base64 data URL

pub mod chart;
pub mod histogram;
pub mod png;
pub mod source;
pub mod surface;

pub use chart::{png_data_url, ChartRenderer};
pub use histogram::Histogram;
pub use source::{DecodedImage, PixelSource};
pub use surface::{CompositeMode, PathVerb, PixmapSurface, PolyPath, RasterSurface};
