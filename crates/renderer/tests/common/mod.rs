//! Shared test helpers for renderer integration tests.

use std::cell::Cell;

use histo_common::{HistoError, HistoResult, Rgba};
use renderer::{CompositeMode, PolyPath, RasterSurface};

/// One recorded polygon fill.
#[derive(Debug, Clone)]
pub struct FillCall {
    pub mode: CompositeMode,
    pub path: PolyPath,
    pub color: Rgba,
}

/// Surface double that records drawing calls instead of rasterizing.
pub struct RecordingSurface {
    pub resizes: Vec<(u32, u32)>,
    pub fills: Vec<FillCall>,
    pub encodes: Cell<usize>,
    mode: CompositeMode,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            resizes: Vec::new(),
            fills: Vec::new(),
            encodes: Cell::new(0),
            mode: CompositeMode::SourceOver,
        }
    }
}

impl RasterSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) -> HistoResult<()> {
        if width == 0 || height == 0 {
            return Err(HistoError::SurfaceAllocation(format!(
                "cannot allocate {}x{} surface",
                width, height
            )));
        }
        self.resizes.push((width, height));
        self.fills.clear();
        self.mode = CompositeMode::SourceOver;
        Ok(())
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    fn fill_polygon(&mut self, path: &PolyPath, color: Rgba) {
        self.fills.push(FillCall {
            mode: self.mode,
            path: path.clone(),
            color,
        });
    }

    fn encode_png(&self) -> HistoResult<Vec<u8>> {
        self.encodes.set(self.encodes.get() + 1);
        Ok(vec![137, 80, 78, 71])
    }
}
