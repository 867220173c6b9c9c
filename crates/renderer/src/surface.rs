//! Raster surface capability used by the chart renderer.
//!
//! The renderer only needs a small drawing surface contract: resize,
//! composite-mode selection, filled-polygon drawing and PNG encoding.
//! Keeping it behind a trait lets tests record fill calls instead of
//! rasterizing.

use histo_common::{HistoError, HistoResult, Rgba};

/// Policy for combining a newly filled shape with existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Additive blending: overlapping fills brighten each other.
    Lighter,
    /// Opaque overwrite of covered pixels.
    SourceOver,
}

/// One step of a polygon outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Close,
}

/// A polygon path built from move-to / line-to / close steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyPath {
    verbs: Vec<PathVerb>,
}

impl PolyPath {
    pub fn new() -> Self {
        Self { verbs: Vec::new() }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathVerb::LineTo(x, y));
    }

    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// Drawing target for chart rendering.
pub trait RasterSurface {
    /// (Re)allocate the target at the given dimensions, clearing it to
    /// transparent. Zero dimensions are an allocation error.
    fn resize(&mut self, width: u32, height: u32) -> HistoResult<()>;

    /// Select the composite mode for subsequent fills.
    fn set_composite_mode(&mut self, mode: CompositeMode);

    /// Fill a closed polygon under the current composite mode.
    fn fill_polygon(&mut self, path: &PolyPath, color: Rgba);

    /// Encode the current contents as a PNG.
    fn encode_png(&self) -> HistoResult<Vec<u8>>;
}

/// Production surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,
    mode: CompositeMode,
}

impl PixmapSurface {
    pub fn new() -> Self {
        Self {
            pixmap: tiny_skia::Pixmap::new(
                histo_common::config::DEFAULT_WIDTH,
                histo_common::config::DEFAULT_HEIGHT,
            )
            .expect("Failed to create pixmap"),
            mode: CompositeMode::SourceOver,
        }
    }

    /// Current contents as RGBA bytes (4 bytes per pixel, row-major).
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}

impl Default for PixmapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface for PixmapSurface {
    fn resize(&mut self, width: u32, height: u32) -> HistoResult<()> {
        self.pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            HistoError::SurfaceAllocation(format!("cannot allocate {}x{} pixmap", width, height))
        })?;
        self.mode = CompositeMode::SourceOver;
        Ok(())
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    fn fill_polygon(&mut self, path: &PolyPath, color: Rgba) {
        use tiny_skia::{BlendMode, FillRule, Paint, PathBuilder, Transform};

        let mut pb = PathBuilder::new();
        for verb in path.verbs() {
            match *verb {
                PathVerb::MoveTo(x, y) => pb.move_to(x, y),
                PathVerb::LineTo(x, y) => pb.line_to(x, y),
                PathVerb::Close => pb.close(),
            }
        }

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint.blend_mode = match self.mode {
            CompositeMode::Lighter => BlendMode::Plus,
            CompositeMode::SourceOver => BlendMode::SourceOver,
        };

        if let Some(path) = pb.finish() {
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn encode_png(&self) -> HistoResult<Vec<u8>> {
        crate::png::encode_auto(
            self.pixmap.data(),
            self.pixmap.width() as usize,
            self.pixmap.height() as usize,
        )
    }
}
