//! Filled-polygon chart rendering from tone tables.
//!
//! Four passes over the same 258-vertex polygon shape: red, green and
//! blue under additive compositing so overlaps blend, then the tone
//! mass common to all three channels as an opaque overwrite.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use histo_common::{ChartConfig, HistoError, HistoResult, ToneTable, TONE_BUCKETS};

use crate::surface::{CompositeMode, PolyPath, RasterSurface};

/// Renders tone tables onto an exclusively owned surface.
pub struct ChartRenderer<S> {
    surface: S,
}

impl<S: RasterSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Render the chart and return encoded PNG bytes.
    ///
    /// The surface is resized to the configured dimensions, so earlier
    /// contents never leak into the output. A table with no counts
    /// outside the extreme buckets produces a blank chart.
    pub fn render(&mut self, table: &ToneTable, config: &ChartConfig) -> HistoResult<Vec<u8>> {
        if config.width == 0 || config.height == 0 {
            return Err(HistoError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        self.surface.resize(config.width, config.height)?;

        let m = table.normalization_max();
        tracing::debug!(
            width = config.width,
            height = config.height,
            normalization_max = m,
            "render chart"
        );

        if m == 0 {
            // Nothing to scale against: emit the blank chart rather
            // than dividing by zero.
            tracing::debug!("tone table empty outside extremes, emitting blank chart");
            return self.surface.encode_png();
        }
        let m = m as f32;

        let w = config.width as f32;
        let h = config.height as f32;

        // Color passes blend additively where channels overlap
        self.surface.set_composite_mode(CompositeMode::Lighter);
        self.surface
            .fill_polygon(&chart_polygon(w, h, |i| table.red()[i] as f32 / m), config.red);
        self.surface.fill_polygon(
            &chart_polygon(w, h, |i| table.green()[i] as f32 / m),
            config.green,
        );
        self.surface.fill_polygon(
            &chart_polygon(w, h, |i| table.blue()[i] as f32 / m),
            config.blue,
        );

        // The shared-tone polygon overwrites whatever it covers
        self.surface.set_composite_mode(CompositeMode::SourceOver);
        self.surface.fill_polygon(
            &chart_polygon(w, h, |i| {
                table.red()[i].min(table.green()[i]).min(table.blue()[i]) as f32 / m
            }),
            config.black,
        );

        self.surface.encode_png()
    }

    /// Render the chart and return it as a `data:image/png;base64` URL.
    pub fn render_data_url(
        &mut self,
        table: &ToneTable,
        config: &ChartConfig,
    ) -> HistoResult<String> {
        let png = self.render(table, config)?;
        Ok(png_data_url(&png))
    }
}

/// Build the closed chart polygon for one per-bucket value function.
///
/// Bucket indices map linearly across the width; values map across the
/// height, inverted because the raster origin is top-left. Values above
/// 1.0 (possible only at the extreme buckets, which are excluded from
/// the normalization maximum) overshoot the chart top and get clipped
/// by the surface rather than clamped here.
fn chart_polygon<F>(width: f32, height: f32, value: F) -> PolyPath
where
    F: Fn(usize) -> f32,
{
    let step = width / (TONE_BUCKETS - 1) as f32;

    let mut path = PolyPath::new();
    path.move_to(0.0, height);
    for bucket in 0..TONE_BUCKETS {
        path.line_to(step * bucket as f32, height - value(bucket) * height);
    }
    path.line_to(width, height);
    path.close();
    path
}

/// Wrap encoded PNG bytes in a base64 data URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_polygon_shape() {
        let path = chart_polygon(255.0, 128.0, |_| 0.5);
        // move-to + 256 buckets + bottom-right corner + close
        assert_eq!(path.verbs().len(), 259);

        use crate::surface::PathVerb;
        assert_eq!(path.verbs()[0], PathVerb::MoveTo(0.0, 128.0));
        assert_eq!(path.verbs()[1], PathVerb::LineTo(0.0, 64.0));
        assert_eq!(path.verbs()[256], PathVerb::LineTo(255.0, 64.0));
        assert_eq!(path.verbs()[257], PathVerb::LineTo(255.0, 128.0));
        assert_eq!(path.verbs()[258], PathVerb::Close);
    }

    #[test]
    fn test_chart_polygon_does_not_clamp_overshoot() {
        let path = chart_polygon(255.0, 128.0, |i| if i == 0 { 2.0 } else { 0.0 });

        use crate::surface::PathVerb;
        // value 2.0 maps above the chart top
        assert_eq!(path.verbs()[1], PathVerb::LineTo(0.0, -128.0));
    }

    #[test]
    fn test_png_data_url_prefix() {
        let url = png_data_url(&[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
