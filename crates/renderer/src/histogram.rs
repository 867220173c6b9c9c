//! Top-level histogram builder tying counting and rendering together.

use histo_common::{ChartConfig, ChartOptions, HistoResult, RgbSample, ToneTable};

use crate::chart::ChartRenderer;
use crate::source::{DecodedImage, PixelSource};
use crate::surface::PixmapSurface;

/// An image tone histogram: counts samples and renders the chart.
///
/// Counts accumulate across `record`/`ingest`/`for_source` calls until
/// [`Histogram::reset`] is called; the table starts zeroed.
pub struct Histogram {
    table: ToneTable,
    renderer: ChartRenderer<PixmapSurface>,
    config: ChartConfig,
}

impl Histogram {
    /// Histogram with the default chart configuration.
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            table: ToneTable::new(),
            renderer: ChartRenderer::new(PixmapSurface::new()),
            config,
        }
    }

    /// Merge partial configuration overrides for subsequent renders.
    pub fn set_options(&mut self, options: &ChartOptions) -> HistoResult<&mut Self> {
        self.config.apply(options)?;
        Ok(self)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn table(&self) -> &ToneTable {
        &self.table
    }

    /// Zero the tone counts.
    pub fn reset(&mut self) {
        self.table.reset();
    }

    /// Record one sample.
    pub fn record(&mut self, sample: RgbSample) {
        self.table.record(sample);
    }

    /// Record a sequence of samples.
    pub fn ingest<I>(&mut self, samples: I)
    where
        I: IntoIterator<Item = RgbSample>,
    {
        self.table.ingest(samples);
    }

    /// Count every pixel of a source, then render a data URL.
    pub fn for_source<P: PixelSource>(&mut self, source: &P) -> HistoResult<String> {
        tracing::debug!(
            width = source.width(),
            height = source.height(),
            "ingest pixel source"
        );
        self.table.ingest_rgba(source.rgba());
        self.render_data_url()
    }

    /// Decode an encoded image, count its pixels, render a data URL.
    pub fn for_image_bytes(&mut self, bytes: &[u8]) -> HistoResult<String> {
        let decoded = DecodedImage::from_bytes(bytes)?;
        self.for_source(&decoded)
    }

    /// Render the chart from the current counts as PNG bytes.
    pub fn render(&mut self) -> HistoResult<Vec<u8>> {
        self.renderer.render(&self.table, &self.config)
    }

    /// Render the chart from the current counts as a data URL.
    pub fn render_data_url(&mut self) -> HistoResult<String> {
        self.renderer.render_data_url(&self.table, &self.config)
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
