use tracing::trace;

use crate::core::{ChartScales, Dataset, PlotArea, Sample, SampleWindow, TimeRange, Viewport};
use crate::error::ChartResult;
use crate::interaction::{InteractionMode, InteractionState};
use crate::provider::MetricsSummary;
use crate::render::Renderer;

use super::{ChartEngineConfig, HoverBridge, HoverSelection, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the active dataset, the visible sample window, pointer
/// state and the renderer. Every state change that affects the picture
/// re-renders the whole frame synchronously.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) style: RenderStyle,
    pub(super) dataset: Dataset,
    pub(super) metrics: Option<MetricsSummary>,
    pub(super) window: SampleWindow,
    pub(super) interaction: InteractionState,
    pub(super) hover_bridge: Option<Box<dyn HoverBridge>>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty one-day dataset.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            dataset: Dataset::empty(TimeRange::default()),
            metrics: None,
            window: SampleWindow::for_total(0),
            interaction: InteractionState::default(),
            hover_bridge: None,
        })
    }

    /// Attaches the hover consumer, replacing any previous one.
    #[must_use]
    pub fn with_hover_bridge(mut self, bridge: impl HoverBridge + 'static) -> Self {
        self.hover_bridge = Some(Box::new(bridge));
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.config.plot_area()
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        self.render()
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        self.dataset.time_range
    }

    #[must_use]
    pub fn metrics(&self) -> Option<&MetricsSummary> {
        self.metrics.as_ref()
    }

    #[must_use]
    pub fn window(&self) -> SampleWindow {
        self.window
    }

    #[must_use]
    pub fn visible_samples(&self) -> &[Sample] {
        self.window.slice(&self.dataset.samples)
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Currently hovered sample, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<HoverSelection> {
        self.interaction
            .hovered()
            .and_then(|index| self.dataset.samples.get(index))
            .map(HoverSelection::from)
    }

    /// Chart title: configured override, else the dataset ticker.
    #[must_use]
    pub fn title(&self) -> &str {
        self.config
            .title
            .as_deref()
            .unwrap_or(self.dataset.ticker.as_str())
    }

    /// Coordinate mappings for the current window.
    pub fn scales(&self) -> ChartResult<ChartScales> {
        ChartScales::build(self.visible_samples(), self.window, self.plot_area())
    }

    /// Rebuilds and paints the full frame.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            paths = frame.paths.len(),
            markers = frame.circles.len(),
            "render chart frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn publish_hover(&mut self, selection: Option<HoverSelection>) {
        trace!(hovered = selection.is_some(), "hover changed");
        if let Some(bridge) = self.hover_bridge.as_mut() {
            bridge.notify(selection);
        }
    }
}
