use tracing::debug;

use crate::api::track_scene;
use crate::api::{
    Colorizer, CpuTrackConfig, DataSupplier, FetchScheduler, HoverBroadcast, MetadataStore,
    hue_for_cpu,
};
use crate::core::{
    DataWindow, OwnerId, TimeScale, TrackData, Viewport, is_sufficient, select_resolution,
};
use crate::error::TrackResult;
use crate::render::{RenderFrame, TextMeasurer};

/// Per-frame dependencies injected by the host render loop.
///
/// The coordinate mapper, identity store, colorizer, text metrics, and the
/// cross-track hover are all owned elsewhere; a track only borrows them for
/// the duration of one paint or pointer event.
pub struct TrackContext<'a> {
    pub scale: TimeScale,
    pub viewport: Viewport,
    pub metadata: &'a dyn MetadataStore,
    pub colorizer: &'a dyn Colorizer,
    pub text: &'a dyn TextMeasurer,
    pub hover: HoverBroadcast,
}

/// One horizontal lane of per-CPU scheduling activity.
///
/// Holds the latest supplier response (replaced wholesale), the debounced
/// fetch state, and transient hover state. Painting never blocks on a
/// fetch: stale data keeps drawing until fresh data arrives.
#[derive(Debug)]
pub struct CpuTrack {
    config: CpuTrackConfig,
    hue: f64,
    data: Option<DataWindow>,
    scheduler: FetchScheduler,
    pointer_x: Option<f64>,
    hovered_owner: Option<OwnerId>,
}

impl CpuTrack {
    pub fn new(config: CpuTrackConfig) -> TrackResult<Self> {
        let tuning = config.tuning.validate()?;
        Ok(Self {
            config: CpuTrackConfig { tuning, ..config },
            hue: hue_for_cpu(config.cpu),
            data: None,
            scheduler: FetchScheduler::new(tuning.fetch_delay)?,
            pointer_x: None,
            hovered_owner: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> CpuTrackConfig {
        self.config
    }

    #[must_use]
    pub fn data(&self) -> Option<&DataWindow> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn is_fetch_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Owner currently hovered within this track, if any.
    #[must_use]
    pub fn hovered_owner(&self) -> Option<OwnerId> {
        self.hovered_owner
    }

    /// Replaces held data wholesale with a supplier response.
    ///
    /// A response that arrives after the viewport moved on is still applied;
    /// the next paint's coverage check re-triggers a fetch if it no longer
    /// covers the visible window.
    pub fn apply_data(&mut self, window: DataWindow) {
        debug!(
            track = self.config.track_id.raw(),
            start = window.span().start,
            end = window.span().end,
            resolution = window.resolution(),
            "applying track data window"
        );
        self.data = Some(window);
    }

    /// Builds the scene for one frame.
    ///
    /// Always paints whatever is held right now; insufficiency only feeds
    /// the fetch debounce. With nothing held the frame stays empty.
    pub fn render(&mut self, ctx: &TrackContext<'_>, now: f64) -> TrackResult<RenderFrame> {
        let resolution = select_resolution(ctx.scale.pixel_delta_to_duration(1.0, ctx.viewport)?)?;
        let visible = ctx.scale.visible_window();
        let sufficient = is_sufficient(self.data.as_ref(), visible, resolution);
        self.scheduler.observe_coverage(sufficient, now);

        let mut frame = RenderFrame::new(ctx.viewport);
        let Some(data) = &self.data else {
            return Ok(frame);
        };

        let visible_px = (
            ctx.scale.time_to_pixel(visible.start, ctx.viewport)?,
            ctx.scale.time_to_pixel(visible.end, ctx.viewport)?,
        );
        let data_px = (
            ctx.scale.time_to_pixel(data.span().start, ctx.viewport)?,
            ctx.scale.time_to_pixel(data.span().end, ctx.viewport)?,
        );
        track_scene::checkerboard_except(&mut frame, visible_px, data_px);

        match data.payload() {
            TrackData::Summary(summary) => {
                track_scene::summary_scene(
                    &mut frame,
                    ctx.scale,
                    ctx.viewport,
                    self.config.tuning.band,
                    data.span().start,
                    summary,
                    self.hue,
                )?;
            }
            TrackData::Slices(slices) => {
                track_scene::slice_scene(
                    &mut frame,
                    ctx.scale,
                    ctx.viewport,
                    self.config.tuning,
                    slices,
                    ctx.metadata,
                    ctx.colorizer,
                    ctx.text,
                    ctx.hover,
                )?;

                if let (Some(owner), Some(pointer_x)) = (self.hovered_owner, self.pointer_x) {
                    if let Some(info) = ctx.metadata.lookup(owner) {
                        track_scene::tooltip_scene(
                            &mut frame,
                            self.config.tuning,
                            ctx.text,
                            info,
                            pointer_x,
                        );
                    }
                }
            }
        }

        Ok(frame)
    }

    /// Issues the debounced fetch once its deadline has elapsed, using the
    /// viewport and resolution current *now*, not at schedule time.
    pub fn issue_due_fetch(
        &mut self,
        now: f64,
        scale: TimeScale,
        viewport: Viewport,
        supplier: &mut dyn DataSupplier,
    ) -> TrackResult<bool> {
        self.scheduler
            .issue_due(now, self.config.track_id, scale, viewport, supplier)
    }

    /// Maps a pointer position to the owning record, if any.
    ///
    /// Returns `None` outside the vertical band regardless of mode, for
    /// absent data, and for summary data (no discrete records). Overlapping
    /// intervals resolve to the first record in supplier order.
    pub fn hit_test(
        &self,
        x: f64,
        y: f64,
        scale: TimeScale,
        viewport: Viewport,
    ) -> TrackResult<Option<OwnerId>> {
        if !self.config.tuning.band.contains_y(y) {
            return Ok(None);
        }
        let Some(data) = &self.data else {
            return Ok(None);
        };
        let TrackData::Slices(slices) = data.payload() else {
            return Ok(None);
        };

        let time = scale.pixel_to_time(x, viewport)?;
        Ok(slices
            .records()
            .iter()
            .find(|record| record.start <= time && time <= record.end)
            .map(|record| record.owner))
    }

    /// Pointer-move entry point; updates local hover state and publishes the
    /// hit-test result to the cross-track broadcast.
    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
        scale: TimeScale,
        viewport: Viewport,
        metadata: &dyn MetadataStore,
        hover: &mut HoverBroadcast,
    ) -> TrackResult<()> {
        self.pointer_x = Some(x);
        let Some(data) = &self.data else {
            return Ok(());
        };
        if matches!(data.payload(), TrackData::Summary(_)) {
            return Ok(());
        }

        if !self.config.tuning.band.contains_y(y) {
            self.hovered_owner = None;
            hover.clear();
            return Ok(());
        }

        let hovered = self.hit_test(x, y, scale, viewport)?;
        self.hovered_owner = hovered;
        let group = hovered
            .and_then(|owner| metadata.lookup(owner))
            .and_then(|info| info.pid);
        hover.set(hovered, group);
        Ok(())
    }

    /// Pointer-leave entry point; resets to an explicit unhovered state.
    pub fn pointer_leave(&mut self, hover: &mut HoverBroadcast) {
        self.hovered_owner = None;
        self.pointer_x = None;
        hover.clear();
    }
}
