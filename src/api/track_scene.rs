use smallvec::SmallVec;

use crate::api::{Colorizer, HoverBroadcast, MetadataStore, ThreadInfo};
use crate::api::track_config::{SliceBand, TrackTuning};
use crate::core::{GroupId, OwnerId, SliceData, SummaryData, TimeScale, Viewport};
use crate::error::TrackResult;
use crate::render::{
    Color, HslColor, PolygonPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextMeasurer,
    TextPrimitive, crop_text,
};

/// Neutral tone for the not-yet-loaded portions of the visible window.
pub(crate) const PLACEHOLDER_COLOR: Color = Color::rgb(0.85, 0.85, 0.85);

const TITLE_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const SUBTITLE_COLOR: Color = Color::rgba(1.0, 1.0, 1.0, 0.6);
const TOOLTIP_BACKGROUND: Color = Color::rgba(1.0, 1.0, 1.0, 0.9);

/// Title/subtitle for one slice, plus the owner's group when known.
///
/// Falls back to a synthetic label derived from the raw id when the owner
/// has no metadata.
pub(crate) fn owner_labels(
    owner: OwnerId,
    info: Option<&ThreadInfo>,
) -> (String, String, Option<GroupId>) {
    match info {
        Some(info) => match (info.pid, info.process_name.as_deref()) {
            (Some(pid), process_name) => (
                format!("{} [{}]", process_name.unwrap_or(""), pid.raw()),
                format!("{} [{}]", info.thread_name, info.tid),
                Some(pid),
            ),
            (None, _) => (
                format!("{} [{}]", info.thread_name, info.tid),
                String::new(),
                None,
            ),
        },
        None => (format!("[utid:{}]", owner.raw()), String::new(), None),
    }
}

fn tooltip_lines(info: &ThreadInfo) -> SmallVec<[String; 2]> {
    let mut lines = SmallVec::new();
    if let Some(pid) = info.pid {
        lines.push(format!(
            "P: {} [{}]",
            info.process_name.as_deref().unwrap_or(""),
            pid.raw()
        ));
        lines.push(format!("T: {} [{}]", info.thread_name, info.tid));
    } else {
        lines.push(format!("T: {} [{}]", info.thread_name, info.tid));
    }
    lines
}

/// Covers the parts of the visible pixel range that `data_px` does not reach
/// with placeholder rects, so partially-loaded frames read as loading rather
/// than empty.
pub(crate) fn checkerboard_except(
    frame: &mut RenderFrame,
    visible_px: (f64, f64),
    data_px: (f64, f64),
) {
    let lane_height = f64::from(frame.viewport.height);

    let left_gap_end = data_px.0.min(visible_px.1);
    if left_gap_end > visible_px.0 {
        frame.rects.push(RectPrimitive::new(
            visible_px.0,
            0.0,
            left_gap_end - visible_px.0,
            lane_height,
            PLACEHOLDER_COLOR,
        ));
    }

    let right_gap_start = data_px.1.max(visible_px.0);
    if visible_px.1 > right_gap_start {
        frame.rects.push(RectPrimitive::new(
            right_gap_start,
            0.0,
            visible_px.1 - right_gap_start,
            lane_height,
            PLACEHOLDER_COLOR,
        ));
    }
}

/// Appends the utilization step polygon for summary-mode data.
///
/// Samples are chronological; each contributes a horizontal-then-vertical
/// segment pair, and the polygon closes back down to the band baseline.
pub(crate) fn summary_scene(
    frame: &mut RenderFrame,
    scale: TimeScale,
    viewport: Viewport,
    band: SliceBand,
    window_start: f64,
    summary: &SummaryData,
    hue: f64,
) -> TrackResult<()> {
    if summary.utilizations().is_empty() {
        return Ok(());
    }

    let visible = scale.visible_window();
    let start_px = scale.time_to_pixel(visible.start, viewport)?.floor();
    let bottom_y = band.bottom();

    let mut points = Vec::with_capacity(summary.utilizations().len() * 2 + 2);
    let mut last_x = start_px;
    let mut last_y = bottom_y;
    points.push((last_x, last_y));

    for (i, utilization) in summary.utilizations().iter().enumerate() {
        let bucket_start = window_start + i as f64 * summary.bucket_size_seconds();
        last_x = scale.time_to_pixel(bucket_start, viewport)?.floor();

        points.push((last_x, last_y));
        last_y = band.margin_top + (band.height * (1.0 - utilization)).round();
        points.push((last_x, last_y));
    }
    points.push((last_x, bottom_y));

    frame.polygons.push(PolygonPrimitive::new(
        points,
        HslColor::new(hue, 50.0, 60.0).to_color(),
    ));
    Ok(())
}

/// Appends one rect (and, when wide enough, two label lines) per visible
/// slice, dimmed by its relation to the global hover.
#[allow(clippy::too_many_arguments)]
pub(crate) fn slice_scene(
    frame: &mut RenderFrame,
    scale: TimeScale,
    viewport: Viewport,
    tuning: TrackTuning,
    slices: &SliceData,
    metadata: &dyn MetadataStore,
    colorizer: &dyn Colorizer,
    measurer: &dyn TextMeasurer,
    hover: HoverBroadcast,
) -> TrackResult<()> {
    let band = tuning.band;
    let visible = scale.visible_window();
    let char_width = measurer.average_char_width(tuning.title_font_size_px);

    for record in slices.records() {
        if record.end <= visible.start || record.start >= visible.end {
            continue;
        }
        let rect_start = scale.time_to_pixel(record.start, viewport)?;
        let rect_end = scale.time_to_pixel(record.end, viewport)?;
        let rect_width = rect_end - rect_start;
        if rect_width < tuning.min_visible_slice_px {
            continue;
        }

        let info = metadata.lookup(record.owner);
        let (title, subtitle, group) = owner_labels(record.owner, info);

        let tier = hover.tier_for(record.owner, group);
        let fill = colorizer
            .color_for_owner(record.owner, info)
            .dimmed(tier)
            .to_color();
        frame.rects.push(RectPrimitive::new(
            rect_start,
            band.margin_top,
            rect_width,
            band.height,
            fill,
        ));

        // Not enough room to say anything useful.
        if rect_width < tuning.min_labeled_slice_px {
            continue;
        }

        let center_x = rect_start + rect_width / 2.0;
        let title = crop_text(&title, char_width, rect_width);
        if !title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                title,
                center_x,
                band.margin_top + band.height / 2.0 - 3.0,
                tuning.title_font_size_px,
                TITLE_COLOR,
                TextHAlign::Center,
            ));
        }
        let subtitle = crop_text(&subtitle, char_width, rect_width);
        if !subtitle.is_empty() {
            frame.texts.push(TextPrimitive::new(
                subtitle,
                center_x,
                band.margin_top + band.height / 2.0 + 11.0,
                tuning.subtitle_font_size_px,
                SUBTITLE_COLOR,
                TextHAlign::Center,
            ));
        }
    }

    Ok(())
}

/// Appends the floating two-line tooltip for a hover inside this track,
/// anchored at the last known pointer x and sized to its wider line.
pub(crate) fn tooltip_scene(
    frame: &mut RenderFrame,
    tuning: TrackTuning,
    measurer: &dyn TextMeasurer,
    info: &ThreadInfo,
    pointer_x: f64,
) {
    let band = tuning.band;
    let lines = tooltip_lines(info);
    let width = lines
        .iter()
        .map(|line| measurer.text_width(line, tuning.subtitle_font_size_px))
        .fold(0.0f64, f64::max);

    frame.rects.push(RectPrimitive::new(
        pointer_x,
        band.margin_top,
        width + tuning.tooltip_padding_px,
        band.height,
        TOOLTIP_BACKGROUND,
    ));

    let text_color = HslColor::new(200.0, 50.0, 40.0).to_color();
    for (i, line) in lines.into_iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            line,
            pointer_x + tuning.tooltip_padding_px / 2.0,
            band.margin_top + 13.0 + i as f64 * 10.0,
            tuning.subtitle_font_size_px,
            text_color,
            TextHAlign::Left,
        ));
    }
}
