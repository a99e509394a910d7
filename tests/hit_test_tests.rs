use tracklane_rs::api::{CpuTrack, CpuTrackConfig, HoverBroadcast, InMemoryMetadataStore, ThreadInfo};
use tracklane_rs::core::{
    DataWindow, GroupId, OwnerId, SliceData, SliceRecord, SummaryData, TimeScale, TimeSpan,
    TrackData, TrackId, Viewport,
};

// 100 time units over 100 px: one pixel per time unit.
const VIEWPORT: Viewport = Viewport {
    width: 100,
    height: 40,
};

fn scale() -> TimeScale {
    TimeScale::new(0.0, 100.0).expect("valid scale")
}

fn record(start: f64, end: f64, owner: u64) -> SliceRecord {
    SliceRecord {
        start,
        end,
        owner: OwnerId::new(owner),
    }
}

fn slice_track(records: Vec<SliceRecord>) -> CpuTrack {
    let mut track = CpuTrack::new(CpuTrackConfig::new(TrackId::new(0), 0)).expect("track init");
    let span = TimeSpan::new(0.0, 100.0).expect("valid span");
    let payload = TrackData::Slices(SliceData::new(records).expect("valid slices"));
    track.apply_data(DataWindow::new(span, 1.0, payload).expect("valid window"));
    track
}

fn summary_track() -> CpuTrack {
    let mut track = CpuTrack::new(CpuTrackConfig::new(TrackId::new(0), 0)).expect("track init");
    let span = TimeSpan::new(0.0, 100.0).expect("valid span");
    let payload = TrackData::Summary(SummaryData::new(10.0, vec![0.5]).expect("valid summary"));
    track.apply_data(DataWindow::new(span, 1.0, payload).expect("valid window"));
    track
}

#[test]
fn two_adjacent_intervals_resolve_by_containment() {
    let track = slice_track(vec![record(0.0, 10.0, 1), record(10.0, 20.0, 2)]);

    let hit = |x: f64| track.hit_test(x, 20.0, scale(), VIEWPORT).expect("hit test");
    assert_eq!(hit(5.0), Some(OwnerId::new(1)));
    assert_eq!(hit(15.0), Some(OwnerId::new(2)));
    assert_eq!(hit(25.0), None);
}

#[test]
fn pointer_outside_the_band_misses_for_any_data_state() {
    let track = slice_track(vec![record(0.0, 10.0, 1)]);

    // Band occupies y 5..=35.
    for y in [0.0, 4.9, 35.1, 40.0] {
        assert_eq!(track.hit_test(5.0, y, scale(), VIEWPORT).expect("hit test"), None);
    }
    assert_eq!(
        track.hit_test(5.0, 35.0, scale(), VIEWPORT).expect("hit test"),
        Some(OwnerId::new(1))
    );

    let empty = CpuTrack::new(CpuTrackConfig::new(TrackId::new(0), 0)).expect("track init");
    assert_eq!(empty.hit_test(5.0, 0.0, scale(), VIEWPORT).expect("hit test"), None);
}

#[test]
fn absent_and_summary_data_never_hit() {
    let empty = CpuTrack::new(CpuTrackConfig::new(TrackId::new(0), 0)).expect("track init");
    assert_eq!(empty.hit_test(5.0, 20.0, scale(), VIEWPORT).expect("hit test"), None);

    let summary = summary_track();
    assert_eq!(
        summary.hit_test(5.0, 20.0, scale(), VIEWPORT).expect("hit test"),
        None
    );
}

#[test]
fn overlapping_intervals_resolve_to_the_first_in_array_order() {
    let track = slice_track(vec![record(0.0, 20.0, 1), record(10.0, 30.0, 2)]);
    assert_eq!(
        track.hit_test(15.0, 20.0, scale(), VIEWPORT).expect("hit test"),
        Some(OwnerId::new(1))
    );
}

#[test]
fn pointer_move_publishes_owner_and_group_to_the_broadcast() {
    let mut metadata = InMemoryMetadataStore::new();
    metadata.insert(
        OwnerId::new(1),
        ThreadInfo::new("worker", 3).with_process(GroupId::new(12), "app"),
    );
    let mut track = slice_track(vec![record(0.0, 10.0, 1)]);
    let mut hover = HoverBroadcast::default();

    track
        .pointer_move(5.0, 20.0, scale(), VIEWPORT, &metadata, &mut hover)
        .expect("pointer move");
    assert_eq!(track.hovered_owner(), Some(OwnerId::new(1)));
    assert_eq!(hover.owner(), Some(OwnerId::new(1)));
    assert_eq!(hover.group(), Some(GroupId::new(12)));
}

#[test]
fn leaving_the_band_resets_hover_state() {
    let metadata = InMemoryMetadataStore::new();
    let mut track = slice_track(vec![record(0.0, 10.0, 1)]);
    let mut hover = HoverBroadcast::default();

    track
        .pointer_move(5.0, 20.0, scale(), VIEWPORT, &metadata, &mut hover)
        .expect("pointer move");
    assert!(hover.is_active());

    track
        .pointer_move(5.0, 2.0, scale(), VIEWPORT, &metadata, &mut hover)
        .expect("pointer move");
    assert_eq!(track.hovered_owner(), None);
    assert!(!hover.is_active());
}

#[test]
fn leaving_the_canvas_resets_hover_state() {
    let metadata = InMemoryMetadataStore::new();
    let mut track = slice_track(vec![record(0.0, 10.0, 1)]);
    let mut hover = HoverBroadcast::default();

    track
        .pointer_move(5.0, 20.0, scale(), VIEWPORT, &metadata, &mut hover)
        .expect("pointer move");
    track.pointer_leave(&mut hover);

    assert_eq!(track.hovered_owner(), None);
    assert!(!hover.is_active());
    assert_eq!(hover.group(), None);
}

#[test]
fn pointer_move_over_summary_data_leaves_the_broadcast_untouched() {
    let metadata = InMemoryMetadataStore::new();
    let mut track = summary_track();
    let mut hover = HoverBroadcast::default();
    hover.set(Some(OwnerId::new(9)), None);

    track
        .pointer_move(5.0, 20.0, scale(), VIEWPORT, &metadata, &mut hover)
        .expect("pointer move");
    assert_eq!(hover.owner(), Some(OwnerId::new(9)));
}
