use approx::assert_relative_eq;
use tracklane_rs::api::{DataRequest, DataSupplier, FetchScheduler};
use tracklane_rs::core::{TimeScale, TrackId, Viewport};

#[derive(Debug, Default)]
struct RecordingSupplier {
    requests: Vec<DataRequest>,
}

impl DataSupplier for RecordingSupplier {
    fn request_data(&mut self, request: DataRequest) {
        self.requests.push(request);
    }
}

fn scale(start: f64, end: f64) -> TimeScale {
    TimeScale::new(start, end).expect("valid scale")
}

const VIEWPORT: Viewport = Viewport {
    width: 1000,
    height: 40,
};

#[test]
fn repeated_insufficiency_signals_coalesce_into_one_request() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    let mut supplier = RecordingSupplier::default();

    scheduler.observe_coverage(false, 0.0);
    scheduler.observe_coverage(false, 10.0);
    scheduler.observe_coverage(false, 40.0);
    assert!(scheduler.is_pending());

    let issued = scheduler
        .issue_due(50.0, TrackId::new(3), scale(0.0, 100.0), VIEWPORT, &mut supplier)
        .expect("issue");
    assert!(issued);
    assert_eq!(supplier.requests.len(), 1);

    let again = scheduler
        .issue_due(60.0, TrackId::new(3), scale(0.0, 100.0), VIEWPORT, &mut supplier)
        .expect("issue");
    assert!(!again);
    assert_eq!(supplier.requests.len(), 1);
}

#[test]
fn nothing_fires_before_the_debounce_deadline() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    let mut supplier = RecordingSupplier::default();

    scheduler.observe_coverage(false, 100.0);
    let issued = scheduler
        .issue_due(149.0, TrackId::new(0), scale(0.0, 100.0), VIEWPORT, &mut supplier)
        .expect("issue");
    assert!(!issued);
    assert!(scheduler.is_pending());
    assert!(supplier.requests.is_empty());
}

#[test]
fn sufficient_coverage_never_schedules() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    scheduler.observe_coverage(true, 0.0);
    assert!(!scheduler.is_pending());
}

#[test]
fn request_reflects_the_viewport_at_fire_time() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    let mut supplier = RecordingSupplier::default();

    // Scheduled while looking at [0, 100], but the user kept panning.
    scheduler.observe_coverage(false, 0.0);

    let issued = scheduler
        .issue_due(
            50.0,
            TrackId::new(1),
            scale(500.0, 600.0),
            VIEWPORT,
            &mut supplier,
        )
        .expect("issue");
    assert!(issued);

    let request = supplier.requests[0];
    assert_relative_eq!(request.start, 400.0, max_relative = 1e-12);
    assert_relative_eq!(request.end, 700.0, max_relative = 1e-12);
    // 100 time units over 1000 px selects the 0.1 bucket.
    assert_relative_eq!(request.resolution, 0.1, max_relative = 1e-12);
    assert_eq!(request.track_id, TrackId::new(1));
}

#[test]
fn request_range_is_padded_by_one_viewport_duration_per_side() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    let mut supplier = RecordingSupplier::default();

    scheduler.observe_coverage(false, 0.0);
    scheduler
        .issue_due(50.0, TrackId::new(0), scale(100.0, 200.0), VIEWPORT, &mut supplier)
        .expect("issue");

    let request = supplier.requests[0];
    assert_relative_eq!(request.start, 0.0, max_relative = 1e-12);
    assert_relative_eq!(request.end, 300.0, max_relative = 1e-12);
}

#[test]
fn starvation_self_heals_because_pending_clears_at_issue_time() {
    let mut scheduler = FetchScheduler::new(50.0).expect("valid delay");
    let mut supplier = RecordingSupplier::default();

    scheduler.observe_coverage(false, 0.0);
    scheduler
        .issue_due(50.0, TrackId::new(0), scale(0.0, 100.0), VIEWPORT, &mut supplier)
        .expect("issue");
    assert!(!scheduler.is_pending());

    // The supplier never responded; a later paint schedules again.
    scheduler.observe_coverage(false, 200.0);
    assert!(scheduler.is_pending());
    let issued = scheduler
        .issue_due(250.0, TrackId::new(0), scale(0.0, 100.0), VIEWPORT, &mut supplier)
        .expect("issue");
    assert!(issued);
    assert_eq!(supplier.requests.len(), 2);
}
