//! End-to-end resolver behavior against mock collaborators.

use std::sync::Arc;
use std::time::Duration;

use hospital_locator::{
    async_trait, Coordinate, Facility, FacilityQueryClient, GeoFailure, LocatorConfig,
    MapOverlay, MarkerKind, NearestFacilityResolver, QueryFailure, ResolveOutcome, ResolvePhase,
};
use mock_locator::{
    DelayedFacilities, DelayedPosition, FailingFacilities, FailingPosition, FixedPosition,
    ScriptedFacilities, StaticFacilities,
};
use overpass_facilities::parse_facilities;
use tokio::time::sleep;

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn bangalore() -> Coordinate {
    coord(12.9716, 77.5946)
}

fn hospital_a() -> Facility {
    Facility::new("A", coord(12.98, 77.60))
}

fn hospital_b() -> Facility {
    Facility::new("B", coord(12.975, 77.598))
}

fn config() -> LocatorConfig {
    LocatorConfig::builder()
        .fallback_position(coord(0.0, 0.0))
        .radius_meters(5000.0)
        .geolocation_timeout(Duration::from_secs(2))
        .build()
}

#[tokio::test]
async fn test_nearest_of_two_candidates() {
    let provider = Arc::new(FixedPosition::new(bangalore()));
    let client = Arc::new(StaticFacilities::new(vec![hospital_a(), hospital_b()]));
    let resolver = NearestFacilityResolver::new(config(), provider.clone(), client.clone()).unwrap();

    let outcome = resolver.locate_and_resolve().await;

    match outcome {
        ResolveOutcome::Resolved {
            facility_count,
            nearest,
            distance,
        } => {
            assert_eq!(facility_count, 2);
            assert_eq!(nearest, Some(hospital_b()));
            assert!((distance.unwrap().meters() - 527.88).abs() < 0.1);
        }
        other => panic!("Expected Resolved, got {:?}", other),
    }

    let snapshot = resolver.snapshot();
    assert_eq!(snapshot.current_position(), bangalore());
    assert_eq!(snapshot.facilities(), &[hospital_a(), hospital_b()]);
    assert_eq!(snapshot.nearest(), Some(&hospital_b()));
    assert_eq!(resolver.phase(), ResolvePhase::Resolved);
    assert_eq!(provider.calls(), 1);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_facility_at_user_position() {
    let client = Arc::new(StaticFacilities::new(vec![
        hospital_a(),
        Facility::new("Here", bangalore()),
    ]));
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        client,
    )
    .unwrap();

    resolver.locate_and_resolve().await;

    let snapshot = resolver.snapshot();
    assert_eq!(snapshot.nearest().unwrap().name, "Here");
    assert_eq!(snapshot.nearest_distance().unwrap().meters(), 0.0);
}

#[tokio::test]
async fn test_empty_result_is_not_an_error() {
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        Arc::new(StaticFacilities::empty()),
    )
    .unwrap();

    let outcome = resolver.locate_and_resolve().await;

    assert_eq!(
        outcome,
        ResolveOutcome::Resolved {
            facility_count: 0,
            nearest: None,
            distance: None,
        }
    );
    assert_eq!(resolver.phase(), ResolvePhase::Resolved);

    let snapshot = resolver.snapshot();
    assert!(snapshot.facilities().is_empty());
    assert!(snapshot.nearest().is_none());

    let overlay = MapOverlay::from_snapshot(&snapshot);
    assert_eq!(overlay.markers.len(), 1);
    assert!(overlay.route.is_none());
}

#[tokio::test]
async fn test_location_failure_keeps_fallback_and_skips_query() {
    let provider = Arc::new(FailingPosition::denied());
    let client = Arc::new(StaticFacilities::new(vec![hospital_a()]));
    let resolver = NearestFacilityResolver::new(config(), provider.clone(), client.clone()).unwrap();

    let outcome = resolver.locate_and_resolve().await;

    assert_eq!(
        outcome,
        ResolveOutcome::LocationFailed(GeoFailure::PermissionDenied)
    );
    assert_eq!(resolver.phase(), ResolvePhase::LocationFailed);
    assert_eq!(resolver.snapshot().current_position(), coord(0.0, 0.0));
    assert!(resolver.snapshot().facilities().is_empty());
    assert_eq!(provider.calls(), 1);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let provider = Arc::new(DelayedPosition::with_millis(
        FixedPosition::new(bangalore()),
        2_000,
    ));
    let client = Arc::new(StaticFacilities::new(vec![hospital_a()]));
    let config = LocatorConfig::builder()
        .fallback_position(coord(0.0, 0.0))
        .geolocation_timeout(Duration::from_millis(50))
        .build();
    let resolver = NearestFacilityResolver::new(config, provider, client.clone()).unwrap();

    let outcome = resolver.locate_and_resolve().await;

    assert_eq!(outcome, ResolveOutcome::LocationFailed(GeoFailure::Timeout));
    assert_eq!(resolver.phase(), ResolvePhase::LocationFailed);
    assert_eq!(resolver.snapshot().current_position(), coord(0.0, 0.0));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_query_failure_keeps_previous_results() {
    let moved = coord(12.99, 77.61);
    let client = Arc::new(ScriptedFacilities::new(vec![
        Ok(vec![hospital_a(), hospital_b()]),
        Err(QueryFailure::BadStatus {
            status: 503,
            body: "Service Unavailable".to_string(),
        }),
    ]));
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        client.clone(),
    )
    .unwrap();

    assert!(resolver.locate_and_resolve().await.is_resolved());
    let before = resolver.snapshot();

    let outcome = resolver.resolve(moved).await;

    match outcome {
        ResolveOutcome::QueryFailed(QueryFailure::BadStatus { status, .. }) => {
            assert_eq!(status, 503)
        }
        other => panic!("Expected QueryFailed, got {:?}", other),
    }
    assert_eq!(resolver.snapshot(), before);
    assert_eq!(resolver.snapshot().nearest(), Some(&hospital_b()));
    assert_eq!(resolver.phase(), ResolvePhase::Resolved);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn test_first_query_failure_returns_to_idle() {
    let client = Arc::new(FailingFacilities::new(QueryFailure::Network(
        "connection refused".to_string(),
    )));
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        client.clone(),
    )
    .unwrap();

    let outcome = resolver.locate_and_resolve().await;

    assert!(matches!(
        outcome,
        ResolveOutcome::QueryFailed(QueryFailure::Network(_))
    ));
    assert_eq!(resolver.phase(), ResolvePhase::Idle);
    assert!(resolver.snapshot().nearest().is_none());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_malformed_payload_keeps_previous_nearest() {
    let malformed = parse_facilities(br#"{"version": 0.6, "generator": "Overpass API"}"#).unwrap_err();
    assert!(matches!(malformed, QueryFailure::MalformedPayload(_)));

    let client = Arc::new(ScriptedFacilities::new(vec![
        Ok(vec![hospital_a(), hospital_b()]),
        Err(malformed),
    ]));
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        client,
    )
    .unwrap();

    resolver.resolve(bangalore()).await;
    let outcome = resolver.resolve(bangalore()).await;

    assert!(matches!(
        outcome,
        ResolveOutcome::QueryFailed(QueryFailure::MalformedPayload(_))
    ));
    assert_eq!(resolver.snapshot().nearest(), Some(&hospital_b()));
    assert_eq!(resolver.phase(), ResolvePhase::Resolved);
}

#[tokio::test]
async fn test_configured_radius_is_passed_to_client() {
    let client = Arc::new(StaticFacilities::empty());
    let config = LocatorConfig::builder().radius_meters(2500.0).build();
    let resolver = NearestFacilityResolver::new(
        config,
        Arc::new(FixedPosition::new(bangalore())),
        client.clone(),
    )
    .unwrap();

    resolver.locate_and_resolve().await;

    let records = client.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].center, bangalore());
    assert_eq!(records[0].radius_meters, 2500.0);
}

#[tokio::test]
async fn test_position_is_published_before_query_completes() {
    let client = Arc::new(DelayedFacilities::with_millis(
        StaticFacilities::new(vec![hospital_a(), hospital_b()]),
        200,
    ));
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        client,
    )
    .unwrap();

    let check = async {
        sleep(Duration::from_millis(50)).await;
        let snapshot = resolver.snapshot();
        assert_eq!(snapshot.current_position(), bangalore());
        assert!(snapshot.facilities().is_empty());
        assert_eq!(resolver.phase(), ResolvePhase::Querying);
    };

    let (outcome, ()) = tokio::join!(resolver.locate_and_resolve(), check);

    assert!(outcome.is_resolved());
    assert_eq!(resolver.snapshot().nearest(), Some(&hospital_b()));
}

#[tokio::test]
async fn test_subscribers_receive_published_snapshot() {
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(bangalore())),
        Arc::new(StaticFacilities::new(vec![hospital_a(), hospital_b()])),
    )
    .unwrap();
    let mut rx = resolver.subscribe();
    let mut phase_rx = resolver.subscribe_phase();

    resolver.locate_and_resolve().await;

    assert!(rx.has_changed().unwrap());
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.current_position(), bangalore());
    assert_eq!(seen.nearest(), Some(&hospital_b()));

    assert!(phase_rx.has_changed().unwrap());
    assert_eq!(*phase_rx.borrow_and_update(), ResolvePhase::Resolved);

    let overlay = MapOverlay::from_snapshot(&seen);
    assert_eq!(overlay.markers[2].kind, MarkerKind::NearestHospital);
}

/// Answers slowly for one center and quickly for every other.
struct SlowAround {
    slow_center: Coordinate,
}

#[async_trait]
impl FacilityQueryClient for SlowAround {
    async fn query(
        &self,
        center: Coordinate,
        _radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        let delay = if center == self.slow_center { 300 } else { 10 };
        sleep(Duration::from_millis(delay)).await;
        Ok(vec![Facility::new(format!("Near {}", center), center)])
    }

    fn name(&self) -> &str {
        "SlowAround"
    }
}

#[tokio::test]
async fn test_latest_request_wins_when_calls_overlap() {
    let first = coord(12.9716, 77.5946);
    let second = coord(51.5074, -0.1278);
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(first)),
        Arc::new(SlowAround { slow_center: first }),
    )
    .unwrap();

    let (earlier, later) = tokio::join!(resolver.resolve(first), resolver.resolve(second));

    assert_eq!(earlier, ResolveOutcome::Superseded);
    assert!(later.is_resolved());

    let snapshot = resolver.snapshot();
    assert_eq!(snapshot.current_position(), second);
    assert_eq!(snapshot.nearest().unwrap().position, second);
    assert_eq!(resolver.phase(), ResolvePhase::Resolved);
}

#[tokio::test]
async fn test_request_issued_mid_query_supersedes_it() {
    let first = coord(12.9716, 77.5946);
    let second = coord(51.5074, -0.1278);
    let resolver = NearestFacilityResolver::new(
        config(),
        Arc::new(FixedPosition::new(first)),
        Arc::new(SlowAround { slow_center: first }),
    )
    .unwrap();

    let (earlier, later) = tokio::join!(resolver.resolve(first), async {
        sleep(Duration::from_millis(20)).await;
        resolver.resolve(second).await
    });

    assert_eq!(earlier, ResolveOutcome::Superseded);
    assert!(later.is_resolved());
    assert_eq!(resolver.snapshot().current_position(), second);
}
