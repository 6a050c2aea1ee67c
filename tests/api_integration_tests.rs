//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use prime_cache::{
    api::create_router, service::TrialDivisionPrimeService, AppState, SieveCache,
};
use serde_json::Value;
use tower::ServiceExt;

const PRIMES_UNDER_100: &str = "[2,3,5,7,11,13,17,19,23,29,31,37,41,43,47,53,59,61,67,71,73,79,83,89,97]";

// == Helper Functions ==

fn create_test_app() -> Router {
    let cache = SieveCache::with_initial_bound(1_000).unwrap();
    create_router(AppState::new(cache))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Body) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, response.into_body())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// == Index Tests ==

#[tokio::test]
async fn test_index_greeting() {
    let (status, body) = get(create_test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    let text = body_to_string(body).await;
    assert!(text.contains("Welcome to Prime Generator"));
    assert!(text.contains("/numprimes/lower/upper"));
}

// == PRIMES Endpoint Tests ==

#[tokio::test]
async fn test_primes_under_100() {
    let (status, body) = get(create_test_app(), "/primes/0/100").await;

    assert_eq!(status, StatusCode::OK);
    let text = body_to_string(body).await;
    assert!(text.contains(PRIMES_UNDER_100));
}

#[tokio::test]
async fn test_primes_response_shape() {
    let (status, body) = get(create_test_app(), "/primes/10/20").await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["primes"], serde_json::json!([11, 13, 17, 19]));
    assert_eq!(json["num_primes"], 4);
    assert!(json["elapsed_nanos"].is_u64());
    assert!(json["elapsed_millis"].is_u64());
}

#[tokio::test]
async fn test_primes_empty_range() {
    let (status, body) = get(create_test_app(), "/primes/42/42").await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["num_primes"], 0);
    assert_eq!(json["primes"], serde_json::json!([]));
}

#[tokio::test]
async fn test_primes_beyond_initial_bound_grows_cache() {
    let app = create_test_app();

    let (status, body) = get(app.clone(), "/primes/104720/104740").await;
    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["primes"], serde_json::json!([104723, 104729]));

    let (status, body) = get(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["service"], "cached-sieve");
    assert_eq!(json["cache"]["bound"], 104740);
    assert_eq!(json["cache"]["installs"], 1);
}

// == NUMPRIMES Endpoint Tests ==

#[tokio::test]
async fn test_numprimes_under_100() {
    let (status, body) = get(create_test_app(), "/numprimes/0/100").await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["num_primes"], 25);
    assert!(json.get("primes").is_none());
}

#[tokio::test]
async fn test_numprimes_under_one_million() {
    let (status, body) = get(create_test_app(), "/numprimes/0/1000000").await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["num_primes"], 78498);
}

// == Error Response Tests ==

#[tokio::test]
async fn test_inverted_range_rejected() {
    let (status, body) = get(create_test_app(), "/primes/5/2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = body_to_json(body).await;
    assert!(json["error"].as_str().unwrap().contains("greater than upper"));
}

#[tokio::test]
async fn test_negative_bound_rejected() {
    let (status, body) = get(create_test_app(), "/numprimes/-1/10").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = body_to_json(body).await;
    assert!(json["error"].as_str().unwrap().contains("negative"));
}

#[tokio::test]
async fn test_oversized_upper_bound_rejected() {
    let app = create_test_app();

    let (status, body) = get(app.clone(), "/numprimes/0/9223372036854775807").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = body_to_json(body).await;
    assert!(json["error"].as_str().unwrap().contains("exceeds maximum"));

    let (status, _) = get(app.clone(), "/primes/0/2147483648").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The server keeps answering and the cache was never grown
    let (status, body) = get(app, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["cache"]["bound"], 1000);
    assert_eq!(json["cache"]["rebuilds"], 0);
}

#[tokio::test]
async fn test_non_numeric_bound_rejected() {
    let (status, _) = get(create_test_app(), "/primes/a/b").await;

    // Path extraction failure is reported by Axum as a client error
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rejected_query_does_not_touch_cache() {
    let app = create_test_app();

    let (status, _) = get(app.clone(), "/primes/5000/10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(app, "/stats").await;
    let json = body_to_json(body).await;
    assert_eq!(json["cache"]["bound"], 1000);
    assert_eq!(json["cache"]["rebuilds"], 0);
}

// == Service Parity Tests ==

#[tokio::test]
async fn test_trial_division_matches_cache() {
    let cached = create_test_app();
    let simple = create_router(AppState::new(TrialDivisionPrimeService::new()));

    for uri in ["/primes/0/100", "/primes/900/1200", "/primes/7/8", "/primes/0/0"] {
        let (_, cached_body) = get(cached.clone(), uri).await;
        let (_, simple_body) = get(simple.clone(), uri).await;

        let cached_json = body_to_json(cached_body).await;
        let simple_json = body_to_json(simple_body).await;
        assert_eq!(cached_json["primes"], simple_json["primes"], "Mismatch for {}", uri);
    }
}

// == Concurrency Tests ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_grow_cache() {
    let app = create_test_app();

    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let upper = i * 20_000;
                let (status, body) = get(app, &format!("/numprimes/0/{}", upper)).await;
                assert_eq!(status, StatusCode::OK);
                let json = body_to_json(body).await;
                (upper, json["num_primes"].as_u64().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (upper, count) = handle.await.unwrap();
        let expected = SieveCache::with_initial_bound(upper as i64)
            .unwrap()
            .snapshot()
            .len() as u64;
        assert_eq!(count, expected, "Wrong count below {}", upper);
    }

    let (_, body) = get(app, "/stats").await;
    let json = body_to_json(body).await;
    assert_eq!(json["cache"]["bound"], 160_000);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json = body_to_json(body).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
