mod support;

use batterytech_server::ApiConfig;
use serde_json::{json, Value};
use support::{get, header, spawn_server};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).expect("json body")
}

#[tokio::test]
async fn battery_lookup_returns_the_record() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, head, body) = get(addr, "/api/batteries/lithium-ion").await;
    assert_eq!(status, 200);
    assert!(header(&head, "content-type").is_some_and(|v| v.starts_with("application/json")));
    let record = parse(&body);
    assert_eq!(record["name"], "Lithium-Ion Battery");
    assert_eq!(record["type"], "Secondary");
    assert_eq!(record["performance"]["operatingTemperature"], json!([-20.0, 60.0]));
}

#[tokio::test]
async fn unknown_battery_is_404_with_message() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, body) = get(addr, "/api/batteries/not-a-real-id").await;
    assert_eq!(status, 404);
    assert_eq!(parse(&body), json!({"message": "Battery not found"}));
}

#[tokio::test]
async fn compare_returns_requested_records_in_store_order() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, body) = get(addr, "/api/compare?ids=lead-acid,lithium-ion").await;
    assert_eq!(status, 200);
    let ids: Vec<String> = parse(&body)
        .as_array()
        .expect("array")
        .iter()
        .map(|b| b["id"].as_str().expect("id").to_string())
        .collect();
    assert_eq!(ids, vec!["lithium-ion", "lead-acid"]);

    let (status, _, body) = get(addr, "/api/compare?ids=lithium-ion,nope").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body).as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn compare_parameter_errors_are_400() {
    let addr = spawn_server(ApiConfig::default()).await;
    for path in ["/api/compare", "/api/compare?ids=", "/api/compare?ids=,,"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(parse(&body), json!({"message": "Battery IDs are required"}));
    }
    let (status, _, body) = get(addr, "/api/compare?ids=a,b,c,d").await;
    assert_eq!(status, 400);
    assert_eq!(
        parse(&body),
        json!({"message": "At most 3 batteries can be compared"})
    );
}

#[tokio::test]
async fn quiz_endpoint_samples_the_unit() {
    let addr = spawn_server(ApiConfig {
        quiz_seed: Some(42),
        ..ApiConfig::default()
    })
    .await;
    let (status, _, body) = get(addr, "/api/quiz/1").await;
    assert_eq!(status, 200);
    let questions = parse(&body);
    let questions = questions.as_array().expect("array");
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q["unit"] == 1));
    assert!(questions.iter().all(|q| q.get("correctAnswer").is_some()));
}

#[tokio::test]
async fn quiz_sample_size_is_configurable() {
    let addr = spawn_server(ApiConfig {
        quiz_sample_size: 2,
        ..ApiConfig::default()
    })
    .await;
    let (_, _, body) = get(addr, "/api/quiz/2").await;
    assert_eq!(parse(&body).as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn seeded_servers_agree_on_quiz_order() {
    let seeded = || ApiConfig {
        quiz_seed: Some(7),
        ..ApiConfig::default()
    };
    let a = spawn_server(seeded()).await;
    let b = spawn_server(seeded()).await;
    assert_eq!(get(a, "/api/quiz/3").await.2, get(b, "/api/quiz/3").await.2);
}

#[tokio::test]
async fn quiz_unit_errors() {
    let addr = spawn_server(ApiConfig::default()).await;
    for path in ["/api/quiz/0", "/api/quiz/99"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 404, "{path}");
        assert_eq!(parse(&body), json!({"message": "Quiz not found for this unit"}));
    }
    for path in ["/api/quiz/abc", "/api/quiz/-1", "/api/quiz/1.5"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 400, "{path}");
        assert_eq!(parse(&body), json!({"message": "Invalid quiz unit"}));
    }
}

#[tokio::test]
async fn listing_endpoints_serve_the_dataset() {
    let addr = spawn_server(ApiConfig::default()).await;

    let (status, _, body) = get(addr, "/api/batteries").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body).as_array().expect("array").len(), 4);

    let (status, _, body) = get(addr, "/api/units").await;
    assert_eq!(status, 200);
    let units = parse(&body);
    assert_eq!(units[0]["unit"], 1);
    assert_eq!(units.as_array().expect("array").len(), 5);

    let (status, _, body) = get(addr, "/api/timeline").await;
    assert_eq!(status, 200);
    let events = parse(&body);
    let years: Vec<i64> = events
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["year"].as_i64().expect("year"))
        .collect();
    assert!(years.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn health_and_unknown_routes() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, head, body) = get(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body), json!({"status": "ok"}));
    assert!(header(&head, "x-request-id").is_some_and(|v| v.starts_with("req-")));
    assert!(header(&head, "ratelimit-limit").is_none());

    let (status, _, body) = get(addr, "/api/nothing-here").await;
    assert_eq!(status, 404);
    assert_eq!(parse(&body), json!({"message": "Route not found"}));
}

#[tokio::test]
async fn failed_request_does_not_poison_later_ones() {
    let addr = spawn_server(ApiConfig::default()).await;
    assert_eq!(get(addr, "/api/quiz/abc").await.0, 400);
    assert_eq!(get(addr, "/api/batteries/zinc-carbon").await.0, 200);
}

#[tokio::test]
async fn battery_listing_filters_by_type() {
    let addr = spawn_server(ApiConfig::default()).await;
    let ids_of = |body: &str| -> Vec<String> {
        parse(body)
            .as_array()
            .expect("array")
            .iter()
            .map(|b| b["id"].as_str().expect("id").to_string())
            .collect()
    };

    let (status, _, body) = get(addr, "/api/batteries?type=secondary").await;
    assert_eq!(status, 200);
    assert_eq!(ids_of(&body), vec!["lithium-ion", "lead-acid"]);

    let (_, _, body) = get(addr, "/api/batteries?type=fuel-cell").await;
    assert_eq!(ids_of(&body), vec!["pem-fuel-cell"]);

    let (_, _, body) = get(addr, "/api/batteries?type=all").await;
    assert_eq!(ids_of(&body).len(), 4);

    let (status, _, body) = get(addr, "/api/batteries?type=nuclear").await;
    assert_eq!(status, 400);
    assert_eq!(parse(&body), json!({"message": "Invalid battery type"}));
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_route() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, body) = get(addr, "/api/batteries/").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body).as_array().expect("array").len(), 4);

    let (status, _, body) = get(addr, "/api/batteries/lead-acid/").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body)["id"], "lead-acid");

    let (status, _, body) = get(addr, "/api/compare/?ids=zinc-carbon").await;
    assert_eq!(status, 200);
    assert_eq!(parse(&body).as_array().expect("array").len(), 1);

    assert_eq!(get(addr, "/health/").await.0, 200);
}
