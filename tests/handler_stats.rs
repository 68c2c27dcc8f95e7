mod common;

use sqlx::PgPool;

#[sqlx::test]
async fn test_stats_without_clicks(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/a", "Lc4KTFBE").await;
    let server = common::make_server(pool);

    let response = server.get("/stats/Lc4KTFBE").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_code"], "Lc4KTFBE");
    assert_eq!(body["original_url"], "https://example.com/a");
    assert_eq!(body["total_clicks"], 0);
    assert_eq!(body["recent_clicks"], serde_json::json!([]));
    assert!(body["created_at"].is_string());
}

#[sqlx::test]
async fn test_stats_counts_redirects(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/a", "Lc4KTFBE").await;
    let server = common::make_server(pool);

    for i in 0..3 {
        server
            .get("/Lc4KTFBE")
            .add_header("Referer", format!("https://ref{i}.example"))
            .await;
    }

    let body = server.get("/stats/Lc4KTFBE").await.json::<serde_json::Value>();

    assert_eq!(body["total_clicks"], 3);
    let recent = body["recent_clicks"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["referrer"], "https://ref2.example");
    assert!(recent[0]["user_agent"].is_null());
    assert!(recent[0]["timestamp"].is_string());
}

#[sqlx::test]
async fn test_stats_limits_recent_clicks(pool: PgPool) {
    let url_id = common::create_test_url(&pool, "https://example.com/a", "Lc4KTFBE").await;
    for i in 0..15 {
        common::create_test_click(&pool, url_id, Some(&format!("ref-{i}"))).await;
    }
    let server = common::make_server(pool);

    let body = server.get("/stats/Lc4KTFBE").await.json::<serde_json::Value>();

    assert_eq!(body["total_clicks"], 15);
    let recent = body["recent_clicks"].as_array().unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0]["referrer"], "ref-14");
    assert_eq!(recent[9]["referrer"], "ref-5");
}

#[sqlx::test]
async fn test_stats_does_not_record_click(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/a", "Lc4KTFBE").await;
    let server = common::make_server(pool.clone());

    server.get("/stats/Lc4KTFBE").await.assert_status_ok();

    assert_eq!(common::count_clicks(&pool).await, 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    server.get("/stats/missing1").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_stats_code_too_long(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .get("/stats/abcdefghijk")
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_stats_invalid_utf8_code(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/stats/%FF").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}
