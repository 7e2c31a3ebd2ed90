use serde_json::json;

use crate::helpers::{spawn_app, spawn_app_with, StubFetcher};

#[tokio::test]
async fn api_scan_returns_hits_as_ordered_list() {
    let app = spawn_app().await;

    let response = app
        .post_api_json("/scan", json!({ "url": "https://pharma.example.com/about" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "url": "https://pharma.example.com/about",
            "hits": [
                { "keyword": "oncology", "count": 2 },
                { "keyword": "biotech", "count": 1 },
                { "keyword": "drug", "count": 1 },
                { "keyword": "drugs", "count": 1 },
                { "keyword": "r&d", "count": 1 },
            ]
        })
    );
}

#[tokio::test]
async fn api_scan_rejects_invalid_url() {
    let app = spawn_app().await;

    let response = app.post_api_json("/scan", json!({ "url": "pharma" })).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn api_scan_reports_browser_failures() {
    let app = spawn_app_with(StubFetcher::Broken).await;

    let response = app
        .post_api_json("/scan", json!({ "url": "https://pharma.example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 502);
}

#[tokio::test]
async fn api_scan_text_counts_whole_words() {
    let app = spawn_app().await;

    let response = app
        .post_api_json("/scan/text", json!({ "text": "drugs and drug trials" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "hits": [
            { "keyword": "drug", "count": 1 },
            { "keyword": "drugs", "count": 1 },
        ]})
    );
}

#[tokio::test]
async fn api_scan_text_with_no_matches_is_empty() {
    let app = spawn_app().await;

    for text in ["", "nothing relevant here", "pharmaceutical biotechnology"] {
        let response = app.post_api_json("/scan/text", json!({ "text": text })).await;

        assert_eq!(response.status().as_u16(), 200);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "hits": [] }), "text was {:?}", text);
    }
}
