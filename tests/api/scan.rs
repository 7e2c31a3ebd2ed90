use crate::helpers::{spawn_app, spawn_app_with, StubFetcher};

#[tokio::test]
async fn scan_lists_found_keywords_in_keyword_order() {
    let app = spawn_app().await;

    let response = app.post_scan_form("https://pharma.example.com").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Keyword Highlights"));
    assert!(body.contains("<code>oncology</code></strong> found <strong>2 time(s)"));
    assert!(body.contains("<code>biotech</code></strong> found <strong>1 time(s)"));
    assert!(body.contains("<code>drug</code></strong> found <strong>1 time(s)"));
    assert!(body.contains("<code>drugs</code></strong> found <strong>1 time(s)"));
    assert!(body.contains("<code>r&amp;d</code></strong> found <strong>1 time(s)"));
    // Only in <head> and <script>
    assert!(!body.contains("<code>pharma</code>"));

    let oncology = body.find("<code>oncology</code>").unwrap();
    let biotech = body.find("<code>biotech</code>").unwrap();
    let drug = body.find("<code>drug</code>").unwrap();
    assert!(oncology < biotech && biotech < drug);

    assert!(body.contains(r#"action="/export""#));
}

#[tokio::test]
async fn scan_without_hits_says_so() {
    let app = spawn_app_with(StubFetcher::Page(
        "<html><body><p>Nothing to see here.</p></body></html>".to_string(),
    ))
    .await;

    let response = app.post_scan_form("http://quiet.example.com").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("No target keywords found in the page body."));
}

#[tokio::test]
async fn scan_rejects_invalid_urls() {
    let app = spawn_app().await;
    let test_cases = vec!["", "Enter URL here...", "www.example.com", "ftp://example.com"];

    for invalid_url in test_cases {
        let response = app.post_scan_form(invalid_url).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The page did not reject {:?}",
            invalid_url
        );
        let body = response.text().await.unwrap();
        assert!(body.contains("Please enter a valid URL starting with"));
        assert!(!body.contains("Keyword Highlights"));
    }
}

#[tokio::test]
async fn scan_reports_browser_failures() {
    let app = spawn_app_with(StubFetcher::Broken).await;

    let response = app.post_scan_form("https://pharma.example.com").await;

    assert_eq!(response.status().as_u16(), 502);
    let body = response.text().await.unwrap();
    assert!(body.contains("Could not start the browser driver"));
}

#[tokio::test]
async fn scan_without_url_field_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/scan", app.address))
        .form(&[("website", "https://pharma.example.com")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}
