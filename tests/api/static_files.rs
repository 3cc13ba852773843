use anyhow::Result;
use reqwest::{header::LOCATION, StatusCode};

use crate::helpers::TestApp;

#[tokio::test]
async fn root_redirects_to_index() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.http_client.get(app.url("/")).send().await?;

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("/static/index.html")
    );

    Ok(())
}

#[tokio::test]
async fn static_index_is_served() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(app.url("/static/index.html"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await?;
    assert!(body.contains("Mergington High School"));

    Ok(())
}

#[tokio::test]
async fn missing_static_file_returns_404() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .get(app.url("/static/does-not-exist.js"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
