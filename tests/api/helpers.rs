//! Spawns a fresh application per test and wraps the HTTP calls the tests make.
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::OnceLock,
};

use anyhow::Result;
use clubhouse::{init_dbg_tracing, model::Directory, App, AppState};
use reqwest::{redirect::Policy, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

/// Set `TEST_LOG` to see the application logs while running the tests.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Serves a freshly seeded directory on a separate task.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_capacity(false).await
    }

    pub async fn spawn_with_capacity(enforce_capacity: bool) -> Result<Self> {
        init_test_subscriber();

        let app_state = AppState::new(
            Directory::seeded(enforce_capacity),
            PathBuf::from("static"),
        );
        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {addr}");

        tokio::spawn(clubhouse::serve(App::new(app_state, listener)));

        // Redirects are asserted on, not followed.
        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;

        Ok(TestApp { addr, http_client })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get_activities(&self) -> Result<Response> {
        let res = self.http_client.get(self.url("/activities")).send().await?;
        Ok(res)
    }

    /// The roster of `activity` as currently served by `GET /activities`.
    pub async fn participants(&self, activity: &str) -> Result<Vec<String>> {
        let body: Value = self.get_activities().await?.json().await?;
        let participants = serde_json::from_value(body[activity]["participants"].clone())?;
        Ok(participants)
    }

    pub async fn post_signup(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .post(self.url(&format!("/activities/{activity}/signup")))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(res)
    }

    pub async fn delete_participant(&self, activity: &str, email: &str) -> Result<Response> {
        let res = self
            .http_client
            .delete(self.url(&format!("/activities/{activity}/participants")))
            .query(&[("email", email)])
            .send()
            .await?;
        Ok(res)
    }
}
