//! Production REST implementation of [`ChatService`].

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use sl_domain::config::BackendConfig;
use sl_domain::error::{Error, Result};
use sl_domain::trace::TraceEvent;

use crate::service::ChatService;
use crate::types::{AnalyticsReport, ChatRequest, ChatReply};

/// Typed HTTP client for the support service REST API.
///
/// One call per dispatch: no retry, and no timeout unless one is configured
/// (an unresponsive backend leaves the call outstanding by design).
pub struct RestChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestChatClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // ── Internal HTTP helpers with tracing ─────────────────────────

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let start = Instant::now();
        let result = self.http.post(&url).json(body).send().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                TraceEvent::BackendCall {
                    endpoint: path.to_string(),
                    status: 0,
                    duration_ms,
                }
                .emit();
                return Err(from_reqwest(e));
            }
        };

        let status = resp.status();
        TraceEvent::BackendCall {
            endpoint: path.to_string(),
            status: status.as_u16(),
            duration_ms,
        }
        .emit();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json().await.map_err(from_reqwest)
    }

    async fn get_json<Resp>(&self, path: &str) -> Result<Resp>
    where
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let start = Instant::now();
        let resp = self.http.get(&url).send().await.map_err(from_reqwest)?;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = resp.status();

        TraceEvent::BackendCall {
            endpoint: path.to_string(),
            status: status.as_u16(),
            duration_ms,
        }
        .emit();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json().await.map_err(from_reqwest)
    }
}

#[async_trait::async_trait]
impl ChatService for RestChatClient {
    async fn send_chat(&self, req: ChatRequest) -> Result<ChatReply> {
        self.post_json("/api/chat", &req).await
    }

    async fn analytics(&self, user_id: &str) -> Result<AnalyticsReport> {
        self.get_json(&format!("/api/analytics/{user_id}")).await
    }
}

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeout errors map to [`Error::Timeout`]; everything else (transport
/// failures and undecodable response bodies alike) maps to [`Error::Http`].
fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}
