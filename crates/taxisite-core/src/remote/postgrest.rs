use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use super::RemoteStore;
use taxisite_types::{CloudSettings, SiteConfig, SyncError};

pub const TABLE: &str = "site_config";
pub const DOCUMENT_ID: u32 = 1;

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    data: Option<Value>,
}

/// Supabase-style PostgREST endpoint at `{url}/rest/v1/site_config`.
#[derive(Debug, Clone)]
pub struct PostgrestRemote {
    client: Client,
    settings: CloudSettings,
}

/// Accepts absolute `http`/`https` URLs only.
pub fn parse_base_url(raw: &str) -> Result<Url, SyncError> {
    let invalid = |reason: String| SyncError::InvalidUrl { url: raw.to_string(), reason };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        "http" | "https" => Err(invalid("missing host".to_string())),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

impl PostgrestRemote {
    /// Unconfigured settings are accepted; every call then fails with `NotConfigured`.
    pub fn new(settings: CloudSettings) -> Result<Self, SyncError> {
        if settings.is_configured() {
            parse_base_url(settings.base_url())?;
        }
        let client = Client::builder()
            .build()
            .map_err(|e| SyncError::network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: CloudSettings) -> Self {
        Self { client, settings }
    }

    pub(crate) fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.settings.base_url(), TABLE)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", self.settings.key.as_str())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.settings.key))
    }

    fn ensure_configured(&self) -> Result<(), SyncError> {
        if self.settings.is_configured() {
            Ok(())
        } else {
            Err(SyncError::NotConfigured)
        }
    }
}

async fn error_for_status(resp: Response) -> Result<Response, SyncError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(SyncError::HttpStatus { status: status.as_u16(), body })
}

#[async_trait]
impl RemoteStore for PostgrestRemote {
    async fn fetch(&self) -> Result<Value, SyncError> {
        self.ensure_configured()?;
        let id_filter = format!("eq.{DOCUMENT_ID}");

        let resp = self
            .authorized(self.client.get(self.table_url()))
            .query(&[("select", "data"), ("id", id_filter.as_str())])
            .send()
            .await
            .map_err(|e| SyncError::network(e.to_string()))?;
        let resp = error_for_status(resp).await?;

        let rows: Vec<Row> =
            resp.json().await.map_err(|e| SyncError::malformed(e.to_string()))?;

        match rows.into_iter().next().and_then(|row| row.data) {
            Some(Value::Null) | None => Err(SyncError::Empty),
            Some(data) => Ok(data),
        }
    }

    async fn publish(&self, config: &SiteConfig) -> Result<(), SyncError> {
        self.ensure_configured()?;
        let id_filter = format!("eq.{DOCUMENT_ID}");

        let resp = self
            .authorized(self.client.patch(self.table_url()))
            .query(&[("id", id_filter.as_str())])
            .header("Prefer", "return=minimal")
            .json(&json!({ "data": config }))
            .send()
            .await
            .map_err(|e| SyncError::network(e.to_string()))?;

        error_for_status(resp).await.map(|_| ())
    }
}
