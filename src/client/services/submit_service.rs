//! One-shot submission of the form text to the configured HTTP endpoint.
//!
//! Every outcome renders to a string for the output area: a 2xx response as
//! the pretty-printed body, a non-2xx response as a diagnostic report, and a
//! transport failure as a plain `Error: ...` line. Nothing here is retried.

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;

/// Wire format of a submission.
#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    text: &'a str,
}

/// Diagnostic object rendered for non-2xx responses. Field order here is the
/// render order.
#[derive(Debug, Serialize)]
struct FailureReport {
    ok: bool,
    status: u16,
    #[serde(rename = "statusText")]
    status_text: String,
    data: Value,
}

pub struct SubmitService {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmitService {
    pub fn new(config: &ClientConfig) -> Self {
        // No request timeout: a submission may hang as long as the transport
        // allows, and the form stays in its loading state until then.
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint_url.clone(),
        }
    }

    /// Run one submission and return the text for the output area.
    pub async fn submit_text(&self, text: &str) -> String {
        log::info!("POST {} ({} bytes)", self.endpoint, text.len());
        match self.send(text).await {
            Ok(output) => output,
            Err(e) => {
                log::warn!("submission failed: {:#}", e);
                render_transport_error(&e)
            }
        }
    }

    async fn send(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SubmitRequest { text })
            .send()
            .await?;

        let status = response.status();
        let data = decode_body(response).await?;
        log::debug!("response status {}", status);
        Ok(render_outcome(status, data))
    }
}

/// Decode the body by the response's content-type header: parsed JSON when it
/// says `application/json`, the raw text as a JSON string otherwise. A body
/// that announces JSON but fails to parse is an error, same as an unreadable
/// body.
async fn decode_body(response: reqwest::Response) -> Result<Value> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    let raw = response.text().await?;
    if is_json {
        Ok(serde_json::from_str(&raw)?)
    } else {
        Ok(Value::String(raw))
    }
}

fn render_outcome(status: StatusCode, data: Value) -> String {
    if status.is_success() {
        pretty(&data)
    } else {
        let report = FailureReport {
            ok: false,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            data,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| format!("{:?}", report))
    }
}

fn render_transport_error(err: &anyhow::Error) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Error: Unknown error occurred".to_string()
    } else {
        format!("Error: {}", message)
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
