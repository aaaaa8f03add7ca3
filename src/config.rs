use std::env;

/// Fallback endpoint used when SUBMIT_API_URL is not set.
pub const DEFAULT_ENDPOINT: &str =
    "https://9z5r8j9h2d.execute-api.ap-southeast-2.amazonaws.com/submit";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            endpoint_url: env::var("SUBMIT_API_URL")
                .map(sanitize_endpoint)
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

/// Keep an override only if it parses as a URL.
fn sanitize_endpoint(raw: String) -> String {
    match url::Url::parse(&raw) {
        Ok(_) => raw,
        Err(e) => {
            log::warn!(
                "SUBMIT_API_URL {:?} is not a valid URL ({}); using the default endpoint",
                raw,
                e
            );
            DEFAULT_ENDPOINT.to_string()
        }
    }
}
