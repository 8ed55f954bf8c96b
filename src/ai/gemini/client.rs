use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Minimal Gemini REST client for `generateContent`.
///
/// Every call builds its own `reqwest::Client`, so no connection is shared
/// between exchanges.
#[derive(Clone)]
pub struct GeminiHttpClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example
    /// `gemini-1.5-flash-latest`); a `models/` prefix is stripped.
    pub fn new(api_key: String, model: String) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides reqwest's default (unbounded) request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_http_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    /// Sends one `generateContent` request and parses the JSON reply.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        tracing::debug!("Sending generateContent request to {}", url);

        let response = self
            .build_http_client()?
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Failed to send request to Gemini: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.map_err(|e| e.without_url())?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response.text().await.map_err(|e| e.without_url())?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::ResponseParse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::request::build_request;
    use crate::ai::gemini::test_support;
    use wiremock::matchers::{body_json, header, query_param};
    use wiremock::{MockServer, ResponseTemplate};

    fn make_client(server: &MockServer) -> GeminiHttpClient {
        GeminiHttpClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_posts_json_with_key_in_query() {
        let server = MockServer::start().await;
        let request = build_request(&[0x89, 0x50], "image/png", "read");

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(query_param("key", "test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "contents": [{
                    "parts": [
                        { "text": "read" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVA=" } }
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = make_client(&server).generate_content(&request).await.unwrap();
        assert_eq!(response.candidates.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_status_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .generate_content(&build_request(b"x", "image/png", "read"))
            .await
            .unwrap_err();
        match err {
            Error::ApiStatus { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "forbidden");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .generate_content(&build_request(b"x", "image/png", "read"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ResponseParse(_)));
    }

    #[tokio::test]
    async fn test_strips_models_prefix_from_model_id() {
        let server = MockServer::start().await;

        test_support::post_path("/v1beta/models/gemini-2.5-flash:generateContent")
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            GeminiHttpClient::new("k".to_string(), "models/gemini-2.5-flash".to_string())
                .with_base_url(format!("{}/", server.uri()));
        assert_eq!(client.model(), "gemini-2.5-flash");

        client
            .generate_content(&build_request(b"x", "image/png", "read"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let err = GeminiHttpClient::new("k".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url("http://127.0.0.1:1".to_string())
            .with_timeout(Some(Duration::from_secs(5)))
            .generate_content(&build_request(b"x", "image/png", "read"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_transport_error_text_hides_api_key() {
        let err = GeminiHttpClient::new("secret-key-123".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url("http://127.0.0.1:1".to_string())
            .with_timeout(Some(Duration::from_secs(5)))
            .generate_content(&build_request(b"x", "image/png", "read"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(_)));
        assert!(!err.to_string().contains("secret-key-123"));
        assert!(!format!("{:?}", err).contains("secret-key-123"));
    }
}
