//! Access to the translator HTTP API.

use crate::{
    errors::{Error, Result},
    models::{
        ErrorResponse, HistoryPage, SaveHistoryRequest, SaveHistoryResponse, SuccessResponse,
        TranslateRequest, TranslateResponse, TranslationRecord,
    },
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// The server operations the client application uses
#[async_trait]
pub trait Backend: Send + Sync {
    /// Translates Korean text and returns the English result.
    async fn translate(&self, korean_text: &str) -> Result<String>;

    /// Saves a translation and returns its id.
    async fn save(&self, request: &SaveHistoryRequest) -> Result<i64>;

    /// Fetches the history page starting at `offset`.
    async fn list(&self, offset: u64) -> Result<Vec<TranslationRecord>>;

    /// Deletes the record with `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}

/// [`Backend`] over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend for the server at `base_url`, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("prompt-translator-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Creates a backend reusing an existing reqwest client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decodes a success body, or turns an error body into [`Error::Api`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text).map_or_else(
        |_| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        },
        |body| body.error,
    );
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl Backend for HttpBackend {
    async fn translate(&self, korean_text: &str) -> Result<String> {
        let request = TranslateRequest {
            korean_text: Some(korean_text.to_string()),
        };
        let response = self
            .http
            .post(self.url("/translate"))
            .json(&request)
            .send()
            .await?;
        let body: TranslateResponse = read_json(response).await?;
        Ok(body.english_text)
    }

    async fn save(&self, request: &SaveHistoryRequest) -> Result<i64> {
        let response = self
            .http
            .post(self.url("/history"))
            .json(request)
            .send()
            .await?;
        let body: SaveHistoryResponse = read_json(response).await?;
        debug!(id = body.id, "Saved translation");
        Ok(body.id)
    }

    async fn list(&self, offset: u64) -> Result<Vec<TranslationRecord>> {
        let response = self
            .http
            .get(self.url("/history"))
            .query(&[("offset", offset)])
            .send()
            .await?;
        let body: HistoryPage = read_json(response).await?;
        Ok(body.translations)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .http
            .delete(self.url("/history"))
            .query(&[("id", id)])
            .send()
            .await?;
        let _: SuccessResponse = read_json(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_translate() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/translate")
            .match_body(Matcher::Json(json!({ "koreanText": "안녕" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "englishText": "Hello" }).to_string())
            .create_async()
            .await;

        let backend = HttpBackend::new(server.url())?;
        assert_eq!(backend.translate("안녕").await?, "Hello");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_error_body_becomes_api_error() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/translate")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "한국어 텍스트를 입력해주세요." }).to_string())
            .create_async()
            .await;

        let backend = HttpBackend::new(server.url())?;
        match backend.translate("").await {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "한국어 텍스트를 입력해주세요.");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_non_json_error_uses_status_reason() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/history")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let backend = HttpBackend::new(server.url())?;
        match backend.list(0).await {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_list_and_delete_send_query_parameters() -> Result<()> {
        let mut server = Server::new_async().await;
        let list_mock = server
            .mock("GET", "/history")
            .match_query(Matcher::UrlEncoded("offset".into(), "40".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "translations": [] }).to_string())
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", "/history")
            .match_query(Matcher::UrlEncoded("id".into(), "7".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "success": true }).to_string())
            .create_async()
            .await;

        let backend = HttpBackend::new(format!("{}/", server.url()))?;
        assert!(backend.list(40).await?.is_empty());
        backend.delete(7).await?;

        list_mock.assert_async().await;
        delete_mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_save_omits_missing_edit() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/history")
            .match_body(Matcher::Json(
                json!({ "koreanText": "안녕", "englishText": "Hello" }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "id": 3, "success": true }).to_string())
            .create_async()
            .await;

        let backend = HttpBackend::new(server.url())?;
        let id = backend
            .save(&SaveHistoryRequest {
                korean_text: "안녕".to_string(),
                english_text: "Hello".to_string(),
                edited_english_text: None,
            })
            .await?;
        assert_eq!(id, 3);
        mock.assert_async().await;
        Ok(())
    }
}
