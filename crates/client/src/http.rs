use super::*;
use cartsim_core::LOGIN_PATH;
use cartsim_core::UPDATE_PATH;
use cartsim_dto::ErrorBody;
use cartsim_dto::LocationUpdate;
use cartsim_dto::LoginRequest;
use cartsim_dto::LoginResponse;

/// [`Api`] over HTTP against a CartSync backend.
/// No request timeout is configured; a hung call blocks its caller.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let base = base.trim_end_matches('/');
        reqwest::Url::parse(base).map_err(|e| anyhow::anyhow!("invalid base url {}: {}", base, e))?;
        Ok(Self {
            base: base.to_string(),
            client: reqwest::Client::new(),
        })
    }
    pub fn base(&self) -> &str {
        &self.base
    }
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
    /// Turn a non-2xx response into [`HttpError::Server`], preferring the
    /// backend's `{"error": ...}` message over the raw body.
    async fn reject(response: reqwest::Response) -> HttpError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| Some(body).filter(|b| !b.trim().is_empty()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        HttpError::Server {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait::async_trait]
impl Api for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        log::debug!("[http] POST {}", LOGIN_PATH);
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| HttpError::Parse(e.to_string()))
    }
    async fn update(&self, token: &Token, update: &LocationUpdate) -> Result<(), HttpError> {
        log::debug!("[http] POST {}", UPDATE_PATH);
        let response = self
            .client
            .post(self.url(UPDATE_PATH))
            .bearer_auth(token.as_str())
            .json(update)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }
}
