use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api::types::{
    ClientInfo, ConnectRequest, ConnectResponse, DisconnectRequest, LoginRequest, LoginResponse,
    TextReply, TextRequest,
};
use crate::error::OpsError;

const LOGIN_PATH: &str = "/api/v1/auth/login";
const CONNECT_PATH: &str = "/api/v1/mcp/connect";
const TEXT_PATH: &str = "/api/v1/mcp/text";
const DISCONNECT_PATH: &str = "/api/v1/mcp/disconnect";

/// Thin client over the four Alfred MCP Server endpoints.
///
/// `login` yields a JWT; the session endpoints take it back as a bearer
/// credential. No retries: every call is a single request.
pub struct AlfredClient {
    http: Client,
    base_url: Url,
}

impl AlfredClient {
    pub fn new(base_url: Url) -> Result<Self, OpsError> {
        let http = Client::builder()
            .user_agent(concat!("alfred-ops/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, OpsError> {
        let resp: LoginResponse = self
            .post(LOGIN_PATH, None, &LoginRequest { email, password })
            .await?;
        Ok(resp.token)
    }

    pub async fn connect(&self, token: &str, client_info: ClientInfo) -> Result<String, OpsError> {
        let resp: ConnectResponse = self
            .post(CONNECT_PATH, Some(token), &ConnectRequest { client_info })
            .await?;
        Ok(resp.session_id)
    }

    pub async fn send_text(
        &self,
        token: &str,
        session_id: &str,
        text: &str,
        metadata: Value,
    ) -> Result<TextReply, OpsError> {
        self.post(
            TEXT_PATH,
            Some(token),
            &TextRequest {
                session_id,
                text,
                metadata,
            },
        )
        .await
    }

    pub async fn disconnect(&self, token: &str, session_id: &str) -> Result<(), OpsError> {
        let _: Value = self
            .post(DISCONNECT_PATH, Some(token), &DisconnectRequest { session_id })
            .await?;
        Ok(())
    }

    async fn post<B, R>(&self, path: &str, token: Option<&str>, body: &B) -> Result<R, OpsError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        debug!(%url, "POST");
        let mut req = self.http.post(url).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpsError::Api { status, body });
        }
        Ok(resp.json().await?)
    }
}
