use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{Config, Session, User};
use log::{error, info, warn};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::models::{
    AuthResponse, ConversationResponse, LoginRequest, LogoutRequest, RegisterRequest,
    SendMessageRequest, SendMessageResponse, SessionList, SessionTitlePayload,
};
use crate::auth::TokenStore;
use crate::client_trait::SolirisApi;
use crate::error::ApiError;

/// HTTP client for the SOLIRIS backend.
///
/// The bearer credential is read from the token store at call time on
/// every authenticated request, so a login or logout elsewhere in the
/// process is picked up by the next call.
pub struct SolirisClient {
    http: Client,
    config: Config,
    tokens: Arc<dyn TokenStore>,
}

impl SolirisClient {
    pub fn new(config: Config, tokens: Arc<dyn TokenStore>) -> Self {
        let http = Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("soliris http client");
        SolirisClient {
            http,
            config,
            tokens,
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().expect("header"));
        headers.insert("content-type", "application/json".parse().expect("header"));
        headers
    }

    /// Issue one request against the configured base URL.
    ///
    /// `authenticated` controls whether the stored access credential is
    /// attached; when the store is empty the request goes out without
    /// an Authorization header and the service answers 401.
    async fn execute<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        authenticated: bool,
        json_body: Option<&T>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.config.api_base(), path);
        let mut request_builder = self.http.request(method.clone(), &url);

        if authenticated {
            if let Some(token) = self.tokens.access_token() {
                request_builder =
                    request_builder.header("Authorization", format!("Bearer {token}"));
            }
        }
        if let Some(body) = json_body {
            request_builder = request_builder.json(body);
        }

        info!("Sending {method} request to {url}");
        request_builder.send().await.map_err(|e| {
            error!("Failed HTTP request to {url}: {e}");
            ApiError::from(e)
        })
    }

    /// Decode a JSON success body, turning non-2xx statuses into the
    /// error taxonomy first.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode response body: {e}");
            ApiError::MalformedResponse
        })
    }

    /// Like [`Self::decode`] for routes whose success body is empty.
    async fn expect_success(response: Response) -> Result<(), ApiError> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<Value>().await.ok();
        let err = ApiError::from_response(status.as_u16(), body);
        warn!("Request failed with status {status}: {err}");
        Err(err)
    }
}

#[async_trait]
impl SolirisApi for SolirisClient {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .execute(Method::POST, "/api/auth/login/", false, Some(&body))
            .await?;
        Self::decode(response).await
    }

    async fn register(&self, form: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .execute(Method::POST, "/api/auth/register/", false, Some(form))
            .await?;
        Self::decode(response).await
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        let body = LogoutRequest {
            refresh: refresh_token.to_string(),
        };
        let response = self
            .execute(Method::POST, "/api/auth/logout/", true, Some(&body))
            .await?;
        Self::expect_success(response).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        let response = self
            .execute(Method::GET, "/api/auth/profile/", true, None::<&()>)
            .await?;
        Self::decode(response).await
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let response = self
            .execute(Method::GET, "/api/sessoes/", true, None::<&()>)
            .await?;
        let list: SessionList = Self::decode(response).await?;
        Ok(list.into_vec())
    }

    async fn create_session(&self, title: &str) -> Result<Session, ApiError> {
        let body = SessionTitlePayload {
            titulo: title.to_string(),
        };
        let response = self
            .execute(Method::POST, "/api/sessoes/", true, Some(&body))
            .await?;
        Self::decode(response).await
    }

    async fn rename_session(&self, session_id: &str, title: &str) -> Result<Session, ApiError> {
        let body = SessionTitlePayload {
            titulo: title.to_string(),
        };
        let path = format!("/api/sessoes/{session_id}/");
        let response = self
            .execute(Method::PATCH, &path, true, Some(&body))
            .await?;
        Self::decode(response).await
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let path = format!("/api/sessoes/{session_id}/");
        let response = self
            .execute(Method::DELETE, &path, true, None::<&()>)
            .await?;
        Self::expect_success(response).await
    }

    async fn load_conversation(&self, session_id: &str) -> Result<ConversationResponse, ApiError> {
        let path = format!("/api/conversation/?session_id={session_id}");
        let response = self
            .execute(Method::GET, &path, true, None::<&()>)
            .await?;
        Self::decode(response).await
    }

    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<SendMessageResponse, ApiError> {
        let body = SendMessageRequest {
            message: message.to_string(),
            session_id: session_id.map(str::to_string),
        };
        let response = self
            .execute(Method::POST, "/api/conversation/", true, Some(&body))
            .await?;
        Self::decode(response).await
    }
}
