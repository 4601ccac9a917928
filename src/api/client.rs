use crate::config::Config;
use crate::error::{Result, TiendaError};
use crate::session::Session;
use colored::*;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Attach the bearer credential if a token is at hand; otherwise the request
/// goes out unmodified.
pub fn attach_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
        None => request,
    }
}

/// Central expiry detection: a 401 on any forwarded request drops the
/// session. Returns whether the session was invalidated.
pub fn invalidate_on_unauthorized(session: &Session, status: StatusCode) -> bool {
    if status == StatusCode::UNAUTHORIZED {
        session.clear();
        true
    } else {
        false
    }
}

/// The one HTTP client every backend call goes through. Reads the session
/// token when a request is built and watches every response status, so no
/// call site repeats token attachment or expiry handling.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    verbose: bool,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            session,
            verbose: config.verbose,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        if self.verbose {
            eprintln!("{}", format!("> {} {}", method, self.url(path)).dimmed());
        }
        let builder = self.http.request(method, self.url(path));
        attach_bearer(builder, self.session.token().as_deref())
    }

    /// Forward a request and run the central status checks on the answer.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        self.check_status(response).await
    }

    /// Forward a request without the central checks. Used by the auth
    /// exchanges, which interpret rejection statuses themselves.
    pub async fn send_raw(&self, request: RequestBuilder) -> Result<Response> {
        Ok(request.send().await?)
    }

    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if invalidate_on_unauthorized(&self.session, status) {
            return Err(TiendaError::SessionExpired);
        }
        if status.is_client_error() || status.is_server_error() {
            let message = read_error_message(response).await;
            return Err(TiendaError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send(self.request(Method::POST, path).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.send(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(())
    }

    /// PUT with an empty body and query parameters, for the toggle-style
    /// admin endpoints.
    pub async fn put_query(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        self.send(self.request(Method::PUT, path).query(query))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Best-effort extraction of the backend's error text. The FastAPI side
/// answers either `{"detail": ...}` or `{"error": ...}`.
pub(crate) async fn read_error_message(response: Response) -> String {
    let fallback = "request failed".to_string();
    match response.text().await {
        Ok(body) => {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                for key in ["detail", "error", "message"] {
                    if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                        return text.to_string();
                    }
                }
            }
            if body.is_empty() {
                fallback
            } else {
                body
            }
        }
        Err(_) => fallback,
    }
}
