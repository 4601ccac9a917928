use super::client::{read_error_message, ApiClient};
use crate::error::{Result, TiendaError};
use crate::models::{LoginRequest, LoginResponse, RegistroRequest, Rol, Usuario};
use reqwest::Method;

/// Credentialed exchanges against `/usuarios`. The only component that ever
/// populates the session; it does so exactly once per successful login, with
/// token and profile together.
pub struct AuthClient<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token and profile. The session is written
    /// only after the full response parsed, so a rejected or malformed
    /// exchange leaves it exactly as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Usuario> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self
            .client
            .request(Method::POST, "usuarios/login")
            .json(&body);
        let response = self.client.send_raw(request).await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(TiendaError::InvalidCredentials(
                read_error_message(response).await,
            ));
        }
        if !status.is_success() {
            return Err(TiendaError::ApiError {
                status: status.as_u16(),
                message: read_error_message(response).await,
            });
        }

        let LoginResponse { token, usuario } = response.json().await?;
        self.client.session().set(token, usuario.clone())?;
        Ok(usuario)
    }

    /// Create an account. Never touches the session: a fresh registration
    /// still has to log in.
    pub async fn register(
        &self,
        nombre: &str,
        email: &str,
        password: &str,
        rol: Option<Rol>,
    ) -> Result<Usuario> {
        let body = RegistroRequest {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            rol,
        };
        let request = self
            .client
            .request(Method::POST, "usuarios/registro")
            .json(&body);
        let response = self.client.send_raw(request).await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(TiendaError::ValidationError {
                status: status.as_u16(),
                message: read_error_message(response).await,
            });
        }
        if !status.is_success() {
            return Err(TiendaError::ApiError {
                status: status.as_u16(),
                message: read_error_message(response).await,
            });
        }

        Ok(response.json().await?)
    }

    /// Local operation only: drop the stored session. Succeeds even when no
    /// one is logged in, and no network call is made.
    pub fn logout(&self) {
        self.client.session().clear();
    }

    /// Profile of the logged-in user, as the backend sees it.
    pub async fn me(&self) -> Result<Usuario> {
        self.client.get_json("usuarios/me").await
    }
}
