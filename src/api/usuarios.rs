use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Rol, Usuario};

/// Account administration over `/usuarios`. Role-gated server-side as well;
/// the client only ever sees these answer for admins.
pub struct UsuarioClient<'a> {
    client: &'a ApiClient,
}

impl<'a> UsuarioClient<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Usuario>> {
        self.client.get_json("usuarios").await
    }

    pub async fn set_rol(&self, id: i64, rol: Rol) -> Result<()> {
        self.client
            .put_query(
                &format!("usuarios/{}/rol", id),
                &[("nuevo_rol", rol.to_string())],
            )
            .await
    }

    pub async fn set_estado(&self, id: i64, activo: bool) -> Result<()> {
        self.client
            .put_query(
                &format!("usuarios/{}/estado", id),
                &[("activo", activo.to_string())],
            )
            .await
    }
}
