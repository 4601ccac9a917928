use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Pedido, PedidoCreate};
use serde::Serialize;

#[derive(Serialize)]
struct EstadoUpdate<'a> {
    estado: &'a str,
}

/// Order operations over `/pedidos`.
pub struct PedidoClient<'a> {
    client: &'a ApiClient,
}

impl<'a> PedidoClient<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, pedido: &PedidoCreate) -> Result<Pedido> {
        self.client.post_json("pedidos", pedido).await
    }

    /// Orders placed by the logged-in buyer.
    pub async fn mine(&self) -> Result<Vec<Pedido>> {
        self.client.get_json("pedidos/mis-pedidos").await
    }

    pub async fn get(&self, id: i64) -> Result<Pedido> {
        self.client.get_json(&format!("pedidos/{}", id)).await
    }

    pub async fn list_all(&self) -> Result<Vec<Pedido>> {
        self.client.get_json("pedidos").await
    }

    pub async fn update_estado(&self, id: i64, estado: &str) -> Result<()> {
        self.client
            .put_json(&format!("pedidos/{}/estado", id), &EstadoUpdate { estado })
            .await
    }
}
