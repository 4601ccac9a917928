use super::client::ApiClient;
use crate::error::Result;
use crate::models::{EstadisticasVendedor, Venta};

/// Sales reporting over `/ventas`.
pub struct VentaClient<'a> {
    client: &'a ApiClient,
}

impl<'a> VentaClient<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sales of the logged-in seller.
    pub async fn mine(&self) -> Result<Vec<Venta>> {
        self.client.get_json("ventas/mis-ventas").await
    }

    pub async fn stats(&self) -> Result<EstadisticasVendedor> {
        self.client.get_json("ventas/estadisticas").await
    }

    pub async fn list_all(&self) -> Result<Vec<Venta>> {
        self.client.get_json("ventas").await
    }
}
