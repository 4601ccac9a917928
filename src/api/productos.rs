use super::client::ApiClient;
use crate::error::Result;
use crate::models::{Producto, ProductoCreate, ProductoUpdate};

/// Catalog CRUD over `/productos`.
pub struct ProductoClient<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductoClient<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Producto>> {
        self.client.get_json("productos").await
    }

    pub async fn get(&self, id: i64) -> Result<Producto> {
        self.client.get_json(&format!("productos/{}", id)).await
    }

    pub async fn create(&self, producto: &ProductoCreate) -> Result<Producto> {
        self.client.post_json("productos", producto).await
    }

    pub async fn update(&self, id: i64, producto: &ProductoUpdate) -> Result<()> {
        self.client
            .put_json(&format!("productos/{}", id), producto)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("productos/{}", id)).await
    }
}
