use serde::{Deserialize, Serialize};

/// One line of a new order.
#[derive(Debug, Clone, Serialize)]
pub struct PedidoItem {
    pub producto_id: i64,
    pub cantidad: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PedidoCreate {
    pub items: Vec<PedidoItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetallePedido {
    pub id: i64,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub cantidad: i64,
    pub precio_unitario: f64,
    pub subtotal: f64,
    pub vendedor_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pedido {
    pub id: i64,
    pub usuario_id: i64,
    pub total: f64,
    pub estado: String,
    pub created_at: chrono::NaiveDateTime,
    pub items: Vec<DetallePedido>,
}
