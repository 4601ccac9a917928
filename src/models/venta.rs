use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Venta {
    pub id: i64,
    pub pedido_id: i64,
    pub producto_id: i64,
    pub producto_nombre: String,
    pub cantidad: i64,
    pub precio_unitario: f64,
    pub total: f64,
    pub estado: String,
    pub cliente_nombre: String,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EstadisticasVendedor {
    pub total_ventas: f64,
    pub total_productos_vendidos: i64,
    pub productos_publicados: i64,
    pub ventas_pendientes: i64,
    pub ventas_completadas: i64,
}
