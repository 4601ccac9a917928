mod pedido;
mod producto;
mod session;
mod usuario;
mod venta;

pub use pedido::{DetallePedido, Pedido, PedidoCreate, PedidoItem};
pub use producto::{Producto, ProductoCreate, ProductoUpdate};
pub use session::AuthSession;
pub use usuario::{LoginRequest, LoginResponse, RegistroRequest, Rol, Usuario};
pub use venta::{EstadisticasVendedor, Venta};
