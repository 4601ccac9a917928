pub mod auth;
pub mod client;
pub mod pedidos;
pub mod productos;
pub mod usuarios;
pub mod ventas;

pub use auth::AuthClient;
pub use client::{attach_bearer, invalidate_on_unauthorized, ApiClient};
pub use pedidos::PedidoClient;
pub use productos::ProductoClient;
pub use usuarios::UsuarioClient;
pub use ventas::VentaClient;
