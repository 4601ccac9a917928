use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tienda")]
#[command(about = "Command-line client for the tienda storefront API", long_about = None)]
pub struct Args {
    #[arg(
        long = "api-url",
        global = true,
        help = "Base URL of the backend API (overrides TIENDA_API_URL and the config file)"
    )]
    pub api_url: Option<String>,

    #[arg(short, long, global = true, help = "Print outgoing requests")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create a new account (does not log you in)
    Register {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, help = "Requested role: admin, vendedor or usuario")]
        rol: Option<String>,
    },
    /// Drop the stored session
    Logout,
    /// Show who is logged in
    Whoami {
        #[arg(long, help = "Ask the backend instead of the stored session")]
        remote: bool,
    },
    /// Browse and manage the product catalog
    #[command(subcommand)]
    Productos(ProductosCommand),
    /// Place and track orders
    #[command(subcommand)]
    Pedidos(PedidosCommand),
    /// Seller sales and statistics
    #[command(subcommand)]
    Ventas(VentasCommand),
    /// Account administration
    #[command(subcommand)]
    Usuarios(UsuariosCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProductosCommand {
    /// List the catalog
    List,
    /// Show one product
    Show { id: i64 },
    /// Publish a new product
    Add {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        precio: f64,
        #[arg(long)]
        cantidad: i64,
    },
    /// Replace a product's listing
    Update {
        id: i64,
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: Option<String>,
        #[arg(long)]
        precio: f64,
        #[arg(long)]
        cantidad: i64,
    },
    /// Remove a product
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PedidosCommand {
    /// Place an order; items are producto_id:cantidad pairs
    Create {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Orders you placed
    Mine,
    /// Show one order
    Show { id: i64 },
    /// All orders
    List,
    /// Update an order's status
    Estado { id: i64, estado: String },
}

#[derive(Subcommand, Debug)]
pub enum VentasCommand {
    /// Your sales
    Mine,
    /// Your sales statistics
    Stats,
    /// All sales
    List,
}

#[derive(Subcommand, Debug)]
pub enum UsuariosCommand {
    /// List accounts
    List,
    /// Change an account's role
    Rol { id: i64, rol: String },
    /// Activate or deactivate an account
    Estado { id: i64, activo: bool },
}

impl Command {
    /// The abstract route this command navigates to, consulted by the
    /// authorizer before dispatch. `None` for purely local operations.
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Command::Login { .. } => Some("login"),
            Command::Register { .. } => Some("register"),
            Command::Logout => None,
            Command::Whoami { .. } => None,
            Command::Productos(cmd) => Some(match cmd {
                ProductosCommand::List | ProductosCommand::Show { .. } => "productos",
                ProductosCommand::Add { .. }
                | ProductosCommand::Update { .. }
                | ProductosCommand::Delete { .. } => "vendedor/productos",
            }),
            Command::Pedidos(cmd) => Some(match cmd {
                PedidosCommand::Create { .. }
                | PedidosCommand::Mine
                | PedidosCommand::Show { .. } => "comprador/pedidos",
                PedidosCommand::List | PedidosCommand::Estado { .. } => "vendedor/pedidos",
            }),
            Command::Ventas(cmd) => Some(match cmd {
                VentasCommand::Mine | VentasCommand::Stats => "vendedor/ventas",
                VentasCommand::List => "admin/ventas",
            }),
            Command::Usuarios(_) => Some("admin/usuarios"),
        }
    }
}
