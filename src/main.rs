use clap::Parser;
use colored::*;
use std::process;

use tienda::api::{
    ApiClient, AuthClient, PedidoClient, ProductoClient, UsuarioClient, VentaClient,
};
use tienda::cli::{
    Args, Command, PedidosCommand, ProductosCommand, UsuariosCommand, VentasCommand,
};
use tienda::config::Config;
use tienda::error::{Result, TiendaError};
use tienda::models::{
    Pedido, PedidoCreate, PedidoItem, Producto, ProductoCreate, ProductoUpdate, Usuario,
};
use tienda::router::{self, Decision};
use tienda::session;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let session = session::load_session();

    // Gate the view before anything goes over the wire.
    if let Some(route) = args.command.route() {
        match router::authorize(route, session.current().as_ref()) {
            Decision::Allowed => {}
            Decision::RedirectLogin { return_to } => {
                eprintln!("{}", "You are not logged in.".yellow());
                eprintln!(
                    "Run {} first, then retry '{}'.",
                    "tienda login".bold(),
                    return_to
                );
                process::exit(1);
            }
            Decision::RedirectUnauthorized => {
                eprintln!(
                    "{}",
                    "You do not have permission to access this view.".red()
                );
                process::exit(1);
            }
        }
    }

    let client = match ApiClient::new(&config, session) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args.command, &client).await {
        match e {
            TiendaError::SessionExpired => {
                eprintln!(
                    "{}",
                    "Your session has expired and has been cleared.".yellow()
                );
                eprintln!("Run {} to continue.", "tienda login".bold());
            }
            other => eprintln!("{} {}", "Error:".red(), other),
        }
        process::exit(1);
    }
}

async fn run(command: &Command, client: &ApiClient) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            let usuario = AuthClient::new(client).login(email, password).await?;
            println!(
                "{} {} ({})",
                "Logged in as".green(),
                usuario.nombre.bold(),
                usuario.rol
            );
        }
        Command::Register {
            nombre,
            email,
            password,
            rol,
        } => {
            let rol = rol
                .as_deref()
                .map(str::parse)
                .transpose()
                .map_err(TiendaError::Other)?;
            let usuario = AuthClient::new(client)
                .register(nombre, email, password, rol)
                .await?;
            println!(
                "{} {} (id {})",
                "Account created:".green(),
                usuario.nombre.bold(),
                usuario.id
            );
            println!("Log in with {} to start a session.", "tienda login".bold());
        }
        Command::Logout => {
            AuthClient::new(client).logout();
            println!("{}", "Session cleared.".green());
        }
        Command::Whoami { remote } => {
            if *remote {
                let usuario = AuthClient::new(client).me().await?;
                print_usuario(&usuario);
            } else {
                match client.session().current() {
                    Some(session) => print_usuario(&session.usuario),
                    None => println!("{}", "Not logged in.".yellow()),
                }
            }
        }
        Command::Productos(cmd) => run_productos(cmd, client).await?,
        Command::Pedidos(cmd) => run_pedidos(cmd, client).await?,
        Command::Ventas(cmd) => run_ventas(cmd, client).await?,
        Command::Usuarios(cmd) => run_usuarios(cmd, client).await?,
    }
    Ok(())
}

async fn run_productos(cmd: &ProductosCommand, client: &ApiClient) -> Result<()> {
    let productos = ProductoClient::new(client);
    match cmd {
        ProductosCommand::List => {
            let items = productos.list().await?;
            if items.is_empty() {
                println!("{}", "No products published.".yellow());
            }
            for producto in &items {
                print_producto_row(producto);
            }
        }
        ProductosCommand::Show { id } => {
            let producto = productos.get(*id).await?;
            print_producto_row(&producto);
            if let Some(descripcion) = &producto.descripcion {
                println!("  {}", descripcion.dimmed());
            }
            if let Some(vendedor) = &producto.vendedor_nombre {
                println!("  sold by {}", vendedor);
            }
        }
        ProductosCommand::Add {
            nombre,
            descripcion,
            precio,
            cantidad,
        } => {
            let created = productos
                .create(&ProductoCreate {
                    nombre: nombre.clone(),
                    descripcion: descripcion.clone(),
                    precio: *precio,
                    cantidad: *cantidad,
                })
                .await?;
            println!(
                "{} {} (id {})",
                "Published".green(),
                created.nombre.bold(),
                created.id
            );
        }
        ProductosCommand::Update {
            id,
            nombre,
            descripcion,
            precio,
            cantidad,
        } => {
            productos
                .update(
                    *id,
                    &ProductoUpdate {
                        nombre: nombre.clone(),
                        descripcion: descripcion.clone(),
                        precio: *precio,
                        cantidad: *cantidad,
                    },
                )
                .await?;
            println!("{} product {}", "Updated".green(), id);
        }
        ProductosCommand::Delete { id } => {
            productos.delete(*id).await?;
            println!("{} product {}", "Removed".green(), id);
        }
    }
    Ok(())
}

async fn run_pedidos(cmd: &PedidosCommand, client: &ApiClient) -> Result<()> {
    let pedidos = PedidoClient::new(client);
    match cmd {
        PedidosCommand::Create { items } => {
            let items = parse_items(items)?;
            let pedido = pedidos.create(&PedidoCreate { items }).await?;
            println!(
                "{} order {} ({} items, total {:.2})",
                "Placed".green(),
                pedido.id,
                pedido.items.len(),
                pedido.total
            );
        }
        PedidosCommand::Mine => {
            for pedido in &pedidos.mine().await? {
                print_pedido_row(pedido);
            }
        }
        PedidosCommand::Show { id } => {
            let pedido = pedidos.get(*id).await?;
            print_pedido_row(&pedido);
            for item in &pedido.items {
                println!(
                    "  {:>3} x {:<24} {:>10.2}",
                    item.cantidad, item.producto_nombre, item.subtotal
                );
            }
        }
        PedidosCommand::List => {
            for pedido in &pedidos.list_all().await? {
                print_pedido_row(pedido);
            }
        }
        PedidosCommand::Estado { id, estado } => {
            pedidos.update_estado(*id, estado).await?;
            println!("{} order {} -> {}", "Updated".green(), id, estado);
        }
    }
    Ok(())
}

async fn run_ventas(cmd: &VentasCommand, client: &ApiClient) -> Result<()> {
    let ventas = VentaClient::new(client);
    match cmd {
        VentasCommand::Mine => {
            for venta in &ventas.mine().await? {
                println!(
                    "{:>4}  {:<24} {:>3} x {:>8.2}  {:<10} {}",
                    venta.id,
                    venta.producto_nombre,
                    venta.cantidad,
                    venta.precio_unitario,
                    venta.estado,
                    venta.cliente_nombre.dimmed()
                );
            }
        }
        VentasCommand::Stats => {
            let stats = ventas.stats().await?;
            println!("total sales       {:>10.2}", stats.total_ventas);
            println!("products sold     {:>10}", stats.total_productos_vendidos);
            println!("products listed   {:>10}", stats.productos_publicados);
            println!("pending sales     {:>10}", stats.ventas_pendientes);
            println!("completed sales   {:>10}", stats.ventas_completadas);
        }
        VentasCommand::List => {
            for venta in &ventas.list_all().await? {
                println!(
                    "{:>4}  {:<24} {:>3} x {:>8.2}  {:<10} {}",
                    venta.id,
                    venta.producto_nombre,
                    venta.cantidad,
                    venta.precio_unitario,
                    venta.estado,
                    venta.cliente_nombre.dimmed()
                );
            }
        }
    }
    Ok(())
}

async fn run_usuarios(cmd: &UsuariosCommand, client: &ApiClient) -> Result<()> {
    let usuarios = UsuarioClient::new(client);
    match cmd {
        UsuariosCommand::List => {
            for usuario in &usuarios.list().await? {
                print_usuario(usuario);
            }
        }
        UsuariosCommand::Rol { id, rol } => {
            let rol = rol.parse().map_err(TiendaError::Other)?;
            usuarios.set_rol(*id, rol).await?;
            println!("{} user {} -> {}", "Updated".green(), id, rol);
        }
        UsuariosCommand::Estado { id, activo } => {
            usuarios.set_estado(*id, *activo).await?;
            let state = if *activo { "active" } else { "inactive" };
            println!("{} user {} -> {}", "Updated".green(), id, state);
        }
    }
    Ok(())
}

fn parse_items(raw: &[String]) -> Result<Vec<PedidoItem>> {
    raw.iter()
        .map(|entry| {
            let (id, cantidad) = entry.split_once(':').ok_or_else(|| {
                TiendaError::Other(format!(
                    "invalid item '{}', expected producto_id:cantidad",
                    entry
                ))
            })?;
            Ok(PedidoItem {
                producto_id: id.trim().parse().map_err(|_| {
                    TiendaError::Other(format!("invalid product id in '{}'", entry))
                })?,
                cantidad: cantidad.trim().parse().map_err(|_| {
                    TiendaError::Other(format!("invalid quantity in '{}'", entry))
                })?,
            })
        })
        .collect()
}

fn print_usuario(usuario: &Usuario) {
    let estado = match usuario.activo {
        Some(false) => " (inactive)".red().to_string(),
        _ => String::new(),
    };
    println!(
        "{:>4}  {:<20} {:<28} {}{}",
        usuario.id,
        usuario.nombre.bold(),
        usuario.email.as_deref().unwrap_or("-"),
        usuario.rol,
        estado
    );
}

fn print_producto_row(producto: &Producto) {
    println!(
        "{:>4}  {:<24} {:>10.2}  {:>5} in stock",
        producto.id,
        producto.nombre.bold(),
        producto.precio,
        producto.cantidad
    );
}

fn print_pedido_row(pedido: &Pedido) {
    println!(
        "{:>4}  {:<12} {:>10.2}  {}",
        pedido.id,
        pedido.estado,
        pedido.total,
        pedido.created_at.format("%Y-%m-%d %H:%M")
    );
}
