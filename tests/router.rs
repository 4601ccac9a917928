use tienda::models::{AuthSession, Rol, Usuario};
use tienda::router::{authorize, Decision};

fn session_with_rol(rol: Rol) -> AuthSession {
    AuthSession {
        token: "tok123".to_string(),
        usuario: Usuario {
            id: 1,
            nombre: "Ana".to_string(),
            email: Some("a@b.com".to_string()),
            rol,
            activo: Some(true),
            created_at: None,
        },
    }
}

#[test]
fn test_admin_route_denies_vendedor() {
    let session = session_with_rol(Rol::Vendedor);
    assert_eq!(
        authorize("admin/usuarios", Some(&session)),
        Decision::RedirectUnauthorized
    );
}

#[test]
fn test_admin_route_allows_admin() {
    let session = session_with_rol(Rol::Admin);
    assert_eq!(authorize("admin/usuarios", Some(&session)), Decision::Allowed);
}

#[test]
fn test_no_session_redirects_to_login_with_return_target() {
    assert_eq!(
        authorize("admin/usuarios", None),
        Decision::RedirectLogin {
            return_to: "admin/usuarios".to_string()
        }
    );
}

#[test]
fn test_empty_allow_list_admits_any_authenticated_role() {
    for rol in [Rol::Admin, Rol::Vendedor, Rol::Usuario] {
        let session = session_with_rol(rol);
        assert_eq!(authorize("productos", Some(&session)), Decision::Allowed);
    }
    assert_eq!(
        authorize("productos", None),
        Decision::RedirectLogin {
            return_to: "productos".to_string()
        }
    );
}

#[test]
fn test_vendedor_routes_admit_vendedor_and_admin() {
    assert_eq!(
        authorize("vendedor/ventas", Some(&session_with_rol(Rol::Vendedor))),
        Decision::Allowed
    );
    assert_eq!(
        authorize("vendedor/ventas", Some(&session_with_rol(Rol::Admin))),
        Decision::Allowed
    );
    assert_eq!(
        authorize("vendedor/ventas", Some(&session_with_rol(Rol::Usuario))),
        Decision::RedirectUnauthorized
    );
}

#[test]
fn test_comprador_routes_admit_buyer_and_admin() {
    assert_eq!(
        authorize("comprador/pedidos", Some(&session_with_rol(Rol::Usuario))),
        Decision::Allowed
    );
    assert_eq!(
        authorize("comprador/pedidos", Some(&session_with_rol(Rol::Admin))),
        Decision::Allowed
    );
    assert_eq!(
        authorize("comprador/pedidos", Some(&session_with_rol(Rol::Vendedor))),
        Decision::RedirectUnauthorized
    );
}

#[test]
fn test_public_routes_need_no_session() {
    for path in ["login", "register", "unauthorized"] {
        assert_eq!(authorize(path, None), Decision::Allowed);
    }
}

#[test]
fn test_unmatched_path_lands_on_login() {
    assert_eq!(
        authorize("inventario", Some(&session_with_rol(Rol::Admin))),
        Decision::RedirectLogin {
            return_to: "inventario".to_string()
        }
    );
    assert_eq!(
        authorize("inventario", None),
        Decision::RedirectLogin {
            return_to: "inventario".to_string()
        }
    );
}

#[test]
fn test_leading_slash_is_normalized() {
    let session = session_with_rol(Rol::Admin);
    assert_eq!(
        authorize("/admin/usuarios", Some(&session)),
        Decision::Allowed
    );
    assert_eq!(
        authorize("/admin/usuarios", None),
        Decision::RedirectLogin {
            return_to: "admin/usuarios".to_string()
        }
    );
}

// Post-login flow: an admin session reaching an admin-only view.
#[test]
fn test_fresh_admin_login_reaches_admin_view() {
    let session = session_with_rol(Rol::Admin);
    assert_eq!(session.token, "tok123");
    assert_eq!(authorize("admin/usuarios", Some(&session)), Decision::Allowed);
}

// A seller wandering into administration gets the unauthorized screen, not
// a login prompt.
#[test]
fn test_vendedor_on_admin_route_is_unauthorized_not_unauthenticated() {
    let session = session_with_rol(Rol::Vendedor);
    let decision = authorize("admin/usuarios", Some(&session));
    assert_eq!(decision, Decision::RedirectUnauthorized);
    assert_ne!(
        decision,
        Decision::RedirectLogin {
            return_to: "admin/usuarios".to_string()
        }
    );
}
