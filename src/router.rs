use crate::models::{AuthSession, Rol};

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// Not logged in: go to the login view, keeping the requested path so it
    /// can be revisited after a successful login.
    RedirectLogin { return_to: String },
    /// Logged in with the wrong role for this view.
    RedirectUnauthorized,
}

/// A protected view and the roles allowed into it. An empty allow-list
/// admits any authenticated role.
pub struct Route {
    pub path: &'static str,
    pub roles: &'static [Rol],
}

/// Views reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &["login", "register", "unauthorized"];

/// The protected route table. Roles are matched by exact membership; admin
/// passes a gate only where the gate lists it.
pub const ROUTES: &[Route] = &[
    Route {
        path: "productos",
        roles: &[],
    },
    Route {
        path: "vendedor",
        roles: &[Rol::Vendedor, Rol::Admin],
    },
    Route {
        path: "admin",
        roles: &[Rol::Admin],
    },
    Route {
        path: "comprador",
        roles: &[Rol::Usuario, Rol::Admin],
    },
];

/// Decide entry into `path` from a session snapshot. Synchronous and pure:
/// token validity is not checked here, the next backend call settles that.
/// Unmatched paths land on the login view.
pub fn authorize(path: &str, session: Option<&AuthSession>) -> Decision {
    let target = path.trim_start_matches('/');
    let head = target.split('/').next().unwrap_or("");

    if PUBLIC_ROUTES.contains(&head) {
        return Decision::Allowed;
    }

    let Some(session) = session else {
        return Decision::RedirectLogin {
            return_to: target.to_string(),
        };
    };

    let Some(route) = ROUTES.iter().find(|r| r.path == head) else {
        return Decision::RedirectLogin {
            return_to: target.to_string(),
        };
    };

    if route.roles.is_empty() || route.roles.contains(&session.usuario.rol) {
        Decision::Allowed
    } else {
        Decision::RedirectUnauthorized
    }
}
