//! Dashboard route table and path-level navigation decisions.

use serde::Serialize;

use crate::guard::{Access, Decision, evaluate};
use crate::models::Session;

/// How a route shows up in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// Listed in the sidebar.
    Sidebar,
    /// Reachable, but not listed.
    Hidden,
    /// Login / registration pages.
    Auth,
}

/// A dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub key: &'static str,
    pub name: &'static str,
    pub path: &'static str,
    pub access: Access,
    pub kind: RouteKind,
}

/// Every page the dashboard serves.
pub const ROUTES: &[Route] = &[
    Route {
        key: "tables/dashboard",
        name: "Dashboard",
        path: "/tables/dashboard",
        access: Access::Authenticated,
        kind: RouteKind::Sidebar,
    },
    Route {
        key: "tables/boiler-details",
        name: "Boiler Details",
        path: "/tables/boiler-details",
        access: Access::Authenticated,
        kind: RouteKind::Sidebar,
    },
    Route {
        key: "tables/sheet1",
        name: "Boiler Sheet",
        path: "/tables/sheet1",
        access: Access::Authenticated,
        kind: RouteKind::Hidden,
    },
    Route {
        key: "tables/users",
        name: "User table",
        path: "/tables/users",
        access: Access::Admin,
        kind: RouteKind::Sidebar,
    },
    Route {
        key: "tables/city",
        name: "CityName Tables",
        path: "/tables/city",
        access: Access::Admin,
        kind: RouteKind::Sidebar,
    },
    Route {
        key: "login",
        name: "Login",
        path: "/auth/login",
        access: Access::Public,
        kind: RouteKind::Auth,
    },
    Route {
        key: "register",
        name: "Register",
        path: "/auth/register",
        access: Access::Public,
        kind: RouteKind::Auth,
    },
];

/// Sidebar entries for a user. Admin pages are only listed for admins.
pub fn visible_routes(is_admin: bool) -> Vec<&'static Route> {
    ROUTES
        .iter()
        .filter(|r| r.kind == RouteKind::Sidebar)
        .filter(|r| is_admin || r.access != Access::Admin)
        .collect()
}

/// Look up the route serving `path`. Query strings, fragments and a
/// trailing slash are ignored.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Decide a navigation to `path`.
///
/// `/` and unknown paths send signed-in users to the landing page and
/// everyone else to login. Signed-in users are also sent away from the
/// login and registration pages.
pub fn navigate(session: &Session, path: &str) -> Decision {
    match resolve(path) {
        Some(route) if route.kind == RouteKind::Auth && session.is_authenticated() => {
            Decision::RedirectToDefault
        }
        Some(route) => evaluate(session, route.access),
        None if session.is_authenticated() => Decision::RedirectToDefault,
        None => Decision::RedirectToLogin,
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterConfig;
    use crate::models::Claims;
    use serde_json::json;

    fn signed_in(admin: bool) -> Session {
        let Some(map) = json!({ "id": "u1", "admin": admin }).as_object().cloned() else {
            unreachable!()
        };
        Session::from_claims(&Claims::from_map(map))
    }

    #[test]
    fn sidebar_for_regular_user_has_no_admin_pages() {
        let keys: Vec<_> = visible_routes(false).iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["tables/dashboard", "tables/boiler-details"]);
    }

    #[test]
    fn sidebar_for_admin_includes_admin_pages() {
        let keys: Vec<_> = visible_routes(true).iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![
                "tables/dashboard",
                "tables/boiler-details",
                "tables/users",
                "tables/city"
            ]
        );
    }

    #[test]
    fn resolve_ignores_query_and_trailing_slash() {
        assert_eq!(resolve("/tables/users/").map(|r| r.key), Some("tables/users"));
        assert_eq!(resolve("/tables/city?page=2").map(|r| r.key), Some("tables/city"));
        assert_eq!(resolve("/auth/login#top").map(|r| r.key), Some("login"));
        assert!(resolve("/").is_none());
        assert!(resolve("/nope").is_none());
    }

    #[test]
    fn root_and_unknown_paths_redirect_by_session() {
        for path in ["/", "/nowhere"] {
            assert_eq!(
                navigate(&Session::anonymous(), path),
                Decision::RedirectToLogin
            );
            assert_eq!(navigate(&signed_in(false), path), Decision::RedirectToDefault);
        }
    }

    #[test]
    fn anonymous_user_is_sent_to_login_from_protected_pages() {
        assert_eq!(
            navigate(&Session::anonymous(), "/tables/dashboard"),
            Decision::RedirectToLogin
        );
        assert_eq!(
            navigate(&Session::anonymous(), "/auth/register"),
            Decision::Allow
        );
    }

    #[test]
    fn admin_pages_soft_deny_regular_users() {
        assert_eq!(
            navigate(&signed_in(false), "/tables/users"),
            Decision::RedirectToDefault
        );
        assert_eq!(navigate(&signed_in(true), "/tables/users"), Decision::Allow);
    }

    #[test]
    fn signed_in_users_leave_auth_pages() {
        for path in ["/auth/login", "/auth/register", "/auth/login?next=/tables/city"] {
            assert_eq!(navigate(&signed_in(false), path), Decision::RedirectToDefault);
            assert_eq!(navigate(&signed_in(true), path), Decision::RedirectToDefault);
            assert_eq!(navigate(&Session::anonymous(), path), Decision::Allow);
        }
    }

    #[test]
    fn auth_pages_stay_public_for_the_guard() {
        let login = resolve("/auth/login").unwrap();
        assert_eq!(evaluate(&signed_in(false), login.access), Decision::Allow);
    }

    #[test]
    fn default_landing_route_is_servable() {
        let config = RouterConfig::default();
        assert_eq!(
            navigate(&signed_in(false), &config.default_route),
            Decision::Allow
        );
        assert_eq!(
            navigate(&Session::anonymous(), &config.login_route),
            Decision::Allow
        );
    }
}
