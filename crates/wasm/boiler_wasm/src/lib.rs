//! Browser bindings: token decoding and route decisions for the dashboard UI.
//!
//! The UI keeps the token in `localStorage` itself and calls these
//! functions to derive session state and guard navigation.

use boiler_core::guard::{Access, evaluate};
use boiler_core::models::Session;
use boiler_core::routes;
use wasm_bindgen::prelude::*;

/// Returns the version of the boiler-wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    boiler_core::version().to_string()
}

/// Decode a token payload to a JSON string.
#[wasm_bindgen(js_name = decodeToken)]
pub fn decode_token(token: &str) -> Result<String, JsValue> {
    let payload = boiler_core::auth::decode_value(token).map_err(to_js)?;
    Ok(serde_json::Value::Object(payload).to_string())
}

/// Whether a token carries `admin: true`.
#[wasm_bindgen(js_name = isAdmin)]
pub fn is_admin(token: &str) -> bool {
    boiler_core::auth::is_admin_token(token)
}

/// Session JSON (`isAuthenticated`, `isAdmin`, `userInfo`) for a stored
/// token. A missing or undecodable token yields the anonymous session.
#[wasm_bindgen(js_name = sessionFromToken)]
pub fn session_from_token(token: Option<String>) -> Result<String, JsValue> {
    serde_json::to_string(&session_for(token.as_deref())).map_err(to_js)
}

/// Decide a navigation for a route's access requirement.
///
/// Returns `allow`, `redirect-to-login` or `redirect-to-default`.
#[wasm_bindgen(js_name = evaluateRoute)]
pub fn evaluate_route(token: Option<String>, access: &str) -> Result<String, JsValue> {
    let access: Access = access.parse().map_err(to_js)?;
    Ok(evaluate(&session_for(token.as_deref()), access).to_string())
}

/// Decide a navigation to a dashboard path.
#[wasm_bindgen(js_name = navigate)]
pub fn navigate(token: Option<String>, path: &str) -> String {
    routes::navigate(&session_for(token.as_deref()), path).to_string()
}

/// Sidebar routes as a JSON array.
#[wasm_bindgen(js_name = visibleRoutes)]
pub fn visible_routes(is_admin: bool) -> Result<String, JsValue> {
    serde_json::to_string(&routes::visible_routes(is_admin)).map_err(to_js)
}

fn session_for(token: Option<&str>) -> Session {
    token
        .and_then(|t| boiler_core::auth::decode(t).ok())
        .map(|claims| Session::from_claims(&claims))
        .unwrap_or_default()
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_TOKEN: &str = "header.eyJhZG1pbiI6dHJ1ZSwiaWQiOiJ1MSJ9.sig";

    #[test]
    fn navigate_uses_token_session() {
        assert_eq!(navigate(None, "/tables/users"), "redirect-to-login");
        assert_eq!(navigate(Some(ADMIN_TOKEN.into()), "/tables/users"), "allow");
        assert_eq!(navigate(Some("junk".into()), "/"), "redirect-to-login");
    }

    #[test]
    fn session_json_for_admin_token() {
        let json = session_from_token(Some(ADMIN_TOKEN.into())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["isAuthenticated"], true);
        assert_eq!(value["isAdmin"], true);
        assert_eq!(value["userInfo"]["id"], "u1");
    }

    #[test]
    fn navigate_sends_signed_in_users_off_login() {
        assert_eq!(
            navigate(Some(ADMIN_TOKEN.into()), "/auth/login"),
            "redirect-to-default"
        );
        assert_eq!(navigate(None, "/auth/login"), "allow");
    }

    #[test]
    fn evaluate_route_parses_access() {
        assert_eq!(
            evaluate_route(Some(ADMIN_TOKEN.into()), "authenticated+admin").unwrap(),
            "allow"
        );
        assert_eq!(
            evaluate_route(None, "authenticated").unwrap(),
            "redirect-to-login"
        );
        assert_eq!(evaluate_route(None, "public").unwrap(), "allow");
    }

    #[test]
    fn decode_token_returns_claims_json() {
        let json = decode_token(ADMIN_TOKEN).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["admin"], true);
        assert_eq!(value["id"], "u1");
    }

    #[test]
    fn is_admin_reads_the_claim() {
        assert!(is_admin(ADMIN_TOKEN));
        assert!(!is_admin("junk"));
    }

    #[test]
    fn visible_routes_serializes_access() {
        let json = visible_routes(true).unwrap();
        assert!(json.contains(r#""access":"admin""#));
        assert!(!visible_routes(false).unwrap().contains("tables/users"));
    }
}
