//! Token claims and the user profile derived from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Region assignment carried by a token.
///
/// Older tokens carry a single region id, newer ones a list. Both shapes
/// are kept as issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Region {
    Single(String),
    Many(Vec<String>),
}

impl Region {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Region::Single(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Region::Many),
            _ => None,
        }
    }

    /// All region ids, regardless of shape.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Region::Single(id) => vec![id.as_str()],
            Region::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// Decoded token payload.
///
/// Typed accessors cover the claims the dashboard consumes; the full
/// payload object is kept as issued in [`Claims::raw`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    /// Subject id. Numeric ids are rendered as strings.
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub region: Option<Region>,
    /// Role flag. Only a JSON `true`/`false` is recognised.
    pub admin: Option<bool>,
    /// Issued at (unix timestamp).
    pub iat: Option<i64>,
    /// Expiry (unix timestamp). Decoded but never enforced client-side.
    pub exp: Option<i64>,
    raw: Map<String, Value>,
}

impl Claims {
    /// Build claims from a decoded payload object.
    pub fn from_map(raw: Map<String, Value>) -> Self {
        let id = raw.get("id").and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Self {
            id,
            first_name: raw
                .get("first_name")
                .and_then(Value::as_str)
                .map(str::to_string),
            region: raw.get("region").and_then(Region::from_value),
            admin: raw.get("admin").and_then(Value::as_bool),
            iat: raw.get("iat").and_then(Value::as_i64),
            exp: raw.get("exp").and_then(Value::as_i64),
            raw,
        }
    }

    /// True only when the `admin` claim is literally `true`.
    pub fn is_admin(&self) -> bool {
        self.admin == Some(true)
    }

    /// The payload object exactly as it was decoded.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

/// User profile shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub region: Option<Region>,
    pub admin: bool,
}

impl From<&Claims> for UserInfo {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.id.clone(),
            first_name: claims.first_name.clone(),
            region: claims.region.clone(),
            admin: claims.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => Claims::from_map(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn region_string_is_kept_as_single() {
        let c = claims(json!({ "region": "pune" }));
        assert_eq!(c.region, Some(Region::Single("pune".into())));
    }

    #[test]
    fn region_list_is_kept_as_many() {
        let c = claims(json!({ "region": ["pune", "mumbai"] }));
        assert_eq!(
            c.region,
            Some(Region::Many(vec!["pune".into(), "mumbai".into()]))
        );
        assert_eq!(c.region.unwrap().ids(), vec!["pune", "mumbai"]);
    }

    #[test]
    fn region_with_non_string_items_is_dropped() {
        let c = claims(json!({ "region": ["pune", 7] }));
        assert!(c.region.is_none());
        assert_eq!(c.raw()["region"], json!(["pune", 7]));
    }

    #[test]
    fn admin_requires_literal_true() {
        assert!(claims(json!({ "admin": true })).is_admin());
        assert!(!claims(json!({ "admin": false })).is_admin());
        assert!(!claims(json!({})).is_admin());
        assert!(!claims(json!({ "admin": "true" })).is_admin());
        assert!(!claims(json!({ "admin": 1 })).is_admin());
    }

    #[test]
    fn numeric_id_is_stringified() {
        assert_eq!(claims(json!({ "id": 42 })).id.as_deref(), Some("42"));
    }

    #[test]
    fn user_info_defaults_admin_to_false() {
        let c = claims(json!({ "id": "u1", "first_name": "Asha" }));
        let info = UserInfo::from(&c);
        assert_eq!(info.id.as_deref(), Some("u1"));
        assert_eq!(info.first_name.as_deref(), Some("Asha"));
        assert!(!info.admin);
    }

    #[test]
    fn user_info_region_serializes_as_issued() {
        let single = UserInfo::from(&claims(json!({ "region": "pune" })));
        let many = UserInfo::from(&claims(json!({ "region": ["pune", "mumbai"] })));
        assert_eq!(serde_json::to_value(&single).unwrap()["region"], json!("pune"));
        assert_eq!(
            serde_json::to_value(&many).unwrap()["region"],
            json!(["pune", "mumbai"])
        );
    }
}
