//! Dashboard routing and storage configuration.

use std::path::PathBuf;

/// Default login page.
pub const DEFAULT_LOGIN_ROUTE: &str = "/auth/login";

/// Default landing page for authenticated users.
pub const DEFAULT_LANDING_ROUTE: &str = "/tables/sheet1";

/// Where redirects land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    /// Target of hard denials and logout.
    pub login_route: String,
    /// Target of login, soft denials and the root redirect.
    pub default_route: String,
}

impl RouterConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable               | Default          |
    /// |------------------------|------------------|
    /// | `BOILER_LOGIN_ROUTE`   | `/auth/login`    |
    /// | `BOILER_DEFAULT_ROUTE` | `/tables/sheet1` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RouterConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            login_route: non_empty("BOILER_LOGIN_ROUTE")
                .unwrap_or_else(|| DEFAULT_LOGIN_ROUTE.into()),
            default_route: non_empty("BOILER_DEFAULT_ROUTE")
                .unwrap_or_else(|| DEFAULT_LANDING_ROUTE.into()),
        }
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            login_route: DEFAULT_LOGIN_ROUTE.into(),
            default_route: DEFAULT_LANDING_ROUTE.into(),
        }
    }
}

/// Where the token slot lives on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_dir: PathBuf,
}

impl StoreConfig {
    /// `BOILER_STORAGE_DIR`, falling back to `<data_dir>/boiler-admin`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage_dir = lookup("BOILER_STORAGE_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_dir);
        Self { storage_dir }
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boiler-admin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_defaults_without_env() {
        let config = RouterConfig::from_lookup(|_| None);
        assert_eq!(config, RouterConfig::default());
        assert_eq!(config.login_route, "/auth/login");
        assert_eq!(config.default_route, "/tables/sheet1");
    }

    #[test]
    fn router_overrides_from_lookup() {
        let config = RouterConfig::from_lookup(|key| match key {
            "BOILER_DEFAULT_ROUTE" => Some("/tables/dashboard".into()),
            "BOILER_LOGIN_ROUTE" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.default_route, "/tables/dashboard");
        assert_eq!(config.login_route, "/auth/login");
    }

    #[test]
    fn store_dir_from_lookup() {
        let config = StoreConfig::from_lookup(|_| Some("/tmp/boiler".into()));
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/boiler"));
        let fallback = StoreConfig::from_lookup(|_| None);
        assert!(fallback.storage_dir.ends_with("boiler-admin"));
    }
}
