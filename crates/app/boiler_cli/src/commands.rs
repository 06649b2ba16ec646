use std::path::PathBuf;
use std::sync::Arc;

use boiler_core::auth;
use boiler_core::config::{RouterConfig, StoreConfig};
use boiler_core::guard::{Access, evaluate};
use boiler_core::models::Region;
use boiler_core::routes::{navigate, visible_routes};
use boiler_core::session::SessionStore;
use boiler_core::storage::FileStorage;
use chrono::DateTime;
use serde_json::Value;

use crate::Result;

/// Session store and routing configuration for one CLI invocation.
pub struct Context {
    store: SessionStore,
    router: RouterConfig,
}

impl Context {
    pub fn open(storage_dir: Option<PathBuf>) -> Self {
        let dir = storage_dir.unwrap_or_else(|| StoreConfig::from_env().storage_dir);
        log::debug!("token storage at {}", dir.display());
        let store = SessionStore::new(Arc::new(FileStorage::new(dir)));
        store.initialize();
        Self {
            store,
            router: RouterConfig::from_env(),
        }
    }
}

pub fn decode(token: &str) -> Result<()> {
    let payload = auth::decode_value(token)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(payload))?);
    Ok(())
}

pub fn inspect(token: &str) -> Result<()> {
    let claims = auth::decode(token)?;
    let or_missing = |v: Option<&str>| v.unwrap_or("<missing>").to_string();

    println!("id:         {}", or_missing(claims.id.as_deref()));
    println!("first_name: {}", or_missing(claims.first_name.as_deref()));
    match &claims.region {
        Some(Region::Single(id)) => println!("region:     {id}"),
        Some(Region::Many(ids)) => println!("region:     [{}]", ids.join(", ")),
        None => println!("region:     <missing>"),
    }
    println!("admin:      {}", claims.is_admin());
    println!("iat:        {}", timestamp(claims.iat));
    println!("exp:        {}", timestamp(claims.exp));

    if claims.region.is_none() {
        let fields: Vec<&str> = claims.raw().keys().map(String::as_str).collect();
        log::warn!("region is missing from token; fields: {}", fields.join(", "));
    }
    Ok(())
}

fn timestamp(secs: Option<i64>) -> String {
    match secs {
        Some(secs) => match DateTime::from_timestamp(secs, 0) {
            Some(at) => format!("{secs} ({})", at.to_rfc3339()),
            None => secs.to_string(),
        },
        None => "<missing>".to_string(),
    }
}

pub fn login(ctx: &Context, token: &str, refresh_token: Option<&str>) -> Result<()> {
    let nav = ctx.store.login(token, refresh_token)?;
    println!("{}", nav.path(&ctx.router));
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let nav = ctx.store.logout();
    println!("{}", nav.path(&ctx.router));
    Ok(())
}

pub fn status(ctx: &Context) -> Result<()> {
    let session = ctx.store.snapshot();
    println!("{}", serde_json::to_string_pretty(&*session)?);
    Ok(())
}

pub fn check(ctx: &Context, path: &str) -> Result<()> {
    let decision = navigate(&ctx.store.snapshot(), path);
    match decision.redirect() {
        Some(nav) => println!("{decision} {}", nav.path(&ctx.router)),
        None => println!("{decision}"),
    }
    Ok(())
}

pub fn evaluate_access(ctx: &Context, access: &str) -> Result<()> {
    let access: Access = access.parse()?;
    let decision = evaluate(&ctx.store.snapshot(), access);
    match decision.redirect() {
        Some(nav) => println!("{decision} {}", nav.path(&ctx.router)),
        None => println!("{decision}"),
    }
    Ok(())
}

pub fn routes(ctx: &Context) -> Result<()> {
    let session = ctx.store.snapshot();
    if !session.is_authenticated() {
        return Err(crate::Error::Custom(format!(
            "not signed in; navigate to {}",
            ctx.router.login_route
        )));
    }
    for route in visible_routes(session.is_admin()) {
        println!("{}\t{}", route.path, route.name);
    }
    Ok(())
}
