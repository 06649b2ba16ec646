//! Session domain models.

pub mod claims;
pub mod session;

pub use claims::{Claims, Region, UserInfo};
pub use session::Session;
