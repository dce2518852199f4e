pub mod auth;
pub mod guard;

pub use auth::SessionUser;
pub use guard::{decide, page_guard, GuardDecision};
