//! Auth domain module.
//!
//! - `model`: `User`, `UserRole`, `AuthState`, `AuthView`
//! - `store`: session lifecycle (`AuthStore`)

mod model;
mod store;

pub use model::{AuthState, AuthView, User, UserRole};
pub use store::AuthStore;
