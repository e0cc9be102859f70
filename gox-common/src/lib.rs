//! gox Common Types
//!
//! Wire types shared between the backend and anything that talks to it.

pub mod user;

pub use user::{CreateUserRequest, User};
