//! Domain types: users and their identifiers

mod ids;
mod user;

pub use ids::UserId;
pub use user::{CreateUser, UpdateUser, User};
