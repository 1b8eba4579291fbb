/// HTTP route modules
pub mod graphql;
pub mod health;
