//! Roster Core
//!
//! Domain types, validation rules and the record store behind the Roster
//! GraphQL user directory.
//!
//! # Architecture
//!
//! - **Domain Types**: `User`, `UserId`, `CreateUser`, `UpdateUser`
//! - **Storage**: the `UserStore` trait and its `InMemoryUserStore` implementation
//! - **Validation**: name/email normalization shared by every write path
//! - **Error Handling**: `RosterError` and the `Result` alias
//!
//! # Example
//!
//! ```rust
//! use roster_core::{CreateUser, InMemoryUserStore, UserStore};
//!
//! # tokio_test_block(async {
//! let store = InMemoryUserStore::seeded();
//! let user = store
//!     .create_user(CreateUser::new("  Dana Scully ", "Dana@FBI.gov"))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(user.id.as_str(), "4");
//! assert_eq!(user.name, "Dana Scully");
//! assert_eq!(user.email, "dana@fbi.gov");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod storage;
pub mod types;
pub mod validation;

pub use error::{Result, RosterError};
pub use memory::InMemoryUserStore;
pub use storage::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId};
