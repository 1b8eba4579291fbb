//! GraphQL schema and resolver table
//!
//! The record store is attached to the schema as context data, so each
//! schema instance owns exactly one store.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{UpdateUserInput, UserInput, UserObject};

use crate::error::ServerError;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};
use roster_core::{RosterError, UserStore};
use std::sync::Arc;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around `store`, rejecting queries nested deeper than `depth`
pub fn build_schema(store: Arc<dyn UserStore>, depth: usize) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .limit_depth(depth)
        .finish()
}

fn store<'ctx>(ctx: &Context<'ctx>) -> async_graphql::Result<&'ctx Arc<dyn UserStore>> {
    ctx.data::<Arc<dyn UserStore>>()
}

/// Convert a store error into a GraphQL error with an extension code
fn gql_error(err: RosterError) -> async_graphql::Error {
    ServerError::from(err).extend()
}
