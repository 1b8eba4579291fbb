use super::{gql_error, store, UserObject};
use async_graphql::{Context, Object, Result, ID};
use roster_core::UserId;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> String {
        "Hello world!".to_string()
    }

    /// Every user, in insertion order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = store(ctx)?.list_users().await.map_err(gql_error)?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// User by id, null when absent
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let user = store(ctx)?
            .get_user(&UserId::new(id.0))
            .await
            .map_err(gql_error)?;
        Ok(user.map(UserObject::from))
    }
}
