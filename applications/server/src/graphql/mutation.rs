use super::{gql_error, store, UpdateUserInput, UserInput, UserObject};
use async_graphql::{Context, Object, Result, ID};
use roster_core::{RosterError, UserId};

#[derive(Debug, Default)]
pub struct MutationRoot;

fn log_rejection(op: &str, err: &RosterError) {
    if err.is_client_error() {
        tracing::debug!(op, error = %err, "mutation rejected");
    } else {
        tracing::warn!(op, error = %err, "mutation failed");
    }
}

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: UserInput) -> Result<UserObject> {
        let user = store(ctx)?
            .create_user(input.into())
            .await
            .map_err(|e| {
                log_rejection("createUser", &e);
                gql_error(e)
            })?;

        tracing::info!(id = %user.id, "Created user");
        Ok(user.into())
    }

    /// Replaces only the fields present in `input`
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<Option<UserObject>> {
        let user = store(ctx)?
            .update_user(&UserId::new(id.0), input.into())
            .await
            .map_err(|e| {
                log_rejection("updateUser", &e);
                gql_error(e)
            })?;

        tracing::info!(id = %user.id, "Updated user");
        Ok(Some(user.into()))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let id = UserId::new(id.0);
        store(ctx)?.delete_user(&id).await.map_err(|e| {
            log_rejection("deleteUser", &e);
            gql_error(e)
        })?;

        tracing::info!(%id, "Deleted user");
        Ok(true)
    }
}
