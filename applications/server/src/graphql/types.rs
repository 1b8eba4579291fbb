/// GraphQL object and input types
use async_graphql::{InputObject, SimpleObject, ID};
use roster_core::{CreateUser, UpdateUser, User};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

impl From<UserInput> for CreateUser {
    fn from(input: UserInput) -> Self {
        CreateUser::new(input.name, input.email)
    }
}

/// Partial update; omitted fields keep their current value
#[derive(Debug, Clone, Default, InputObject)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserInput> for UpdateUser {
    fn from(input: UpdateUserInput) -> Self {
        UpdateUser {
            name: input.name,
            email: input.email,
        }
    }
}
