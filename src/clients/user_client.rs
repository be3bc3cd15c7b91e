use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::User;
use crate::error::StoreResult;
use crate::query::matches_query;
use crate::user_actor::UserCreate;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User {
    get: get_user,
    list: list_users,
    update: update_user,
    delete: delete_user,
});

impl UserClient {
    #[instrument(skip(self, user))]
    pub async fn create_user(&self, user: UserCreate) -> StoreResult<User> {
        debug!("Sending request");
        self.inner.create(user).await
    }

    /// Name or email containing `q`, ignoring case. Blank `q` lists everyone.
    #[instrument(skip(self))]
    pub async fn search_users(&self, q: Option<String>) -> StoreResult<Vec<User>> {
        debug!("Sending request");
        self.inner.query(move |user: &User| matches_query(user, q.as_deref())).await
    }

    /// The user owning `username` when `password` matches its stored hash.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: String, password: String) -> StoreResult<Option<User>> {
        debug!("Sending request");
        let candidates = {
            let username = username.clone();
            self.inner
                .query(move |user: &User| user.username.as_deref() == Some(username.as_str()))
                .await?
        };
        let user = candidates.into_iter().find(|user| user.verify_password(&password));
        match &user {
            Some(user) => info!(user_id = %user.id, "Credentials accepted"),
            None => info!(%username, "Credentials rejected"),
        }
        Ok(user)
    }
}
