use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{uuid_id, Entity, ResourceActor, ResourceClient};
use crate::api::AppState;
use crate::clients::{CategoryClient, PostClient, ProductClient, TodoClient, UserClient};
use crate::config::StoreConfig;
use crate::domain::{Category, Post, Product, Todo, User};

use super::seed::seed_sample_data;

/// Owns every entity actor and the clients that talk to them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct AppSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub post_client: PostClient,
    pub todo_client: TodoClient,
    pub category_client: CategoryClient,
    handles: Vec<JoinHandle<()>>,
}

fn spawn_actor<T: Entity>(capacity: usize, handles: &mut Vec<JoinHandle<()>>) -> ResourceClient<T> {
    let (actor, client) = ResourceActor::<T>::new(capacity, uuid_id);
    handles.push(tokio::spawn(actor.run()));
    client
}

impl AppSystem {
    /// Spawns one actor per collection. Must be called inside a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        info!(capacity = config.channel_capacity, "Starting entity actors");
        let capacity = config.channel_capacity.max(1);
        let mut handles = Vec::with_capacity(5);

        let user_client = UserClient::new(spawn_actor::<User>(capacity, &mut handles));
        let product_client = ProductClient::new(spawn_actor::<Product>(capacity, &mut handles));
        let category_client = CategoryClient::new(spawn_actor::<Category>(capacity, &mut handles));
        let post_client = PostClient::new(spawn_actor::<Post>(capacity, &mut handles), user_client.clone());
        let todo_client = TodoClient::new(spawn_actor::<Todo>(capacity, &mut handles), category_client.clone());

        Self {
            user_client,
            product_client,
            post_client,
            todo_client,
            category_client,
            handles,
        }
    }

    /// Starts the actors and, when configured, loads the demo records.
    pub async fn start(config: &StoreConfig) -> Result<Self, String> {
        let system = Self::new(config);
        if config.seed_sample_data {
            seed_sample_data(&system).await.map_err(|e| {
                error!(error = %e, "Seeding sample data failed");
                e.to_string()
            })?;
        }
        Ok(system)
    }

    /// Handler state sharing this system's clients.
    pub fn state(&self) -> AppState {
        AppState {
            users: self.user_client.clone(),
            products: self.product_client.clone(),
            posts: self.post_client.clone(),
            todos: self.todo_client.clone(),
            categories: self.category_client.clone(),
        }
    }

    /// Drops the clients and waits for every actor to drain.
    ///
    /// Clones handed out through [`AppSystem::state`] keep their actor alive,
    /// so the router has to be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.post_client);
        drop(self.todo_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.category_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_config(seed: bool) -> StoreConfig {
        StoreConfig {
            channel_capacity: 8,
            seed_sample_data: seed,
        }
    }

    #[tokio::test]
    async fn starts_empty_without_seed() {
        let system = AppSystem::start(&store_config(false)).await.unwrap();
        assert_eq!(system.user_client.count().await.unwrap(), 0);
        assert_eq!(system.post_client.count().await.unwrap(), 0);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn seeds_every_collection() {
        let system = AppSystem::start(&store_config(true)).await.unwrap();
        assert_eq!(system.user_client.count().await.unwrap(), 3);
        assert_eq!(system.product_client.count().await.unwrap(), 2);
        assert_eq!(system.post_client.count().await.unwrap(), 2);
        assert_eq!(system.category_client.count().await.unwrap(), 3);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_waits_for_actors() {
        let system = AppSystem::new(&store_config(false));
        let state = system.state();
        drop(state);
        assert!(system.shutdown().await.is_ok());
    }
}
