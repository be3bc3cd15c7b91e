/// Generates the plain get/list/update/delete passthroughs every entity
/// client shares. Method names are passed in so each client reads in its own
/// vocabulary (`get_user`, `list_products`, ...).
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty {
        get: $get:ident,
        list: $list:ident,
        update: $update:ident,
        delete: $delete:ident $(,)?
    }) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $get(&self, id: String) -> $crate::error::StoreResult<$entity> {
                tracing::debug!("Sending request");
                self.inner.get(id).await
            }

            #[tracing::instrument(skip(self))]
            pub async fn $list(&self) -> $crate::error::StoreResult<Vec<$entity>> {
                tracing::debug!("Sending request");
                self.inner.list().await
            }

            #[tracing::instrument(skip(self, patch))]
            pub async fn $update(
                &self,
                id: String,
                patch: <$entity as $crate::actor_framework::Entity>::Patch,
            ) -> $crate::error::StoreResult<$entity> {
                tracing::debug!("Sending request");
                self.inner.update(id, patch).await
            }

            #[tracing::instrument(skip(self))]
            pub async fn $delete(&self, id: String) -> $crate::error::StoreResult<()> {
                tracing::debug!("Sending request");
                self.inner.delete(id).await
            }

            #[tracing::instrument(skip(self))]
            pub async fn count(&self) -> $crate::error::StoreResult<usize> {
                self.inner.count().await
            }
        }
    };
}

/// Constructor for clients that wrap nothing but their `ResourceClient`.
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty { $($methods:tt)* }) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity { $($methods)* });
    };
}
