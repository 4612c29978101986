pub mod orders;

use std::sync::Arc;

use crate::types::storage;

/// Storage capabilities the service composes over. Durable persistence sits
/// behind this seam; the in-process [`MockDb`] is the only implementation
/// shipped, pending a production database.
#[async_trait::async_trait]
pub trait StorageInterface:
    Send + Sync + dyn_clone::DynClone + orders::OrderInterface + 'static
{
}

dyn_clone::clone_trait_object!(StorageInterface);

/// In-memory store. Order uniqueness is enforced per process only, which
/// matches the identifier's probabilistic uniqueness guarantee.
#[derive(Clone, Default)]
pub struct MockDb {
    orders: Arc<tokio::sync::Mutex<Vec<storage::Order>>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageInterface for MockDb {}
