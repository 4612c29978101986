use error_stack::report;

use super::MockDb;
use crate::{
    core::errors::{CustomResult, StorageError},
    types::storage,
};

#[async_trait::async_trait]
pub trait OrderInterface {
    /// Record an order. Success means the write is confirmed; callers only
    /// acknowledge the order to the customer afterwards.
    async fn insert_order(
        &self,
        order: storage::Order,
    ) -> CustomResult<storage::Order, StorageError>;

    async fn find_order_by_order_id(
        &self,
        order_id: &str,
    ) -> CustomResult<storage::Order, StorageError>;
}

#[async_trait::async_trait]
impl OrderInterface for MockDb {
    async fn insert_order(
        &self,
        order: storage::Order,
    ) -> CustomResult<storage::Order, StorageError> {
        let mut orders = self.orders.lock().await;
        if orders
            .iter()
            .any(|existing| existing.order_id == order.order_id)
        {
            return Err(report!(StorageError::DuplicateValue {
                entity: "order",
                key: Some(order.order_id.clone()),
            }));
        }
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_order_by_order_id(
        &self,
        order_id: &str,
    ) -> CustomResult<storage::Order, StorageError> {
        let orders = self.orders.lock().await;
        orders
            .iter()
            .find(|order| order.order_id == order_id)
            .cloned()
            .ok_or_else(|| report!(StorageError::ValueNotFound(order_id.to_string())))
    }
}
