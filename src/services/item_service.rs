//! Item service abstraction and the in-memory implementation used by the binary.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use crate::models::{CreateItemInput, Item, ItemError, UpdateItemInput};

/// Business-logic layer for items.
///
/// Implementations are shared across concurrent requests and must be safe to
/// call from many tasks at once.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// All items, ordered by id
    async fn list_items(&self) -> Result<Vec<Item>, ItemError>;

    async fn get_item(&self, id: i64) -> Result<Item, ItemError>;

    /// Store a new item under a freshly assigned id
    async fn create_item(&self, input: CreateItemInput) -> Result<Item, ItemError>;

    /// Apply a partial update and return the resulting item
    async fn update_item(&self, id: i64, input: UpdateItemInput) -> Result<Item, ItemError>;

    async fn delete_item(&self, id: i64) -> Result<(), ItemError>;
}

/// Item store backed by a concurrent map. Nothing is persisted.
#[derive(Clone)]
pub struct InMemoryItemService {
    items: Arc<DashMap<i64, Item>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryItemService {
    fn default() -> Self {
        Self {
            items: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl InMemoryItemService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with `items`
    pub fn seed(items: impl IntoIterator<Item = Item>) -> Self {
        let service = Self::new();
        for item in items {
            service.insert(item);
        }
        info!("Seeded in-memory item store with {} items", service.len());
        service
    }

    /// Insert or replace an item. Ids handed out by `create_item` stay above
    /// every inserted id.
    pub fn insert(&self, item: Item) {
        self.next_id
            .fetch_max(item.id.saturating_add(1), Ordering::SeqCst);
        self.items.insert(item.id, item);
    }

    pub fn get(&self, id: i64) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl ItemService for InMemoryItemService {
    async fn list_items(&self) -> Result<Vec<Item>, ItemError> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn get_item(&self, id: i64) -> Result<Item, ItemError> {
        self.get(id).ok_or(ItemError::NotFound)
    }

    async fn create_item(&self, input: CreateItemInput) -> Result<Item, ItemError> {
        if input.name.is_empty() {
            return Err(ItemError::InvalidInput);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Item::new(id, input.name);
        self.items.insert(id, item.clone());

        debug!(item_id = id, "Item created");
        Ok(item)
    }

    async fn update_item(&self, id: i64, input: UpdateItemInput) -> Result<Item, ItemError> {
        if matches!(input.name.as_deref(), Some("")) {
            return Err(ItemError::InvalidInput);
        }

        let mut entry = self.items.get_mut(&id).ok_or(ItemError::NotFound)?;
        if let Some(name) = input.name {
            entry.name = name;
        }

        debug!(item_id = id, "Item updated");
        Ok(entry.clone())
    }

    async fn delete_item(&self, id: i64) -> Result<(), ItemError> {
        self.items.remove(&id).ok_or(ItemError::NotFound)?;
        debug!(item_id = id, "Item deleted");
        Ok(())
    }
}
