use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    types::{Item, ItemFields},
    utils,
};

/// Store handle shared between request handlers.
pub type SharedItemStore = Arc<Mutex<dyn ItemStore>>;

/// Operations the HTTP layer needs from an item collection.
///
/// Lookups return `None` for identifiers that were never issued (or were
/// removed); none of these operations fail otherwise.
pub trait ItemStore: Send {
    /// All items in insertion order.
    fn list(&self) -> Vec<Item>;

    /// Stores `fields` under the next identifier and returns the new item.
    fn create(&mut self, fields: ItemFields) -> Item;

    fn get(&self, id: u64) -> Option<Item>;

    /// Merges `partial` into the item. Present keys overwrite, absent keys are kept.
    fn update(&mut self, id: u64, partial: ItemFields) -> Option<Item>;

    fn remove(&mut self, id: u64) -> Option<Item>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory owner of the item collection.
///
/// Identifiers start at 1 and increase by one per created item. The counter is
/// independent of the collection, so removing an item never frees its id.
#[derive(Debug)]
pub struct ItemManager {
    items: Vec<Item>,
    last_id: u64,
}

impl ItemManager {
    pub fn new() -> Self {
        ItemManager {
            items: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a store pre-filled with `count` generated items.
    pub fn seeded(count: usize) -> Self {
        let mut manager = Self::new();
        manager.seed(count);
        manager
    }

    /// Appends `count` synthetic items, e.g. for a demo frontend.
    pub fn seed(&mut self, count: usize) {
        let mut rng = rand::rng();
        for _ in 0..count {
            let fields = utils::random_item_fields(&mut rng);
            self.create(fields);
        }
    }

    pub fn into_shared(self) -> SharedItemStore {
        Arc::new(Mutex::new(self))
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl Default for ItemManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for ItemManager {
    fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn create(&mut self, fields: ItemFields) -> Item {
        self.last_id += 1;
        let item = Item {
            id: self.last_id,
            fields: utils::sanitize_fields(fields),
        };
        self.items.push(item.clone());
        item
    }

    fn get(&self, id: u64) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn update(&mut self, id: u64, partial: ItemFields) -> Option<Item> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        for (key, value) in utils::sanitize_fields(partial) {
            item.fields.insert(key, value);
        }
        Some(item.clone())
    }

    fn remove(&mut self, id: u64) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
