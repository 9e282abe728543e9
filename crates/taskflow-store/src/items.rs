//! Item list CRUD
//!
//! Each helper loads the whole list, edits a copy, and saves the whole list back.

use crate::item::{Item, ItemEdit, ItemUpdate, NewItem};
use crate::store::LocalStore;

impl LocalStore {
    /// Creates an item and prepends it to the list.
    pub async fn add_item(&self, new_item: NewItem) -> Item {
        let mut items = self.load_items().await;
        let item = Item::create(new_item, self.now_millis());
        items.insert(0, item.clone());
        self.save_items(&items).await;

        tracing::debug!(item_id = %item.id, "Added item");
        item
    }

    /// Merges `updates` into the item with `id`. The list is rewritten even if
    /// nothing matched.
    pub async fn update_item(&self, id: &str, updates: &ItemUpdate) -> Option<Item> {
        self.modify_item(id, |item| updates.apply(item)).await
    }

    /// Applies the item edit form to the item with `id`.
    pub async fn edit_item(&self, id: &str, edit: ItemEdit) -> Option<Item> {
        self.update_item(id, &edit.into_update()).await
    }

    /// Removes every item with `id` and returns what is left.
    pub async fn delete_item(&self, id: &str) -> Vec<Item> {
        let mut items = self.load_items().await;
        items.retain(|item| item.id != id);
        self.save_items(&items).await;
        items
    }

    pub async fn toggle_item_done(&self, id: &str) -> Option<Item> {
        self.modify_item(id, |item| item.done = !item.done).await
    }

    pub async fn clear_all_items(&self) -> Vec<Item> {
        self.save_items(&[]).await;
        Vec::new()
    }

    async fn modify_item<F>(&self, id: &str, f: F) -> Option<Item>
    where
        F: Fn(&mut Item),
    {
        let mut items = self.load_items().await;
        for item in items.iter_mut().filter(|item| item.id == id) {
            f(item);
        }
        self.save_items(&items).await;
        items.into_iter().find(|item| item.id == id)
    }
}
