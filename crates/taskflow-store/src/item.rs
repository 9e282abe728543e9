//! Todo item document types

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_CATEGORY: &str = "Geral";

/// A stored entry missing a field takes that field's default, so one
/// incomplete entry never makes the whole list unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Decimal string of the creation timestamp.
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    pub category: String,
    pub done: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            quantity: 1,
            category: DEFAULT_CATEGORY.to_string(),
            done: false,
            created_at: 0,
        }
    }
}

/// Accepts any JSON number or null. Fractions are truncated; values below 1
/// become 1.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(match raw {
        Some(q) if q.is_finite() && q >= 1.0 => q.min(u32::MAX as f64) as u32,
        _ => 1,
    })
}

impl Item {
    pub(crate) fn create(new: NewItem, now_millis: i64) -> Self {
        Self {
            id: now_millis.to_string(),
            title: new.title.trim().to_string(),
            quantity: match new.quantity {
                Some(q) if q > 0 => q,
                _ => 1,
            },
            category: new
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            done: false,
            created_at: now_millis,
        }
    }
}

/// Input for `LocalStore::add_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Shallow field overwrite. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub done: Option<bool>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
            && self.done.is_none()
    }

    pub(crate) fn apply(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(done) = self.done {
            item.done = done;
        }
    }
}

/// Raw values from the item edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEdit {
    pub title: String,
    pub quantity: Option<u32>,
    pub category: String,
}

impl ItemEdit {
    /// Blank text and zero or missing quantity keep the stored value.
    pub fn into_update(self) -> ItemUpdate {
        let title = self.title.trim();
        let category = self.category.trim();
        ItemUpdate {
            title: (!title.is_empty()).then(|| title.to_string()),
            quantity: self.quantity.filter(|q| *q > 0),
            category: (!category.is_empty()).then(|| category.to_string()),
            done: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemFilter {
    #[default]
    All,
    Open,
    Done,
}

impl ItemFilter {
    pub const ALL: [ItemFilter; 3] = [ItemFilter::All, ItemFilter::Open, ItemFilter::Done];

    pub fn label(self) -> &'static str {
        match self {
            ItemFilter::All => "Todos",
            ItemFilter::Open => "Abertos",
            ItemFilter::Done => "Concluídos",
        }
    }

    pub fn matches(self, item: &Item) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Open => !item.done,
            ItemFilter::Done => item.done,
        }
    }

    pub fn apply(self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, done: bool) -> Item {
        Item {
            id: id.to_string(),
            title: format!("item {id}"),
            quantity: 1,
            category: DEFAULT_CATEGORY.to_string(),
            done,
            created_at: 0,
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let created = Item::create(NewItem::new("  Milk "), 1_700_000_000_123);
        assert_eq!(created.id, "1700000000123");
        assert_eq!(created.title, "Milk");
        assert_eq!(created.quantity, 1);
        assert_eq!(created.category, "Geral");
        assert!(!created.done);
        assert_eq!(created.created_at, 1_700_000_000_123);
    }

    #[test]
    fn test_create_zero_quantity_becomes_one() {
        let created = Item::create(NewItem::new("Eggs").quantity(0), 1);
        assert_eq!(created.quantity, 1);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(item("7", true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "7",
                "title": "item 7",
                "quantity": 1,
                "category": "Geral",
                "done": true,
                "createdAt": 0,
            })
        );
    }

    #[test]
    fn test_partial_entry_takes_field_defaults() {
        let it: Item = serde_json::from_str(r#"{"id":"1","title":"Bread","createdAt":5}"#).unwrap();
        assert_eq!(it.title, "Bread");
        assert_eq!(it.quantity, 1);
        assert_eq!(it.category, "Geral");
        assert!(!it.done);
        assert_eq!(it.created_at, 5);
    }

    #[test]
    fn test_quantity_accepts_any_number() {
        let quantity = |json: &str| {
            serde_json::from_str::<Item>(&format!(r#"{{"id":"1","quantity":{json}}}"#))
                .unwrap()
                .quantity
        };
        assert_eq!(quantity("3"), 3);
        assert_eq!(quantity("2.5"), 2);
        assert_eq!(quantity("-1"), 1);
        assert_eq!(quantity("0"), 1);
        assert_eq!(quantity("null"), 1);
    }

    #[test]
    fn test_update_is_shallow() {
        let mut it = item("1", false);
        let update = ItemUpdate {
            title: Some("Bread".into()),
            done: Some(true),
            ..Default::default()
        };
        update.apply(&mut it);
        assert_eq!(it.title, "Bread");
        assert!(it.done);
        assert_eq!(it.quantity, 1);
        assert_eq!(it.category, "Geral");
    }

    #[test]
    fn test_edit_keeps_blank_fields() {
        let update = ItemEdit {
            title: "   ".into(),
            quantity: Some(0),
            category: " Casa ".into(),
        }
        .into_update();
        assert_eq!(update.title, None);
        assert_eq!(update.quantity, None);
        assert_eq!(update.category.as_deref(), Some("Casa"));
        assert_eq!(update.done, None);
        assert!(ItemEdit::default().into_update().is_empty());
    }

    #[test]
    fn test_filter_partitions_by_done() {
        let items = vec![item("1", false), item("2", true), item("3", false)];
        assert_eq!(ItemFilter::All.apply(&items).len(), 3);

        let open: Vec<_> = ItemFilter::Open.apply(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(open, vec!["1", "3"]);

        let done: Vec<_> = ItemFilter::Done.apply(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(done, vec!["2"]);
        assert_eq!(ItemFilter::Done.label(), "Concluídos");
    }
}
