use serde::{Deserialize, Serialize};

use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Trash,
    Nature,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Trash => "trash",
            ItemKind::Nature => "nature",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub position: Point,
    pub kind: ItemKind,
    pub word: String,
}

impl Item {
    pub fn new(position: Point, kind: ItemKind, word: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            word: word.into(),
        }
    }
}

/// Live items in spawn order. Several items may share a cell only through the
/// placement fallback, in which case the oldest one is consumed first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.items.iter().any(|item| item.position == *point)
    }

    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the item at `point`, if any.
    pub fn take_at(&mut self, point: &Point) -> Option<Item> {
        let index = self.items.iter().position(|item| item.position == *point)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_at_removes_only_that_item() {
        let mut items = ItemSet::new();
        items.insert(Item::new(Point::new(1, 1), ItemKind::Trash, "can"));
        items.insert(Item::new(Point::new(2, 2), ItemKind::Nature, "tree"));

        let taken = items.take_at(&Point::new(1, 1)).unwrap();
        assert_eq!(taken.word, "can");
        assert_eq!(items.len(), 1);
        assert!(items.take_at(&Point::new(1, 1)).is_none());
        assert!(items.occupies(&Point::new(2, 2)));
    }
}
