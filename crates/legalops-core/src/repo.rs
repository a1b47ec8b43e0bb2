//! Keyed access over the record-store documents.
//!
//! Each roster or log document owns a `Vec` of records; the trait gives the
//! rule engines get/list/upsert without knowing how the document is persisted.

/// A record addressable by a stable string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Get/list/upsert over one entity type.
pub trait Repository<T: Keyed> {
    /// All records in insertion order.
    fn list(&self) -> &[T];

    fn records_mut(&mut self) -> &mut Vec<T>;

    fn get(&self, key: &str) -> Option<&T> {
        self.list().iter().find(|r| r.key() == key)
    }

    /// Replace the record with the same key in place, or append it.
    ///
    /// Returns `true` when the record was newly inserted.
    fn upsert(&mut self, record: T) -> bool {
        let records = self.records_mut();
        match records.iter_mut().find(|r| r.key() == record.key()) {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                records.push(record);
                true
            }
        }
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    #[derive(Default)]
    struct Items(Vec<Item>);

    impl Repository<Item> for Items {
        fn list(&self) -> &[Item] {
            &self.0
        }

        fn records_mut(&mut self) -> &mut Vec<Item> {
            &mut self.0
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.into(),
            value,
        }
    }

    #[test]
    fn upsert_appends_new_keys() {
        let mut items = Items::default();
        assert!(items.upsert(item("a", 1)));
        assert!(items.upsert(item("b", 2)));
        assert_eq!(items.len(), 2);
        assert_eq!(items.get("b").map(|i| i.value), Some(2));
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut items = Items::default();
        items.upsert(item("a", 1));
        items.upsert(item("b", 2));
        assert!(!items.upsert(item("a", 10)));
        assert_eq!(items.len(), 2);
        assert_eq!(items.list()[0], item("a", 10));
    }

    #[test]
    fn get_missing_key() {
        let items = Items::default();
        assert!(items.get("nope").is_none());
        assert!(items.is_empty());
    }
}
