// lib/src/registry/collection.rs

//! Linear-scan helpers shared by the four collections. Ids may repeat, so
//! lookups resolve to the first match and removal drops every match.

use models::medical::{Named, Record};

pub(crate) fn contains_id<T: Record>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.id().as_str() == id)
}

pub(crate) fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id().as_str() == id)
}

pub(crate) fn find_by_id_mut<'a, T: Record>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.id().as_str() == id)
}

/// Removes every entry with `id` and returns how many were removed.
pub(crate) fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id().as_str() != id);
    before - items.len()
}

pub(crate) fn search_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.name_contains(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Patient;

    fn patients() -> Vec<Patient> {
        vec![
            Patient::new("P1", "Anna", 30, "555-0100").unwrap(),
            Patient::new("P2", "Joanne", 41, "555-0101").unwrap(),
            Patient::new("P1", "Bob", 52, "555-0102").unwrap(),
        ]
    }

    #[test]
    fn test_find_resolves_first_duplicate() {
        let items = patients();
        assert_eq!(find_by_id(&items, "P1").unwrap().name(), "Anna");
        assert!(find_by_id(&items, "P9").is_none());
        assert!(contains_id(&items, "P2"));
    }

    #[test]
    fn test_remove_drops_every_duplicate() {
        let mut items = patients();
        assert_eq!(remove_by_id(&mut items, "P1"), 2);
        assert_eq!(remove_by_id(&mut items, "P1"), 0);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let items = patients();
        let found: Vec<&str> = search_by_name(&items, "ANN").iter().map(|p| p.name()).collect();
        assert_eq!(found, vec!["Anna", "Joanne"]);
        assert!(search_by_name(&items, "").is_empty());
        assert!(search_by_name(&items, "zed").is_empty());
    }
}
