//! Display ordering
//!
//! Category priority, then visible before hidden, then `order` ascending.
//! Unknown categories sort after every known one.

use crate::models::{AnnotatedItem, Category, Item};
use std::cmp::Ordering;

/// Total order over items
pub fn compare(a: &Item, b: &Item) -> Ordering {
    category_rank(&a.category)
        .cmp(&category_rank(&b.category))
        .then_with(|| a.is_hidden().cmp(&b.is_hidden()))
        .then_with(|| a.order.cmp(&b.order))
}

/// Sort a whole collection in place
///
/// Stable: ties (including distinct unknown categories) keep their input order.
pub fn sort_items(items: &mut [AnnotatedItem]) {
    items.sort_by(|a, b| compare(&a.item, &b.item));
}

fn category_rank(category: &Category) -> usize {
    category.priority().unwrap_or(Category::PRIORITY.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate;

    fn item(category: &str, order: i64, hide: Option<bool>) -> AnnotatedItem {
        let mut item = Item::new(category);
        item.order = order;
        item.hide = hide;
        annotate(&item)
    }

    fn categories(items: &[AnnotatedItem]) -> Vec<&str> {
        items.iter().map(|i| i.item.category.as_str()).collect()
    }

    #[test]
    fn test_category_priority() {
        let mut items = vec![
            item("drink", 1, None),
            item("beer", 1, None),
            item("can", 1, None),
            item("beer", 1, None),
        ];
        sort_items(&mut items);
        assert_eq!(categories(&items), vec!["beer", "beer", "can", "drink"]);
    }

    #[test]
    fn test_hidden_sorts_after_visible_regardless_of_order() {
        let mut items = vec![item("beer", 1, Some(true)), item("beer", 9, Some(false))];
        sort_items(&mut items);
        assert_eq!(items[0].item.order, 9);
        assert!(items[1].item.is_hidden());

        let mut items = vec![item("beer", 1, Some(true)), item("beer", 9, None)];
        sort_items(&mut items);
        assert_eq!(items[0].item.order, 9);
    }

    #[test]
    fn test_order_ascending_within_category() {
        let mut items = vec![
            item("food", 3, None),
            item("food", 1, None),
            item("food", 2, None),
        ];
        sort_items(&mut items);
        let orders: Vec<i64> = items.iter().map(|i| i.item.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_unknown_categories_sort_last_and_stay_stable() {
        let mut items = vec![
            item("merch", 1, None),
            item("drink", 5, None),
            item("gift", 1, None),
            item("beer", 2, None),
        ];
        sort_items(&mut items);
        assert_eq!(categories(&items), vec!["beer", "drink", "merch", "gift"]);
    }

    #[test]
    fn test_compare_is_consistent() {
        let a = item("can", 1, None);
        let b = item("can", 1, Some(true));
        assert_eq!(compare(&a.item, &b.item), Ordering::Less);
        assert_eq!(compare(&b.item, &a.item), Ordering::Greater);
        assert_eq!(compare(&a.item, &a.item), Ordering::Equal);
    }

    #[test]
    fn test_item_without_category_sorts_last() {
        let stored: Item =
            serde_json::from_value(serde_json::json!({ "order": 0, "name": "loose" })).unwrap();
        let mut items = vec![annotate(&stored), item("drink", 9, Some(true))];
        sort_items(&mut items);
        assert_eq!(items[0].item.category, Category::Drink);
        assert_eq!(items[1].show_name, "loose");
    }
}
