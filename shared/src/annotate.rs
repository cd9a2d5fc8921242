//! Presentation derivation
//!
//! `tagList` and `showName` are recomputed from the stored fields on every read.
//! Nothing here touches the store.

use crate::models::{AnnotatedItem, Category, Item, Tag, TagKind};

/// Separator between name parts
const NAME_SEPARATOR: &str = " · ";

/// Annotate an item with its tag list and display name
///
/// Returns a new value; stale derived fields carried by the input are dropped,
/// so annotating an already annotated item yields the same result.
pub fn annotate(item: &Item) -> AnnotatedItem {
    let mut item = item.clone();
    item.strip_derived();
    AnnotatedItem {
        tag_list: tag_list(&item),
        show_name: show_name(&item),
        item,
    }
}

/// Tags in display order
///
/// Beer and can: place, style, ABV, IBU, then every selling point.
/// Other categories only show selling points.
pub fn tag_list(item: &Item) -> Vec<Tag> {
    let mut tags = Vec::new();

    if item.category.has_tasting_notes() {
        if let Some(place) = present(&item.place) {
            tags.push(Tag::new(place, TagKind::Place));
        }
        if let Some(style) = present(&item.style) {
            tags.push(Tag::new(style, TagKind::Style));
        }
        if let Some(abv) = item.abv.as_ref().filter(|v| v.is_present()) {
            tags.push(Tag::new(format!("ABV {}", abv), TagKind::Abv));
        }
        if let Some(ibu) = item.ibu.as_ref().filter(|v| v.is_present()) {
            tags.push(Tag::new(format!("IBU {}", ibu), TagKind::Ibu));
        }
    }

    tags.extend(
        item.usp
            .iter()
            .flatten()
            .map(|usp| Tag::new(usp.as_str(), TagKind::Usp)),
    );
    tags
}

/// Display name
///
/// - beer: `NO.03 · Brand · Name`
/// - can: `Brand · Name`
/// - anything else: the name as stored
pub fn show_name(item: &Item) -> String {
    let mut name = match item.category {
        Category::Beer => format!("NO.{}", number_label(item.order)),
        Category::Can => String::new(),
        _ => return item.name.clone().unwrap_or_default(),
    };

    if let Some(brand) = present(&item.brand) {
        if matches!(item.category, Category::Beer) {
            name.push_str(NAME_SEPARATOR);
        }
        name.push_str(brand);
    }
    if let Some(item_name) = present(&item.name) {
        name.push_str(NAME_SEPARATOR);
        name.push_str(item_name);
    }
    name
}

/// Two-digit tap number; values outside 0..=9 pass through unpadded
fn number_label(order: i64) -> String {
    if (0..=9).contains(&order) {
        format!("0{}", order)
    } else {
        order.to_string()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;

    fn beer(order: i64) -> Item {
        let mut item = Item::new(Category::Beer);
        item.order = order;
        item
    }

    #[test]
    fn test_beer_show_name() {
        let mut item = beer(3);
        item.brand = Some("X".to_string());
        item.name = Some("Y".to_string());
        assert_eq!(show_name(&item), "NO.03 · X · Y");
    }

    #[test]
    fn test_beer_show_name_two_digits() {
        let mut item = beer(12);
        item.name = Some("Y".to_string());
        assert_eq!(show_name(&item), "NO.12 · Y");
        assert_eq!(show_name(&beer(0)), "NO.00");
        assert_eq!(show_name(&beer(123)), "NO.123");
    }

    #[test]
    fn test_can_show_name_has_no_number() {
        let mut item = Item::new(Category::Can);
        item.order = 12;
        item.brand = Some("Z".to_string());
        assert_eq!(show_name(&item), "Z");

        item.name = Some("W".to_string());
        assert_eq!(show_name(&item), "Z · W");

        item.brand = None;
        assert_eq!(show_name(&item), " · W");
    }

    #[test]
    fn test_beer_tags_in_fixed_order() {
        let mut item = beer(1);
        item.usp = Some(vec!["hazy".to_string(), "new".to_string()]);
        item.ibu = Some(Scalar::from(35i64));
        item.abv = Some(Scalar::from(6.5));
        item.style = Some("NEIPA".to_string());
        item.place = Some("Chengdu".to_string());

        let tags = tag_list(&item);
        assert_eq!(
            tags,
            vec![
                Tag::new("Chengdu", TagKind::Place),
                Tag::new("NEIPA", TagKind::Style),
                Tag::new("ABV 6.5", TagKind::Abv),
                Tag::new("IBU 35", TagKind::Ibu),
                Tag::new("hazy", TagKind::Usp),
                Tag::new("new", TagKind::Usp),
            ]
        );
    }

    #[test]
    fn test_missing_and_empty_attributes_are_skipped() {
        let mut item = Item::new(Category::Can);
        item.place = Some(String::new());
        item.abv = Some(Scalar::from(0i64));
        item.ibu = Some(Scalar::from("20"));
        assert_eq!(tag_list(&item), vec![Tag::new("IBU 20", TagKind::Ibu)]);
    }

    #[test]
    fn test_food_uses_selling_points_and_name() {
        let mut item = Item::new(Category::Food);
        item.name = Some("Fries".to_string());
        item.brand = Some("ignored".to_string());
        item.place = Some("ignored".to_string());
        item.usp = Some(vec!["spicy".to_string(), "new".to_string()]);

        let annotated = annotate(&item);
        assert_eq!(
            annotated.tag_list,
            vec![Tag::new("spicy", TagKind::Usp), Tag::new("new", TagKind::Usp)]
        );
        assert_eq!(annotated.show_name, "Fries");
    }

    #[test]
    fn test_other_category_without_usp() {
        let item = Item::new(Category::Drink);
        let annotated = annotate(&item);
        assert!(annotated.tag_list.is_empty());
        assert_eq!(annotated.show_name, "");
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let mut item = beer(7);
        item.brand = Some("X".to_string());
        item.style = Some("Stout".to_string());
        item.usp = Some(vec!["nitro".to_string()]);
        item.extra
            .insert("showName".to_string(), serde_json::json!("stale"));

        let once = annotate(&item);
        let twice = annotate(&once.item);
        assert_eq!(once, twice);
        assert!(!once.item.extra.contains_key("showName"));
    }

    #[test]
    fn test_annotated_item_serializes_flat() {
        let mut item = Item::new(Category::Food);
        item.id = Some("g9".to_string());
        item.name = Some("Nachos".to_string());
        let value = serde_json::to_value(annotate(&item)).unwrap();
        assert_eq!(value["_id"], "g9");
        assert_eq!(value["showName"], "Nachos");
        assert_eq!(value["tagList"], serde_json::json!([]));
    }
}
