//! Item Model (records of the `goods` collection)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Wire names of fields owned by the store
pub const ID_FIELD: &str = "_id";
pub const OWNER_FIELD: &str = "_openid";

/// Fields computed on read, never persisted
pub const DERIVED_FIELDS: [&str; 2] = ["tagList", "showName"];

/// Item category
///
/// Unknown values are kept verbatim in `Other` so a replace never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Beer,
    Can,
    Food,
    Drink,
    Other(String),
}

impl Category {
    /// Display priority, first entry sorts first
    pub const PRIORITY: [Category; 4] = [
        Category::Beer,
        Category::Can,
        Category::Food,
        Category::Drink,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Beer => "beer",
            Category::Can => "can",
            Category::Food => "food",
            Category::Drink => "drink",
            Category::Other(s) => s,
        }
    }

    /// Position in [`Category::PRIORITY`], `None` for unknown categories
    pub fn priority(&self) -> Option<usize> {
        Self::PRIORITY.iter().position(|c| c == self)
    }

    /// Beer and can records carry tasting attributes (place, style, abv, ibu)
    pub fn has_tasting_notes(&self) -> bool {
        matches!(self, Category::Beer | Category::Can)
    }
}

/// A document stored without a category sorts with the unknown ones
impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "beer" => Category::Beer,
            "can" => Category::Can,
            "food" => Category::Food,
            "drink" => Category::Drink,
            _ => Category::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loosely typed attribute value (ABV/IBU are stored either as numbers or text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Empty text and numeric zero count as absent
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    /// Whole-valued floats print without a fractional part (`5.0` as `5`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => {
                    write!(f, "{}", v as i64)
                }
                _ => write!(f, "{}", n),
            },
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Scalar::Number)
            .unwrap_or_else(|| Scalar::Text(value.to_string()))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Catalog item as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Ownership marker assigned by the store
    #[serde(rename = "_openid", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibu: Option<Scalar>,
    /// Unique selling points, free-form tags in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usp: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other stored fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            id: None,
            owner: None,
            category: category.into(),
            order: 0,
            hide: None,
            place: None,
            style: None,
            abv: None,
            ibu: None,
            usp: None,
            brand: None,
            name: None,
            extra: Map::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hide.unwrap_or(false)
    }

    /// Drop stale derived fields a document may have been saved with
    pub fn strip_derived(&mut self) {
        for field in DERIVED_FIELDS {
            self.extra.remove(field);
        }
    }

    /// Fields to send on create or update: everything except the identifier,
    /// the ownership marker and derived presentation fields.
    pub fn write_fields(&self) -> serde_json::Result<Map<String, Value>> {
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.remove(ID_FIELD);
        fields.remove(OWNER_FIELD);
        for field in DERIVED_FIELDS {
            fields.remove(field);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_round_trips_unknown_values() {
        let item: Item = serde_json::from_value(json!({
            "_id": "g1",
            "category": "merch",
            "order": 1
        }))
        .unwrap();
        assert_eq!(item.category, Category::Other("merch".to_string()));
        assert_eq!(item.category.priority(), None);

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["category"], "merch");
    }

    #[test]
    fn test_item_defaults() {
        let item: Item = serde_json::from_value(json!({ "category": "food" })).unwrap();
        assert_eq!(item.order, 0);
        assert!(!item.is_hidden());
        assert!(item.id.is_none());
        assert!(item.usp.is_none());
    }

    #[test]
    fn test_scalar_accepts_numbers_and_text() {
        let item: Item = serde_json::from_value(json!({
            "category": "beer",
            "abv": 5.5,
            "ibu": "40"
        }))
        .unwrap();
        assert_eq!(item.abv.as_ref().unwrap().to_string(), "5.5");
        assert_eq!(item.ibu.as_ref().unwrap().to_string(), "40");
        assert!(!Scalar::from(0i64).is_present());
        assert!(!Scalar::from("").is_present());
    }

    #[test]
    fn test_write_fields_strips_store_and_derived_fields() {
        let item: Item = serde_json::from_value(json!({
            "_id": "g1",
            "_openid": "owner",
            "category": "can",
            "order": 4,
            "brand": "Z",
            "tagList": [],
            "showName": "stale",
            "price": 38
        }))
        .unwrap();

        let fields = item.write_fields().unwrap();
        assert!(!fields.contains_key("_id"));
        assert!(!fields.contains_key("_openid"));
        assert!(!fields.contains_key("tagList"));
        assert!(!fields.contains_key("showName"));
        assert_eq!(fields["price"], 38);
        assert_eq!(fields["brand"], "Z");
        assert_eq!(fields["order"], 4);
    }

    #[test]
    fn test_whole_floats_print_as_integers() {
        assert_eq!(Scalar::from(5.0).to_string(), "5");
        assert_eq!(Scalar::from(-2.0).to_string(), "-2");
        assert_eq!(Scalar::from(5.2).to_string(), "5.2");
        assert_eq!(Scalar::from(40i64).to_string(), "40");

        let item: Item = serde_json::from_value(json!({ "category": "beer", "abv": 6.0 })).unwrap();
        assert_eq!(item.abv.unwrap().to_string(), "6");
    }

    #[test]
    fn test_missing_category_is_unknown() {
        let item: Item = serde_json::from_value(json!({ "_id": "g2", "order": 3 })).unwrap();
        assert_eq!(item.category, Category::Other(String::new()));
        assert_eq!(item.category.priority(), None);
        assert_eq!(item.order, 3);
    }
}
