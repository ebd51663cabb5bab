//! Product records and the coercions that turn loose JSON into them

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const NOT_SPECIFIED: &str = "Not specified in the provided dataset.";

/// A product as the page builders see it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub price_inr: i64,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub skin_type: Vec<String>,
    pub concentration: String,
    pub how_to_use: String,
    pub side_effects: String,
}

impl Product {
    /// Parse a canonical record, filling gaps with readable defaults
    pub fn parse(raw: &Value) -> Self {
        let field = |key: &str| raw.get(key).unwrap_or(&Value::Null);
        Self {
            product_name: coerce_str(field("product_name"), "Unknown Product"),
            brand: coerce_str(field("brand"), "Unknown"),
            category: coerce_str(field("category"), "Unknown"),
            price_inr: coerce_price(field("price_inr")),
            key_ingredients: coerce_list(field("key_ingredients")),
            benefits: coerce_list(field("benefits")),
            skin_type: coerce_list(field("skin_type")),
            concentration: coerce_str(field("concentration"), NOT_SPECIFIED),
            how_to_use: coerce_str(field("how_to_use"), NOT_SPECIFIED),
            side_effects: coerce_str(field("side_effects"), NOT_SPECIFIED),
        }
    }

    /// Build from a dataset row, accepting the common alternative column names
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let field = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| record.get(*key))
                .find(|value| !is_blank(value))
                .unwrap_or(&Value::Null)
        };
        Self {
            product_name: coerce_str(field(&["product_name", "name", "title"]), ""),
            brand: coerce_str(field(&["brand"]), ""),
            category: coerce_str(field(&["category"]), ""),
            price_inr: coerce_price(field(&["price_inr", "price", "mrp"])),
            key_ingredients: coerce_list(field(&["key_ingredients", "ingredients"])),
            benefits: coerce_list(field(&["benefits"])),
            skin_type: coerce_list(field(&["skin_type", "skin_types"])),
            concentration: coerce_str(field(&["concentration"]), ""),
            how_to_use: coerce_str(field(&["how_to_use", "usage"]), ""),
            side_effects: coerce_str(field(&["side_effects", "warnings"]), ""),
        }
    }

    /// Product carrying nothing but a name
    pub fn named(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            ..Self::default()
        }
    }

    /// The fictional Product B every comparison page is built against
    pub fn fictional_rival() -> Self {
        Self {
            product_name: "RadiantFix Niacinamide Serum (Fictional)".to_string(),
            key_ingredients: vec!["Niacinamide".to_string(), "Panthenol".to_string()],
            benefits: vec!["Oil control".to_string(), "Helps even-looking tone".to_string()],
            price_inr: 799,
            ..Self::default()
        }
    }
}

/// Built-in record used when no dataset product is requested
pub fn seed_record() -> Value {
    json!({
        "product_name": "GlowBoost Vitamin C Serum",
        "brand": "GlowBoost",
        "category": "Skincare",
        "price_inr": 799,
        "key_ingredients": ["10% Vitamin C", "Hyaluronic Acid", "Niacinamide"],
        "benefits": ["Brightening", "Even skin tone", "Antioxidant protection"],
        "skin_type": ["Oily", "Combination"],
        "concentration": "10% Vitamin C",
        "how_to_use": "Apply 2-3 drops on clean face in the morning. Follow with moisturizer and sunscreen.",
        "side_effects": "No known side effects."
    })
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn coerce_str(value: &Value, default: &str) -> String {
    match value {
        Value::Null => default.to_string(),
        other => {
            let text = scalar_text(other);
            if text.is_empty() {
                default.to_string()
            } else {
                text
            }
        }
    }
}

/// Lists pass through; strings split on commas; empty parts are dropped
fn coerce_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(scalar_text).filter(|s| !s.is_empty()).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        other => vec![other.to_string()],
    }
}

/// Numbers truncate; strings keep their digits only ("₹1,299" is 1299)
fn coerce_price(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}
