//! Product dataset lookup over JSON and CSV files

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use shared::{ProcessId, process_debug, process_warn};
use crate::error::{ProducerError, ProducerResult};
use crate::pages::product::Product;

/// Environment variable naming an extra dataset file
pub const DATA_PATH_VAR: &str = "PRODUCT_DATA_PATH";

/// In-memory product dataset
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load one dataset file, choosing the parser by extension
    pub fn load(path: &Path) -> ProducerResult<Self> {
        let dataset_error = |message: String| ProducerError::DatasetError {
            path: path.display().to_string(),
            message,
        };

        let text = std::fs::read_to_string(path).map_err(|e| dataset_error(e.to_string()))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let products = match extension.as_str() {
            "json" => parse_json(&text).map_err(dataset_error)?,
            "csv" => parse_csv(&text).map_err(dataset_error)?,
            other => return Err(dataset_error(format!("unsupported dataset format '{other}'"))),
        };
        process_debug!(ProcessId::current(), "Loaded {} products from {}", products.len(), path.display());
        Ok(Self::from_products(products))
    }

    /// Load every dataset that exists: `$PRODUCT_DATA_PATH` first, then
    /// `products.json` and `products.csv` under `data_dir`
    pub fn discover(data_dir: &Path) -> ProducerResult<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Ok(env_path) = std::env::var(DATA_PATH_VAR) {
            let env_path = env_path.trim();
            if !env_path.is_empty() {
                candidates.push(PathBuf::from(env_path));
            }
        }
        candidates.push(data_dir.join("products.json"));
        candidates.push(data_dir.join("products.csv"));

        let mut store = Self::default();
        for candidate in candidates {
            if !candidate.is_file() {
                process_debug!(ProcessId::current(), "No dataset at {}", candidate.display());
                continue;
            }
            store.products.extend(Self::load(&candidate)?.products);
        }
        if store.is_empty() {
            process_warn!(ProcessId::current(), "No product dataset found; lookups return name-only products");
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive exact match, then substring match, else a name-only product
    pub fn find(&self, product_name: &str) -> Product {
        let target = product_name.trim();
        if target.is_empty() {
            return Product::default();
        }

        let needle = target.to_lowercase();
        self.products
            .iter()
            .find(|p| p.product_name.to_lowercase() == needle)
            .or_else(|| self.products.iter().find(|p| p.product_name.to_lowercase().contains(&needle)))
            .cloned()
            .unwrap_or_else(|| Product::named(target))
    }
}

/// `{"products": [...]}` or a bare list; rows without a name are skipped
fn parse_json(text: &str) -> Result<Vec<Product>, String> {
    let data: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let items = match &data {
        Value::Object(map) => map.get("products").and_then(Value::as_array),
        Value::Array(items) => Some(items),
        _ => None,
    };

    Ok(items
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
        .map(Product::from_record)
        .filter(|p| !p.product_name.is_empty())
        .collect())
}

/// Header row names the columns; rows without a name are skipped
fn parse_csv(text: &str) -> Result<Vec<Product>, String> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut products = Vec::new();

    for row in reader.deserialize::<HashMap<String, String>>() {
        let row = row.map_err(|e| e.to_string())?;
        let record: Map<String, Value> = row.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
        let product = Product::from_record(&record);
        if !product.product_name.is_empty() {
            products.push(product);
        }
    }
    Ok(products)
}
