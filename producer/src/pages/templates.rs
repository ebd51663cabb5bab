//! Page templates and the registry that looks them up by key

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ProducerError, ProducerResult};
use crate::pages::blocks::{
    build_comparison, build_faq_items, product_highlights, product_summary, Comparison, FaqItem,
    ProductHighlights, MIN_FAQ_ITEMS, REQUIRED_FAQ_CATEGORIES,
};
use crate::pages::product::Product;
use crate::pages::questions::CatalogQuestion;

pub const FAQ_DISCLAIMER: &str = "Informational only. Not medical advice. Patch test when trying new skincare.";
pub const PRODUCT_DISCLAIMER: &str = "Informational only. This content is generated from a limited dataset.";
pub const COMPARISON_DISCLAIMER: &str = "Product B is fictional. Informational only.";

/// Inputs the templates render from; filled node by node
#[derive(Debug, Clone, Default)]
pub struct PageInputs {
    pub product: Option<Product>,
    pub questions: Option<Vec<CatalogQuestion>>,
    pub rival: Option<Product>,
}

impl PageInputs {
    fn product(&self, template: &str) -> ProducerResult<&Product> {
        self.product
            .as_ref()
            .ok_or_else(|| ProducerError::validation(format!("{template} template needs a parsed product")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    pub page_type: &'static str,
    pub product_name: String,
    pub items: Vec<FaqItem>,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    pub page_type: &'static str,
    pub product_name: String,
    pub summary: String,
    pub highlights: ProductHighlights,
    pub disclaimer: &'static str,
}

/// The per-product facts a comparison shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedProduct {
    pub product_name: String,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub price_inr: i64,
}

impl From<&Product> for ComparedProduct {
    fn from(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            key_ingredients: product.key_ingredients.clone(),
            benefits: product.benefits.clone(),
            price_inr: product.price_inr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPage {
    pub page_type: &'static str,
    pub product_a: ComparedProduct,
    pub product_b: ComparedProduct,
    pub comparison: Comparison,
    pub disclaimer: &'static str,
}

/// A rendered page of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Page {
    Faq(FaqPage),
    Product(ProductPage),
    Comparison(ComparisonPage),
}

/// Renders one page kind from the pipeline inputs
pub trait PageTemplate: Send + Sync {
    /// Registry key and output file stem
    fn key(&self) -> &'static str;

    fn render(&self, inputs: &PageInputs) -> ProducerResult<Page>;
}

pub struct FaqTemplate;

impl PageTemplate for FaqTemplate {
    fn key(&self) -> &'static str {
        "faq"
    }

    fn render(&self, inputs: &PageInputs) -> ProducerResult<Page> {
        let product = inputs.product(self.key())?;
        let questions = inputs
            .questions
            .as_deref()
            .ok_or_else(|| ProducerError::validation("faq template needs generated questions"))?;

        let items = build_faq_items(product, questions, MIN_FAQ_ITEMS, &REQUIRED_FAQ_CATEGORIES);
        if items.len() < MIN_FAQ_ITEMS {
            return Err(ProducerError::validation(format!(
                "faq page has {} items, need at least {MIN_FAQ_ITEMS}",
                items.len()
            )));
        }
        if let Some(missing) = REQUIRED_FAQ_CATEGORIES
            .iter()
            .find(|category| !items.iter().any(|item| item.category == **category))
        {
            return Err(ProducerError::validation(format!("faq page has no {missing:?} question")));
        }

        Ok(Page::Faq(FaqPage {
            page_type: "faq",
            product_name: product.product_name.clone(),
            items,
            disclaimer: FAQ_DISCLAIMER,
        }))
    }
}

pub struct ProductTemplate;

impl PageTemplate for ProductTemplate {
    fn key(&self) -> &'static str {
        "product_page"
    }

    fn render(&self, inputs: &PageInputs) -> ProducerResult<Page> {
        let product = inputs.product(self.key())?;
        Ok(Page::Product(ProductPage {
            page_type: "product_page",
            product_name: product.product_name.clone(),
            summary: product_summary(product),
            highlights: product_highlights(product),
            disclaimer: PRODUCT_DISCLAIMER,
        }))
    }
}

pub struct ComparisonTemplate;

impl PageTemplate for ComparisonTemplate {
    fn key(&self) -> &'static str {
        "comparison_page"
    }

    /// Product B defaults to the fictional rival when none was supplied
    fn render(&self, inputs: &PageInputs) -> ProducerResult<Page> {
        let product_a = inputs.product(self.key())?;
        let fallback;
        let product_b = match inputs.rival.as_ref() {
            Some(rival) => rival,
            None => {
                fallback = Product::fictional_rival();
                &fallback
            }
        };

        Ok(Page::Comparison(ComparisonPage {
            page_type: "comparison_page",
            product_a: product_a.into(),
            product_b: product_b.into(),
            comparison: build_comparison(product_a, product_b),
            disclaimer: COMPARISON_DISCLAIMER,
        }))
    }
}

/// Templates by key
pub struct TemplateRegistry {
    templates: BTreeMap<&'static str, Box<dyn PageTemplate>>,
}

impl TemplateRegistry {
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registry holding the FAQ, product and comparison templates
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(FaqTemplate));
        registry.register(Box::new(ProductTemplate));
        registry.register(Box::new(ComparisonTemplate));
        registry
    }

    /// Add a template, replacing any with the same key
    pub fn register(&mut self, template: Box<dyn PageTemplate>) {
        self.templates.insert(template.key(), template);
    }

    pub fn get(&self, key: &str) -> ProducerResult<&dyn PageTemplate> {
        self.templates
            .get(key)
            .map(|template| &**template)
            .ok_or_else(|| ProducerError::validation(format!("unknown template '{key}'")))
    }

    pub fn render(&self, key: &str, inputs: &PageInputs) -> ProducerResult<Page> {
        self.get(key)?.render(inputs)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
