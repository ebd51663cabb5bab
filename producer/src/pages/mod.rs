//! Offline content pages built from a product record
//!
//! A product (the built-in seed record or a dataset lookup) flows through
//! question generation and three page templates into `faq.json`,
//! `product_page.json`, `comparison_page.json` and `dag_metadata.json`.

pub mod blocks;
pub mod pipeline;
pub mod product;
pub mod questions;
pub mod store;
pub mod templates;

pub use blocks::{answer_question, build_comparison, build_faq_items, FaqItem, MIN_FAQ_ITEMS};
pub use pipeline::{DagMetadata, OutputPaths, PageSet, PagePipeline, PipelineNode, ProductSource};
pub use product::{seed_record, Product};
pub use questions::{generate_questions, CatalogQuestion, QuestionCategory};
pub use store::{ProductStore, DATA_PATH_VAR};
pub use templates::{Page, PageInputs, PageTemplate, TemplateRegistry};
