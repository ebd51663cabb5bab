//! Categorized customer questions derived from a product record

use serde::{Deserialize, Serialize};

use crate::error::{ProducerError, ProducerResult};
use crate::pages::product::Product;

/// Fewest questions a catalog may hold
pub const MIN_CATALOG_QUESTIONS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    Purchase,
    Comparison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuestion {
    pub category: QuestionCategory,
    pub question: String,
}

impl CatalogQuestion {
    pub fn new(category: QuestionCategory, question: impl Into<String>) -> Self {
        Self {
            category,
            question: question.into(),
        }
    }
}

/// Question catalog in category order
pub fn generate_questions(product: &Product) -> ProducerResult<Vec<CatalogQuestion>> {
    use QuestionCategory::*;

    let n = &product.product_name;
    let skin = product.skin_type.join(", ");
    let benefits = product.benefits.join(", ");
    let ingredients = product.key_ingredients.join(", ");

    let questions = vec![
        CatalogQuestion::new(Informational, format!("What is {n}?")),
        CatalogQuestion::new(Informational, format!("What is the concentration of Vitamin C in {n}?")),
        CatalogQuestion::new(Informational, format!("Which skin types is {n} meant for?")),
        CatalogQuestion::new(Informational, format!("What are the key ingredients in {n}?")),
        CatalogQuestion::new(Informational, format!("What benefits does {n} claim? ({benefits})")),
        CatalogQuestion::new(Usage, format!("How do I use {n} in a morning routine?")),
        CatalogQuestion::new(Usage, format!("How many drops of {n} should I apply?")),
        CatalogQuestion::new(Usage, format!("When should I apply sunscreen if I use {n}?")),
        CatalogQuestion::new(Usage, format!("Can {n} be used daily for {skin} skin?")),
        CatalogQuestion::new(Safety, format!("Are there any side effects from using {n}?")),
        CatalogQuestion::new(Safety, format!("What should sensitive skin users know before trying {n}?")),
        CatalogQuestion::new(Safety, format!("What does mild tingling mean when using {n}?")),
        CatalogQuestion::new(Purchase, format!("What is the price of {n}?")),
        CatalogQuestion::new(
            Purchase,
            format!("Is ₹{} reasonable given its ingredients ({ingredients})?", product.price_inr),
        ),
        CatalogQuestion::new(Comparison, format!("How does {n} compare to another serum with different actives?")),
        CatalogQuestion::new(
            Comparison,
            format!("What should I compare when choosing between {n} and a different serum?"),
        ),
    ];

    if questions.len() < MIN_CATALOG_QUESTIONS {
        return Err(ProducerError::validation(format!(
            "question catalog holds {} questions, need at least {MIN_CATALOG_QUESTIONS}",
            questions.len()
        )));
    }
    Ok(questions)
}
