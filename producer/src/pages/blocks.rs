//! Dataset-only content blocks the page templates are assembled from

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::pages::product::Product;
use crate::pages::questions::{CatalogQuestion, QuestionCategory};

/// Fewest items an FAQ page carries
pub const MIN_FAQ_ITEMS: usize = 5;

/// Categories every FAQ page must cover
pub const REQUIRED_FAQ_CATEGORIES: [QuestionCategory; 4] = [
    QuestionCategory::Informational,
    QuestionCategory::Usage,
    QuestionCategory::Safety,
    QuestionCategory::Purchase,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub category: QuestionCategory,
}

/// Answer a catalog question from product fields alone
///
/// Rules are keyword checks tried in order; price comes first so that
/// "What is the price..." never reads as a "what is" question.
pub fn answer_question(product: &Product, question: &str) -> String {
    let name = &product.product_name;
    let concentration = &product.concentration;
    let skin = product.skin_type.join(", ");
    let ingredients = product.key_ingredients.join(", ");
    let benefits = product.benefits.join(", ");
    let how = sentence(&product.how_to_use);
    let side_effects = sentence(&product.side_effects);
    let price = product.price_inr;

    let q = question.to_lowercase();
    let has = |needle: &str| q.contains(needle);

    if has("price") || question.contains('₹') {
        return format!("The listed price is ₹{price}.");
    }
    if has("reasonable") {
        return format!("The listed price is ₹{price}. Value depends on your preferences and tolerance.");
    }

    if has("concentration") {
        return format!("The stated concentration is {concentration}.");
    }
    if has("skin type") {
        return format!("It is intended for {skin} skin types.");
    }
    if has("key ingredient") {
        return format!("Key ingredients listed are: {ingredients}.");
    }
    if has("benefit") {
        return format!("Listed benefits are: {benefits}.");
    }
    if has("what is") {
        return format!(
            "{name} is a {concentration} serum designed for {skin} skin. \
             It includes {ingredients} and is positioned for {benefits}."
        );
    }

    if has("how do i use") || has("how to use") {
        return format!("Usage instruction: {how}.");
    }
    if has("how many drops") {
        return "Use 2–3 drops as per the provided usage instruction.".to_string();
    }
    if has("sunscreen") {
        return "Apply it in the morning before sunscreen, as specified in the usage instruction.".to_string();
    }
    if has("daily") {
        return format!("The dataset indicates it is meant for {skin} skin. Introduce gradually if you are sensitive.");
    }

    if has("side effect") {
        return format!("Reported side effect in the dataset: {side_effects}.");
    }
    if has("sensitive") {
        return format!("If you have sensitive skin, note: {side_effects}.");
    }
    if has("tingling") {
        return format!("The dataset notes: {side_effects}.");
    }

    if has("compare") || has("choosing between") {
        return "Compare the key ingredients, listed benefits, and price, and choose based on what you prioritize."
            .to_string();
    }

    format!("{name}: {concentration}, for {skin} skin, with {ingredients} and benefits like {benefits}.")
}

/// Field text with its closing period removed, for embedding mid-sentence
fn sentence(text: &str) -> &str {
    text.trim().trim_end_matches('.')
}

/// Select FAQ items with guaranteed category coverage
///
/// Candidates keep catalog order with duplicate questions removed. The first
/// question of each required category is taken, then the earliest remaining
/// candidates fill up to `min_items`.
pub fn build_faq_items(
    product: &Product,
    questions: &[CatalogQuestion],
    min_items: usize,
    required: &[QuestionCategory],
) -> Vec<FaqItem> {
    let mut seen = HashSet::new();
    let candidates: Vec<FaqItem> = questions
        .iter()
        .filter(|q| seen.insert(q.question.as_str()))
        .map(|q| FaqItem {
            question: q.question.clone(),
            answer: answer_question(product, &q.question),
            category: q.category,
        })
        .collect();

    let mut used = vec![false; candidates.len()];
    let mut selected = Vec::new();

    for category in required {
        if let Some(index) = candidates
            .iter()
            .enumerate()
            .position(|(i, item)| !used[i] && item.category == *category)
        {
            used[index] = true;
            selected.push(candidates[index].clone());
        }
    }

    for (index, item) in candidates.iter().enumerate() {
        if selected.len() >= min_items {
            break;
        }
        if !used[index] {
            used[index] = true;
            selected.push(item.clone());
        }
    }

    selected
}

pub fn product_summary(product: &Product) -> String {
    format!(
        "{} is a {} serum for {} skin, focused on {}.",
        product.product_name,
        product.concentration,
        product.skin_type.join(", "),
        product.benefits.join(", ").to_lowercase()
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductHighlights {
    pub concentration: String,
    pub skin_type: Vec<String>,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub how_to_use: String,
    pub side_effects: String,
    pub price_inr: i64,
}

pub fn product_highlights(product: &Product) -> ProductHighlights {
    ProductHighlights {
        concentration: product.concentration.clone(),
        skin_type: product.skin_type.clone(),
        key_ingredients: product.key_ingredients.clone(),
        benefits: product.benefits.clone(),
        how_to_use: product.how_to_use.clone(),
        side_effects: product.side_effects.clone(),
        price_inr: product.price_inr,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub shared: SharedNotes,
    pub differences: Differences,
    pub selection_guide: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedNotes {
    pub price_note: String,
    pub format_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Differences {
    pub ingredients: IngredientSplit,
    pub benefits: BenefitPair,
    pub price_inr: PriceDelta,
}

/// Ingredient sets, each sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSplit {
    pub product_a_only: Vec<String>,
    pub product_b_only: Vec<String>,
    pub shared: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitPair {
    pub product_a: Vec<String>,
    pub product_b: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceDelta {
    pub product_a: i64,
    pub product_b: i64,
    pub delta_b_minus_a: i64,
}

/// Side-by-side facts and neutral guidance; no judgement beyond simple deltas
pub fn build_comparison(product_a: &Product, product_b: &Product) -> Comparison {
    let a: BTreeSet<&str> = product_a.key_ingredients.iter().map(String::as_str).collect();
    let b: BTreeSet<&str> = product_b.key_ingredients.iter().map(String::as_str).collect();

    Comparison {
        shared: SharedNotes {
            price_note: "Both are priced in INR (value depends on preferences and tolerance).".to_string(),
            format_note: "Both are serums.".to_string(),
        },
        differences: Differences {
            ingredients: IngredientSplit {
                product_a_only: a.difference(&b).map(|s| s.to_string()).collect(),
                product_b_only: b.difference(&a).map(|s| s.to_string()).collect(),
                shared: a.intersection(&b).map(|s| s.to_string()).collect(),
            },
            benefits: BenefitPair {
                product_a: product_a.benefits.clone(),
                product_b: product_b.benefits.clone(),
            },
            price_inr: PriceDelta {
                product_a: product_a.price_inr,
                product_b: product_b.price_inr,
                delta_b_minus_a: product_b.price_inr - product_a.price_inr,
            },
        },
        selection_guide: vec![
            "Choose based on which ingredient set you prefer and what benefits you prioritize.".to_string(),
            "If you have sensitive skin, introduce new actives gradually and monitor tolerance.".to_string(),
        ],
    }
}
