//! Fixed prompt templates for FAQ generation

use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on questions kept from a model reply
pub const MAX_QUESTIONS: usize = 5;

/// Which generation a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Questions,
    Answer,
}

/// Prompt asking for a JSON object with a `questions` array
pub fn questions_prompt(product_name: &str) -> String {
    format!(
        "You are an ecommerce content agent.\n\
         Generate {MAX_QUESTIONS} high-quality customer FAQ questions for the product: \"{product_name}\".\n\
         Output as JSON only: {{\"questions\":[ \"...\", \"...\" ]}}"
    )
}

/// The standard question every generation answers
pub fn safety_question(product_name: &str) -> String {
    format!("What is {product_name} and how do I use it safely?")
}

/// Prompt asking for a bullet-style, non-medical safety answer
pub fn answer_prompt(product_name: &str) -> String {
    format!(
        "You are a skincare FAQ assistant.\n\
         Write a helpful, safe, non-medical answer to: \"{}\"\n\
         Use bullet points or numbered lists. Mention patch test + sunscreen guidance. Avoid medical claims.",
        safety_question(product_name)
    )
}

/// Tell the two templates apart
pub fn classify(prompt: &str) -> PromptKind {
    if prompt.contains("\"questions\"") {
        PromptKind::Questions
    } else {
        PromptKind::Answer
    }
}

fn product_patterns() -> &'static [Regex; 2] {
    static PATTERNS: OnceLock<[Regex; 2]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r#"(?i)product:\s*"(.*?)""#).expect("static pattern"),
            Regex::new(r#"What is (.*?) and how do I use it safely\?"#).expect("static pattern"),
        ]
    })
}

/// Recover the product name embedded in either template
pub fn extract_product_name(prompt: &str) -> Option<String> {
    product_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(prompt))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}
