//! Canned inputs and provider/backend replies

use shared::GenerationResult;

pub struct TestFixtures;

impl TestFixtures {
    pub const VITAMIN_C: &'static str = "Vitamin C Serum";
    pub const RETINOL: &'static str = "Retinol Cream";

    pub const TWO_QUESTIONS_REPLY: &'static str = r#"{"questions":["Q1","Q2"]}"#;
    pub const SEVEN_QUESTIONS_REPLY: &'static str =
        r#"Here you go: {"questions":["Q1","Q2","Q3","Q4","Q5","Q6","Q7"]} Enjoy!"#;
    pub const PROSE_REPLY: &'static str = "Sorry, I can only answer in plain prose today.";
    pub const ANSWER_REPLY: &'static str = "Apply sparingly.";

    pub fn blank_inputs() -> Vec<&'static str> {
        vec!["", " ", "\t", "\n  \r\n"]
    }

    pub fn backend_result() -> GenerationResult {
        GenerationResult {
            questions: vec!["B1".to_string()],
            answer: "B-answer".to_string(),
        }
    }
}
