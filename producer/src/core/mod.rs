//! Producer core logic: prompts, parsing and session handling

pub mod processor;
pub mod prompt;
pub mod session;

pub use processor::{normalize_questions, ResponseProcessor};
pub use prompt::{answer_prompt, questions_prompt, safety_question, PromptKind, MAX_QUESTIONS};
pub use session::ensure_session;
