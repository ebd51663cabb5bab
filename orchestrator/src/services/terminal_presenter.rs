//! Presenter writing to a terminal (or any writer)

use std::io::Write;
use std::sync::Mutex;

use crate::traits::Presenter;

/// Renders generation state as plain text lines
pub struct TerminalPresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer (tests read rendered output back)
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            // Terminal output is best-effort; a closed pipe must not abort generation
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn show_error(&self, message: &str) {
        if !message.is_empty() {
            self.write_lines(&[format!("⚠️  {message}")]);
        }
    }

    fn set_loading(&self, loading: bool, label: &str) {
        if loading {
            self.write_lines(&[format!("⏳ {label}")]);
        }
    }

    fn render_questions(&self, questions: &[String]) {
        if questions.is_empty() {
            return;
        }
        let mut lines = vec!["Questions:".to_string()];
        lines.extend(questions.iter().enumerate().map(|(i, q)| format!("  {}. {}", i + 1, q)));
        self.write_lines(&lines);
    }

    fn render_answer(&self, answer: &str) {
        if !answer.is_empty() {
            self.write_lines(&["Answer:".to_string(), answer.to_string()]);
        }
    }
}
