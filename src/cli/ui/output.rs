use console::style;

use crate::domain::DomainVerdict;
use crate::pipeline::{Answer, Outcome};
use crate::sources::SourceRef;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Label printed before an answer is revealed
    pub fn answer_label(&self) {
        print!("{} ", style("Assistant:").cyan().bold());
    }

    /// Prompt for the next chat line
    pub fn chat_prompt(&self) {
        print!("{} ", style("You:").green().bold());
    }

    pub fn verdict(&self, verdict: &DomainVerdict) {
        match verdict.matched {
            Some(keyword) => self.success(&format!(
                "In domain (matched {})",
                style(keyword).bold()
            )),
            None => self.warning("Out of domain"),
        }
    }

    /// Dimmed note after an answer that did not come from the backend
    pub fn outcome_note(&self, answer: &Answer) {
        match &answer.outcome {
            Outcome::Answered => {}
            Outcome::Failed(category) => {
                eprintln!("{}", style(format!("[{}]", category)).dim());
            }
            other => {
                eprintln!("{}", style(format!("[{}]", other.label())).dim());
            }
        }
    }

    pub fn source(&self, index: usize, source: &SourceRef) {
        println!(
            "{}. {} {}",
            index,
            style(source.title).bold(),
            style(format!("({})", source.source)).dim()
        );
        println!("   {}", style(source.url).underlined());
        println!("   {}", source.snippet);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
