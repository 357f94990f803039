//! Chat Command
//!
//! Line-oriented session on stdin. Each line is answered independently; the
//! transcript lives in memory for `/history` and is dropped on exit.

use console::style;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::commands::sources::print_sources;
use crate::cli::ui::Output;
use crate::cli::util::{AnswerFlags, CommandContext};
use crate::domain::DomainClassifier;
use crate::pipeline::{Answer, Outcome};
use crate::reveal::TerminalSink;
use crate::sources::gated_search;
use crate::types::Result;

/// One input line, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Ask(String),
    Sources(String),
    History,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl ChatInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ChatInput::Blank;
        }

        let Some(command) = line.strip_prefix('/') else {
            return ChatInput::Ask(line.to_string());
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((command, ""));

        match name {
            "quit" | "exit" => ChatInput::Quit,
            "history" => ChatInput::History,
            "help" => ChatInput::Help,
            "sources" => ChatInput::Sources(rest.to_string()),
            other => ChatInput::Unknown(other.to_string()),
        }
    }
}

/// A question and the text shown for it
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub outcome: Outcome,
}

/// In-memory transcript of one session
#[derive(Debug, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    pub fn record(&mut self, question: &str, answer: &Answer) {
        self.turns.push(ChatTurn {
            question: question.to_string(),
            answer: answer.text.clone(),
            outcome: answer.outcome.clone(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Questions that got an answer from the backend
    pub fn answered(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter().filter(|turn| turn.outcome.is_answered())
    }
}

pub async fn run(flags: AnswerFlags) -> Result<()> {
    let ctx = CommandContext::load(flags)?;
    let assistant = ctx.assistant()?;
    let pacing = ctx.pacing();
    let domain = DomainClassifier::default();
    let output = Output::new();
    let mut history = ChatHistory::default();

    output.header("Palestine assistant");
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!();
        output.chat_prompt();
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match ChatInput::parse(&line) {
            ChatInput::Blank => continue,
            ChatInput::Quit => break,
            ChatInput::Help => print_help(),
            ChatInput::History => print_history(&output, &history),
            ChatInput::Sources(query) => {
                print_sources(&output, gated_search(&domain, &query).as_deref());
            }
            ChatInput::Unknown(name) => {
                output.warning(&format!("Unknown command /{} (try /help)", name));
            }
            ChatInput::Ask(question) => {
                let mut sink = TerminalSink::stdout();
                output.answer_label();
                let answer = assistant.respond(question.as_str(), pacing, &mut sink).await?;
                output.outcome_note(&answer);
                history.record(&question, &answer);
            }
        }
    }

    tracing::debug!(
        "Chat ended after {} questions ({} answered)",
        history.len(),
        history.answered().count()
    );
    Ok(())
}

fn print_help() {
    println!(
        "{}",
        style("Ask anything about Palestine. Commands: /sources <query>, /history, /help, /quit")
            .dim()
    );
}

fn print_history(output: &Output, history: &ChatHistory) {
    if history.is_empty() {
        output.info("No questions yet.");
        return;
    }

    output.section(&format!("History ({})", history.len()));
    for (i, turn) in history.turns().iter().enumerate() {
        println!("{}. {}", i + 1, style(&turn.question).bold());
        println!("   {}", first_line(&turn.answer));
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorCategory;

    fn answer(text: &str, outcome: Outcome) -> Answer {
        Answer {
            text: text.to_string(),
            outcome,
            verdict: DomainClassifier::default().verdict("gaza"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ChatInput::parse("  "), ChatInput::Blank);
        assert_eq!(ChatInput::parse("/quit"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("/exit"), ChatInput::Quit);
        assert_eq!(ChatInput::parse("/history"), ChatInput::History);
        assert_eq!(
            ChatInput::parse("/sources  gaza timeline "),
            ChatInput::Sources("gaza timeline".to_string())
        );
        assert_eq!(ChatInput::parse("/sources"), ChatInput::Sources(String::new()));
        assert_eq!(
            ChatInput::parse("/nope"),
            ChatInput::Unknown("nope".to_string())
        );
    }

    #[test]
    fn test_parse_question() {
        assert_eq!(
            ChatInput::parse(" What is the Nakba? "),
            ChatInput::Ask("What is the Nakba?".to_string())
        );
    }

    #[test]
    fn test_history_records_turns() {
        let mut history = ChatHistory::default();
        assert!(history.is_empty());

        history.record("Gaza?", &answer("Gaza is...", Outcome::Answered));
        history.record(
            "Gaza again?",
            &answer("❌ timed out", Outcome::Failed(ErrorCategory::Timeout)),
        );

        assert_eq!(history.len(), 2);
        assert_eq!(history.answered().count(), 1);
        assert_eq!(history.turns()[1].question, "Gaza again?");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("Title\nbody"), "Title");
        assert_eq!(first_line(""), "");
    }
}
