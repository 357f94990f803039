//! Ask Command
//!
//! Answer a single question and reveal it on the terminal.

use crate::cli::ui::Output;
use crate::cli::util::{AnswerFlags, CommandContext};
use crate::reveal::TerminalSink;
use crate::types::Result;

pub async fn run(question: &str, flags: AnswerFlags) -> Result<()> {
    let ctx = CommandContext::load(flags)?;
    let assistant = ctx.assistant()?;
    let output = Output::new();

    let mut sink = TerminalSink::stdout();
    output.answer_label();
    let answer = assistant.respond(question, ctx.pacing(), &mut sink).await?;
    output.outcome_note(&answer);

    Ok(())
}
