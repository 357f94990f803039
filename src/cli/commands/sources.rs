//! Sources Command
//!
//! List catalogued articles from reliable outlets that match a query.
//! Off-topic queries get the refusal sentence instead of a search.

use crate::ai::prompt::REFUSAL_SENTENCE;
use crate::cli::ui::Output;
use crate::domain::DomainClassifier;
use crate::sources::{SourceRef, gated_search};
use crate::types::Result;

pub fn run(query: &str, format: &str) -> Result<()> {
    let output = Output::new();
    let found = gated_search(&DomainClassifier::default(), query);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&found.unwrap_or_default())?);
        return Ok(());
    }

    print_sources(&output, found.as_deref());
    Ok(())
}

/// Print a gated search result in text form
pub fn print_sources(output: &Output, found: Option<&[&SourceRef]>) {
    let Some(found) = found else {
        output.warning(REFUSAL_SENTENCE);
        return;
    };

    if found.is_empty() {
        output.info("No matching sources in the catalogue.");
        return;
    }

    output.section(&format!("Sources ({})", found.len()));
    for (i, source) in found.iter().enumerate() {
        output.source(i + 1, source);
    }
}
