//! Check Command
//!
//! Print the domain verdict for a question without calling the backend.

use crate::cli::ui::Output;
use crate::domain::DomainClassifier;
use crate::types::Result;

pub fn run(question: &str, format: &str) -> Result<()> {
    let verdict = DomainClassifier::default().verdict(question);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&verdict)?),
        _ => Output::new().verdict(&verdict),
    }
    Ok(())
}
