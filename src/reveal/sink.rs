//! Display surfaces for revealed text

use console::Term;

use crate::types::Result;

/// Receives each successive prefix of a reveal
pub trait RevealSink {
    /// Show the current prefix
    fn show(&mut self, prefix: &str) -> Result<()>;

    /// Called once after the last prefix
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Tracks how much of a growing prefix is already displayed
#[derive(Debug, Default)]
pub(crate) struct SuffixTracker {
    written: usize,
}

impl SuffixTracker {
    /// Part of `prefix` not yet displayed, if any
    pub(crate) fn advance<'a>(&mut self, prefix: &'a str) -> Option<&'a str> {
        let unseen = prefix.get(self.written..).filter(|s| !s.is_empty());
        self.written = prefix.len();
        unseen
    }

    pub(crate) fn reset(&mut self) {
        self.written = 0;
    }
}

/// Writes to the terminal, printing only the part not yet on screen
pub struct TerminalSink {
    term: Term,
    tracker: SuffixTracker,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            tracker: SuffixTracker::default(),
        }
    }
}

impl RevealSink for TerminalSink {
    fn show(&mut self, prefix: &str) -> Result<()> {
        if let Some(new) = self.tracker.advance(prefix) {
            self.term.write_str(new)?;
            self.term.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.term.write_line("")?;
        self.tracker.reset();
        Ok(())
    }
}

/// Keeps every state it is shown
#[derive(Debug, Default)]
pub struct CollectingSink {
    states: Vec<String>,
    finished: bool,
}

impl CollectingSink {
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn final_text(&self) -> Option<&str> {
        self.states.last().map(String::as_str)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl RevealSink for CollectingSink {
    fn show(&mut self, prefix: &str) -> Result<()> {
        self.states.push(prefix.to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::reveal;

    #[test]
    fn test_tracker_emits_each_new_char_once() {
        let mut tracker = SuffixTracker::default();
        let written: String = reveal("غزة 1948")
            .filter_map(|prefix| tracker.advance(prefix))
            .collect();
        assert_eq!(written, "غزة 1948");
    }

    #[test]
    fn test_tracker_skips_repeated_prefix() {
        let mut tracker = SuffixTracker::default();
        assert_eq!(tracker.advance("Ga"), Some("Ga"));
        assert_eq!(tracker.advance("Ga"), None);
        assert_eq!(tracker.advance("Gaza"), Some("za"));
    }

    #[test]
    fn test_tracker_reset_starts_next_reveal() {
        let mut tracker = SuffixTracker::default();
        tracker.advance("Gaza");
        tracker.reset();
        assert_eq!(tracker.advance("N"), Some("N"));
        assert_eq!(tracker.advance("Na"), Some("a"));
    }

    #[test]
    fn test_tracker_without_reset_ignores_shorter_text() {
        let mut tracker = SuffixTracker::default();
        tracker.advance("Gaza");
        assert_eq!(tracker.advance("N"), None);
        assert_eq!(tracker.advance("Na"), Some("a"));
    }

    #[test]
    fn test_collecting_sink_records_states() {
        let mut sink = CollectingSink::default();
        sink.show("G").unwrap();
        sink.show("Ga").unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.states(), &["G", "Ga"]);
        assert!(sink.is_finished());
    }
}
