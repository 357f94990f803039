//! Incremental Reveal
//!
//! Presents an already-complete text as a growing sequence of prefixes, one
//! character at a time, to give a "typing" effect. The full text is known
//! before the first prefix is shown; nothing here talks to the backend.
//!
//! ## Parts
//!
//! - [`Reveal`]: iterator over the prefixes (pure, no timing)
//! - [`Pacing`]: delay policy between prefixes
//! - [`reveal_stream`]: async stream of owned prefixes with pacing applied
//! - [`RevealSink`] / [`play`]: push prefixes to a display surface

mod sink;

pub use sink::{CollectingSink, RevealSink, TerminalSink};

use futures::Stream;
use std::time::Duration;
use tracing::debug;

use crate::config::RevealConfig;
use crate::types::Result;

// =============================================================================
// Prefix Iterator
// =============================================================================

/// Iterator over the char-boundary prefixes of a text
///
/// For a text of `n` characters it yields `n` items; item `i` holds the first
/// `i + 1` characters. The last item is the whole text.
#[derive(Debug, Clone)]
pub struct Reveal<'a> {
    text: &'a str,
    chars: std::str::CharIndices<'a>,
}

impl<'a> Reveal<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
        }
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = self.chars.next()?;
        Some(&self.text[..start + ch.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// Prefix iterator for a text
pub fn reveal(text: &str) -> Reveal<'_> {
    Reveal::new(text)
}

// =============================================================================
// Pacing
// =============================================================================

/// Delay policy between successive prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No delay
    Instant,
    /// Fixed per-character delay, shorter for long texts
    Typing {
        normal: Duration,
        fast: Duration,
        /// Texts with more characters than this use `fast`
        threshold: usize,
    },
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from(&RevealConfig::default())
    }
}

impl From<&RevealConfig> for Pacing {
    fn from(config: &RevealConfig) -> Self {
        if !config.enabled {
            return Pacing::Instant;
        }
        Pacing::Typing {
            normal: Duration::from_millis(config.normal_delay_ms),
            fast: Duration::from_millis(config.fast_delay_ms),
            threshold: config.long_text_threshold,
        }
    }
}

impl Pacing {
    /// Per-character delay for this text
    pub fn delay_for(&self, text: &str) -> Duration {
        match *self {
            Pacing::Instant => Duration::ZERO,
            Pacing::Typing {
                normal,
                fast,
                threshold,
            } => {
                if text.chars().count() > threshold {
                    fast
                } else {
                    normal
                }
            }
        }
    }

    /// Total time a reveal of this text will take
    pub fn total_for(&self, text: &str) -> Duration {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        self.delay_for(text).saturating_mul(chars)
    }
}

// =============================================================================
// Async Stream
// =============================================================================

/// Stream of owned prefixes, pausing between items per `pacing`
///
/// Finite and one-shot; the final item equals `text`.
pub fn reveal_stream(text: String, pacing: Pacing) -> impl Stream<Item = String> {
    let delay = pacing.delay_for(&text);
    let ends: Vec<usize> = text
        .char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .collect();

    futures::stream::unfold(
        (text, ends.into_iter(), true),
        move |(text, mut ends, first)| async move {
            let end = ends.next()?;
            if !first && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let prefix = text[..end].to_string();
            Some((prefix, (text, ends, false)))
        },
    )
}

/// Drive a reveal of `text` into `sink`
///
/// Blocks the calling task for the whole reveal; there is no cancellation.
pub async fn play<S: RevealSink + ?Sized>(text: &str, pacing: Pacing, sink: &mut S) -> Result<()> {
    let delay = pacing.delay_for(text);
    debug!(
        "Revealing {} chars at {:?}/char",
        text.chars().count(),
        delay
    );

    for (i, prefix) in reveal(text).enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        sink.show(prefix)?;
    }

    sink.finish()
}
