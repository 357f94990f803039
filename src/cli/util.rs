//! CLI Common Utilities
//!
//! Shared configuration loading and assistant construction for commands.

use crate::config::{Config, ConfigLoader, GatePolicy};
use crate::pipeline::Assistant;
use crate::reveal::Pacing;
use crate::types::Result;

/// Flags shared by the answering commands
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerFlags {
    /// Print answers at once instead of revealing them
    pub no_typing: bool,
    /// Leave off-topic refusal to the model
    pub advisory: bool,
}

/// Command execution context
///
/// Holds the effective configuration after CLI flags are applied.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
}

impl CommandContext {
    /// Load configuration from every layer and apply CLI flags
    pub fn load(flags: AnswerFlags) -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::from_config(config, flags))
    }

    pub fn from_config(mut config: Config, flags: AnswerFlags) -> Self {
        if flags.advisory {
            config.gating.policy = GatePolicy::Advisory;
        }
        if flags.no_typing {
            config.reveal.enabled = false;
        }
        Self { config }
    }

    /// Build the assistant; fails when the backend is not configured
    pub fn assistant(&self) -> Result<Assistant> {
        Assistant::from_config(&self.config)
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::from(&self.config.reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let ctx = CommandContext::from_config(
            Config::default(),
            AnswerFlags {
                no_typing: true,
                advisory: true,
            },
        );
        assert_eq!(ctx.config.gating.policy, GatePolicy::Advisory);
        assert_eq!(ctx.pacing(), Pacing::Instant);
    }

    #[test]
    fn test_default_flags_keep_config() {
        let ctx = CommandContext::from_config(Config::default(), AnswerFlags::default());
        assert_eq!(ctx.config.gating.policy, GatePolicy::Enforce);
        assert_eq!(ctx.pacing(), Pacing::default());
    }
}
