//! Bot configuration edit state with dirty tracking.
//!
//! DESIGN
//! ======
//! Two copies of the configuration are held concurrently: the baseline (last
//! fetched or saved server truth) and the in-progress edit buffer. Dirtiness
//! is a structural comparison between the two, recomputed on read, and save
//! is only permitted while dirty. A bot with no server-side configuration
//! has no baseline, which keeps dirty-tracking disabled until one exists.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::BotConfig;

/// Editable field names of [`BotConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigField {
    ModelName,
    ModelProvider,
    ApiKey,
    Temperature,
}

impl ConfigField {
    /// Render order of the configuration form.
    pub const ALL: [ConfigField; 4] = [
        ConfigField::ModelName,
        ConfigField::ModelProvider,
        ConfigField::ApiKey,
        ConfigField::Temperature,
    ];

    /// Human-readable form label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ConfigField::ModelName => "model name",
            ConfigField::ModelProvider => "model provider",
            ConfigField::ApiKey => "api key",
            ConfigField::Temperature => "temperature",
        }
    }

    /// Temperature is numeric-constrained at the input layer only; the wire
    /// value stays textual.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, ConfigField::Temperature)
    }
}

/// Baseline + edit buffer for one bot's configuration.
#[derive(Clone, Debug)]
pub struct ConfigState {
    /// In-progress edits, initialized empty until a load completes.
    pub buffer: BotConfig,
    /// Last server-confirmed value; `None` while the bot is unconfigured.
    pub baseline: Option<BotConfig>,
    /// True until the initial load resolves.
    pub loading: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            buffer: BotConfig::default(),
            baseline: None,
            loading: true,
        }
    }
}

impl ConfigState {
    /// Apply a load result; an unconfigured bot leaves the empty defaults.
    pub fn apply_loaded(&mut self, config: Option<BotConfig>) {
        if let Some(config) = config {
            self.buffer = config.clone();
            self.baseline = Some(config);
        }
        self.loading = false;
    }

    /// Mutate exactly one field of the edit buffer.
    pub fn set_field(&mut self, field: ConfigField, value: String) {
        match field {
            ConfigField::ModelName => self.buffer.model_name = value,
            ConfigField::ModelProvider => self.buffer.model_provider = value,
            ConfigField::ApiKey => self.buffer.api_key = value,
            ConfigField::Temperature => self.buffer.temperature = value,
        }
    }

    /// Current value of one buffer field.
    #[must_use]
    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::ModelName => &self.buffer.model_name,
            ConfigField::ModelProvider => &self.buffer.model_provider,
            ConfigField::ApiKey => &self.buffer.api_key,
            ConfigField::Temperature => &self.buffer.temperature,
        }
    }

    /// Whether the buffer differs from the baseline in at least one field.
    ///
    /// Always false without a baseline: save stays disabled until the server
    /// has confirmed a value to diff against.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.baseline.as_ref().is_some_and(|baseline| *baseline != self.buffer)
    }

    /// Promote the buffer to the new baseline after a confirmed save.
    pub fn apply_saved(&mut self) {
        self.baseline = Some(self.buffer.clone());
    }
}
