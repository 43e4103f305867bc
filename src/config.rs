//! Configuration for StackKV
//!
//! Settings for the interactive session. The store itself has no knobs.

/// Default prompt printed before each command
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Default text printed for an absent value
pub const DEFAULT_NULL_DISPLAY: &str = "NULL";

/// Main configuration for a StackKV session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt written before reading each command (empty disables it)
    pub prompt: String,

    /// Text written when GET finds no value
    pub null_display: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            null_display: DEFAULT_NULL_DISPLAY.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the display string used for absent values
    pub fn null_display(mut self, display: impl Into<String>) -> Self {
        self.config.null_display = display.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
