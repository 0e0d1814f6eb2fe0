// Demo configuration
// Output and logging settings for the command-line front end

use std::env;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "RSA_DEMO_LOG";

/// Environment variable switching ciphertext display to hex
pub const HEX_ENV: &str = "RSA_DEMO_HEX";

/// Configuration for how results are shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Print the narration steps along with results
    pub show_steps: bool,
    /// Print and parse ciphertext values as big-endian hex
    pub hex_ciphertext: bool,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            hex_ciphertext: false,
            log_filter: "warn".to_string(),
        }
    }
}

fn flag_enabled(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl DemoConfig {
    /// Defaults overridden by `RSA_DEMO_LOG` and `RSA_DEMO_HEX`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(hex) = lookup(HEX_ENV) {
            config.hex_ciphertext = flag_enabled(&hex);
        }
        config
    }

    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }

    pub fn with_hex(mut self, hex_ciphertext: bool) -> Self {
        self.hex_ciphertext = hex_ciphertext;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
