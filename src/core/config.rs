// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::models::GenerationOptions;

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password generation
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,

    // Clipboard
    pub clipboard_clear_timeout: Option<Duration>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password generation
            default_length: 16,
            min_length: 4,
            max_length: 100,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_symbols: false,

            // Clipboard
            clipboard_clear_timeout: Some(Duration::from_secs(90)),

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(length) = env::var("FAUNAPASS_DEFAULT_LENGTH") {
            if let Ok(length) = length.parse() {
                config.default_length = length;
            }
        }

        if let Ok(length) = env::var("FAUNAPASS_MIN_LENGTH") {
            if let Ok(length) = length.parse() {
                config.min_length = length;
            }
        }

        if let Ok(length) = env::var("FAUNAPASS_MAX_LENGTH") {
            if let Ok(length) = length.parse() {
                config.max_length = length;
            }
        }

        if let Ok(flag) = env::var("FAUNAPASS_DEFAULT_UPPERCASE") {
            if let Ok(flag) = flag.parse() {
                config.default_include_uppercase = flag;
            }
        }

        if let Ok(flag) = env::var("FAUNAPASS_DEFAULT_LOWERCASE") {
            if let Ok(flag) = flag.parse() {
                config.default_include_lowercase = flag;
            }
        }

        if let Ok(flag) = env::var("FAUNAPASS_DEFAULT_NUMBERS") {
            if let Ok(flag) = flag.parse() {
                config.default_include_numbers = flag;
            }
        }

        if let Ok(flag) = env::var("FAUNAPASS_DEFAULT_SYMBOLS") {
            if let Ok(flag) = flag.parse() {
                config.default_include_symbols = flag;
            }
        }

        if let Ok(seconds) = env::var("FAUNAPASS_CLIPBOARD_TIMEOUT") {
            if let Ok(seconds) = seconds.parse::<u64>() {
                config.clipboard_clear_timeout = if seconds == 0 {
                    None
                } else {
                    Some(Duration::from_secs(seconds))
                };
            }
        }

        if let Ok(level) = env::var("FAUNAPASS_LOG_LEVEL") {
            if let Ok(level) = level.parse() {
                config.log_level = level;
            }
        }

        config
    }

    /// Generation options for the interactive menu.
    pub fn generation_defaults(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_symbols: self.default_include_symbols,
        }
    }

    /// Merge one-shot command flags over the configured defaults.
    pub fn generation_options(
        &self,
        length: Option<usize>,
        no_uppercase: bool,
        no_lowercase: bool,
        no_numbers: bool,
        symbols: bool,
    ) -> GenerationOptions {
        GenerationOptions {
            length: length.unwrap_or(self.default_length),
            include_uppercase: self.default_include_uppercase && !no_uppercase,
            include_lowercase: self.default_include_lowercase && !no_lowercase,
            include_numbers: self.default_include_numbers && !no_numbers,
            include_symbols: self.default_include_symbols || symbols,
        }
    }
}
