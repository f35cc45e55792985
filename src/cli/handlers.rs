// src/cli/handlers.rs
use std::error::Error;

use crate::clipboard::NativeClipboard;
use crate::core::config::Config;
use crate::generators::password::validate_options;
use crate::generators::strength;
use crate::generators::PasswordGenerator;
use crate::models::{AnalysisReport, GenerationOptions, GenerationReport};
use crate::utils::format::strength_meter;

// Handlers for CLI commands
pub fn handle_generate(
    config: &Config,
    options: &GenerationOptions,
    json: bool,
    copy: bool,
) -> Result<(), Box<dyn Error>> {
    validate_options(options, config.min_length, config.max_length)?;

    let generator = PasswordGenerator::new();
    let password = generator.generate(options);
    let strength = generator.analyze_strength(&password);

    if json {
        let report = GenerationReport {
            password: password.clone(),
            strength,
            label: strength::strength_label(strength).to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", password);
        println!("{}", strength_meter(strength));
    }

    if copy {
        let mut clipboard = NativeClipboard::new(config.clipboard_clear_timeout)?;
        clipboard.copy(&password)?;
        eprintln!("✅ Password copied to clipboard");
    }

    log::info!(
        "generated a {}-character password",
        password.chars().count()
    );

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let strength = strength::analyze_password_strength(password);
    let feedback = strength::strength_feedback(password, strength);

    if json {
        let report = AnalysisReport {
            strength,
            label: strength::strength_label(strength).to_string(),
            feedback,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", strength_meter(strength));
        for line in &feedback {
            println!("  • {}", line);
        }
    }

    Ok(())
}
