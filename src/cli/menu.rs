// src/cli/menu.rs
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use inquire::{InquireError, MultiSelect, Select, Text};

use crate::clipboard::NativeClipboard;
use crate::core::config::Config;
use crate::generators::strength;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, GenerationOptions};
use crate::utils::format::strength_meter;

const MENU_GENERATE: &str = "🔁  Generate new password";
const MENU_COPY: &str = "📋  Copy password to clipboard";
const MENU_LENGTH: &str = "📏  Change password length";
const MENU_CLASSES: &str = "🔠  Choose character types";
const MENU_ANALYZE: &str = "🧪  Analyze password strength";
const MENU_EXIT: &str = "❌  Exit";

// Interactive menu loop. Owns the mutable UI state: current options and
// the last generated password.
pub fn run_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🔐 FaunaPass - strong passwords with a touch of the wild");

    let generator = PasswordGenerator::new();
    let mut options = config.generation_defaults();
    let mut last_password: Option<String> = None;

    // Generate up front so the user always has a password on screen.
    generate_and_show(&generator, &options, &mut last_password);

    while !should_exit.load(Ordering::SeqCst) {
        let choices = vec![
            MENU_GENERATE,
            MENU_COPY,
            MENU_LENGTH,
            MENU_CLASSES,
            MENU_ANALYZE,
            MENU_EXIT,
        ];

        let selection = Select::new("Choose an option:", choices)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable()?;

        match selection {
            Some(MENU_GENERATE) => {
                generate_and_show(&generator, &options, &mut last_password);
            }
            Some(MENU_COPY) => {
                copy_to_clipboard(config, &last_password);
            }
            Some(MENU_LENGTH) => {
                change_length(config, &mut options)?;
            }
            Some(MENU_CLASSES) => {
                choose_classes(&mut options)?;
            }
            Some(MENU_ANALYZE) => {
                analyze_password(&last_password)?;
            }
            Some(MENU_EXIT) | None => break,
            Some(_) => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_and_show(
    generator: &PasswordGenerator,
    options: &GenerationOptions,
    last_password: &mut Option<String>,
) {
    if options.enabled_classes().is_empty() {
        println!("⚠️ Enable at least one character type first.");
        return;
    }

    let password = generator.generate(options);
    let strength = generator.analyze_strength(&password);

    println!("\nGenerated Password: {}", style(&password).bold().cyan());
    println!("{}\n", strength_meter(strength));

    *last_password = Some(password);
}

fn copy_to_clipboard(config: &Config, last_password: &Option<String>) {
    let password = match last_password {
        Some(password) => password,
        None => {
            println!("⚠️ Generate a password first.");
            return;
        }
    };

    let mut clipboard = match NativeClipboard::new(config.clipboard_clear_timeout) {
        Ok(clipboard) => clipboard,
        Err(e) => {
            eprintln!("❌ Clipboard unavailable: {}", e);
            return;
        }
    };

    match clipboard.copy(password) {
        Ok(_) => match config.clipboard_clear_timeout {
            Some(timeout) => println!(
                "✅ Password copied to clipboard (clears in {}s)",
                timeout.as_secs()
            ),
            None => println!("✅ Password copied to clipboard"),
        },
        Err(e) => eprintln!("❌ Failed to copy password: {}", e),
    }
}

fn change_length(config: &Config, options: &mut GenerationOptions) -> Result<(), Box<dyn Error>> {
    let current = options.length.to_string();
    let length: usize = Text::new("Password length:")
        .with_default(&current)
        .prompt()
        .and_then(|s| {
            s.parse()
                .map_err(|_| InquireError::Custom("Invalid number".into()))
        })?;

    if length < config.min_length || length > config.max_length {
        println!(
            "⚠️ Length must be between {} and {} characters.",
            config.min_length, config.max_length
        );
        return Ok(());
    }

    options.length = length;
    println!("✅ Password length set to {}", length);
    Ok(())
}

fn choose_classes(options: &mut GenerationOptions) -> Result<(), Box<dyn Error>> {
    let labels: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.label()).collect();
    let defaults: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| options.includes(**class))
        .map(|(index, _)| index)
        .collect();

    let selected = MultiSelect::new("Character types to include:", labels)
        .with_default(&defaults)
        .prompt()?;

    for class in CharacterClass::ALL {
        options.set_included(class, selected.contains(&class.label()));
    }

    if options.enabled_classes().is_empty() {
        println!("⚠️ No character types selected; generation is disabled until one is enabled.");
    }

    Ok(())
}

fn analyze_password(last_password: &Option<String>) -> Result<(), Box<dyn Error>> {
    let password = match last_password {
        Some(password) => password.clone(),
        None => Text::new("Password to analyze:").prompt()?,
    };

    let strength = strength::analyze_password_strength(&password);
    println!("{}", strength_meter(strength));
    for line in strength::strength_feedback(&password, strength) {
        println!("  • {}", line);
    }

    Ok(())
}
