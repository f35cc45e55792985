// src/models.rs
use serde::{Deserialize, Serialize};

/// A category of characters the generator can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order guaranteed picks are drawn.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Number,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet for this class.
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Number => b"0123456789",
            CharacterClass::Symbol => b"!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Label shown in interactive prompts.
    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase letters (a-z)",
            CharacterClass::Uppercase => "Uppercase letters (A-Z)",
            CharacterClass::Number => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$...)",
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Number => self.include_numbers,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    pub fn set_included(&mut self, class: CharacterClass, included: bool) {
        match class {
            CharacterClass::Lowercase => self.include_lowercase = included,
            CharacterClass::Uppercase => self.include_uppercase = included,
            CharacterClass::Number => self.include_numbers = included,
            CharacterClass::Symbol => self.include_symbols = included,
        }
    }

    /// Enabled classes in declaration order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub password: String,
    pub strength: u8,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub strength: u8,
    pub label: String,
    pub feedback: Vec<String>,
}
