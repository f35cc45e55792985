// src/generators/strength.rs
use std::collections::HashSet;

// Score a password from 0-100 based on length, character variety and
// repetition.
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score: i32 = 0;

    // Length contribution (up to 40 points)
    score += (length as i32).min(40);

    // Character variety (10 points per class)
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Penalize heavy repetition
    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct < length / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn strength_label(strength: u8) -> &'static str {
    match strength {
        0..=19 => "Very weak",
        20..=39 => "Weak",
        40..=59 => "Moderate",
        60..=79 => "Strong",
        _ => "Very strong",
    }
}

// Advice lines for the analyze command, tiered by score.
pub fn strength_feedback(password: &str, strength: u8) -> Vec<String> {
    let length = password.chars().count();
    let mut feedback = Vec::new();

    if strength < 20 {
        feedback.push("Very weak password".to_string());
        feedback.push("Use a longer password with mixed character types".to_string());
    } else if strength < 40 {
        feedback.push("Weak password".to_string());
        if !password.chars().any(|c| c.is_uppercase()) {
            feedback.push("Add uppercase letters for better security".to_string());
        }
        if !password.chars().any(|c| c.is_numeric()) {
            feedback.push("Add numbers for better security".to_string());
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            feedback.push("Add symbols for better security".to_string());
        }
        if length < 12 {
            feedback.push("Increase password length to at least 12 characters".to_string());
        }
    } else if strength < 60 {
        feedback.push("Moderate password".to_string());
        if length < 12 {
            feedback
                .push("Consider increasing password length to at least 12 characters".to_string());
        }
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            feedback.push("Add symbols for better security".to_string());
        }
    } else if strength < 80 {
        feedback.push("Strong password".to_string());
        if length < 16 {
            feedback.push(
                "For maximum security, consider increasing length to 16+ characters".to_string(),
            );
        }
    } else {
        feedback.push("Very strong password".to_string());
    }

    feedback
}
