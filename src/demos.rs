//! Demos interactivos de la lección de condicionales. Funciones puras; la UI
//! solo pinta lo que devuelven.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignVerdict {
    Positive(i64),
    ZeroOrNegative(i64),
}

impl SignVerdict {
    pub fn output(&self) -> &'static str {
        match self {
            SignVerdict::Positive(_) => "Positive number! ➕",
            SignVerdict::ZeroOrNegative(_) => "Zero or negative! ➖",
        }
    }

    pub fn explanation(&self) -> String {
        match self {
            SignVerdict::Positive(n) => {
                format!("{n} > 0 is True, so the first branch executes.")
            }
            SignVerdict::ZeroOrNegative(n) => {
                format!("{n} > 0 is False, so the else branch executes.")
            }
        }
    }
}

/// Entero inicial del texto, como hace un campo numérico del navegador:
/// `"5.5"` da 5 y `"12abc"` da 12. Sin dígitos al principio no hay número.
pub fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn sign_demo(input: &str) -> Result<SignVerdict, String> {
    let n = leading_integer(input).ok_or_else(|| "❌ Please enter a valid number!".to_string())?;
    Ok(if n > 0 {
        SignVerdict::Positive(n)
    } else {
        SignVerdict::ZeroOrNegative(n)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterGrade {
    pub letter: char,
    pub message: &'static str,
    pub emoji: &'static str,
}

pub fn letter_grade(input: &str) -> Result<LetterGrade, String> {
    let invalid = || "❌ Please enter a valid score between 0 and 100!".to_string();
    let score = leading_integer(input).ok_or_else(invalid)?;
    if !(0..=100).contains(&score) {
        return Err(invalid());
    }

    let (letter, message, emoji) = if score >= 90 {
        ('A', "Excellent!", "🌟")
    } else if score >= 80 {
        ('B', "Great job!", "👍")
    } else if score >= 70 {
        ('C', "Good effort!", "💪")
    } else if score >= 60 {
        ('D', "Keep trying!", "📚")
    } else {
        ('F', "Need improvement", "😢")
    };
    Ok(LetterGrade {
        letter,
        message,
        emoji,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStep {
    Ticket,
    Age,
    Height,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideDecision {
    pub can_ride: bool,
    /// Pasos evaluados en orden y si se superaron
    pub steps: Vec<(RideStep, bool)>,
    pub messages: Vec<String>,
}

pub const MIN_RIDE_AGE: u32 = 12;
pub const MIN_RIDE_HEIGHT_CM: u32 = 140;

/// Condicionales anidadas: billete, después edad, después altura.
pub fn ride_check(has_ticket: bool, age: u32, height_cm: u32) -> RideDecision {
    let mut steps = Vec::new();
    let mut messages = Vec::new();

    if !has_ticket {
        steps.push((RideStep::Ticket, false));
        messages.push("✗ Please buy a ticket first!".into());
        return RideDecision {
            can_ride: false,
            steps,
            messages,
        };
    }
    steps.push((RideStep::Ticket, true));
    messages.push("✓ You have a ticket!".into());

    if age < MIN_RIDE_AGE {
        steps.push((RideStep::Age, false));
        messages.push(format!(
            "✗ Sorry, you must be at least {MIN_RIDE_AGE} years old. (Current: {age} years)"
        ));
        return RideDecision {
            can_ride: false,
            steps,
            messages,
        };
    }
    steps.push((RideStep::Age, true));
    messages.push("✓ Age requirement met!".into());

    if height_cm < MIN_RIDE_HEIGHT_CM {
        steps.push((RideStep::Height, false));
        messages.push(format!(
            "✗ Sorry, you must be at least {MIN_RIDE_HEIGHT_CM}cm tall. (Current: {height_cm}cm)"
        ));
        return RideDecision {
            can_ride: false,
            steps,
            messages,
        };
    }
    steps.push((RideStep::Height, true));
    messages.push("✓ Height requirement met!".into());
    messages.push("🎢 Enjoy the ride!".into());

    RideDecision {
        can_ride: true,
        steps,
        messages,
    }
}

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// El `match` de Python con casos agrupados y comodín `_`.
pub fn weekday_mood(day: &str) -> (&'static str, &'static str) {
    match day {
        "Monday" => ("😫", "Start of the work week..."),
        "Tuesday" | "Wednesday" | "Thursday" => ("💼", "Keep working hard!"),
        "Friday" => ("🎉", "TGIF! Almost weekend!"),
        "Saturday" | "Sunday" => ("🎮", "Weekend! Time to relax!"),
        _ => ("❓", "That's not a valid day!"),
    }
}
