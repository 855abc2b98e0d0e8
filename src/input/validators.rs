use tracing::debug;

use super::bounds::Bounds;
use super::console::Console;
use super::error::InputError;

pub const INT_ERROR: &str = "Error: Please enter a valid whole number within the specified range: ";
pub const FLOAT_ERROR: &str = "Error: Please enter a valid decimal number within the specified range.";
pub const STRING_ERROR: &str = "Error: Please enter a valid piece of text.";
pub const YES_NO_ERROR: &str = "Invalid response";

/// Default string predicate: anything but the empty line.
pub fn not_empty(text: &str) -> bool {
    !text.is_empty()
}

pub fn bounded_integer(
    console: &mut dyn Console,
    prompt: &str,
    bounds: &Bounds<i64>,
) -> Result<i64, InputError> {
    loop {
        let line = console.read_line(prompt)?;
        match line.trim().parse::<i64>() {
            Ok(n) if bounds.contains(n) => return Ok(n),
            _ => reject(console, "int", &line, INT_ERROR)?,
        }
    }
}

pub fn bounded_float(
    console: &mut dyn Console,
    prompt: &str,
    bounds: &Bounds<f64>,
) -> Result<f64, InputError> {
    loop {
        let line = console.read_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(n) if bounds.contains(n) => return Ok(n),
            _ => reject(console, "float", &line, FLOAT_ERROR)?,
        }
    }
}

pub fn validated_string(
    console: &mut dyn Console,
    prompt: &str,
    valid: &dyn Fn(&str) -> bool,
) -> Result<String, InputError> {
    loop {
        let line = console.read_line(prompt)?;
        if valid(&line) {
            return Ok(line);
        }
        reject(console, "string", &line, STRING_ERROR)?;
    }
}

pub fn yes_or_no(console: &mut dyn Console, prompt: &str) -> Result<bool, InputError> {
    let mut response = console.read_line(prompt)?.to_lowercase();

    while !matches!(response.as_str(), "y" | "yes" | "n" | "no") {
        reject(console, "y_or_n", &response, YES_NO_ERROR)?;
        response = console.read_line(prompt)?.to_lowercase();
    }

    Ok(matches!(response.as_str(), "y" | "yes"))
}

pub(super) fn reject(
    console: &mut dyn Console,
    kind: &str,
    input: &str,
    message: &str,
) -> Result<(), InputError> {
    debug!(kind, input, "rejected input attempt");
    console.say(message)
}
