use std::collections::HashMap;
use std::fmt::Display;

use super::console::Console;
use super::error::InputError;
use super::validators::reject;

pub const SELECT_ERROR: &str = "Invalid input. Please enter a valid option.";

/// Prints `choices` as a numbered menu and asks until the response names one.
///
/// A response is matched, in order, as a 1-based position, as a key of
/// `aliases`, then against the lowercase display text of each choice. A
/// response made only of digits is treated as a position and nothing else.
pub fn select_item<T>(
    console: &mut dyn Console,
    prompt: &str,
    choices: &[T],
    aliases: Option<&HashMap<String, T>>,
) -> Result<T, InputError>
where
    T: Clone + Display,
{
    for (i, choice) in choices.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, choice))?;
    }

    let labels: Vec<String> = choices
        .iter()
        .map(|choice| choice.to_string().to_lowercase())
        .collect();

    loop {
        let response = console.read_line(prompt)?.trim().to_lowercase();
        if let Some(item) = match_response(&response, choices, &labels, aliases) {
            return Ok(item.clone());
        }
        reject(console, "select_item", &response, SELECT_ERROR)?;
    }
}

fn match_response<'a, T>(
    response: &str,
    choices: &'a [T],
    labels: &[String],
    aliases: Option<&'a HashMap<String, T>>,
) -> Option<&'a T> {
    if !response.is_empty() && response.bytes().all(|b| b.is_ascii_digit()) {
        // Overlong digit strings fail to parse and count as out of range.
        return response
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=choices.len()).contains(index))
            .map(|index| &choices[index - 1]);
    }

    if let Some(item) = aliases.and_then(|map| map.get(response)) {
        return Some(item);
    }

    labels
        .iter()
        .position(|label| label == response)
        .map(|index| &choices[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::console::scripted::ScriptedConsole;

    fn greek() -> Vec<String> {
        vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()]
    }

    #[test]
    fn test_select_by_position() {
        let mut console = ScriptedConsole::new(["2"]);
        let item = select_item(&mut console, "> ", &greek(), None).unwrap();
        assert_eq!(item, "Beta");
    }

    #[test]
    fn test_select_by_text_ignores_case_and_padding() {
        let mut console = ScriptedConsole::new(["gamma"]);
        assert_eq!(select_item(&mut console, "> ", &greek(), None).unwrap(), "Gamma");

        let mut console = ScriptedConsole::new(["  ALPHA "]);
        assert_eq!(select_item(&mut console, "> ", &greek(), None).unwrap(), "Alpha");
    }

    #[test]
    fn test_select_by_alias() {
        let aliases = HashMap::from([("a".to_string(), "Alpha".to_string())]);
        let mut console = ScriptedConsole::new(["A"]);
        let item = select_item(&mut console, "> ", &greek(), Some(&aliases)).unwrap();
        assert_eq!(item, "Alpha");
    }

    #[test]
    fn test_alias_may_map_outside_choices() {
        let aliases = HashMap::from([("omega".to_string(), "Omega".to_string())]);
        let mut console = ScriptedConsole::new(["omega"]);
        let item = select_item(&mut console, "> ", &greek(), Some(&aliases)).unwrap();
        assert_eq!(item, "Omega");
    }

    #[test]
    fn test_invalid_responses_reprompt() {
        let mut console = ScriptedConsole::new(["5", "zzz", "0", "", "3"]);
        let item = select_item(&mut console, "> ", &greek(), None).unwrap();
        assert_eq!(item, "Gamma");
        assert_eq!(console.prompts.len(), 5);
        assert_eq!(
            console.output.iter().filter(|line| *line == SELECT_ERROR).count(),
            4
        );
    }

    #[test]
    fn test_menu_rendered_once() {
        let mut console = ScriptedConsole::new(["nope", "beta"]);
        select_item(&mut console, "> ", &greek(), None).unwrap();
        assert_eq!(
            console.output,
            vec![
                "1. Alpha".to_string(),
                "2. Beta".to_string(),
                "3. Gamma".to_string(),
                SELECT_ERROR.to_string(),
            ]
        );
    }

    #[test]
    fn test_digits_never_fall_through_to_alias() {
        let aliases = HashMap::from([("7".to_string(), "Alpha".to_string())]);
        let mut console = ScriptedConsole::new(["7", "1"]);
        let item = select_item(&mut console, "> ", &greek(), Some(&aliases)).unwrap();
        assert_eq!(item, "Alpha");
        assert_eq!(console.prompts.len(), 2);
    }

    #[test]
    fn test_huge_index_is_out_of_range() {
        let mut console = ScriptedConsole::new(["99999999999999999999999", "1"]);
        let item = select_item(&mut console, "> ", &greek(), None).unwrap();
        assert_eq!(item, "Alpha");
    }

    #[test]
    fn test_positional_wins_over_numeric_text() {
        let years = vec![2, 1];
        let mut console = ScriptedConsole::new(["1"]);
        assert_eq!(select_item(&mut console, "> ", &years, None).unwrap(), 2);
    }
}
