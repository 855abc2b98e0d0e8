use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use super::bounds::Bounds;
use super::console::Console;
use super::error::InputError;
use super::select::select_item;
use super::validators::{bounded_float, bounded_integer, not_empty, validated_string, yes_or_no};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    String,
    YesNo,
    SelectItem,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::YesNo => "y_or_n",
            ValueKind::SelectItem => "select_item",
        }
    }

    pub fn default_prompt(&self) -> &'static str {
        match self {
            ValueKind::Int => "Please enter an integer: ",
            ValueKind::Float => "Please enter a decimal number: ",
            ValueKind::String => "Please enter some text: ",
            ValueKind::YesNo => "Please enter 'y' or 'n': ",
            ValueKind::SelectItem => "Select an option: ",
        }
    }
}

impl FromStr for ValueKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ValueKind::Int),
            "float" => Ok(ValueKind::Float),
            "string" => Ok(ValueKind::String),
            "y_or_n" => Ok(ValueKind::YesNo),
            "select_item" => Ok(ValueKind::SelectItem),
            _ => Err(InputError::InvalidConfig(format!(
                "Invalid type specified: '{}'",
                s
            ))),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration bag for [`input_value`]. Fields a kind does not use are
/// ignored; `bounds` apply to both numeric kinds.
pub struct InputOptions<'a, T = String> {
    pub prompt: Option<&'a str>,
    pub bounds: Bounds<f64>,
    pub valid: Option<&'a dyn Fn(&str) -> bool>,
    pub choices: Option<&'a [T]>,
    pub aliases: Option<&'a HashMap<String, T>>,
}

impl<T> Default for InputOptions<'_, T> {
    fn default() -> Self {
        Self {
            prompt: None,
            bounds: Bounds::default(),
            valid: None,
            choices: None,
            aliases: None,
        }
    }
}

impl<'a, T> InputOptions<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn bounds(mut self, bounds: Bounds<f64>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn valid(mut self, valid: &'a dyn Fn(&str) -> bool) -> Self {
        self.valid = Some(valid);
        self
    }

    pub fn choices(mut self, choices: &'a [T]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn aliases(mut self, aliases: &'a HashMap<String, T>) -> Self {
        self.aliases = Some(aliases);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputValue<T = String> {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Item(T),
}

impl<T> InputValue<T> {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            InputValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            InputValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InputValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            InputValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            InputValue::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Routes one request to the validator for `kind`, filling in defaults for
/// anything `options` leaves out.
///
/// The only check made before touching the console is that `SelectItem`
/// has a choice list. All retrying happens inside the validators.
pub fn input_value<T>(
    console: &mut dyn Console,
    kind: ValueKind,
    options: &InputOptions<'_, T>,
) -> Result<InputValue<T>, InputError>
where
    T: Clone + Display,
{
    let prompt = options.prompt.unwrap_or_else(|| kind.default_prompt());

    match kind {
        ValueKind::Int => {
            bounded_integer(console, prompt, &options.bounds.to_integer()).map(InputValue::Int)
        }
        ValueKind::Float => bounded_float(console, prompt, &options.bounds).map(InputValue::Float),
        ValueKind::String => {
            let valid: &dyn Fn(&str) -> bool = match options.valid {
                Some(valid) => valid,
                None => &not_empty,
            };
            validated_string(console, prompt, valid).map(InputValue::Text)
        }
        ValueKind::YesNo => yes_or_no(console, prompt).map(InputValue::Bool),
        ValueKind::SelectItem => {
            let choices = options.choices.ok_or_else(|| {
                InputError::InvalidConfig(
                    "Choices must be provided for type 'select_item'".to_string(),
                )
            })?;
            select_item(console, prompt, choices, options.aliases).map(InputValue::Item)
        }
    }
}

/// Same as [`input_value`], with the kind given by its tag name.
pub fn input_value_named<T>(
    console: &mut dyn Console,
    type_name: &str,
    options: &InputOptions<'_, T>,
) -> Result<InputValue<T>, InputError>
where
    T: Clone + Display,
{
    let kind: ValueKind = type_name.parse()?;
    input_value(console, kind, options)
}

fn expect_kind<V>(kind: ValueKind, value: Option<V>) -> Result<V, InputError> {
    value.ok_or(InputError::WrongValue(kind.as_str()))
}

pub fn input_int<T: Clone + Display>(
    console: &mut dyn Console,
    options: &InputOptions<'_, T>,
) -> Result<i64, InputError> {
    let value = input_value(console, ValueKind::Int, options)?;
    expect_kind(ValueKind::Int, value.as_int())
}

pub fn input_float<T: Clone + Display>(
    console: &mut dyn Console,
    options: &InputOptions<'_, T>,
) -> Result<f64, InputError> {
    let value = input_value(console, ValueKind::Float, options)?;
    expect_kind(ValueKind::Float, value.as_float())
}

pub fn input_text<T: Clone + Display>(
    console: &mut dyn Console,
    options: &InputOptions<'_, T>,
) -> Result<String, InputError> {
    let value = input_value(console, ValueKind::String, options)?;
    expect_kind(ValueKind::String, value.into_text())
}

pub fn input_yes_no<T: Clone + Display>(
    console: &mut dyn Console,
    options: &InputOptions<'_, T>,
) -> Result<bool, InputError> {
    let value = input_value(console, ValueKind::YesNo, options)?;
    expect_kind(ValueKind::YesNo, value.as_bool())
}

pub fn input_item<T: Clone + Display>(
    console: &mut dyn Console,
    options: &InputOptions<'_, T>,
) -> Result<T, InputError> {
    let value = input_value(console, ValueKind::SelectItem, options)?;
    expect_kind(ValueKind::SelectItem, value.into_item())
}
