//! Constraint-checked console input.
//!
//! Every validator asks for one line at a time and keeps asking, printing a
//! short error after each rejected attempt, until a line satisfies its
//! constraints. [`input_value`] routes a typed request to the right one.

mod bounds;
pub mod console;
mod dispatch;
mod error;
mod select;
mod validators;

pub use bounds::Bounds;
pub use console::{Console, StdConsole, NOT_TEXT_ERROR};
pub use dispatch::{
    input_float, input_int, input_item, input_text, input_value, input_value_named, input_yes_no,
    InputOptions, InputValue, ValueKind,
};
pub use error::InputError;
pub use select::select_item;
pub use validators::{bounded_float, bounded_integer, not_empty, validated_string, yes_or_no};
