#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Validator for '{0}' returned a different kind of value")]
    WrongValue(&'static str),

    #[error("Input closed before a valid value was entered")]
    Closed,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
