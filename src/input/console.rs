use std::io::{self, BufRead, Write};

use tracing::debug;

use super::error::InputError;

/// Line-oriented terminal the validators talk to.
///
/// `read_line` shows the prompt and blocks until one full line is available,
/// returning it without its line terminator. `say` emits one line of output
/// (menus and error messages).
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;
    fn say(&mut self, line: &str) -> Result<(), InputError>;
}

pub const NOT_TEXT_ERROR: &str = "Error: Input was not valid UTF-8 text.";

/// Console over a line reader and a writer; stdin/stdout by default.
///
/// A line that is not valid UTF-8 counts as a failed attempt: the error is
/// printed and the prompt shown again.
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    reader: R,
    writer: W,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        loop {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;

            let mut bytes = Vec::new();
            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                return Err(InputError::Closed);
            }

            match String::from_utf8(bytes) {
                Ok(line) => return Ok(strip_line_ending(line)),
                Err(e) => {
                    debug!(bytes = e.as_bytes().len(), "rejected non-UTF-8 input");
                    self.say(NOT_TEXT_ERROR)?;
                }
            }
        }
    }

    fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use crate::input::{bounded_integer, not_empty, validated_string, Bounds};

    fn console_over(bytes: &[u8]) -> StdConsole<Cursor<Vec<u8>>, Vec<u8>> {
        StdConsole::with_io(Cursor::new(bytes.to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_lines_and_echoes_prompts() {
        let mut console = console_over(b"first\r\nsecond");
        assert_eq!(console.read_line("> ").unwrap(), "first");
        assert_eq!(console.read_line("> ").unwrap(), "second");
        assert!(matches!(console.read_line("> "), Err(InputError::Closed)));
        assert_eq!(console.into_writer(), b"> > > ".to_vec());
    }

    #[test]
    fn test_invalid_utf8_line_is_a_failed_attempt() {
        let mut console = console_over(b"Name\xff\nName\n");
        let text = validated_string(&mut console, "Project: ", &not_empty).unwrap();
        assert_eq!(text, "Name");

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, format!("Project: {}\nProject: ", NOT_TEXT_ERROR));
    }

    #[test]
    fn test_invalid_utf8_then_number() {
        let mut console = console_over(b"\xc3\x28\n7\n");
        assert_eq!(bounded_integer(&mut console, "> ", &Bounds::new()).unwrap(), 7);
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("yes\n".to_string()), "yes");
        assert_eq!(strip_line_ending("yes\r\n".to_string()), "yes");
        assert_eq!(strip_line_ending("  padded  \n".to_string()), "  padded  ");
        assert_eq!(strip_line_ending("no newline".to_string()), "no newline");
    }
}
