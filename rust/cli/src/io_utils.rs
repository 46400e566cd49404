//! Blocking line-based prompts over any buffered reader.
//!
//! These are the only places the CLI waits for a person. A closed input
//! stream while a question is pending means the match was abandoned and is
//! reported as [`CliError::Interrupted`].

use std::io::{BufRead, Write};

use crate::error::CliError;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims surrounding whitespace and returns `Ok(None)` on EOF. A line that is
/// not valid UTF-8 is `CliError::InvalidInput`; other read failures are
/// `CliError::Io`.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use dicematch_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Ok(Some(line)) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Result<Option<String>, CliError> {
    let mut buf = Vec::new();
    if stdin.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None); // EOF
    }
    let line = String::from_utf8(buf)
        .map_err(|_| CliError::InvalidInput("the answer is not valid UTF-8 text".into()))?;
    Ok(Some(line.trim().to_string()))
}

/// Ask a question and return the trimmed answer.
pub fn prompt_string(
    stdin: &mut dyn BufRead,
    prompt_out: &mut dyn Write,
    prompt: &str,
) -> Result<String, CliError> {
    write!(prompt_out, "{}: ", prompt)?;
    prompt_out.flush()?;
    read_stdin_line(stdin)?
        .ok_or_else(|| CliError::Interrupted("input closed before an answer was given".into()))
}

/// Ask for a whole number. A non-numeric answer is `CliError::InvalidInput`,
/// leaving the caller free to ask again.
///
/// ```rust
/// # use dicematch_cli::io_utils::prompt_integer;
/// # use std::io::Cursor;
/// let mut input = Cursor::new(b"4\n");
/// let mut prompts = Vec::new();
/// assert_eq!(prompt_integer(&mut input, &mut prompts, "How many?").unwrap(), 4);
/// ```
pub fn prompt_integer(
    stdin: &mut dyn BufRead,
    prompt_out: &mut dyn Write,
    prompt: &str,
) -> Result<i64, CliError> {
    let answer = prompt_string(stdin, prompt_out, prompt)?;
    answer
        .parse::<i64>()
        .map_err(|_| CliError::InvalidInput(format!("'{}' is not a whole number", answer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_valid_input() {
        let mut cursor = Cursor::new(b"hello world\n");
        assert_eq!(
            read_stdin_line(&mut cursor).unwrap(),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  spaces  \n");
        assert_eq!(read_stdin_line(&mut cursor).unwrap(), Some("spaces".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor).unwrap(), None);
    }

    #[test]
    fn undecodable_line_is_invalid_input_not_eof() {
        let mut cursor = Cursor::new(&b"An\xffa\nAna\n"[..]);
        assert!(matches!(
            read_stdin_line(&mut cursor),
            Err(CliError::InvalidInput(msg)) if msg.contains("UTF-8")
        ));
        assert_eq!(read_stdin_line(&mut cursor).unwrap(), Some("Ana".to_string()));
    }

    #[test]
    fn read_failure_is_an_io_error() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        let mut reader = std::io::BufReader::new(Broken);
        let mut prompts = Vec::new();
        let res = prompt_string(&mut reader, &mut prompts, "Name");
        assert!(matches!(res, Err(CliError::Io(_))));
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let mut input = Cursor::new(b"Ana\n");
        let mut prompts = Vec::new();
        let name = prompt_string(&mut input, &mut prompts, "Name of player 1").unwrap();
        assert_eq!(name, "Ana");
        assert_eq!(String::from_utf8(prompts).unwrap(), "Name of player 1: ");
    }

    #[test]
    fn closed_input_is_an_interruption() {
        let mut input = Cursor::new(b"");
        let mut prompts = Vec::new();
        let res = prompt_string(&mut input, &mut prompts, "Name");
        assert!(matches!(res, Err(CliError::Interrupted(_))));
    }

    #[test]
    fn non_numeric_answer_is_invalid_input() {
        let mut input = Cursor::new(b"three\n");
        let mut prompts = Vec::new();
        let res = prompt_integer(&mut input, &mut prompts, "How many?");
        assert!(matches!(res, Err(CliError::InvalidInput(msg)) if msg.contains("three")));
    }

    #[test]
    fn negative_numbers_parse() {
        let mut input = Cursor::new(b"-2\n");
        let mut prompts = Vec::new();
        assert_eq!(prompt_integer(&mut input, &mut prompts, "n").unwrap(), -2);
    }
}
