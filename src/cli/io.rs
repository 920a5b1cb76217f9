//! Line I/O for the interactive session
//!
//! The session is line-oriented: every answer is one line of UTF-8 text.
//! End of input is a normal outcome (`Ok(None)`), not an error; it ends
//! the session the same way the exit action does.

use std::io::{BufRead, Write};

use super::errors::CliResult;

/// Read one line, stripped of its trailing newline.
///
/// Returns `Ok(None)` when the reader is exhausted.
pub fn read_line<R: BufRead>(reader: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Write a prompt without a newline, flush, then read the answer line.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    text: &str,
) -> CliResult<Option<String>> {
    write!(writer, "{}", text)?;
    writer.flush()?;
    read_line(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_newline() {
        let mut reader = Cursor::new("John Doe\n");
        assert_eq!(read_line(&mut reader).unwrap(), Some("John Doe".to_string()));
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut reader = Cursor::new("42\r\n");
        assert_eq!(read_line(&mut reader).unwrap(), Some("42".to_string()));
    }

    #[test]
    fn test_read_line_keeps_interior_whitespace() {
        let mut reader = Cursor::new("  Computer Science  \n");
        assert_eq!(
            read_line(&mut reader).unwrap(),
            Some("  Computer Science  ".to_string())
        );
    }

    #[test]
    fn test_read_line_at_eof_is_none() {
        let mut reader = Cursor::new("");
        assert_eq!(read_line(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut reader = Cursor::new("9");
        assert_eq!(read_line(&mut reader).unwrap(), Some("9".to_string()));
        assert_eq!(read_line(&mut reader).unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_text_then_reads() {
        let mut reader = Cursor::new("Jane\n");
        let mut out = Vec::new();
        let answer = prompt(&mut reader, &mut out, "Enter student name: ").unwrap();
        assert_eq!(answer, Some("Jane".to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), "Enter student name: ");
    }
}
