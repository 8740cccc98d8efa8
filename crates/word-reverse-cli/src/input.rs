use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The input source reached end of file before a line was available.
    #[error("no input available")]
    Unavailable,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Reads one line from `reader`, stripping the trailing newline (and a
/// carriage return before it). An empty line is valid input; only end of
/// file before any byte arrives is reported as `Unavailable`.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut buffer = String::new();
    let bytes_read = reader.read_line(&mut buffer)?;
    if bytes_read == 0 {
        return Err(InputError::Unavailable);
    }

    if buffer.ends_with('\n') {
        buffer.pop();

        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }

    Ok(buffer)
}
