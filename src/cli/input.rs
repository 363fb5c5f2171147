use std::io::Read;

use crate::error::GoofyError;

/// Reads the whole stream as UTF-8, dropping one trailing line ending.
pub fn read_text(mut reader: impl Read) -> Result<String, GoofyError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| GoofyError::StdinRead { source })?;
    let mut text =
        String::from_utf8(bytes).map_err(|source| GoofyError::InvalidStdinEncoding { source })?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
