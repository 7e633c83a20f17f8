//! Interactive prompt collection.

use std::io::BufRead;

/// Read one line of user input and return it trimmed.
///
/// Returns `None` on EOF or when the line trims to nothing; callers treat
/// that as a cancelled run and abort silently, before any service call.
pub fn collect_prompt<R: BufRead>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
