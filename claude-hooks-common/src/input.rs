//! Reading the hook payload from stdin.

use std::io::Read;

use crate::error::HookError;

/// Read the whole payload as text.
///
/// Invalid UTF-8 is replaced rather than rejected so a garbled event still
/// reaches the caller.
pub fn read_payload<R: Read>(mut reader: R) -> Result<String, HookError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_payload_text() {
        let text = read_payload(Cursor::new(b"{\"a\": 1}\n".to_vec())).unwrap();
        assert_eq!(text, "{\"a\": 1}\n");
    }

    #[test]
    fn test_read_payload_invalid_utf8_is_replaced() {
        let text = read_payload(Cursor::new(vec![b'o', b'k', 0xff])).unwrap();
        assert_eq!(text, "ok\u{fffd}");
    }
}
