use std::fs::File;
use std::io::{self, Read};

use bin2text::error::Result;
use bin2text::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    let data = match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        InputSource::File(path) => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            buf
        }
        InputSource::Literal(data) => data.clone(),
    };
    log::debug!("read {} input bytes from {:?}", data.len(), source);
    Ok(data)
}

/// Reads encoded text, dropping one trailing line terminator.
pub fn read_text(source: &InputSource) -> Result<String> {
    let data = read_input(source)?;
    let text = String::from_utf8_lossy(&data);
    let trimmed = text.strip_suffix('\n').unwrap_or(&text);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_literal() {
        let source = InputSource::Literal(b"abc".to_vec());
        assert_eq!(read_input(&source).unwrap(), b"abc");
    }

    #[test]
    fn test_read_text_strips_one_line_terminator() {
        let source = InputSource::Literal(b"QUI=\r\n".to_vec());
        assert_eq!(read_text(&source).unwrap(), "QUI=");
        let source = InputSource::Literal(b"QUI=\n\n".to_vec());
        assert_eq!(read_text(&source).unwrap(), "QUI=\n");
    }

    #[test]
    fn test_read_missing_file() {
        let source = InputSource::File("/nonexistent/bin2text-input".into());
        assert!(matches!(read_input(&source), Err(bin2text::Bin2TextError::Io(_))));
    }
}
