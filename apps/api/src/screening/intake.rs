//! Text acquisition for adapters: lenient decoding of uploaded bytes and
//! rejection of empty resume content before the pipeline runs.

use crate::errors::AppError;

/// Decodes bytes as UTF-8, dropping invalid sequences instead of replacing them.
pub fn decode_lenient(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Rejects resume text that is empty or whitespace-only.
pub fn require_resume_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates an uploaded resume file and decodes it to text.
pub fn decode_resume_upload(filename: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
    if filename.map_or(true, |name| name.trim().is_empty()) {
        return Err(AppError::Validation("No resume file provided.".to_string()));
    }
    if bytes.is_empty() {
        return Err(AppError::Validation(
            "Uploaded resume file is empty.".to_string(),
        ));
    }

    let text = decode_lenient(bytes);
    if text.is_empty() {
        return Err(AppError::Validation(
            "Could not decode resume file.".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8_is_unchanged() {
        assert_eq!(decode_lenient("Rust — Tokio ✓".as_bytes()), "Rust — Tokio ✓");
    }

    #[test]
    fn test_decode_drops_invalid_sequences() {
        let bytes = b"Py\xfft\xc3hon \xe2\x82SQL";
        assert_eq!(decode_lenient(bytes), "Python SQL");
    }

    #[test]
    fn test_decode_all_invalid_is_empty() {
        assert_eq!(decode_lenient(&[0xff, 0xfe, 0xfd]), "");
    }

    #[test]
    fn test_require_resume_text() {
        assert!(require_resume_text("Python developer").is_ok());
        assert!(matches!(require_resume_text(""), Err(AppError::Validation(_))));
        assert!(matches!(
            require_resume_text(" \n\t"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_upload_without_filename_is_rejected() {
        let err = decode_resume_upload(None, b"python").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No resume file provided."));

        let err = decode_resume_upload(Some(""), b"python").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        let err = decode_resume_upload(Some("resume.txt"), b"").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Uploaded resume file is empty."));
    }

    #[test]
    fn test_undecodable_upload_is_rejected() {
        let err = decode_resume_upload(Some("resume.pdf"), &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Could not decode resume file."));
    }

    #[test]
    fn test_upload_with_some_binary_noise_decodes() {
        let text = decode_resume_upload(Some("resume.txt"), b"Python\xff data").unwrap();
        assert_eq!(text, "Python data");
    }
}
