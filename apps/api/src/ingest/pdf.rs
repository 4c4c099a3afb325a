use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

use crate::errors::AppError;
use crate::ingest::FileKind;

/// Base64 payload for inline data (standard alphabet, padded).
pub fn encode_inline(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Extracts the text layer of a PDF. Runs on the blocking pool; the parser
/// is CPU-bound and may panic on malformed input.
pub async fn extract_text(bytes: Bytes) -> Result<String, AppError> {
    let joined = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    let text = match joined {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => return Err(read_error(e.to_string())),
        Err(e) => return Err(read_error(format!("extractor aborted: {e}"))),
    };

    let text = text.trim();
    if text.is_empty() {
        // Scanned or image-only PDFs have no text layer.
        return Err(read_error("no extractable text".to_string()));
    }
    Ok(text.to_string())
}

fn read_error(detail: String) -> AppError {
    AppError::DocumentRead {
        kind: FileKind::Pdf,
        detail,
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::text_pdf;
    use super::*;

    #[test]
    fn test_encode_inline_padding() {
        assert_eq!(encode_inline(b"%PDF"), "JVBERg==");
        assert_eq!(encode_inline(b""), "");
    }

    #[tokio::test]
    async fn test_extract_text_layer() {
        let text = extract_text(Bytes::from(text_pdf("Minimize total travel cost")))
            .await
            .unwrap();
        assert!(text.contains("Minimize total travel cost"), "got {text:?}");
        assert_eq!(text, text.trim());
    }

    #[tokio::test]
    async fn test_garbage_is_a_pdf_read_error() {
        let err = extract_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::DocumentRead {
                kind: FileKind::Pdf,
                ..
            }
        ));
    }
}
