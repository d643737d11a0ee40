use crate::documents::{DocumentParseError, TextExtractor};

/// PDF text extraction backed by `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentParseError> {
        pdf_extract::extract_text_from_mem(document)
            .map_err(|e| DocumentParseError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let result = PdfTextExtractor.extract_text(b"this is plainly not a pdf document");
        assert!(matches!(result, Err(DocumentParseError::Malformed(_))));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(PdfTextExtractor.extract_text(&[]).is_err());
    }
}
