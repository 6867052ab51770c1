use std::path::Path;

use crate::error::{ExtractorError, ParseError};
use crate::extraction;
use crate::{JobDescription, Resume};

/// Document container formats the boundary layer may hand us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Black-box document-to-text extraction. The engine treats any non-empty
/// string as valid input regardless of quality; binary container parsing is
/// not this crate's concern.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path, format: DocumentFormat)
        -> Result<String, ExtractorError>;
}

/// Parse a resume document into structured data. Fails only on an unsupported
/// extension or an extractor failure; the field heuristics themselves never
/// fail.
pub fn parse_resume(path: &Path, extractor: &dyn TextExtractor) -> Result<Resume, ParseError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ParseError::UnsupportedFormat(format!(".{ext}"))
    })?;

    let text = extractor
        .extract_text(path, format)
        .map_err(|source| ParseError::TextExtraction {
            path: path.display().to_string(),
            source,
        })?;

    Ok(parse_resume_text(&text))
}

/// Run the resume field heuristics over already-extracted text. Infallible.
pub fn parse_resume_text(text: &str) -> Resume {
    extraction::extract_resume(text)
}

/// Parse free-form job description text. Infallible; garbage input yields
/// defaulted fields.
pub fn parse_job_description(text: &str) -> JobDescription {
    extraction::job::extract_job_description(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract_text(
            &self,
            _path: &Path,
            _format: DocumentFormat,
        ) -> Result<String, ExtractorError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingExtractor;

    impl TextExtractor for FailingExtractor {
        fn extract_text(
            &self,
            _path: &Path,
            _format: DocumentFormat,
        ) -> Result<String, ExtractorError> {
            Err(ExtractorError("corrupt xref table".into()))
        }
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let err = parse_resume(&PathBuf::from("resume.txt"), &FixedText("")).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(ext) if ext == ".txt"));
    }

    #[test]
    fn wraps_extractor_failures_with_path_context() {
        let err = parse_resume(&PathBuf::from("resume.pdf"), &FailingExtractor).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("resume.pdf"));
        assert!(matches!(err, ParseError::TextExtraction { .. }));
    }

    #[test]
    fn parses_resume_through_an_extractor() {
        let resume = parse_resume(
            &PathBuf::from("resume.docx"),
            &FixedText("Jane Doe\njane@example.com\nSkills: python"),
        )
        .unwrap();

        assert_eq!(resume.personal_info.name, "Jane Doe");
        assert_eq!(resume.personal_info.email, "jane@example.com");
        assert_eq!(resume.skills, vec!["python"]);
    }

    #[test]
    fn extension_casing_does_not_matter() {
        assert_eq!(
            DocumentFormat::from_path(&PathBuf::from("CV.PDF")),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_path(&PathBuf::from("notes.md")), None);
    }

    #[test]
    fn job_description_parsing_never_fails() {
        let jd = parse_job_description("");
        assert_eq!(jd.title, "");
        assert_eq!(jd.min_experience, 0);
        assert!(jd.required_skills.is_empty());
    }
}
