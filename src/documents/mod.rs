//! Document pipeline - derived fields, template filling, and HTTP endpoints.
//!
//! Three document kinds share the same pipeline:
//! - `Registration` - 法人届出書 (company registration, Word)
//! - `Articles` - 定款 (articles of incorporation, Word)
//! - `SealRegistration` - 印鑑届出書 (corporate seal registration, Excel)

pub mod excel;
pub mod fields;
pub mod handlers;
pub mod models;
pub mod word;

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing or retrieving a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("template file not found: {0}")]
    TemplateNotFound(String),
    #[error("{service} service call failed: {reason}")]
    ExternalService {
        service: &'static str,
        reason: String,
    },
    #[error("generated file not found: {0}")]
    OutputNotFound(String),
    #[error("document archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
    #[error("document I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The three document kinds produced by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Registration,
    Articles,
    SealRegistration,
}

impl DocumentKind {
    pub fn template_filename(&self) -> &'static str {
        match self {
            Self::Registration => "template_word_registration.docx",
            Self::Articles => "template_word_incorparticles.docx",
            Self::SealRegistration => "template_excel_corporation_application.xlsx",
        }
    }

    pub fn output_filename(&self) -> &'static str {
        match self {
            Self::Registration => "created_registration.docx",
            Self::Articles => "created_incorparticles.docx",
            Self::SealRegistration => "created_corporation_application.xlsx",
        }
    }

    /// Status message posted to the Slack webhook after generation.
    pub fn notification(&self) -> &'static str {
        match self {
            Self::Registration => "✅ 登記書類（Registration）を生成しました",
            Self::Articles => "✅ 定款（Incorporation Articles）を生成しました",
            Self::SealRegistration => "✅ 印鑑届出書（Seal Registration Excel）を生成しました",
        }
    }

    /// Title used for the Slack file upload.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "登記書類（Registration）",
            Self::Articles => "定款（Incorporation Articles）",
            Self::SealRegistration => "印鑑届出書（Excel）",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Registration | Self::Articles => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::SealRegistration => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

/// Where templates are looked up and generated files are written.
///
/// Templates are resolved from `template_dir` first, then from
/// `fallback_template_dir` (the deployed data volume).
#[derive(Debug, Clone)]
pub struct DocumentPaths {
    pub template_dir: PathBuf,
    pub fallback_template_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("."),
            fallback_template_dir: PathBuf::from("/var/data"),
            output_dir: PathBuf::from("."),
        }
    }
}

impl DocumentPaths {
    pub fn resolve_template(&self, kind: DocumentKind) -> Result<PathBuf, DocumentError> {
        let primary = self.template_dir.join(kind.template_filename());
        if primary.exists() {
            return Ok(primary);
        }
        let fallback = self.fallback_template_dir.join(kind.template_filename());
        if fallback.exists() {
            return Ok(fallback);
        }
        Err(DocumentError::TemplateNotFound(
            kind.template_filename().to_string(),
        ))
    }

    pub fn output_path(&self, kind: DocumentKind) -> PathBuf {
        self.output_dir.join(kind.output_filename())
    }

    /// Bytes of the most recently generated artifact for `kind`.
    pub fn read_generated(&self, kind: DocumentKind) -> Result<Vec<u8>, DocumentError> {
        let path = self.output_path(kind);
        if !path.exists() {
            return Err(DocumentError::OutputNotFound(
                kind.output_filename().to_string(),
            ));
        }
        Ok(fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_template_prefers_primary_dir() {
        let primary = tempfile::tempdir().unwrap();
        let fallback = tempfile::tempdir().unwrap();
        let name = DocumentKind::Registration.template_filename();
        fs::write(primary.path().join(name), b"primary").unwrap();
        fs::write(fallback.path().join(name), b"fallback").unwrap();

        let paths = DocumentPaths {
            template_dir: primary.path().to_path_buf(),
            fallback_template_dir: fallback.path().to_path_buf(),
            output_dir: primary.path().to_path_buf(),
        };
        let resolved = paths.resolve_template(DocumentKind::Registration).unwrap();
        assert!(resolved.starts_with(primary.path()));
    }

    #[test]
    fn test_resolve_template_falls_back_once() {
        let primary = tempfile::tempdir().unwrap();
        let fallback = tempfile::tempdir().unwrap();
        let name = DocumentKind::Articles.template_filename();
        fs::write(fallback.path().join(name), b"fallback").unwrap();

        let paths = DocumentPaths {
            template_dir: primary.path().to_path_buf(),
            fallback_template_dir: fallback.path().to_path_buf(),
            output_dir: primary.path().to_path_buf(),
        };
        let resolved = paths.resolve_template(DocumentKind::Articles).unwrap();
        assert!(resolved.starts_with(fallback.path()));
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let empty = tempfile::tempdir().unwrap();
        let paths = DocumentPaths {
            template_dir: empty.path().to_path_buf(),
            fallback_template_dir: empty.path().join("nope"),
            output_dir: empty.path().to_path_buf(),
        };
        let err = paths
            .resolve_template(DocumentKind::SealRegistration)
            .unwrap_err();
        assert!(matches!(err, DocumentError::TemplateNotFound(_)));
    }

    #[test]
    fn test_read_generated_before_generation_is_not_found() {
        let empty = tempfile::tempdir().unwrap();
        let paths = DocumentPaths {
            template_dir: empty.path().to_path_buf(),
            fallback_template_dir: empty.path().to_path_buf(),
            output_dir: empty.path().to_path_buf(),
        };
        let err = paths.read_generated(DocumentKind::Registration).unwrap_err();
        assert!(matches!(err, DocumentError::OutputNotFound(_)));
    }
}
