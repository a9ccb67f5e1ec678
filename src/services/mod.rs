//! External collaborators: translation, geocoding, and Slack delivery.
//!
//! Each collaborator is a small trait so handlers and the field deriver can be
//! exercised with in-memory stubs. Production implementations live in
//! `google` and `slack` and share the application's `reqwest::Client`.

pub mod google;
pub mod slack;

pub use google::{GoogleGeocode, GoogleTranslate};
pub use slack::SlackNotifier;

use async_trait::async_trait;
use std::path::Path;

/// Text translation (also used for katakana transliteration via the
/// `ja-Hira` target language).
#[async_trait]
pub trait Translator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, String>;
}

/// Address lookup returning the Japanese-localized formatted address.
#[async_trait]
pub trait Geocoder {
    async fn japanese_address(&self, address: &str) -> Result<String, String>;
}

/// Chat delivery: short status messages plus generated-file uploads.
///
/// Failures from either method are reported to the caller, which logs and
/// drops them; delivery never fails a generation request.
#[async_trait]
pub trait Notifier {
    async fn notify(&self, message: &str) -> Result<(), String>;
    async fn upload(&self, file_path: &Path, title: &str) -> Result<(), String>;
}
