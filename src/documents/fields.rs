//! Field derivation: turns a raw form submission into the placeholder→value
//! map for one document kind.
//!
//! Derived values are independent of one another; calls to the external
//! collaborators are made sequentially and the first failure aborts the
//! request.

use chrono::Local;

use crate::documents::models::FormSubmission;
use crate::documents::{DocumentError, DocumentKind};
use crate::state::AppState;

/// Postal-code marker in Japanese formatted addresses.
const POSTAL_MARK: char = '〒';

/// Ordered placeholder→value pairs for one document.
///
/// For Word documents the key is a literal token embedded in the template
/// text; for the seal-registration spreadsheet it is a merged cell range.
pub type PlaceholderMap = Vec<(String, String)>;

/// `Y年M月D日` without zero padding.
pub fn format_japanese_date(year: i32, month: u32, day: u32) -> String {
    format!("{}年{}月{}日", year, month, day)
}

/// Fiscal year-end (month, day) for a company incorporated in `month`.
///
/// Fixed lookup, day values are not calendar-validated. The fiscal end year
/// is always the incorporation year plus one.
pub fn fiscal_year_end(month: u32) -> (u32, u32) {
    match month {
        1 => (12, 31),
        5 | 7 | 10 | 12 => (month - 1, 30),
        4 => (3, 28),
        _ => (month - 1, 31),
    }
}

/// Drop the postal-code block from a Japanese formatted address.
///
/// Everything up to and including the `〒` marker plus the following
/// 8 characters (digits and separator) is removed; an address without the
/// marker is returned unchanged.
pub fn strip_postal_code(formatted: &str) -> String {
    match formatted.split_once(POSTAL_MARK) {
        Some((_, rest)) => rest.chars().skip(8).collect(),
        None => formatted.to_string(),
    }
}

impl AppState {
    /// Katakana rendering of `text`, with spaces removed.
    pub(crate) async fn transliterate(&self, text: &str) -> Result<String, DocumentError> {
        let katakana = self
            .translator
            .translate(text, "ja-Hira")
            .await
            .map_err(|reason| DocumentError::ExternalService {
                service: "translation",
                reason,
            })?;
        Ok(katakana.replace(' ', ""))
    }

    /// Japanese-localized address with the postal-code block stripped.
    pub(crate) async fn localize_address(&self, address: &str) -> Result<String, DocumentError> {
        let formatted = self
            .geocoder
            .japanese_address(address)
            .await
            .map_err(|reason| DocumentError::ExternalService {
                service: "geocoding",
                reason,
            })?;
        Ok(strip_postal_code(&formatted))
    }

    pub(crate) async fn translate_purpose(&self, text: &str) -> Result<String, DocumentError> {
        self.translator
            .translate(text, "ja")
            .await
            .map_err(|reason| DocumentError::ExternalService {
                service: "translation",
                reason,
            })
    }

    /// Placeholder map for `kind`, derived from `form`.
    pub async fn derive_fields(
        &self,
        form: &FormSubmission,
        kind: DocumentKind,
    ) -> Result<PlaceholderMap, DocumentError> {
        match kind {
            DocumentKind::Registration => self.derive_registration_fields(form).await,
            DocumentKind::Articles => self.derive_articles_fields(form).await,
            DocumentKind::SealRegistration => self.derive_seal_fields(form).await,
        }
    }

    async fn derive_registration_fields(
        &self,
        form: &FormSubmission,
    ) -> Result<PlaceholderMap, DocumentError> {
        let company_kana = self.transliterate(&form.company_name).await?;
        let office_address = self.localize_address(&form.address).await?;
        let president_kana = self.transliterate(&form.president_name).await?;
        let president_address = self.localize_address(&form.president_address).await?;

        let mut map: PlaceholderMap = vec![
            ("(A商号)".to_string(), form.company_name.clone()),
            ("(A商号のメインパートのフリガナ)".to_string(), company_kana),
            ("(Pending1B・本店住所フル)".to_string(), office_address),
            ("(C社員住所)".to_string(), president_address),
            ("(D社員氏名)".to_string(), president_kana),
            (
                "(E設立日・和暦)".to_string(),
                format_japanese_date(form.year, form.month, form.day),
            ),
            (
                "(G社員生年月日・暦年)".to_string(),
                format_japanese_date(form.birthyear, form.birthmonth, form.birthday),
            ),
        ];
        map.extend(self.translated_purposes(form).await?);
        Ok(map)
    }

    async fn derive_articles_fields(
        &self,
        form: &FormSubmission,
    ) -> Result<PlaceholderMap, DocumentError> {
        let office_address = self.localize_address(&form.address).await?;
        let president_kana = self.transliterate(&form.president_name).await?;
        let president_address = self.localize_address(&form.president_address).await?;

        let (end_month, end_day) = fiscal_year_end(form.month);
        let drafted_on = Local::now().format("%Y年%m月%d日").to_string();

        let mut map: PlaceholderMap = vec![
            ("(A商号)".to_string(), form.company_name.clone()),
            (
                "(本店住所●Pending1A=東京都△△区)".to_string(),
                office_address,
            ),
            ("(C社員住所)".to_string(), president_address),
            ("(D社員氏名)".to_string(), president_kana),
            (
                "(E設立日がある月の1日)".to_string(),
                format_japanese_date(form.year, form.month, 1),
            ),
            (
                "(E設立日がある月から11ヶ月後の月末)".to_string(),
                format_japanese_date(form.year + 1, end_month, end_day),
            ),
            ("(F定款作成日・暦年)".to_string(), drafted_on),
        ];
        map.extend(self.translated_purposes(form).await?);
        Ok(map)
    }

    async fn derive_seal_fields(
        &self,
        form: &FormSubmission,
    ) -> Result<PlaceholderMap, DocumentError> {
        let office_address = self.localize_address(&form.address).await?;
        let president_kana = self.transliterate(&form.president_name).await?;
        let president_address = self.localize_address(&form.president_address).await?;

        Ok(vec![
            ("AH7:BC9".to_string(), form.company_name.clone()),
            ("AH10:BC13".to_string(), office_address),
            ("P52:BC52".to_string(), president_address),
            ("AH18:BC21".to_string(), president_kana.clone()),
            ("P53:BC53".to_string(), president_kana),
            (
                "G51:AC51".to_string(),
                format_japanese_date(form.year, form.month, form.day),
            ),
            (
                "AH22:BC24".to_string(),
                format_japanese_date(form.birthyear, form.birthmonth, form.birthday),
            ),
        ])
    }

    async fn translated_purposes(
        &self,
        form: &FormSubmission,
    ) -> Result<PlaceholderMap, DocumentError> {
        let purposes = [
            &form.purpose1,
            &form.purpose2,
            &form.purpose3,
            &form.purpose4,
            &form.purpose5,
        ];

        let mut map = PlaceholderMap::new();
        for (index, purpose) in purposes.iter().enumerate() {
            map.push((
                format!("(B目的{})", index + 1),
                self.translate_purpose(purpose).await?,
            ));
        }
        Ok(map)
    }
}
