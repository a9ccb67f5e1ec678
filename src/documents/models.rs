use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Incorporation form payload submitted by the frontend.
///
/// All fields are required; the payload is read once per request and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub company_name: String,
    pub address: String,
    pub president_name: String,
    pub president_address: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub birthyear: i32,
    pub birthmonth: u32,
    pub birthday: u32,
    pub purpose1: String,
    pub purpose2: String,
    pub purpose3: String,
    pub purpose4: String,
    pub purpose5: String,
}

/// Acknowledgment returned by the generation endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_submission_deserialization() {
        let json = r#"{
            "companyName": "Sakura Trading LLC",
            "address": "4-2-8 Shibakoen, Minato City, Tokyo",
            "presidentName": "John Smith",
            "presidentAddress": "1-1 Chiyoda, Chiyoda City, Tokyo",
            "year": 2025,
            "month": 6,
            "day": 15,
            "birthyear": 1985,
            "birthmonth": 3,
            "birthday": 21,
            "purpose1": "Software development",
            "purpose2": "IT consulting",
            "purpose3": "Import and export",
            "purpose4": "E-commerce",
            "purpose5": "Translation services"
        }"#;

        let form: FormSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(form.company_name, "Sakura Trading LLC");
        assert_eq!(form.president_name, "John Smith");
        assert_eq!(form.year, 2025);
        assert_eq!(form.birthday, 21);
        assert_eq!(form.purpose5, "Translation services");
    }

    #[test]
    fn test_form_submission_rejects_missing_field() {
        let json = r#"{"companyName": "Sakura Trading LLC"}"#;
        assert!(serde_json::from_str::<FormSubmission>(json).is_err());
    }
}
