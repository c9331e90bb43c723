use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::outbound::errors::SubmissionError;

/// Campaign brief submitted from the brands page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandBrief {
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub outline: String,
}

/// Application submitted from the join-the-roster form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalentApplication {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub tiktok: String,
    #[serde(default)]
    pub other: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContactForm {
    Brand(BrandBrief),
    Talent(TalentApplication),
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), SubmissionError> {
        match self {
            ContactForm::Brand(f) => {
                if f.brand.is_empty() || f.email.is_empty() || f.outline.is_empty() {
                    return Err(SubmissionError::MissingFields("brand, email, outline".to_string()));
                }
            }
            ContactForm::Talent(f) => {
                if f.name.is_empty() || f.email.is_empty() {
                    return Err(SubmissionError::MissingFields("name, email".to_string()));
                }
            }
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        match self {
            ContactForm::Brand(f) => format!("WEARD Brief – {}", f.brand),
            ContactForm::Talent(f) => format!("Join the Roster – {}", f.name),
        }
    }

    pub fn body(&self) -> String {
        match self {
            ContactForm::Brand(f) => format!(
                "Brand: {}\nRole: {}\nEmail: {}\nNumber: {}\nBudget: {}\n\nTimeline: {}\n\nOutline:\n{}",
                f.brand, f.role, f.email, f.number, f.budget, f.timeline, f.outline
            ),
            ContactForm::Talent(f) => format!(
                "Name: {}\nEmail: {}\nNumber: {}\nInstagram: {}\nTikTok: {}\nOther: {}\nCategory: {}\n\nLocation: {}\nAvailability: {}\n\nNotes:\n{}",
                f.name,
                f.email,
                f.number,
                f.instagram,
                f.tiktok,
                f.other,
                f.category,
                f.location,
                f.availability,
                f.notes
            ),
        }
    }

    /// Flat key-value parameters for the transactional-email template.
    pub fn template_params(&self) -> Value {
        let mut params = match self {
            ContactForm::Brand(f) => json!({
                "brand": f.brand,
                "role": f.role,
                "email": f.email,
                "number": f.number,
                "budget": f.budget,
                "timeline": f.timeline,
                "outline": f.outline,
            }),
            ContactForm::Talent(f) => json!({
                "name": f.name,
                "email": f.email,
                "number": f.number,
                "instagram": f.instagram,
                "tiktok": f.tiktok,
                "other": f.other,
                "category": f.category,
                "location": f.location,
                "availability": f.availability,
                "notes": f.notes,
            }),
        };
        if let Some(map) = params.as_object_mut() {
            map.insert("subject".to_string(), Value::String(self.subject()));
            map.insert("message".to_string(), Value::String(self.body()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> ContactForm {
        ContactForm::Brand(BrandBrief {
            brand: "Acme".to_string(),
            email: "pr@acme.test".to_string(),
            outline: "Spring launch".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn validation_requires_the_core_fields() {
        assert!(brief().validate().is_ok());
        assert!(ContactForm::Brand(BrandBrief::default()).validate().is_err());
        assert!(ContactForm::Talent(TalentApplication::default()).validate().is_err());
    }

    #[test]
    fn subject_and_body_carry_the_fields() {
        let form = brief();
        assert_eq!(form.subject(), "WEARD Brief – Acme");
        let body = form.body();
        assert!(body.contains("Brand: Acme"));
        assert!(body.contains("Outline:\nSpring launch"));
    }

    #[test]
    fn template_params_include_subject_and_message() {
        let params = brief().template_params();
        assert_eq!(params["brand"], "Acme");
        assert_eq!(params["subject"], "WEARD Brief – Acme");
        assert!(params["message"].as_str().unwrap().contains("Brand: Acme"));
    }

    #[test]
    fn contact_form_deserializes_tagged_json() {
        let form: ContactForm = serde_json::from_str(
            r#"{"kind":"talent","name":"Zophia","email":"z@example.com"}"#,
        )
        .unwrap();
        assert_eq!(form.subject(), "Join the Roster – Zophia");
    }
}
