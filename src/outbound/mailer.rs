use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde_json::json;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::outbound::errors::SubmissionError;
use crate::outbound::forms::ContactForm;

const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// How a submission ended up being delivered. Automatic send when the
/// transactional-email API took it; otherwise a prefilled mailto the caller
/// can open, plus the raw text so the frontend can offer copy-to-clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Mailto {
        uri: String,
        subject: String,
        body: String,
    },
}

/// Relays contact-form submissions. The EmailJS path is attempted when
/// credentials are configured; any failure falls back to mailto composition
/// so the user always has a way to complete the submission.
pub struct Mailer {
    client: Client,
    config: Arc<RwLock<Config>>,
}

impl Mailer {
    pub fn new(config: Arc<RwLock<Config>>) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SubmissionError::Send(format!("Failed to build client: {}", e)))?;

        Ok(Mailer { client, config })
    }

    pub async fn send(&self, form: &ContactForm) -> Result<Delivery, SubmissionError> {
        form.validate()?;

        let (configured, service_id, public_key, template_id, contact_email) = {
            let config = self.config.read().await;
            let template_id = match form {
                ContactForm::Brand(_) => config.emailjs_brand_template_id.clone(),
                ContactForm::Talent(_) => config.emailjs_talent_template_id.clone(),
            };
            (
                config.is_emailjs_configured(&template_id),
                config.emailjs_service_id.clone(),
                config.emailjs_public_key.clone(),
                template_id,
                config.contact_email.clone(),
            )
        };

        if let (true, Some(service_id), Some(public_key), Some(template_id)) =
            (configured, service_id, public_key, template_id)
        {
            match self.send_emailjs(&service_id, &template_id, &public_key, form).await {
                Ok(()) => {
                    info!("Contact submission relayed via EmailJS");
                    return Ok(Delivery::Sent);
                }
                Err(e) => {
                    warn!("EmailJS send failed, falling back to mailto: {}", e);
                }
            }
        }

        Ok(compose_mailto(&contact_email, form))
    }

    async fn send_emailjs(
        &self,
        service_id: &str,
        template_id: &str,
        public_key: &str,
        form: &ContactForm,
    ) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(EMAILJS_API_URL)
            .json(&json!({
                "service_id": service_id,
                "template_id": template_id,
                "user_id": public_key,
                "template_params": form.template_params(),
            }))
            .send()
            .await
            .map_err(|e| SubmissionError::Send(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }
        Ok(())
    }
}

fn compose_mailto(to: &str, form: &ContactForm) -> Delivery {
    let subject = form.subject();
    let body = form.body();
    let uri = format!(
        "mailto:{}?subject={}&body={}",
        to,
        utf8_percent_encode(&subject, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC)
    );
    Delivery::Mailto { uri, subject, body }
}
