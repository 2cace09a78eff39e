use async_trait::async_trait;
use log::debug;
use serde::Serialize;

use super::mailer_traits::MailerTrait;
use crate::errors::{Error, Result};

const DEFAULT_API_URL: &str = "https://api.resend.com/emails";
const FROM_ADDRESS: &str = "CoinJar <noreply@coinjar.com>";

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: String,
}

/// Resend-backed mailer for the confirmation email.
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL)
    }

    /// Override the endpoint, for tests and self-hosted relays.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    fn confirmation_body(name: &str) -> String {
        format!(
            "<h1>Welcome to CoinJar</h1>\
             <p>A CoinJar has been created for {}. Friends and family can now \
             chip in toward the collection.</p>",
            name
        )
    }
}

#[async_trait]
impl MailerTrait for ResendMailer {
    async fn send_confirmation(&self, name: &str, email: &str) -> Result<()> {
        let request = SendEmailRequest {
            from: FROM_ADDRESS,
            to: [email],
            subject: "Welcome to CoinJar - Email Confirmation",
            html: Self::confirmation_body(name),
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Mail(format!(
                "mail API returned status {}",
                response.status()
            )));
        }

        debug!("Confirmation email queued for {}", email);
        Ok(())
    }
}
