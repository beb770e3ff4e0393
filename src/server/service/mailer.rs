//! Outbound mail delivery.

use serde_json::json;

/// Sends transactional mail through an HTTP mail API.
///
/// When no mail API is configured the mailer runs in dev mode: messages are
/// written to the log instead of delivered, so local setups can complete the
/// OTP flow without a mail provider.
#[derive(Clone)]
pub struct MailerService {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: Option<String>,
}

impl MailerService {
    pub fn new(
        client: reqwest::Client,
        api_url: Option<String>,
        api_key: Option<String>,
        from: Option<String>,
    ) -> Self {
        Self {
            client,
            api_url,
            api_key,
            from,
        }
    }

    /// Delivers a one-time login code to the given address.
    pub async fn send_otp(&self, email: &str, code: &str) -> Result<(), reqwest::Error> {
        let (Some(api_url), Some(api_key)) = (&self.api_url, &self.api_key) else {
            tracing::info!("Mail API not configured, OTP for {}: {}", email, code);
            return Ok(());
        };

        let body = json!({
            "from": self.from.as_deref().unwrap_or("no-reply@farmboard.local"),
            "to": email,
            "subject": "Your login code",
            "text": format!(
                "Your one-time login code is {}. It expires in 10 minutes.",
                code
            ),
        });

        self.client
            .post(format!("{}/send", api_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Sent OTP mail to {}", email);

        Ok(())
    }
}
