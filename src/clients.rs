use color_eyre::Result;
use serde::Serialize;

use crate::{
    catalog::newsletter_label,
    names,
    quiz::Lead,
    services::{
        intake::LeadIntake,
        newsletter::{SubscribeRequest, SubscribeStatus, Subscriber},
    },
};

/// Posts leads to the workflow-automation intake webhook.
#[derive(Clone)]
pub struct WebhookIntakeClient {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl WebhookIntakeClient {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url: webhook_url.filter(|url| !url.is_empty()),
        }
    }
}

impl LeadIntake for WebhookIntakeClient {
    fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    async fn submit(&self, lead: &Lead) -> Result<bool> {
        let Some(url) = self.webhook_url.as_deref() else {
            color_eyre::eyre::bail!("intake webhook is not configured");
        };

        // the webhook expects a batch
        let resp = self.http.post(url).json(&[lead]).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("intake webhook error: {status} - {text}");
            return Ok(false);
        }

        tracing::info!("lead forwarded to intake for {}", lead.email);
        Ok(true)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

impl CustomField {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize)]
struct CreateSubscriptionRequest<'a> {
    email: &'a str,
    reactivate_existing: bool,
    send_welcome_email: bool,
    custom_fields: Vec<CustomField>,
}

/// Custom fields attached to a newsletter subscription. `date` is the quiz
/// date as `YYYY-MM-DD`. Answers carry their segmentation label.
pub fn custom_fields(req: &SubscribeRequest, date: &str) -> Vec<CustomField> {
    let mut fields = vec![
        CustomField::new("first_name", &req.first_name),
        CustomField::new("quiz_path", &req.path),
        CustomField::new("quiz_result", &req.result),
        CustomField::new("bottleneck_type", req.bottleneck_title.as_deref().unwrap_or_default()),
        CustomField::new("quiz_date", date),
    ];

    if let Some(answers) = &req.answers {
        fields.extend(answers.iter().map(|(question_id, value)| {
            CustomField::new(
                format!("answer_{}", question_id.to_lowercase()),
                newsletter_label(question_id, value),
            )
        }));
        fields.push(CustomField::new(
            "quiz_answers_raw",
            serde_json::to_string(answers).unwrap_or_default(),
        ));
    }

    fields
}

/// Subscribes visitors to the newsletter platform.
#[derive(Clone)]
pub struct BeehiivClient {
    http: reqwest::Client,
    api_base: String,
    credentials: Option<(String, String)>,
}

impl BeehiivClient {
    /// Both the API key and the publication id are needed; otherwise the
    /// client reports itself as not configured.
    pub fn new(api_key: Option<String>, publication_id: Option<String>) -> Self {
        let credentials = api_key
            .filter(|k| !k.is_empty())
            .zip(publication_id.filter(|p| !p.is_empty()));
        Self {
            http: reqwest::Client::new(),
            api_base: names::BEEHIIV_API_BASE.to_string(),
            credentials,
        }
    }

    /// Points the client at another API root, e.g. a local stand-in.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

impl Subscriber for BeehiivClient {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn subscribe(&self, req: &SubscribeRequest) -> Result<SubscribeStatus> {
        let Some((api_key, publication_id)) = &self.credentials else {
            color_eyre::eyre::bail!("newsletter credentials are missing");
        };

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let body = CreateSubscriptionRequest {
            email: &req.email,
            reactivate_existing: true,
            send_welcome_email: true,
            custom_fields: custom_fields(req, &today),
        };

        let resp = self
            .http
            .post(format!(
                "{}/publications/{publication_id}/subscriptions",
                self.api_base
            ))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            tracing::info!("subscribed {} to the newsletter", req.email);
            return Ok(SubscribeStatus::Created);
        }

        let text = resp.text().await.unwrap_or_default();
        tracing::error!("newsletter API error: {status} - {text}");

        if status == reqwest::StatusCode::CONFLICT {
            return Ok(SubscribeStatus::AlreadySubscribed);
        }
        Ok(SubscribeStatus::Failed(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::AnswerSet;

    fn request(answers: Option<AnswerSet>) -> SubscribeRequest {
        SubscribeRequest {
            email: "kim@example.com".to_string(),
            first_name: "Kim".to_string(),
            path: "B".to_string(),
            result: "Your product is ahead of your brand".to_string(),
            bottleneck_title: None,
            answers,
        }
    }

    #[test]
    fn custom_fields_without_answers() {
        let fields = custom_fields(&request(None), "2026-10-16");
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["first_name", "quiz_path", "quiz_result", "bottleneck_type", "quiz_date"]
        );
        assert_eq!(fields[3].value, "");
        assert_eq!(fields[4].value, "2026-10-16");
    }

    #[test]
    fn custom_fields_carry_answer_labels_and_raw_json() {
        let answers: AnswerSet = [
            ("Q1B".to_string(), "idea_only".to_string()),
            ("Q2B".to_string(), "unknown_value".to_string()),
        ]
        .into_iter()
        .collect();
        let fields = custom_fields(&request(Some(answers)), "2026-10-16");

        assert!(fields.contains(&CustomField::new(
            "answer_q1b",
            "Has idea, nothing built yet"
        )));
        assert!(fields.contains(&CustomField::new("answer_q2b", "unknown_value")));
        let raw = fields.last().unwrap();
        assert_eq!(raw.name, "quiz_answers_raw");
        assert_eq!(raw.value, r#"{"Q1B":"idea_only","Q2B":"unknown_value"}"#);
    }

    #[test]
    fn beehiiv_needs_both_credentials() {
        assert!(!BeehiivClient::new(Some("key".into()), None).is_configured());
        assert!(!BeehiivClient::new(Some("".into()), Some("pub".into())).is_configured());
        assert!(BeehiivClient::new(Some("key".into()), Some("pub".into())).is_configured());
    }

    #[test]
    fn intake_is_disabled_without_url() {
        assert!(!WebhookIntakeClient::new(None).is_enabled());
        assert!(!WebhookIntakeClient::new(Some(String::new())).is_enabled());
        assert!(WebhookIntakeClient::new(Some("http://localhost/hook".into())).is_enabled());
    }
}
