use std::sync::{Arc, LazyLock};

use color_eyre::Result;
use regex::Regex;
use serde::Deserialize;

use crate::clients::BeehiivClient;
use crate::codec::AnswerSet;
use crate::names;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Basic syntax check, not a deliverability check.
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= names::MAX_EMAIL_LENGTH && EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub bottleneck_title: Option<String>,
    #[serde(default)]
    pub answers: Option<AnswerSet>,
}

/// How the newsletter platform answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeStatus {
    Created,
    AlreadySubscribed,
    Failed(u16),
}

// ---------------------------------------------------------------------------
// Subscriber trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait Subscriber: Send + Sync {
    /// Whether API credentials are present.
    fn is_configured(&self) -> bool;

    fn subscribe(
        &self,
        req: &SubscribeRequest,
    ) -> impl std::future::Future<Output = Result<SubscribeStatus>> + Send;
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    /// Already on the list; treated as success.
    AlreadySubscribed,
    /// Email or first name was empty.
    MissingFields,
    InvalidEmail,
    NotConfigured,
    Failed,
}

impl SubscribeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubscribeOutcome::Subscribed | SubscribeOutcome::AlreadySubscribed)
    }
}

// ---------------------------------------------------------------------------
// NewsletterService
// ---------------------------------------------------------------------------

pub struct NewsletterService<S: Subscriber = BeehiivClient> {
    subscriber: Arc<S>,
}

impl<S: Subscriber> Clone for NewsletterService<S> {
    fn clone(&self) -> Self {
        Self {
            subscriber: Arc::clone(&self.subscriber),
        }
    }
}

impl<S: Subscriber> NewsletterService<S> {
    pub fn new(subscriber: S) -> Self {
        Self {
            subscriber: Arc::new(subscriber),
        }
    }

    pub async fn subscribe(&self, req: &SubscribeRequest) -> Result<SubscribeOutcome> {
        if req.email.is_empty() || req.first_name.is_empty() {
            return Ok(SubscribeOutcome::MissingFields);
        }

        if !is_valid_email(&req.email) {
            return Ok(SubscribeOutcome::InvalidEmail);
        }

        if !self.subscriber.is_configured() {
            tracing::error!("missing newsletter credentials");
            return Ok(SubscribeOutcome::NotConfigured);
        }

        let outcome = match self.subscriber.subscribe(req).await? {
            SubscribeStatus::Created => SubscribeOutcome::Subscribed,
            SubscribeStatus::AlreadySubscribed => SubscribeOutcome::AlreadySubscribed,
            SubscribeStatus::Failed(status) => {
                tracing::warn!("subscription for {} failed with status {status}", req.email);
                SubscribeOutcome::Failed
            }
        };
        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: email.to_string(),
            first_name: "Kim".to_string(),
            path: "C".to_string(),
            result: "subtitle".to_string(),
            bottleneck_title: Some("The Visual Creator".to_string()),
            answers: None,
        }
    }

    fn configured(status: SubscribeStatus) -> NewsletterService<MockSubscriber> {
        let mut mock = MockSubscriber::new();
        mock.expect_is_configured().returning(|| true);
        mock.expect_subscribe()
            .returning(move |_| Box::pin(async move { Ok(status) }));
        NewsletterService::new(mock)
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert!(!is_valid_email(""));

        let long = format!("{}@example.com", "x".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[tokio::test]
    async fn subscribe_created() {
        let svc = configured(SubscribeStatus::Created);
        let outcome = svc.subscribe(&request("kim@example.com")).await.unwrap();
        assert_eq!(outcome, SubscribeOutcome::Subscribed);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn conflict_counts_as_success() {
        let svc = configured(SubscribeStatus::AlreadySubscribed);
        let outcome = svc.subscribe(&request("kim@example.com")).await.unwrap();
        assert_eq!(outcome, SubscribeOutcome::AlreadySubscribed);
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn upstream_failure() {
        let svc = configured(SubscribeStatus::Failed(500));
        let outcome = svc.subscribe(&request("kim@example.com")).await.unwrap();
        assert_eq!(outcome, SubscribeOutcome::Failed);
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn validation_happens_before_configuration() {
        let mut mock = MockSubscriber::new();
        mock.expect_is_configured().never();
        mock.expect_subscribe().never();
        let svc = NewsletterService::new(mock);

        let mut missing = request("kim@example.com");
        missing.first_name.clear();
        assert_eq!(svc.subscribe(&missing).await.unwrap(), SubscribeOutcome::MissingFields);
        assert_eq!(
            svc.subscribe(&request("not-an-email")).await.unwrap(),
            SubscribeOutcome::InvalidEmail
        );
    }

    #[tokio::test]
    async fn unconfigured_does_not_call_platform() {
        let mut mock = MockSubscriber::new();
        mock.expect_is_configured().returning(|| false);
        mock.expect_subscribe().never();
        let svc = NewsletterService::new(mock);

        assert_eq!(
            svc.subscribe(&request("kim@example.com")).await.unwrap(),
            SubscribeOutcome::NotConfigured
        );
    }

    #[test]
    fn request_reads_camel_case_json() {
        let req: SubscribeRequest = serde_json::from_str(
            r#"{"email":"a@b.co","firstName":"Al","path":"A","result":"r","bottleneckTitle":"t","answers":{"Q1A":"no_focus"}}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "Al");
        assert_eq!(req.bottleneck_title.as_deref(), Some("t"));
        assert_eq!(req.answers.unwrap().get("Q1A").map(String::as_str), Some("no_focus"));
    }
}
