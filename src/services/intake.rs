use std::sync::Arc;

use color_eyre::Result;
use tokio::task::JoinHandle;

use crate::clients::WebhookIntakeClient;
use crate::quiz::Lead;

// ---------------------------------------------------------------------------
// LeadIntake trait (DIP: service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait LeadIntake: Send + Sync {
    /// Whether an intake webhook is configured.
    fn is_enabled(&self) -> bool;

    /// Forwards one lead. `Ok(false)` means the webhook answered with a
    /// non-success status.
    fn submit(&self, lead: &Lead) -> impl std::future::Future<Output = Result<bool>> + Send;
}

pub enum IntakeOutcome {
    Accepted,
    /// Email, name or answer was empty.
    MissingFields,
    /// No webhook configured; nothing was sent.
    Disabled,
    /// The webhook refused the lead.
    Rejected,
}

// ---------------------------------------------------------------------------
// IntakeService
// ---------------------------------------------------------------------------

pub struct IntakeService<C: LeadIntake = WebhookIntakeClient> {
    client: Arc<C>,
}

impl<C: LeadIntake> Clone for IntakeService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: LeadIntake + 'static> IntakeService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn forward(&self, lead: &Lead) -> Result<IntakeOutcome> {
        if lead.email.is_empty() || lead.name.is_empty() || lead.answer.is_empty() {
            return Ok(IntakeOutcome::MissingFields);
        }

        if !self.client.is_enabled() {
            tracing::debug!("intake disabled, skipping lead for {}", lead.email);
            return Ok(IntakeOutcome::Disabled);
        }

        if self.client.submit(lead).await? {
            Ok(IntakeOutcome::Accepted)
        } else {
            Ok(IntakeOutcome::Rejected)
        }
    }

    /// Forwards the lead on a detached task. The caller is never expected to
    /// wait for it; failures are only logged.
    pub fn notify_detached(&self, lead: Lead) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            match service.forward(&lead).await {
                Ok(IntakeOutcome::Accepted | IntakeOutcome::Disabled) => {}
                Ok(IntakeOutcome::MissingFields) => {
                    tracing::warn!("lead for '{}' is incomplete, not forwarded", lead.name);
                }
                Ok(IntakeOutcome::Rejected) => {
                    tracing::warn!("intake refused lead for {}", lead.email);
                }
                Err(e) => {
                    tracing::warn!("could not forward lead for {}: {e}", lead.email);
                }
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            answer: "beginner".to_string(),
        }
    }

    fn enabled(mock: &mut MockLeadIntake) {
        mock.expect_is_enabled().returning(|| true);
    }

    #[tokio::test]
    async fn forward_accepted() {
        let mut mock = MockLeadIntake::new();
        enabled(&mut mock);
        mock.expect_submit()
            .times(1)
            .returning(|_| Box::pin(async { Ok(true) }));

        let svc = IntakeService::new(mock);
        assert!(matches!(svc.forward(&lead()).await.unwrap(), IntakeOutcome::Accepted));
    }

    #[tokio::test]
    async fn forward_rejected_upstream() {
        let mut mock = MockLeadIntake::new();
        enabled(&mut mock);
        mock.expect_submit()
            .returning(|_| Box::pin(async { Ok(false) }));

        let svc = IntakeService::new(mock);
        assert!(matches!(svc.forward(&lead()).await.unwrap(), IntakeOutcome::Rejected));
    }

    #[tokio::test]
    async fn forward_missing_fields_does_not_call_webhook() {
        let mut mock = MockLeadIntake::new();
        mock.expect_submit().never();

        let svc = IntakeService::new(mock);
        let mut incomplete = lead();
        incomplete.answer.clear();
        assert!(matches!(
            svc.forward(&incomplete).await.unwrap(),
            IntakeOutcome::MissingFields
        ));
    }

    #[tokio::test]
    async fn forward_disabled_does_not_call_webhook() {
        let mut mock = MockLeadIntake::new();
        mock.expect_is_enabled().returning(|| false);
        mock.expect_submit().never();

        let svc = IntakeService::new(mock);
        assert!(matches!(svc.forward(&lead()).await.unwrap(), IntakeOutcome::Disabled));
    }

    #[tokio::test]
    async fn detached_notification_swallows_errors() {
        let mut mock = MockLeadIntake::new();
        enabled(&mut mock);
        mock.expect_submit()
            .times(1)
            .returning(|_| Box::pin(async { Err(color_eyre::eyre::eyre!("connection refused")) }));

        let svc = IntakeService::new(mock);
        // the task completes normally even though the webhook failed
        svc.notify_detached(lead()).await.unwrap();
    }

    #[tokio::test]
    async fn detached_notification_sends_the_lead() {
        let mut mock = MockLeadIntake::new();
        enabled(&mut mock);
        mock.expect_submit()
            .withf(|l| l.email == "ada@example.com" && l.answer == "beginner")
            .times(1)
            .returning(|_| Box::pin(async { Ok(true) }));

        let svc = IntakeService::new(mock);
        svc.notify_detached(lead()).await.unwrap();
    }
}
