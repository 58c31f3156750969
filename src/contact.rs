use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::config::SiteConfig;

/// Body posted to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("couldn't reach the contact service: {0}")]
    Request(String),
    #[error("contact service answered with status {0}")]
    Status(u16),
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, phone: &str, comments: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            comments: comments.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        Ok(())
    }
}

/// Forward a message to the configured endpoint. No retries.
#[cfg(feature = "ssr")]
pub async fn send(config: &SiteConfig, message: &ContactMessage) -> Result<(), ContactError> {
    message.validate()?;
    let client = reqwest::Client::builder()
        .timeout(config.contact_timeout)
        .build()
        .map_err(|e| ContactError::Request(e.to_string()))?;
    let response = client
        .post(&config.contact_endpoint)
        .json(message)
        .send()
        .await
        .map_err(|e| ContactError::Request(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, "contact endpoint rejected message");
        return Err(ContactError::Status(status.as_u16()));
    }
    tracing::info!("contact message forwarded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_email_are_required() {
        let message = ContactMessage::new("  ", "a@b.co", "", "hi");
        assert_eq!(message.validate(), Err(ContactError::MissingField("name")));

        let message = ContactMessage::new("Ada", "", "", "hi");
        assert_eq!(message.validate(), Err(ContactError::MissingField("email")));
        assert_eq!(
            ContactError::MissingField("email").to_string(),
            "email is required"
        );

        let message = ContactMessage::new("Ada", "ada@example.com", "", "");
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_posted_body_shape() {
        let message = ContactMessage::new(" Ada ", "ada@example.com", "555", "Hello");
        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "555",
                "comments": "Hello",
            })
        );
    }

    #[cfg(feature = "ssr")]
    mod forwarding {
        use std::{
            sync::{
                atomic::{AtomicUsize, Ordering},
                Arc,
            },
            time::Duration,
        };

        use axum::{http::StatusCode, routing::post, Router};

        use super::*;

        /// Local endpoint that answers every post with `status` and counts hits.
        async fn endpoint(status: StatusCode) -> (SiteConfig, Arc<AtomicUsize>) {
            let hits = Arc::new(AtomicUsize::new(0));
            let counter = hits.clone();
            let app = Router::new().route(
                "/",
                post(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async move { status }
                }),
            );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            let config = SiteConfig {
                contact_endpoint: format!("http://{addr}/"),
                contact_timeout: Duration::from_secs(5),
            };
            (config, hits)
        }

        #[tokio::test]
        async fn test_rejected_message_reports_status() {
            let (config, hits) = endpoint(StatusCode::SERVICE_UNAVAILABLE).await;
            let message = ContactMessage::new("Ada", "ada@example.com", "", "Hello");
            assert_eq!(send(&config, &message).await, Err(ContactError::Status(503)));
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_missing_name_never_posts() {
            let (config, hits) = endpoint(StatusCode::OK).await;
            let message = ContactMessage::new("", "ada@example.com", "", "Hello");
            assert_eq!(
                send(&config, &message).await,
                Err(ContactError::MissingField("name"))
            );
            assert_eq!(hits.load(Ordering::SeqCst), 0);

            let message = ContactMessage::new("Ada", "ada@example.com", "", "Hello");
            assert_eq!(send(&config, &message).await, Ok(()));
            assert_eq!(hits.load(Ordering::SeqCst), 1);
        }
    }
}
