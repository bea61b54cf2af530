//! Best-effort email notifications for hero power creation.
//!
//! Dispatch is fire-and-forget: the send runs on a spawned task after the
//! creation has been committed, and any failure is logged and swallowed. The
//! outcome is never observable to the HTTP caller.

use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{model::hero_power::HeroPowerDto, server::error::notification::NotificationError};

/// Composes and dispatches hero power creation notifications.
///
/// Cheap to clone; the SMTP transport shares its connection pool across
/// clones. A disabled notifier (no SMTP configuration) skips dispatch
/// entirely.
#[derive(Clone)]
pub struct NotificationService {
    mailer: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    recipient: String,
}

impl NotificationService {
    pub fn new(mailer: AsyncSmtpTransport<Tokio1Executor>, from: String, recipient: String) -> Self {
        Self {
            mailer: Some(mailer),
            from,
            recipient,
        }
    }

    /// Creates a notifier that silently drops every notification.
    pub fn disabled() -> Self {
        Self {
            mailer: None,
            from: String::new(),
            recipient: String::new(),
        }
    }

    /// Dispatches a notification for a newly created hero power.
    ///
    /// Returns immediately; the send happens on a spawned task and a failure
    /// there is logged at error level and swallowed. The caller's response is
    /// already determined by the committed insert and cannot be affected.
    pub fn notify_hero_power_created(&self, hero_power: &HeroPowerDto) {
        let Some(mailer) = self.mailer.clone() else {
            tracing::debug!("Mail transport not configured, skipping hero power notification");
            return;
        };

        let from = self.from.clone();
        let recipient = self.recipient.clone();
        let hero_power = hero_power.clone();

        tokio::spawn(async move {
            if let Err(err) = send_created_email(&mailer, &from, &recipient, &hero_power).await {
                tracing::error!("Failed to send hero power notification: {}", err);
            }
        });
    }
}

/// Builds and sends the creation notification message.
async fn send_created_email(
    mailer: &AsyncSmtpTransport<Tokio1Executor>,
    from: &str,
    recipient: &str,
    hero_power: &HeroPowerDto,
) -> Result<(), NotificationError> {
    let email = Message::builder()
        .from(
            from.parse()
                .map_err(|_| NotificationError::InvalidAddress(from.to_string()))?,
        )
        .to(recipient
            .parse()
            .map_err(|_| NotificationError::InvalidAddress(recipient.to_string()))?)
        .subject(format!("New Power Added: {}", hero_power.hero.super_name))
        .header(ContentType::TEXT_PLAIN)
        .body(format!(
            "A new power has been assigned!\n\n\
             Hero: {} ({})\n\
             Power: {}\n\
             Strength: {}\n\
             Description: {}\n\n\
             This is an automated notification from the Superheroes API.\n",
            hero_power.hero.name,
            hero_power.hero.super_name,
            hero_power.power.name,
            hero_power.strength,
            hero_power.power.description,
        ))?;

    mailer.send(email).await?;

    Ok(())
}
