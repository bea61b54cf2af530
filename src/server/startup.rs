use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, Tokio1Executor,
};

use crate::server::{
    config::Config,
    error::{notification::NotificationError, AppError},
    service::notification::NotificationService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the hero power notification service from configuration.
///
/// Without SMTP settings the notifier is disabled and hero power creation
/// proceeds with no side effect. An empty `SMTP_USER` selects an
/// unauthenticated transport for local development relays; otherwise the
/// transport authenticates against the configured relay.
///
/// # Arguments
/// - `config` - Application configuration with optional mail settings
///
/// # Returns
/// - `Ok(NotificationService)` - Notifier ready for fire-and-forget dispatch
/// - `Err(AppError)` - The SMTP relay could not be configured
pub fn setup_notifier(config: &Config) -> Result<NotificationService, AppError> {
    let Some(mail) = &config.mail else {
        return Ok(NotificationService::disabled());
    };

    let mailer = if mail.smtp_user.is_empty() {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&mail.smtp_host)
            .port(mail.smtp_port)
            .build()
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&mail.smtp_host)
            .map_err(NotificationError::from)?
            .credentials(Credentials::new(
                mail.smtp_user.clone(),
                mail.smtp_password.clone(),
            ))
            .port(mail.smtp_port)
            .build()
    };

    Ok(NotificationService::new(
        mailer,
        mail.mail_from.clone(),
        mail.notify_email.clone(),
    ))
}
