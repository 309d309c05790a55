use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use crate::{config::AppConfig, error::AppError};

/// SMTP delivery for owner confirmation mail.
///
/// Sends occur on the request path; callers decide whether a failure is
/// fatal. With no credentials configured the transport speaks plain SMTP,
/// suitable for a local dev relay.
#[derive(Clone)]
pub struct MailService {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
    from: Mailbox,
}

impl MailService {
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let address = config
            .mail_from_address
            .parse()
            .map_err(|err| AppError::Config(format!("invalid MAIL_FROM_ADDRESS: {err}")))?;
        let from = Mailbox::new(Some(config.mail_from_name.clone()), address);

        let credentials = match (&config.smtp_username, &config.smtp_password) {
            (Some(user), Some(pass)) => Some(Credentials::new(user.clone(), pass.clone())),
            _ => None,
        };

        Ok(Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            credentials,
            from,
        })
    }

    pub async fn send_html(
        &self,
        to_name: &str,
        to_email: &str,
        subject: &str,
        html: String,
    ) -> Result<(), AppError> {
        let to_address = to_email
            .parse()
            .map_err(|err| AppError::Mail(format!("invalid recipient address: {err}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(Some(to_name.to_string()), to_address))
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|err| AppError::Mail(format!("failed to build message: {err}")))?;

        let transport = self.transport()?;

        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|err| AppError::Mail(format!("mail task failed: {err}")))?
            .map_err(|err| AppError::Mail(format!("smtp send failed: {err}")))?;

        Ok(())
    }

    // A fresh transport per send avoids stale pooled connections.
    fn transport(&self) -> Result<SmtpTransport, AppError> {
        let builder = match &self.credentials {
            Some(credentials) => SmtpTransport::relay(&self.host)
                .map_err(|err| AppError::Mail(format!("smtp relay error: {err}")))?
                .credentials(credentials.clone()),
            None => SmtpTransport::builder_dangerous(&self.host),
        };
        Ok(builder.port(self.port).build())
    }
}
