use std::path::Path;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;
use wxagent_core::{AgentError, MailConfig, ReportMailer};

pub const ATTACHMENT_NAME: &str = "weather_report.pdf";

fn mail_err(e: impl ToString) -> AgentError {
    AgentError::Mail(e.to_string())
}

/// Sends reports over SMTP with implicit TLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, AgentError> {
        let sender: Mailbox = config.sender.parse().map_err(mail_err)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(mail_err)?
            .port(config.port)
            .credentials(Credentials::new(
                config.sender.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

/// One plain-text part plus the PDF attachment.
pub fn build_message(
    from: &Mailbox,
    to: &str,
    subject: &str,
    body: &str,
    pdf: Vec<u8>,
) -> Result<Message, AgentError> {
    let to: Mailbox = to.parse().map_err(mail_err)?;
    let pdf_type = ContentType::parse("application/pdf").map_err(mail_err)?;

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(Attachment::new(ATTACHMENT_NAME.to_string()).body(pdf, pdf_type)),
        )
        .map_err(mail_err)
}

#[async_trait]
impl ReportMailer for SmtpMailer {
    async fn send_report(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        file_path: &Path,
    ) -> Result<(), AgentError> {
        let pdf = tokio::fs::read(file_path)
            .await
            .map_err(|e| AgentError::Mail(format!("{}: {}", file_path.display(), e)))?;

        info!("MAILER: Sending {} bytes to {}", pdf.len(), to);

        let message = build_message(&self.sender, to, subject, body, pdf)?;
        let response = self.transport.send(message).await.map_err(mail_err)?;

        info!("MAILER: Sent (code: {})", response.code());
        Ok(())
    }
}
