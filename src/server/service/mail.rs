//! Outbound transactional email over SMTP.

use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::error::AppError;

/// Sends OTP emails through a pooled async SMTP transport.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    /// Creates a new Mailer instance.
    ///
    /// # Arguments
    /// - `smtp_host` - SMTP relay hostname
    /// - `smtp_username` - SMTP auth username
    /// - `smtp_password` - SMTP auth password
    /// - `mail_from` - Sender address for all outbound mail
    ///
    /// # Returns
    /// - `Ok(Mailer)` - Transport configured for the relay
    /// - `Err(AppError)` - The relay hostname is invalid
    pub fn new(
        smtp_host: &str,
        smtp_username: &str,
        smtp_password: &str,
        mail_from: &str,
    ) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)?
            .credentials(Credentials::new(
                smtp_username.to_string(),
                smtp_password.to_string(),
            ))
            .build();

        Ok(Self {
            transport,
            from: mail_from.to_string(),
        })
    }

    /// Sends the account verification code issued at registration.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `full_name` - Recipient display name used in the greeting
    /// - `code` - The 4-digit verification code
    ///
    /// # Returns
    /// - `Ok(())` - Mail accepted by the relay
    /// - `Err(AppError)` - Address, build, or transport failure
    pub async fn send_verification_otp(
        &self,
        to: &str,
        full_name: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let body = format!(
            "Hi {},\n\nYour verification code is {}. It expires in 5 minutes.\n\nIf you did not create an account, you can ignore this email.",
            full_name, code
        );
        self.send_plain(to, "Verify your email", body).await
    }

    /// Sends the password reset code issued by the forgot-password flow.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `full_name` - Recipient display name used in the greeting
    /// - `code` - The 4-digit reset code
    ///
    /// # Returns
    /// - `Ok(())` - Mail accepted by the relay
    /// - `Err(AppError)` - Address, build, or transport failure
    pub async fn send_password_reset_otp(
        &self,
        to: &str,
        full_name: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let body = format!(
            "Hi {},\n\nYour password reset code is {}. It expires in 5 minutes.\n\nIf you did not request a reset, you can ignore this email.",
            full_name, code
        );
        self.send_plain(to, "Reset your password", body).await
    }

    async fn send_plain(&self, to: &str, subject: &str, body: String) -> Result<(), AppError> {
        let email = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.send(email).await?;
        Ok(())
    }
}
