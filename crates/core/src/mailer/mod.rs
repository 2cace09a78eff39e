//! Mailer module - fire-and-forget confirmation email.

mod mailer_client;
mod mailer_traits;

pub use mailer_client::ResendMailer;
pub use mailer_traits::MailerTrait;
