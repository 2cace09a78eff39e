use log::{debug, warn};
use std::sync::Arc;

use super::jars_model::{Jar, JarUpdate, NewJar};
use super::jars_traits::{JarRepositoryTrait, JarServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::mailer::MailerTrait;

/// Service for managing jars.
pub struct JarService {
    repository: Arc<dyn JarRepositoryTrait>,
    mailer: Option<Arc<dyn MailerTrait>>,
}

impl JarService {
    /// Creates a new JarService instance.
    ///
    /// The mailer is optional; when absent, jar creation skips the
    /// confirmation email entirely.
    pub fn new(repository: Arc<dyn JarRepositoryTrait>, mailer: Option<Arc<dyn MailerTrait>>) -> Self {
        Self { repository, mailer }
    }

    fn validate(name: &str, relationship: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if relationship.trim().is_empty() {
            return Err(ValidationError::MissingField("relationship".to_string()).into());
        }
        Ok(())
    }

    /// Dispatches the recipient confirmation email without awaiting delivery.
    ///
    /// Email is strictly fire-and-forget: a failed send is logged and never
    /// surfaces to the caller.
    fn send_confirmation(&self, jar: &Jar) {
        let (Some(mailer), Some(email)) = (self.mailer.clone(), jar.email.clone()) else {
            return;
        };
        let name = jar.name.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_confirmation(&name, &email).await {
                warn!("Failed to send confirmation email for '{}': {}", name, e);
            }
        });
    }
}

#[async_trait::async_trait]
impl JarServiceTrait for JarService {
    async fn create_jar(&self, new_jar: NewJar) -> Result<Jar> {
        Self::validate(&new_jar.name, &new_jar.relationship)?;
        debug!(
            "Creating jar '{}' for creator {}",
            new_jar.name, new_jar.creator_id
        );

        let jar = self.repository.create(new_jar).await?;
        self.send_confirmation(&jar);
        Ok(jar)
    }

    async fn update_jar(&self, jar_update: JarUpdate, requesting_user_id: &str) -> Result<Jar> {
        Self::validate(&jar_update.name, &jar_update.relationship)?;
        self.repository.update(jar_update, requesting_user_id).await
    }

    async fn get_jar(&self, jar_id: &str) -> Result<Jar> {
        self.repository.get_by_id(jar_id).await
    }

    async fn get_jars_by_creator(&self, creator_id: &str) -> Result<Vec<Jar>> {
        self.repository.list_by_creator(creator_id).await
    }
}
