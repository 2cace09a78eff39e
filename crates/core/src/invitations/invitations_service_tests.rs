//! Tests for invitation resolution.
//!
//! The contract under test: pending invitations resolve to read-only jar
//! previews via one batched jar lookup, and invitations whose target jar
//! cannot be found are dropped silently.

#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Result};
    use crate::invitations::{
        Invitation, InvitationRepositoryTrait, InvitationService, InvitationServiceTrait,
    };
    use crate::jars::{Jar, JarRepositoryTrait, JarUpdate, NewJar};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockInvitationRepository {
        invitations: Mutex<Vec<Invitation>>,
    }

    #[async_trait]
    impl InvitationRepositoryTrait for MockInvitationRepository {
        async fn list_pending_for_user(&self, invited_user_id: &str) -> Result<Vec<Invitation>> {
            Ok(self
                .invitations
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.invited_user_id == invited_user_id && !i.accepted)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct MockJarRepository {
        jars: Mutex<Vec<Jar>>,
        batch_calls: AtomicUsize,
    }

    #[async_trait]
    impl JarRepositoryTrait for MockJarRepository {
        async fn list_by_creator(&self, creator_id: &str) -> Result<Vec<Jar>> {
            Ok(self
                .jars
                .lock()
                .unwrap()
                .iter()
                .filter(|j| j.creator_id == creator_id)
                .cloned()
                .collect())
        }

        async fn get_by_ids(&self, jar_ids: &[String]) -> Result<Vec<Jar>> {
            self.batch_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .jars
                .lock()
                .unwrap()
                .iter()
                .filter(|j| jar_ids.contains(&j.id))
                .cloned()
                .collect())
        }

        async fn get_by_id(&self, jar_id: &str) -> Result<Jar> {
            self.jars
                .lock()
                .unwrap()
                .iter()
                .find(|j| j.id == jar_id)
                .cloned()
                .ok_or_else(|| DatabaseError::NotFound(jar_id.to_string()).into())
        }

        async fn create(&self, _new_jar: NewJar) -> Result<Jar> {
            unimplemented!("not used by resolution tests")
        }

        async fn update(&self, _jar_update: JarUpdate, _requesting_user_id: &str) -> Result<Jar> {
            unimplemented!("not used by resolution tests")
        }
    }

    fn jar(id: &str, name: &str) -> Jar {
        Jar {
            id: id.to_string(),
            name: name.to_string(),
            relationship: "Friend".to_string(),
            email: None,
            created_at: Utc::now(),
            creator_id: "owner-1".to_string(),
        }
    }

    fn invitation(id: &str, jar_id: &str, user: &str) -> Invitation {
        Invitation {
            id: id.to_string(),
            coinjar_id: jar_id.to_string(),
            invited_user_id: user.to_string(),
            accepted: false,
            created_at: Utc::now(),
        }
    }

    fn service(
        invitations: Vec<Invitation>,
        jars: Vec<Jar>,
    ) -> (InvitationService, Arc<MockJarRepository>) {
        let invitation_repo = Arc::new(MockInvitationRepository {
            invitations: Mutex::new(invitations),
        });
        let jar_repo = Arc::new(MockJarRepository {
            jars: Mutex::new(jars),
            batch_calls: AtomicUsize::new(0),
        });
        (
            InvitationService::new(invitation_repo, jar_repo.clone()),
            jar_repo,
        )
    }

    #[tokio::test]
    async fn drops_invitations_whose_jar_is_missing() {
        let (service, _) = service(
            vec![
                invitation("inv-1", "A", "user-1"),
                invitation("inv-2", "missing", "user-1"),
            ],
            vec![jar("A", "Office Party")],
        );

        let resolved = service.resolve_invited_jars("user-1").await.unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "inv-1");
        assert_eq!(resolved[0].name, "Office Party");
    }

    #[tokio::test]
    async fn resolved_previews_carry_zeroed_totals() {
        let (service, _) = service(
            vec![invitation("inv-1", "A", "user-1")],
            vec![jar("A", "Office Party")],
        );

        let resolved = service.resolve_invited_jars("user-1").await.unwrap();

        assert_eq!(resolved[0].total_amount, 0.0);
        assert_eq!(resolved[0].percent_complete, 0);
        assert_eq!(resolved[0].contribution_count, 0);
        assert_eq!(resolved[0].relationship, "Friend");
        assert_eq!(resolved[0].creator_id, "owner-1");
    }

    #[tokio::test]
    async fn jar_lookup_is_a_single_batched_query() {
        let (service, jar_repo) = service(
            vec![
                invitation("inv-1", "A", "user-1"),
                invitation("inv-2", "B", "user-1"),
                invitation("inv-3", "C", "user-1"),
            ],
            vec![jar("A", "A"), jar("B", "B"), jar("C", "C")],
        );

        let resolved = service.resolve_invited_jars("user-1").await.unwrap();

        assert_eq!(resolved.len(), 3);
        assert_eq!(jar_repo.batch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_pending_invitations_skips_the_jar_lookup() {
        let (service, jar_repo) = service(Vec::new(), vec![jar("A", "A")]);

        let resolved = service.resolve_invited_jars("user-1").await.unwrap();

        assert!(resolved.is_empty());
        assert_eq!(jar_repo.batch_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn accepted_invitations_are_not_resolved() {
        let mut accepted = invitation("inv-1", "A", "user-1");
        accepted.accepted = true;
        let (service, _) = service(vec![accepted], vec![jar("A", "A")]);

        let resolved = service.resolve_invited_jars("user-1").await.unwrap();
        assert!(resolved.is_empty());
    }
}
