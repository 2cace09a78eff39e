//! End-to-end repository tests against a real SQLite file.

use std::sync::Arc;

use tempfile::TempDir;

use coinjar_core::constants::DEFAULT_TARGET_AMOUNT;
use coinjar_core::contributions::{
    aggregate_by_jar, ContributionRepositoryTrait, NewContribution,
};
use coinjar_core::drafts::{DraftStoreTrait, JarDraft};
use coinjar_core::errors::{DatabaseError, Error};
use coinjar_core::invitations::InvitationRepositoryTrait;
use coinjar_core::jars::{JarRepositoryTrait, JarUpdate, NewJar};

use coinjar_storage_sqlite::contributions::ContributionRepository;
use coinjar_storage_sqlite::drafts::SqliteDraftStore;
use coinjar_storage_sqlite::invitations::InvitationRepository;
use coinjar_storage_sqlite::jars::JarRepository;
use coinjar_storage_sqlite::{create_pool, init, spawn_writer, DbPool, WriteHandle};

struct TestDb {
    // Held so the directory outlives the pool.
    _dir: TempDir,
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = dir
        .path()
        .join("coinjar.db")
        .to_string_lossy()
        .to_string();

    init(&db_path).expect("failed to initialize database");
    let pool = create_pool(&db_path).expect("failed to create pool");
    let writer = spawn_writer(pool.clone());

    TestDb {
        _dir: dir,
        pool,
        writer,
    }
}

fn new_jar(name: &str, creator: &str, email: Option<&str>) -> NewJar {
    NewJar {
        id: None,
        name: name.to_string(),
        relationship: "friend".to_string(),
        email: email.map(str::to_string),
        creator_id: creator.to_string(),
    }
}

#[tokio::test]
async fn creates_and_lists_jars_scoped_to_the_creator() {
    let db = setup_db();
    let repo = JarRepository::new(db.pool.clone(), db.writer.clone());

    let mine = repo
        .create(new_jar("Ava", "user-1", Some("ava@example.com")))
        .await
        .unwrap();
    repo.create(new_jar("Ben", "user-2", None)).await.unwrap();

    let listed = repo.list_by_creator("user-1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, mine.id);
    assert_eq!(listed[0].name, "Ava");
    assert_eq!(listed[0].email.as_deref(), Some("ava@example.com"));
}

#[tokio::test]
async fn update_applies_changes_and_can_clear_the_email() {
    let db = setup_db();
    let repo = JarRepository::new(db.pool.clone(), db.writer.clone());

    let jar = repo
        .create(new_jar("Ava", "user-1", Some("ava@example.com")))
        .await
        .unwrap();

    let updated = repo
        .update(
            JarUpdate {
                id: jar.id.clone(),
                name: "Ava Rose".to_string(),
                relationship: "niece".to_string(),
                email: None,
            },
            "user-1",
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Ava Rose");
    assert_eq!(updated.relationship, "niece");
    assert_eq!(updated.email, None);
}

#[tokio::test]
async fn update_by_a_non_owner_is_rejected_as_not_found() {
    let db = setup_db();
    let repo = JarRepository::new(db.pool.clone(), db.writer.clone());

    let jar = repo
        .create(new_jar("Ava", "user-1", None))
        .await
        .unwrap();

    let result = repo
        .update(
            JarUpdate {
                id: jar.id.clone(),
                name: "Hijacked".to_string(),
                relationship: "friend".to_string(),
                email: None,
            },
            "user-2",
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));

    // The row is untouched.
    let reloaded = repo.get_by_id(&jar.id).await.unwrap();
    assert_eq!(reloaded.name, "Ava");
}

#[tokio::test]
async fn contribution_amounts_survive_the_text_column_and_aggregate() {
    let db = setup_db();
    let jars = JarRepository::new(db.pool.clone(), db.writer.clone());
    let contributions = ContributionRepository::new(db.pool.clone(), db.writer.clone());

    let jar_a = jars.create(new_jar("Ava", "user-1", None)).await.unwrap();
    let jar_b = jars.create(new_jar("Ben", "user-1", None)).await.unwrap();

    for (jar_id, amount) in [(&jar_a.id, 25.5), (&jar_a.id, 10.0), (&jar_b.id, 40.0)] {
        contributions
            .create(NewContribution {
                id: None,
                coinjar_id: jar_id.clone(),
                amount,
                contributor_id: "user-9".to_string(),
            })
            .await
            .unwrap();
    }

    let rows = contributions
        .list_for_jars(&[jar_a.id.clone(), jar_b.id.clone()])
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);

    let aggregated = aggregate_by_jar(rows);
    assert_eq!(aggregated[&jar_a.id].total, 35.5);
    assert_eq!(aggregated[&jar_a.id].contributions.len(), 2);
    assert_eq!(aggregated[&jar_b.id].total, 40.0);
    assert!(aggregated[&jar_a.id].total < DEFAULT_TARGET_AMOUNT);
}

#[tokio::test]
async fn listing_contributions_for_unknown_jars_returns_empty() {
    let db = setup_db();
    let contributions = ContributionRepository::new(db.pool.clone(), db.writer.clone());

    let rows = contributions
        .list_for_jars(&["missing".to_string()])
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn pending_invitations_exclude_accepted_and_other_users() {
    use chrono::Utc;
    use coinjar_storage_sqlite::invitations::NewInvitationDB;
    use coinjar_storage_sqlite::schema::coinjar_invitations;
    use diesel::prelude::*;

    let db = setup_db();
    let jars = JarRepository::new(db.pool.clone(), db.writer.clone());
    let jar = jars.create(new_jar("Ava", "user-1", None)).await.unwrap();

    // The dashboard slice never writes invitations, so seed them directly.
    let seeds = [
        ("inv-pending", "user-2", false),
        ("inv-accepted", "user-2", true),
        ("inv-other", "user-3", false),
    ];
    let mut conn = db.pool.get().unwrap();
    for (inv_id, user, is_accepted) in seeds {
        diesel::insert_into(coinjar_invitations::table)
            .values(&NewInvitationDB {
                id: Some(inv_id.to_string()),
                coinjar_id: jar.id.clone(),
                invited_user_id: user.to_string(),
                accepted: is_accepted,
                created_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)
            .unwrap();
    }

    let repo = InvitationRepository::new(db.pool.clone());
    let pending = repo.list_pending_for_user("user-2").await.unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "inv-pending");
    assert!(!pending[0].accepted);
}

#[tokio::test]
async fn draft_store_saves_loads_and_clears() {
    let db = setup_db();
    let store = SqliteDraftStore::new(db.pool.clone());

    assert_eq!(store.load().unwrap(), None);

    let draft = JarDraft {
        name: "Ava".to_string(),
        relationship: "niece".to_string(),
        email: "ava@example.com".to_string(),
    };
    store.save(&draft).unwrap();
    assert_eq!(store.load().unwrap(), Some(draft.clone()));

    // Saving again overwrites in place.
    let revised = JarDraft {
        name: "Ava Rose".to_string(),
        ..draft
    };
    store.save(&revised).unwrap();
    assert_eq!(store.load().unwrap(), Some(revised));

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}
