//! LinkService tests
//!
//! Tests for the link registry business logic against a real SQLite
//! backend: creation, credential guards, partial updates, idempotent
//! delete, and visit counting under concurrency.

use std::sync::Arc;

use tempfile::TempDir;

use redlink::errors::RedlinkError;
use redlink::services::{CreateLinkRequest, ID_LENGTH, IdGenerator, LinkService, UpdateLinkRequest};
use redlink::storage::backend::SeaOrmStorage;
use redlink::storage::LinkStore;

// =============================================================================
// Test Setup
// =============================================================================

/// Create a test service backed by a temporary SQLite database
async fn create_test_service() -> (Arc<LinkService>, Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("link_service_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("Failed to create storage"),
    );

    let service = Arc::new(LinkService::new(
        storage.clone(),
        Arc::new(IdGenerator::new(ID_LENGTH)),
    ));

    (service, storage, temp_dir)
}

fn create_request(name: &str, target: &str, password: Option<&str>) -> CreateLinkRequest {
    CreateLinkRequest {
        name: name.to_string(),
        target_url: target.to_string(),
        password: password.map(str::to_string),
    }
}

// =============================================================================
// Create / Read
// =============================================================================

#[tokio::test]
async fn test_create_allocates_fresh_id_with_zero_visits() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    assert_eq!(link.id.len(), 10);
    assert!(link.id.bytes().all(|b| b.is_ascii_alphabetic()));
    assert_eq!(link.visits, 0);

    let fetched = service.get_link(&link.id).await.unwrap();
    assert_eq!(fetched.name, "docs");
    assert_eq!(fetched.target_url, "https://example.com/docs");
    assert_eq!(fetched.visits, 0);
}

#[tokio::test]
async fn test_create_rejects_invalid_target() {
    let (service, _storage, _dir) = create_test_service().await;

    let err = service
        .create_link(create_request("bad", "ftp://example.com", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::Validation(_)));

    let err = service
        .create_link(create_request("worse", "javascript:alert(1)", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::Validation(_)));
}

#[tokio::test]
async fn test_duplicate_name_is_rejected_and_not_persisted() {
    let (service, storage, _dir) = create_test_service().await;

    let first = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    let err = service
        .create_link(create_request("docs", "https://example.com/other", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::DuplicateName(_)));

    // The original record is untouched and no second record exists
    let by_name = storage.find_by_name("docs").await.unwrap().unwrap();
    assert_eq!(by_name.id, first.id);
    assert_eq!(by_name.target_url, "https://example.com/docs");
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (service, _storage, _dir) = create_test_service().await;

    let err = service.get_link("AAAAAAAAAA").await.unwrap_err();
    assert!(matches!(err, RedlinkError::NotFound(_)));
}

#[tokio::test]
async fn test_lookup_by_name() {
    let (service, _storage, _dir) = create_test_service().await;

    let created = service
        .create_link(create_request("repo", "https://example.com/repo", None))
        .await
        .unwrap();

    let found = service.get_link_by_name("repo").await.unwrap();
    assert_eq!(found.id, created.id);

    let err = service.get_link_by_name("nothing").await.unwrap_err();
    assert!(matches!(err, RedlinkError::NotFound(_)));
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    service
        .update_link(
            &link.id,
            UpdateLinkRequest {
                name: Some("NewName".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = service.get_link(&link.id).await.unwrap();
    assert_eq!(updated.name, "NewName");
    assert_eq!(updated.target_url, "https://example.com/docs");
    assert!(updated.password.is_none());
}

#[tokio::test]
async fn test_empty_string_fields_are_ignored() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    service
        .update_link(
            &link.id,
            UpdateLinkRequest {
                name: Some(String::new()),
                target_url: Some(String::new()),
                password: None,
            },
        )
        .await
        .unwrap();

    let unchanged = service.get_link(&link.id).await.unwrap();
    assert_eq!(unchanged.name, "docs");
    assert_eq!(unchanged.target_url, "https://example.com/docs");
}

#[tokio::test]
async fn test_update_credential_guards() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request(
            "secret",
            "https://example.com/secret",
            Some("hunter2"),
        ))
        .await
        .unwrap();

    // No credential
    let err = service
        .update_link(
            &link.id,
            UpdateLinkRequest {
                target_url: Some("https://new.example".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::MissingCredential(_)));

    // Wrong credential
    let err = service
        .update_link(
            &link.id,
            UpdateLinkRequest {
                target_url: Some("https://new.example".to_string()),
                password: Some("hunter3".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::WrongCredential(_)));

    // Nothing was applied by the failed attempts
    let unchanged = service.get_link(&link.id).await.unwrap();
    assert_eq!(unchanged.target_url, "https://example.com/secret");

    // Correct credential
    service
        .update_link(
            &link.id,
            UpdateLinkRequest {
                target_url: Some("https://new.example".to_string()),
                password: Some("hunter2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = service.get_link(&link.id).await.unwrap();
    assert_eq!(updated.target_url, "https://new.example");
}

#[tokio::test]
async fn test_update_never_rewrites_stored_password() {
    let (service, _storage, _dir) = create_test_service().await;

    let protected = service
        .create_link(create_request(
            "secret",
            "https://example.com/secret",
            Some("hunter2"),
        ))
        .await
        .unwrap();

    // The credential is accepted but never written back
    service
        .update_link(
            &protected.id,
            UpdateLinkRequest {
                name: Some("renamed".to_string()),
                password: Some("hunter2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let after = service.get_link(&protected.id).await.unwrap();
    assert_eq!(after.password.as_deref(), Some("hunter2"));

    // An unprotected link cannot gain a password through update either
    let open = service
        .create_link(create_request("open", "https://example.com/open", None))
        .await
        .unwrap();

    service
        .update_link(
            &open.id,
            UpdateLinkRequest {
                name: Some("still-open".to_string()),
                password: Some("new-secret".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let after = service.get_link(&open.id).await.unwrap();
    assert!(!after.is_protected());
}

#[tokio::test]
async fn test_rename_to_taken_name_conflicts() {
    let (service, _storage, _dir) = create_test_service().await;

    service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();
    let other = service
        .create_link(create_request("repo", "https://example.com/repo", None))
        .await
        .unwrap();

    let err = service
        .update_link(
            &other.id,
            UpdateLinkRequest {
                name: Some("docs".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::DuplicateName(_)));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (service, _storage, _dir) = create_test_service().await;

    let err = service
        .update_link(
            "AAAAAAAAAA",
            UpdateLinkRequest {
                name: Some("anything".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::NotFound(_)));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (service, _storage, _dir) = create_test_service().await;

    // Deleting a nonexistent id succeeds
    service.delete_link("AAAAAAAAAA", None).await.unwrap();

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    service.delete_link(&link.id, None).await.unwrap();
    assert!(matches!(
        service.get_link(&link.id).await.unwrap_err(),
        RedlinkError::NotFound(_)
    ));

    // Second delete is still fine
    service.delete_link(&link.id, None).await.unwrap();
}

#[tokio::test]
async fn test_delete_credential_guards() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request(
            "secret",
            "https://example.com/secret",
            Some("hunter2"),
        ))
        .await
        .unwrap();

    let err = service.delete_link(&link.id, None).await.unwrap_err();
    assert!(matches!(err, RedlinkError::MissingCredential(_)));

    let err = service
        .delete_link(&link.id, Some("wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, RedlinkError::WrongCredential(_)));

    // Record survived the failed attempts
    assert!(service.get_link(&link.id).await.is_ok());

    service.delete_link(&link.id, Some("hunter2")).await.unwrap();
    assert!(matches!(
        service.get_link(&link.id).await.unwrap_err(),
        RedlinkError::NotFound(_)
    ));
}

// =============================================================================
// Redirect dereference
// =============================================================================

#[tokio::test]
async fn test_sequential_redirects_count_every_visit() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    for expected in 1..=5u64 {
        let target = service.redirect_and_increment(&link.id).await.unwrap();
        assert_eq!(target, "https://example.com/docs");
        assert_eq!(service.get_link(&link.id).await.unwrap().visits, expected);
    }
}

#[tokio::test]
async fn test_redirect_unknown_id_is_not_found() {
    let (service, _storage, _dir) = create_test_service().await;

    let err = service.redirect_and_increment("AAAAAAAAAA").await.unwrap_err();
    assert!(matches!(err, RedlinkError::NotFound(_)));
}

#[tokio::test]
async fn test_read_does_not_increment_visits() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    for _ in 0..3 {
        service.get_link(&link.id).await.unwrap();
    }

    assert_eq!(service.get_link(&link.id).await.unwrap().visits, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_redirects_lose_no_visits() {
    let (service, _storage, _dir) = create_test_service().await;

    let link = service
        .create_link(create_request("docs", "https://example.com/docs", None))
        .await
        .unwrap();

    let mut handles = Vec::with_capacity(100);
    for _ in 0..100 {
        let service = service.clone();
        let id = link.id.clone();
        handles.push(tokio::spawn(async move {
            service.redirect_and_increment(&id).await
        }));
    }

    for handle in handles {
        let target = handle.await.unwrap().unwrap();
        assert_eq!(target, "https://example.com/docs");
    }

    assert_eq!(service.get_link(&link.id).await.unwrap().visits, 100);
}
