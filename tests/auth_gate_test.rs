use eventory::auth::{hash_password, verify_password};
use eventory::engine::{Gate, Identity};
use eventory::models::{CreateEvent, Event};
use uuid::Uuid;

fn identity(user_id: Uuid) -> Identity {
    Identity {
        user_id,
        username: "tester".to_string(),
    }
}

fn owned_event(owner_id: Uuid) -> Event {
    let payload = CreateEvent {
        name: "Team Sync".to_string(),
        date: "2024-04-01".to_string(),
        location: "Room 2".to_string(),
        description: None,
        tags: vec![],
    };
    Event::new(payload, owner_id)
}

#[test]
fn test_owner_passes_every_check() {
    let owner = Uuid::new_v4();
    let event = owned_event(owner);
    let caller = identity(owner);

    assert!(Gate::can_read(Some(&caller), &event));
    assert!(Gate::can_edit(Some(&caller), &event));
    assert!(Gate::can_delete(Some(&caller), &event));
}

#[test]
fn test_foreign_caller_is_denied() {
    let event = owned_event(Uuid::new_v4());
    let caller = identity(Uuid::new_v4());

    assert!(!Gate::can_read(Some(&caller), &event));
    assert!(!Gate::can_edit(Some(&caller), &event));
    assert!(!Gate::can_delete(Some(&caller), &event));
}

#[test]
fn test_anonymous_caller_is_denied() {
    let event = owned_event(Uuid::new_v4());

    assert!(!Gate::can_read(None, &event));
    assert!(!Gate::can_edit(None, &event));
    assert!(!Gate::can_delete(None, &event));
}

#[test]
fn test_legacy_owner_fields_feed_the_gate() {
    let owner = Uuid::new_v4();
    let caller = identity(owner);

    // Records written by older exports name the owner differently; all
    // three spellings must authorize the same caller.
    for field in ["owner_id", "user_id", "created_by"] {
        let raw = format!(
            r#"{{
                "id": "{}",
                "{}": "{}",
                "name": "Imported",
                "date": "2024-01-01",
                "location": "Hall",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }}"#,
            Uuid::new_v4(),
            field,
            owner
        );
        let event: Event = serde_json::from_str(&raw).unwrap();
        assert_eq!(event.owner_id, owner, "field {} did not map", field);
        assert!(Gate::can_edit(Some(&caller), &event));
    }
}

#[test]
fn test_password_round_trip() {
    let hash = hash_password("hunter2-but-longer");
    assert!(verify_password("hunter2-but-longer", &hash));
    assert!(!verify_password("hunter2-but-wrong", &hash));
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("repeatable");
    let second = hash_password("repeatable");
    assert_ne!(first, second, "salts must differ across calls");
    assert!(verify_password("repeatable", &first));
    assert!(verify_password("repeatable", &second));
}

#[test]
fn test_malformed_hash_never_verifies() {
    for stored in ["", "plain", "sha256$deadbeef", "md5$aa$bb", "sha256$zz$not-hex"] {
        assert!(!verify_password("anything", stored), "accepted {:?}", stored);
    }
}
