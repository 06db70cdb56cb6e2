use chrono::{Duration, Utc};
use eventory::models::{CreateEvent, Event, UpdateEvent, User};
use eventory::store::{EventStore, JsonStore, UserStore};
use uuid::Uuid;

fn event(owner_id: Uuid, name: &str) -> Event {
    Event::new(
        CreateEvent {
            name: name.to_string(),
            date: "2024-05-01".to_string(),
            location: "Main Hall".to_string(),
            description: None,
            tags: vec!["test".to_string()],
        },
        owner_id,
    )
}

fn user(username: &str) -> User {
    User::new(
        username.to_string(),
        format!("{}@example.com", username),
        "sha256$salt$digest".to_string(),
    )
}

#[tokio::test]
async fn test_event_crud_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("data.json")).unwrap();
    let events: &dyn EventStore = &store;

    let owner = Uuid::new_v4();
    let mut created = event(owner, "Opening Night");
    events.create(&created).await.unwrap();

    let found = events.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Opening Night");
    assert_eq!(found.owner_id, owner);

    created.apply(UpdateEvent {
        name: Some("Closing Night".to_string()),
        ..UpdateEvent::default()
    });
    events.update(&created).await.unwrap();
    let found = events.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Closing Night");

    assert!(events.delete(created.id).await.unwrap());
    assert!(events.find_by_id(created.id).await.unwrap().is_none());
    assert!(!events.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_list_by_owner_scopes_and_orders() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("data.json")).unwrap();
    let events: &dyn EventStore = &store;

    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let base = Utc::now();
    let mut third = event(alice, "Third");
    third.created_at = base + Duration::seconds(2);
    let mut first = event(alice, "First");
    first.created_at = base;
    let mut second = event(alice, "Second");
    second.created_at = base + Duration::seconds(1);
    let other = event(bob, "Elsewhere");

    // Insertion order deliberately differs from creation order.
    events.create(&third).await.unwrap();
    events.create(&first).await.unwrap();
    events.create(&other).await.unwrap();
    events.create(&second).await.unwrap();

    let listed = events.list_by_owner(alice).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|event| event.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);

    let listed = events.list_by_owner(bob).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Elsewhere");
}

#[tokio::test]
async fn test_name_exists_per_owner_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("data.json")).unwrap();
    let events: &dyn EventStore = &store;

    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let gala = event(alice, "Spring Gala");
    events.create(&gala).await.unwrap();

    assert!(events.name_exists(alice, "spring gala", None).await.unwrap());
    assert!(events.name_exists(alice, "SPRING GALA", None).await.unwrap());
    assert!(!events.name_exists(bob, "Spring Gala", None).await.unwrap());

    // Excluding the record itself lets an update keep its own name.
    assert!(!events
        .name_exists(alice, "Spring Gala", Some(gala.id))
        .await
        .unwrap());
    assert!(events
        .name_exists(alice, "Spring Gala", Some(Uuid::new_v4()))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_reopen_reads_back_saved_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let owner;
    let event_id;
    let user_id;
    {
        let store = JsonStore::open(&path).unwrap();
        let account = user("ada");
        user_id = account.id;
        owner = account.id;
        UserStore::create(&store, &account).await.unwrap();

        let record = event(owner, "Persisted");
        event_id = record.id;
        EventStore::create(&store, &record).await.unwrap();
    }

    let store = JsonStore::open(&path).unwrap();
    let events: &dyn EventStore = &store;
    let users: &dyn UserStore = &store;

    let record = events.find_by_id(event_id).await.unwrap().unwrap();
    assert_eq!(record.name, "Persisted");
    assert_eq!(record.owner_id, owner);

    let account = users.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(account.username, "ada");
}

#[tokio::test]
async fn test_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.json");
    assert!(!path.exists());

    let store = JsonStore::open(&path).unwrap();
    let events: &dyn EventStore = &store;
    assert!(events.list_by_owner(Uuid::new_v4()).await.unwrap().is_empty());

    events.create(&event(Uuid::new_v4(), "First write")).await.unwrap();
    assert!(path.exists(), "first write creates the file");
}

#[tokio::test]
async fn test_corrupt_file_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    assert!(JsonStore::open(&path).is_err());
}

#[tokio::test]
async fn test_legacy_owner_field_normalizes_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let owner = Uuid::new_v4();
    let event_id = Uuid::new_v4();
    let key = event_id.to_string();
    let raw = serde_json::json!({
        "users": {},
        "events": {
            key: {
                "id": event_id,
                "user_id": owner,
                "name": "Imported",
                "date": "2023-12-01",
                "location": "Archive",
                "description": null,
                "created_at": "2023-12-01T00:00:00Z",
                "updated_at": "2023-12-01T00:00:00Z"
            }
        }
    });
    std::fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let store = JsonStore::open(&path).unwrap();
    let events: &dyn EventStore = &store;

    let record = events.find_by_id(event_id).await.unwrap().unwrap();
    assert_eq!(record.owner_id, owner);
    assert!(record.tags.is_empty());

    let listed = events.list_by_owner(owner).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_user_lookup_by_username_and_email() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path().join("data.json")).unwrap();
    let users: &dyn UserStore = &store;

    let account = user("grace");
    users.create(&account).await.unwrap();

    let by_name = users.find_by_username("grace").await.unwrap().unwrap();
    assert_eq!(by_name.id, account.id);

    let by_email = users.find_by_email("grace@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, account.id);

    assert!(users.find_by_username("Grace").await.unwrap().is_none());
    assert!(users.find_by_email("nobody@example.com").await.unwrap().is_none());
}
