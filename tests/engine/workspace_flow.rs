//! Opening workspaces, loading record files and persisting UI state

use std::fs;

use safetysync::core::{Record, RecordId, SupportTicket, TicketPriority, TicketStatus};
use safetysync::engine::{
    load_collection, JsonFileSource, SelectionSet, SupportDesk, TicketPatch, CONFIG_FILE_NAME,
    STATE_DIR,
};
use safetysync::{Employee, Workspace};
use tempfile::TempDir;

const ROSTER: &str = r#"[
    {"id": 1, "name": "Alice", "email": "alice@example.com", "department": "Safety"},
    {"id": 2, "name": "Bob", "email": "bob@example.com", "department": "Ops"},
    {"id": "c-3", "name": "Alicia", "email": "alicia@example.com", "department": "Ops"}
]"#;

#[test]
fn test_open_creates_config_and_state_dir() {
    let dir = TempDir::new().unwrap();
    let workspace = Workspace::open(dir.path()).unwrap();
    assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    assert_eq!(workspace.config().quick_search_limit, 8);

    workspace.layout().toggle("compliance-rate").unwrap();
    assert!(dir.path().join(STATE_DIR).is_dir());

    let reopened = Workspace::open(dir.path()).unwrap();
    assert!(!reopened.layout().widget("compliance-rate").unwrap().visible);
}

#[test]
fn test_memory_storage_does_not_persist() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "storage = \"memory\"\n").unwrap();

    Workspace::open(dir.path())
        .unwrap()
        .layout()
        .toggle("total-users")
        .unwrap();
    let reopened = Workspace::open(dir.path()).unwrap();
    assert!(reopened.layout().widget("total-users").unwrap().visible);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "storage = \"cloud\"\n").unwrap();
    assert!(Workspace::open(dir.path()).is_err());
}

#[test]
fn test_configured_limit_drives_quick_search() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "quick_search_limit = 1\n").unwrap();
    let workspace = Workspace::open(dir.path()).unwrap();

    let file = dir.path().join("employees.json");
    fs::write(&file, ROSTER).unwrap();
    let roster = load_collection::<Employee, _>(&JsonFileSource::new(&file)).unwrap();

    let hits = workspace.quick_search().search(roster.as_slice(), "ali");
    assert_eq!(hits.total, 2);
    assert_eq!(hits.employees.len(), 1);
    assert_eq!(hits.employees[0].name, "Alice");
    assert!(hits.has_more());
}

#[test]
fn test_duplicate_ids_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("dupes.json");
    fs::write(
        &file,
        r#"[{"id": 1, "name": "A", "email": "a@x.io", "department": "Ops"},
            {"id": 1, "name": "B", "email": "b@x.io", "department": "Ops"}]"#,
    )
    .unwrap();
    assert!(load_collection::<Employee, _>(&JsonFileSource::new(&file)).is_err());
}

#[test]
fn test_selection_persists_in_workspace_store() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("employees.json");
    fs::write(&file, ROSTER).unwrap();
    let roster = load_collection::<Employee, _>(&JsonFileSource::new(&file)).unwrap();

    {
        let workspace = Workspace::open(dir.path()).unwrap();
        let mut selection = SelectionSet::new();
        let ops: Vec<&Employee> = roster.iter().filter(|e| e.department == "Ops").collect();
        selection.select_all(&ops);
        selection.save(workspace.store().as_ref(), "employee-selection").unwrap();
    }

    let workspace = Workspace::open(dir.path()).unwrap();
    let restored = SelectionSet::restore(workspace.store().as_ref(), "employee-selection");
    assert_eq!(restored.count(), 2);
    assert!(restored.contains(&RecordId::from(2u64)));
    assert!(restored.contains(&RecordId::from("c-3")));
}

#[test]
fn test_support_desk_updates_in_place() {
    let opened = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let tickets = vec![
        SupportTicket::new(1u64, "Login fails", "alice@example.com", opened),
        SupportTicket::new(2u64, "Export broken", "bob@example.com", opened),
    ];
    let collection = safetysync::RecordCollection::from_records(tickets).unwrap();
    let mut desk = SupportDesk::new(collection);

    let updated = desk
        .update(&RecordId::from(2u64), TicketPatch::status(TicketStatus::Resolved))
        .unwrap();
    assert_eq!(updated.status, TicketStatus::Resolved);
    desk.update(&RecordId::from(1u64), TicketPatch::priority(TicketPriority::High))
        .unwrap();

    assert_eq!(desk.count_with_status(TicketStatus::Resolved), 1);
    assert_eq!(desk.tickets().as_slice()[0].priority, TicketPriority::High);
    assert_eq!(desk.tickets().as_slice()[1].id(), &RecordId::from(2u64));
    assert!(desk
        .update(&RecordId::from(9u64), TicketPatch::status(TicketStatus::Closed))
        .is_err());
}
