use taskboard_core::{LocalStore, Project, RepoError, Repository, SqliteStore, Store};
use tempfile::TempDir;
use uuid::Uuid;

#[test]
fn add_assigns_id_and_get_all_contains_record_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    add_assigns_id_and_get_all_contains_record(&store);
}

#[test]
fn add_assigns_id_and_get_all_contains_record_local() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    add_assigns_id_and_get_all_contains_record(&store);
}

fn add_assigns_id_and_get_all_contains_record(store: &dyn Store) {
    let repo = Repository::<Project>::new(store);

    let stored = repo.add(Project::new("Demo", "demo project")).unwrap();
    assert!(stored.id.is_some());

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], stored);
    assert_eq!(all[0].name, "Demo");
    assert_eq!(all[0].description, "demo project");
}

#[test]
fn add_honors_caller_provided_id() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = Repository::<Project>::new(&store);

    let id = Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap();
    let mut draft = Project::new("Fixed", "caller-chosen id");
    draft.id = Some(id);

    let stored = repo.add(draft).unwrap();
    assert_eq!(stored.id, Some(id));
    assert_eq!(repo.get_all().unwrap()[0].id, Some(id));
}

#[test]
fn update_replaces_full_record_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    update_replaces_full_record(&store);
}

#[test]
fn update_replaces_full_record_local() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    update_replaces_full_record(&store);
}

fn update_replaces_full_record(store: &dyn Store) {
    let repo = Repository::<Project>::new(store);

    let mut stored = repo.add(Project::new("Draft", "before")).unwrap();
    stored.name = "Final".to_string();
    stored.description = "after".to_string();
    repo.update(&stored).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Final");
    assert_eq!(all[0].description, "after");
}

#[test]
fn update_without_id_fails_with_missing_id() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = Repository::<Project>::new(&store);

    let draft = Project::new("No id", "never stored");
    let err = repo.update(&draft).unwrap_err();
    assert!(matches!(err, RepoError::MissingId));
}

#[test]
fn update_unknown_id_fails_with_not_found_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    update_unknown_id_fails_with_not_found(&store);
}

#[test]
fn update_unknown_id_fails_with_not_found_local() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    update_unknown_id_fails_with_not_found(&store);
}

fn update_unknown_id_fails_with_not_found(store: &dyn Store) {
    let repo = Repository::<Project>::new(store);

    let mut ghost = Project::new("Ghost", "never added");
    ghost.id = Some(Uuid::new_v4());

    let err = repo.update(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if Some(id) == ghost.id));
}

#[test]
fn delete_removes_record_and_is_idempotent_sqlite() {
    let store = SqliteStore::open_in_memory().unwrap();
    delete_removes_record_and_is_idempotent(&store);
}

#[test]
fn delete_removes_record_and_is_idempotent_local() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    delete_removes_record_and_is_idempotent(&store);
}

fn delete_removes_record_and_is_idempotent(store: &dyn Store) {
    let repo = Repository::<Project>::new(store);

    let stored = repo.add(Project::new("Doomed", "to be removed")).unwrap();
    let id = stored.id.unwrap();

    repo.delete(id).unwrap();
    assert!(repo.get_all().unwrap().iter().all(|p| p.id != Some(id)));

    repo.delete(id).unwrap();
}

#[test]
fn get_all_preserves_insertion_order() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = Repository::<Project>::new(&store);

    repo.add(Project::new("first", "")).unwrap();
    repo.add(Project::new("second", "")).unwrap();
    repo.add(Project::new("third", "")).unwrap();

    let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["first", "second", "third"]);
}
