use taskboard_core::{
    open_store, LocalStore, Project, RepoError, Repository, StoreBackend, StoreConfig, StoreError,
};
use tempfile::TempDir;

#[test]
fn records_survive_reopening_the_same_directory() {
    let dir = TempDir::new().unwrap();

    let stored = {
        let store = LocalStore::open(dir.path()).unwrap();
        Repository::<Project>::new(&store)
            .add(Project::new("Persistent", "written once"))
            .unwrap()
    };

    let store = LocalStore::open(dir.path()).unwrap();
    let all = Repository::<Project>::new(&store).get_all().unwrap();
    assert_eq!(all, vec![stored]);
}

#[test]
fn collections_are_one_json_file_per_entity() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();

    Repository::<Project>::new(&store)
        .add(Project::new("Layout", ""))
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("projects.json")).unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\"Layout\""));
}

#[test]
fn corrupt_collection_file_surfaces_as_store_error() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();

    std::fs::write(dir.path().join("projects.json"), "{not json!").unwrap();

    let err = Repository::<Project>::new(&store).get_all().unwrap_err();
    assert!(matches!(
        err,
        RepoError::Store(StoreError::Deserialize { .. })
    ));
}

#[test]
fn open_store_selects_backend_from_config() {
    let dir = TempDir::new().unwrap();

    let local = StoreConfig {
        backend: StoreBackend::Local,
        path: dir.path().join("data"),
    };
    let store = open_store(&local).unwrap();
    let repo = Repository::<Project>::new(store.as_ref());
    repo.add(Project::new("via config", "")).unwrap();
    assert_eq!(repo.get_all().unwrap().len(), 1);

    let sqlite = StoreConfig {
        backend: StoreBackend::Sqlite,
        path: dir.path().join("data.sqlite3"),
    };
    let store = open_store(&sqlite).unwrap();
    let repo = Repository::<Project>::new(store.as_ref());
    repo.add(Project::new("via config", "")).unwrap();
    assert_eq!(repo.get_all().unwrap().len(), 1);
}

#[test]
fn config_defaults_to_local_backend() {
    let config = StoreConfig::default();
    assert_eq!(config.backend, StoreBackend::Local);
}
