mod common;

use common::{first_names, numbered_people, today, valid_draft, RecordingPresenter};
use person_directory_core::db::open_db_in_memory;
use person_directory_core::{
    DirectoryConfig, DirectorySession, Field, FieldError, PersonDraft, RecordStore, SessionError,
    SortOrder, SqliteRecordStore, DEFAULT_STORAGE_KEY,
};
use std::num::NonZeroUsize;

#[test]
fn open_on_empty_storage_renders_nothing_and_disables_controls() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    let session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    let presenter = session.presenter();
    assert_eq!(presenter.rendered.len(), 1);
    assert!(presenter.last_render().is_empty());
    assert_eq!(presenter.next_enabled, Some(false));
    assert_eq!(presenter.prev_enabled, Some(false));
}

#[test]
fn open_with_stored_records_renders_first_page() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    store.save(&numbered_people(5)).unwrap();

    let session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    assert_eq!(session.presenter().last_names(), ["P0", "P1", "P2"]);
    assert_eq!(session.presenter().next_enabled, Some(true));
    assert_eq!(session.presenter().prev_enabled, Some(false));
}

#[test]
fn invalid_submission_reports_fields_and_adds_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    let mut session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    let mut draft = valid_draft("Anna");
    draft.first_name = String::new();
    draft.mobile = "98765".to_string();
    let err = session.submit_at(draft, today()).unwrap_err();

    let SessionError::Validation(report) = err else {
        panic!("expected validation error");
    };
    assert_eq!(report.error_for(Field::FirstName), Some(FieldError::Required));
    assert_eq!(report.error_for(Field::Mobile), Some(FieldError::InvalidFormat));
    assert_eq!(session.directory().len(), 0);
    assert!(session.directory().store().load().is_empty());
    assert_eq!(
        session.presenter().field_errors,
        vec![
            (Field::FirstName, "First name is required".to_string()),
            (Field::Mobile, "Invalid mobile number format".to_string()),
        ]
    );
    assert_eq!(session.presenter().rendered.len(), 1);
}

#[test]
fn valid_submission_clears_errors_persists_and_renders() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    let mut session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    session
        .submit_at(PersonDraft::default(), today())
        .unwrap_err();
    assert!(!session.presenter().field_errors.is_empty());

    let mut draft = valid_draft("  Anna ");
    draft.city = " Pune ".to_string();
    session.submit_at(draft, today()).unwrap();

    let presenter = session.presenter();
    assert!(presenter.field_errors.is_empty());
    assert_eq!(presenter.clear_calls, 2);
    assert_eq!(presenter.last_names(), ["Anna"]);

    let stored = session.directory().store().load();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "Anna");
    assert_eq!(stored[0].city, "Pune");
}

#[test]
fn adding_to_empty_directory_leaves_controls_disabled() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    let mut session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    for name in ["Anna", "Dan", "Mark", "Zoe"] {
        session.submit_at(valid_draft(name), today()).unwrap();
    }

    let presenter = session.presenter();
    assert_eq!(presenter.last_names(), ["Anna", "Dan", "Mark"]);
    assert_eq!(presenter.next_enabled, Some(false));
    assert_eq!(presenter.prev_enabled, Some(false));

    let renders = presenter.rendered.len();
    session.next_page();
    assert_eq!(session.presenter().rendered.len(), renders);
    assert_eq!(session.view_state().page_end(), 3);
}

#[test]
fn records_survive_a_new_session() {
    let conn = open_db_in_memory().unwrap();
    {
        let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
        let mut session = DirectorySession::open(
            store,
            RecordingPresenter::default(),
            &DirectoryConfig::default(),
        );
        for name in ["Anna", "Dan", "Mark", "Zoe"] {
            session.submit_at(valid_draft(name), today()).unwrap();
        }
    }

    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    let session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    assert_eq!(
        first_names(session.directory().all()),
        ["Anna", "Dan", "Mark", "Zoe"]
    );
    assert_eq!(session.presenter().last_names(), ["Anna", "Dan", "Mark"]);
}

#[test]
fn paging_search_and_sort_publish_views() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    store.save(&numbered_people(7)).unwrap();
    let mut session = DirectorySession::open(
        store,
        RecordingPresenter::default(),
        &DirectoryConfig::default(),
    );

    session.next_page();
    assert_eq!(session.presenter().last_names(), ["P3", "P4", "P5"]);
    assert_eq!(session.presenter().prev_enabled, Some(true));
    assert_eq!(session.presenter().next_enabled, Some(true));

    session.search("p1");
    assert_eq!(session.presenter().last_names(), ["P1"]);
    assert_eq!(session.view_state().page_end(), 6);

    session.sort(SortOrder::Descending);
    assert_eq!(session.presenter().last_names(), ["P6", "P5", "P4"]);

    session.prev_page();
    assert_eq!(session.presenter().last_names(), ["P6", "P5", "P4"]);
    assert_eq!(session.presenter().prev_enabled, Some(false));

    let renders = session.presenter().rendered.len();
    session.prev_page();
    session.sort(SortOrder::None);
    assert_eq!(session.presenter().rendered.len(), renders);
}

#[test]
fn custom_page_size_and_storage_key_are_honored() {
    let conn = open_db_in_memory().unwrap();
    let config = DirectoryConfig::default()
        .with_page_size(NonZeroUsize::new(2).unwrap())
        .with_storage_key("people");
    let store = SqliteRecordStore::new(&conn, config.storage_key.as_str());
    store.save(&numbered_people(2)).unwrap();
    let mut session = DirectorySession::open(store, RecordingPresenter::default(), &config);
    assert_eq!(session.presenter().last_names(), ["P0", "P1"]);

    session.submit_at(valid_draft("Mark"), today()).unwrap();
    assert_eq!(session.presenter().last_names(), ["P0", "P1"]);

    session.next_page();
    assert_eq!(session.presenter().last_names(), ["Mark"]);
    assert_eq!(session.presenter().next_enabled, Some(false));

    let default_key = SqliteRecordStore::new(&conn, DEFAULT_STORAGE_KEY);
    assert!(default_key.load().is_empty());
    assert_eq!(
        SqliteRecordStore::new(&conn, "people").load().len(),
        3
    );
}
