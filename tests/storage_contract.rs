//! Behavior shared by every storage backend

use resumes::{
    ArrayStorage, ContactType, Error, Resume, SectionContent, SectionType, SqlStorage, Storage,
};

fn full_resume(uuid: &str, name: &str) -> Resume {
    Resume::with_uuid(uuid, name)
        .with_contact(ContactType::Phone, "+7 921 855-04-82")
        .with_contact(ContactType::Mail, "someone@example.com")
        .with_contact(ContactType::Stackoverflow, "stackoverflow.com/users/1")
        .with_section(SectionType::Objective, SectionContent::Text("Architect".into()))
        .with_section(SectionType::Personal, SectionContent::Text("Analytical mind".into()))
        .with_section(
            SectionType::Achievement,
            SectionContent::List(vec!["A".into(), "B".into(), "C".into()]),
        )
        .with_section(
            SectionType::Qualifications,
            SectionContent::List(vec!["Rust".into(), "SQL".into()]),
        )
}

fn seeded<S: Storage>(mut storage: S) -> S {
    storage.clear().unwrap();
    storage.save(&full_resume("uuid1", "Name1")).unwrap();
    storage.save(&full_resume("uuid2", "Name2")).unwrap();
    storage.save(&full_resume("uuid3", "Name3")).unwrap();
    storage
}

fn check_save_then_get<S: Storage>(storage: S) {
    let mut storage = seeded(storage);
    let resume = full_resume("uuid4", "Name4");

    storage.save(&resume).unwrap();

    assert_eq!(storage.get("uuid4").unwrap(), resume);
    assert_eq!(storage.size().unwrap(), 4);
}

fn check_save_existing<S: Storage>(storage: S) {
    let mut storage = seeded(storage);

    let err = storage.save(&Resume::with_uuid("uuid1", "Other")).unwrap_err();

    assert!(matches!(err, Error::AlreadyExists(uuid) if uuid == "uuid1"));
    assert_eq!(storage.get("uuid1").unwrap(), full_resume("uuid1", "Name1"));
    assert_eq!(storage.size().unwrap(), 3);
}

fn check_missing<S: Storage>(storage: S) {
    let mut storage = seeded(storage);
    let before = storage.get_all_sorted().unwrap();

    assert!(matches!(storage.get("dummy"), Err(Error::NotFound(_))));
    assert!(matches!(
        storage.update(&Resume::with_uuid("dummy", "Nobody")),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(storage.delete("dummy"), Err(Error::NotFound(_))));

    assert_eq!(storage.get_all_sorted().unwrap(), before);
}

fn check_update<S: Storage>(storage: S) {
    let mut storage = seeded(storage);
    let updated = Resume::with_uuid("uuid1", "New Name")
        .with_contact(ContactType::Linkedin, "linkedin.com/in/someone")
        .with_section(SectionType::Qualifications, SectionContent::List(vec!["Go".into()]));

    storage.update(&updated).unwrap();

    let stored = storage.get("uuid1").unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.contact(ContactType::Phone), None);
    assert_eq!(stored.section(SectionType::Objective), None);
    assert_eq!(storage.size().unwrap(), 3);
}

fn check_update_fetched<S: Storage>(storage: S) {
    let mut storage = seeded(storage);
    let mut resume = storage.get("uuid2").unwrap();

    resume.set_full_name("Renamed");
    assert_eq!(resume.remove_contact(ContactType::Phone).as_deref(), Some("+7 921 855-04-82"));
    assert!(resume.remove_section(SectionType::Achievement).is_some());
    assert!(resume.remove_section(SectionType::Achievement).is_none());
    resume.add_contact(ContactType::Github, "github.com/renamed");
    storage.update(&resume).unwrap();

    let stored = storage.get("uuid2").unwrap();
    assert_eq!(stored, resume);
    assert_eq!(stored.full_name(), "Renamed");
    assert_eq!(stored.contact(ContactType::Phone), None);
    assert_eq!(stored.section(SectionType::Achievement), None);
    assert_eq!(stored.contact(ContactType::Github), Some("github.com/renamed"));
}

fn check_delete<S: Storage>(storage: S) {
    let mut storage = seeded(storage);

    storage.delete("uuid2").unwrap();

    assert!(matches!(storage.get("uuid2"), Err(Error::NotFound(_))));
    assert_eq!(storage.size().unwrap(), 2);
    let remaining: Vec<String> = storage
        .get_all_sorted()
        .unwrap()
        .iter()
        .map(|r| r.uuid().to_string())
        .collect();
    assert_eq!(remaining, vec!["uuid1", "uuid3"]);
}

fn check_clear<S: Storage>(storage: S) {
    let mut storage = seeded(storage);

    storage.clear().unwrap();

    assert_eq!(storage.size().unwrap(), 0);
    assert!(storage.get_all_sorted().unwrap().is_empty());
    storage.clear().unwrap();
}

fn check_sorted<S: Storage>(mut storage: S) {
    storage.clear().unwrap();
    let zed = Resume::with_uuid("a", "Zed");
    let ann_b = Resume::with_uuid("b", "Ann");
    let ann_a = Resume::with_uuid("c", "Ann").with_contact(ContactType::Skype, "ann");
    let bob = full_resume("d", "Bob");
    for r in [&zed, &bob, &ann_b, &ann_a] {
        storage.save(r).unwrap();
    }

    let all = storage.get_all_sorted().unwrap();

    assert_eq!(all, vec![ann_b, ann_a, bob, zed]);
    assert_eq!(storage.get_all_sorted().unwrap(), all);
}

fn check_list_order<S: Storage>(mut storage: S) {
    storage.clear().unwrap();
    let items: Vec<String> = ["C", "A", "B", "", "A"].iter().map(|s| s.to_string()).collect();
    let resume = Resume::with_uuid("uuid1", "Name")
        .with_section(SectionType::Achievement, SectionContent::List(items.clone()))
        .with_section(SectionType::Qualifications, SectionContent::List(Vec::new()));

    storage.save(&resume).unwrap();

    let stored = storage.get("uuid1").unwrap();
    assert_eq!(stored.section(SectionType::Achievement), Some(&SectionContent::List(items)));
    assert_eq!(
        stored.section(SectionType::Qualifications),
        Some(&SectionContent::List(Vec::new()))
    );
}

fn check_invalid_rejected<S: Storage>(storage: S) {
    let mut storage = seeded(storage);
    let bad = Resume::with_uuid("uuid9", "Bad").with_section(
        SectionType::Achievement,
        SectionContent::List(vec!["line\nbreak".into()]),
    );

    assert!(matches!(storage.save(&bad), Err(Error::InvalidResume(_))));
    assert!(matches!(storage.save(&Resume::with_uuid("", "Anon")), Err(Error::InvalidResume(_))));
    assert_eq!(storage.size().unwrap(), 3);
}

macro_rules! storage_contract {
    ($module:ident, $make:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn save_then_get() {
                $make(|s| check_save_then_get(s));
            }

            #[test]
            fn save_existing() {
                $make(|s| check_save_existing(s));
            }

            #[test]
            fn missing() {
                $make(|s| check_missing(s));
            }

            #[test]
            fn update() {
                $make(|s| check_update(s));
            }

            #[test]
            fn update_fetched() {
                $make(|s| check_update_fetched(s));
            }

            #[test]
            fn delete() {
                $make(|s| check_delete(s));
            }

            #[test]
            fn clear() {
                $make(|s| check_clear(s));
            }

            #[test]
            fn sorted() {
                $make(|s| check_sorted(s));
            }

            #[test]
            fn list_order() {
                $make(|s| check_list_order(s));
            }

            #[test]
            fn invalid_rejected() {
                $make(|s| check_invalid_rejected(s));
            }
        }
    };
}

fn with_array(check: impl FnOnce(ArrayStorage)) {
    check(ArrayStorage::new());
}

fn with_sql(check: impl FnOnce(SqlStorage)) {
    let dir = tempfile::tempdir().unwrap();
    check(SqlStorage::open(&dir.path().join("contract.db")).unwrap());
}

storage_contract!(array, with_array);
storage_contract!(sql, with_sql);

#[test]
fn backends_agree() {
    let mut backends: Vec<Box<dyn Storage>> = vec![Box::new(ArrayStorage::new())];
    let dir = tempfile::tempdir().unwrap();
    backends.push(Box::new(SqlStorage::open(&dir.path().join("agree.db")).unwrap()));

    for storage in backends.iter_mut() {
        storage.save(&full_resume("uuid2", "Beta")).unwrap();
        storage.save(&full_resume("uuid1", "Alpha")).unwrap();
        storage.delete("uuid2").unwrap();
    }

    assert_eq!(
        backends[0].get_all_sorted().unwrap(),
        backends[1].get_all_sorted().unwrap()
    );
}
