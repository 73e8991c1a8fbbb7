use teacher_registry::domain::teacher::{NewTeacher, UpdateTeacher};
use teacher_registry::domain::types::{TeacherId, TeacherName};
use teacher_registry::repository::{DieselRepository, TeacherReader, TeacherWriter};

mod common;

fn name(value: &str) -> TeacherName {
    TeacherName::new(value).unwrap()
}

fn new_teacher(first: &str, last: &str) -> NewTeacher {
    NewTeacher::new(name(first), name(last))
}

#[test]
fn test_teacher_repository_crud() {
    let test_db = common::TestDb::new("test_teacher_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let john = repo
        .create_teacher(&new_teacher("John", "Smith"))
        .unwrap()
        .unwrap();
    assert!(john.id.get() > 0);

    let fetched = repo.get_teacher_by_id(john.id).unwrap().unwrap();
    assert_eq!(fetched, john);

    let updated = repo
        .update_teacher(&UpdateTeacher::new(john.id, name("Jon"), name("Smith")))
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, john.id);
    assert_eq!(updated.first_name.as_str(), "Jon");

    let deleted = repo.delete_teacher(john.id).unwrap().unwrap();
    assert_eq!(deleted, updated);
    assert!(repo.get_teacher_by_id(john.id).unwrap().is_none());
}

#[test]
fn test_ids_are_assigned_by_the_store() {
    let test_db = common::TestDb::new("test_ids_assigned.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo.create_teacher(&new_teacher("Anna", "Ioannou")).unwrap().unwrap();
    let second = repo.create_teacher(&new_teacher("Anna", "Ioannou")).unwrap().unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_update_never_inserts() {
    let test_db = common::TestDb::new("test_update_never_inserts.db");
    let repo = DieselRepository::new(test_db.pool());
    let missing = TeacherId::new(99).unwrap();

    let result = repo
        .update_teacher(&UpdateTeacher::new(missing, name("John"), name("Smith")))
        .unwrap();
    assert!(result.is_none());
    assert!(repo.get_teacher_by_id(missing).unwrap().is_none());
}

#[test]
fn test_delete_missing_teacher_returns_none() {
    let test_db = common::TestDb::new("test_delete_missing.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(repo.delete_teacher(TeacherId::new(5).unwrap()).unwrap().is_none());
}

#[test]
fn test_last_name_prefix_search() {
    let test_db = common::TestDb::new("test_last_name_prefix_search.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_teacher(&new_teacher("Maria", "Papadopoulou")).unwrap();
    repo.create_teacher(&new_teacher("Nikos", "Papas")).unwrap();
    repo.create_teacher(&new_teacher("John", "Smith")).unwrap();

    let found = repo.find_teachers_by_last_name_prefix("Papa").unwrap();
    let last_names: Vec<&str> = found.iter().map(|t| t.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Papadopoulou", "Papas"]);

    assert!(repo.find_teachers_by_last_name_prefix("Xen").unwrap().is_empty());
}

#[test]
fn test_prefix_search_matches_wildcards_literally() {
    let test_db = common::TestDb::new("test_prefix_wildcards.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_teacher(&new_teacher("John", "Smith")).unwrap();
    repo.create_teacher(&new_teacher("Jane", "S_mith")).unwrap();

    let found = repo.find_teachers_by_last_name_prefix("S_").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name.as_str(), "S_mith");

    assert!(repo.find_teachers_by_last_name_prefix("%").unwrap().is_empty());
}
