//! Services implementing the teacher CRUD workflows.
//!
//! Writes are single repository calls, each wrapped in its own store
//! transaction. The existence check performed by [`update_teacher`] and
//! [`delete_teacher`] runs before that transaction, so a concurrent writer can
//! change the row in between; the write itself never creates a row and reports
//! a vanished one as not found.

use crate::domain::teacher::{NewTeacher, Teacher, UpdateTeacher};
use crate::domain::types::TeacherId;
use crate::forms::FormError;
use crate::forms::teachers::{TeacherInsertForm, TeacherUpdateForm};
use crate::repository::{TeacherReader, TeacherWriter};
use crate::services::{ServiceError, ServiceResult};

/// Entity kind reported in [`ServiceError::EntityNotFound`].
pub const TEACHER_ENTITY: &str = "Teacher";

fn teacher_not_found(key: impl ToString) -> ServiceError {
    ServiceError::not_found(TEACHER_ENTITY, key)
}

/// Looks up an existing teacher, treating ids the store can never assign as absent.
fn existing_teacher<R>(repo: &R, id: i32) -> ServiceResult<Teacher>
where
    R: TeacherReader + ?Sized,
{
    let teacher_id = TeacherId::new(id).map_err(|_| teacher_not_found(id))?;

    repo.get_teacher_by_id(teacher_id)?
        .ok_or_else(|| teacher_not_found(id))
}

/// Persists a new teacher built from the insert payload.
pub fn insert_teacher<R>(repo: &R, form: &TeacherInsertForm) -> ServiceResult<Teacher>
where
    R: TeacherWriter + ?Sized,
{
    let new_teacher = NewTeacher::try_from(form)?;

    let created = repo.create_teacher(&new_teacher).map_err(|err| {
        log::error!("Failed to insert teacher: {err}");
        err
    })?;

    created.ok_or_else(|| {
        log::error!("Insert returned no assigned id");
        ServiceError::Insertion("store did not assign an id".to_string())
    })
}

/// Replaces the names of an existing teacher.
pub fn update_teacher<R>(repo: &R, form: &TeacherUpdateForm) -> ServiceResult<Teacher>
where
    R: TeacherReader + TeacherWriter + ?Sized,
{
    let updates = match UpdateTeacher::try_from(form) {
        Ok(updates) => updates,
        Err(FormError::InvalidTeacherId) => {
            log::info!("Update rejected, no teacher with id {:?}", form.id);
            return Err(teacher_not_found(
                form.id.map_or_else(|| "none".to_string(), |id| id.to_string()),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    let id = updates.id.get();
    existing_teacher(repo, id).inspect_err(|err| {
        log::info!("Update rejected: {err}");
    })?;

    repo.update_teacher(&updates)?.ok_or_else(|| {
        log::info!("Teacher {id} disappeared before update");
        teacher_not_found(id)
    })
}

/// Deletes a teacher, returning the values it held before removal.
pub fn delete_teacher<R>(repo: &R, id: i32) -> ServiceResult<Teacher>
where
    R: TeacherReader + TeacherWriter + ?Sized,
{
    let existing = existing_teacher(repo, id).inspect_err(|err| {
        log::info!("Delete rejected: {err}");
    })?;

    repo.delete_teacher(existing.id)?.ok_or_else(|| {
        log::info!("Teacher {id} disappeared before delete");
        teacher_not_found(id)
    })
}

/// Lists teachers whose last name starts with `prefix`.
///
/// An empty result is reported as [`ServiceError::EntityNotFound`] keyed by
/// the prefix, not as an empty list.
pub fn find_teachers_by_last_name_prefix<R>(repo: &R, prefix: &str) -> ServiceResult<Vec<Teacher>>
where
    R: TeacherReader + ?Sized,
{
    let teachers = repo.find_teachers_by_last_name_prefix(prefix)?;

    if teachers.is_empty() {
        log::info!("No teachers with last name starting with {prefix:?}");
        return Err(teacher_not_found(prefix));
    }

    Ok(teachers)
}

/// Fetches a single teacher by id.
pub fn get_teacher_by_id<R>(repo: &R, id: i32) -> ServiceResult<Teacher>
where
    R: TeacherReader + ?Sized,
{
    existing_teacher(repo, id).inspect_err(|err| {
        log::info!("Error in get teacher by id: {err}");
    })
}
