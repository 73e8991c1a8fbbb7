//! Persistence boundary for teachers.
//!
//! Services depend on the [`TeacherReader`] and [`TeacherWriter`] traits only;
//! [`DieselRepository`] is the SQLite-backed implementation used by the server.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::teacher::{NewTeacher, Teacher, UpdateTeacher};
use crate::domain::types::TeacherId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod teacher;

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait TeacherReader {
    fn get_teacher_by_id(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>>;
    /// Teachers whose last name starts with `prefix`, ordered by id.
    fn find_teachers_by_last_name_prefix(&self, prefix: &str) -> RepositoryResult<Vec<Teacher>>;
}

pub trait TeacherWriter {
    /// Inserts the teacher and returns the stored row, `None` if the store
    /// handed no row back.
    fn create_teacher(&self, new_teacher: &NewTeacher) -> RepositoryResult<Option<Teacher>>;
    /// Overwrites the names of an existing row. Never inserts; `None` when no
    /// row has the given id.
    fn update_teacher(&self, updates: &UpdateTeacher) -> RepositoryResult<Option<Teacher>>;
    /// Removes the row and returns it as it was before deletion.
    fn delete_teacher(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>>;
}
