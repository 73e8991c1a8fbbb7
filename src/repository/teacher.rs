//! Repository implementation for teachers.

use diesel::{Connection, prelude::*};

use crate::{
    domain::{
        teacher::{NewTeacher, Teacher, UpdateTeacher},
        types::TeacherId,
    },
    models::teacher::{
        NewTeacher as DbNewTeacher, Teacher as DbTeacher, UpdateTeacher as DbUpdateTeacher,
    },
    repository::{
        DieselRepository, TeacherReader, TeacherWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching values that start with `prefix` literally.
fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn into_domain(db_teacher: Option<DbTeacher>) -> RepositoryResult<Option<Teacher>> {
    match db_teacher {
        Some(db_teacher) => Ok(Some(
            Teacher::try_from(db_teacher).map_err(RepositoryError::from)?,
        )),
        None => Ok(None),
    }
}

impl TeacherReader for DieselRepository {
    fn get_teacher_by_id(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>> {
        use crate::schema::teachers;

        let mut conn = self.conn()?;
        let db_teacher = teachers::table
            .find(id.get())
            .first::<DbTeacher>(&mut conn)
            .optional()?;

        into_domain(db_teacher)
    }

    fn find_teachers_by_last_name_prefix(&self, prefix: &str) -> RepositoryResult<Vec<Teacher>> {
        use crate::schema::teachers;

        let mut conn = self.conn()?;
        let db_teachers = teachers::table
            .filter(
                teachers::last_name
                    .like(prefix_pattern(prefix))
                    .escape(LIKE_ESCAPE),
            )
            .order(teachers::id.asc())
            .load::<DbTeacher>(&mut conn)?;

        db_teachers
            .into_iter()
            .map(|db_teacher| Teacher::try_from(db_teacher).map_err(RepositoryError::from))
            .collect()
    }
}

impl TeacherWriter for DieselRepository {
    fn create_teacher(&self, new_teacher: &NewTeacher) -> RepositoryResult<Option<Teacher>> {
        use crate::schema::teachers;

        let mut conn = self.conn()?;
        let db_new_teacher: DbNewTeacher = new_teacher.into();

        let db_teacher = conn
            .transaction::<Option<DbTeacher>, diesel::result::Error, _>(|conn| {
                diesel::insert_into(teachers::table)
                    .values(&db_new_teacher)
                    .get_result::<DbTeacher>(conn)
                    .optional()
            })?;

        into_domain(db_teacher)
    }

    fn update_teacher(&self, updates: &UpdateTeacher) -> RepositoryResult<Option<Teacher>> {
        use crate::schema::teachers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTeacher = updates.into();
        let id = updates.id.get();

        let db_teacher = conn
            .transaction::<Option<DbTeacher>, diesel::result::Error, _>(|conn| {
                diesel::update(teachers::table.find(id))
                    .set(&db_updates)
                    .get_result::<DbTeacher>(conn)
                    .optional()
            })?;

        into_domain(db_teacher)
    }

    fn delete_teacher(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>> {
        use crate::schema::teachers;

        let mut conn = self.conn()?;

        let db_teacher = conn
            .transaction::<Option<DbTeacher>, diesel::result::Error, _>(|conn| {
                diesel::delete(teachers::table.find(id.get()))
                    .get_result::<DbTeacher>(conn)
                    .optional()
            })?;

        into_domain(db_teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::prefix_pattern;

    #[test]
    fn prefix_pattern_appends_wildcard() {
        assert_eq!(prefix_pattern("Papa"), "Papa%");
        assert_eq!(prefix_pattern(""), "%");
    }

    #[test]
    fn prefix_pattern_escapes_like_metacharacters() {
        assert_eq!(prefix_pattern("50%_"), "50\\%\\_%");
        assert_eq!(prefix_pattern("a\\b"), "a\\\\b%");
    }
}
