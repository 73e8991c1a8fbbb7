//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::teacher::{NewTeacher, Teacher, UpdateTeacher};
use crate::domain::types::TeacherId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{TeacherReader, TeacherWriter};

mock! {
    pub Repository {}

    impl TeacherReader for Repository {
        fn get_teacher_by_id(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>>;
        fn find_teachers_by_last_name_prefix(&self, prefix: &str) -> RepositoryResult<Vec<Teacher>>;
    }

    impl TeacherWriter for Repository {
        fn create_teacher(&self, new_teacher: &NewTeacher) -> RepositoryResult<Option<Teacher>>;
        fn update_teacher(&self, updates: &UpdateTeacher) -> RepositoryResult<Option<Teacher>>;
        fn delete_teacher(&self, id: TeacherId) -> RepositoryResult<Option<Teacher>>;
    }
}
