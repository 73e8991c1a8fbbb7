//! Output projections of teachers returned by the REST API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::teacher::Teacher;

/// Read-only view of a stored teacher. Only ever produced, never accepted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherReadOnlyDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Teacher> for TeacherReadOnlyDto {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id.get(),
            first_name: teacher.first_name.into_inner(),
            last_name: teacher.last_name.into_inner(),
        }
    }
}
