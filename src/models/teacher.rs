//! Diesel models representing stored teachers.

use diesel::prelude::*;

use crate::domain::teacher::{
    NewTeacher as DomainNewTeacher, Teacher as DomainTeacher,
    UpdateTeacher as DomainUpdateTeacher,
};
use crate::domain::types::{TeacherId, TeacherName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::teachers)]
/// Diesel model for [`crate::domain::teacher::Teacher`].
pub struct Teacher {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::teachers)]
/// Insertable form of [`Teacher`]; the id column is left to the store.
pub struct NewTeacher<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::teachers)]
/// Data used when updating a [`Teacher`] record.
pub struct UpdateTeacher<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl TryFrom<Teacher> for DomainTeacher {
    type Error = TypeConstraintError;

    fn try_from(teacher: Teacher) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TeacherId::try_from(teacher.id)?,
            first_name: TeacherName::new(teacher.first_name)?,
            last_name: TeacherName::new(teacher.last_name)?,
        })
    }
}

impl<'a> From<&'a DomainNewTeacher> for NewTeacher<'a> {
    fn from(teacher: &'a DomainNewTeacher) -> Self {
        Self {
            first_name: teacher.first_name.as_str(),
            last_name: teacher.last_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateTeacher> for UpdateTeacher<'a> {
    fn from(teacher: &'a DomainUpdateTeacher) -> Self {
        Self {
            first_name: teacher.first_name.as_str(),
            last_name: teacher.last_name.as_str(),
        }
    }
}
