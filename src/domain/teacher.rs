use serde::{Deserialize, Serialize};

use crate::domain::types::{TeacherId, TeacherName};

/// A persisted teacher. Always carries a store-assigned id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: TeacherName,
    pub last_name: TeacherName,
}

/// A teacher that has not been stored yet; the id is assigned on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTeacher {
    pub first_name: TeacherName,
    pub last_name: TeacherName,
}

impl NewTeacher {
    #[must_use]
    pub fn new(first_name: TeacherName, last_name: TeacherName) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

/// Replacement values for an existing teacher, addressed by primary key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateTeacher {
    pub id: TeacherId,
    pub first_name: TeacherName,
    pub last_name: TeacherName,
}

impl UpdateTeacher {
    #[must_use]
    pub fn new(id: TeacherId, first_name: TeacherName, last_name: TeacherName) -> Self {
        Self {
            id,
            first_name,
            last_name,
        }
    }
}
