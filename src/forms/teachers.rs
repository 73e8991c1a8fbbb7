use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::domain::teacher::{NewTeacher, UpdateTeacher};
use crate::domain::types::{TeacherId, TeacherName};
use crate::forms::{FormError, validate_names};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/teachers`. Carries no id; one is assigned on insert.
pub struct TeacherInsertForm {
    #[serde(alias = "firstname")]
    pub first_name: Option<String>,
    #[serde(alias = "lastname")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Body of `PUT /api/teachers/{id}`. The id must equal the one in the path.
pub struct TeacherUpdateForm {
    pub id: Option<i32>,
    #[serde(alias = "firstname")]
    pub first_name: Option<String>,
    #[serde(alias = "lastname")]
    pub last_name: Option<String>,
}

impl TeacherInsertForm {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

impl TeacherUpdateForm {
    pub fn new(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

impl Validate for TeacherInsertForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_names(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

impl Validate for TeacherUpdateForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_names(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

fn name(value: Option<&str>) -> Result<TeacherName, FormError> {
    TeacherName::new(value.unwrap_or_default()).map_err(FormError::InvalidName)
}

impl TryFrom<&TeacherInsertForm> for NewTeacher {
    type Error = FormError;

    fn try_from(form: &TeacherInsertForm) -> Result<Self, Self::Error> {
        Ok(NewTeacher::new(
            name(form.first_name.as_deref())?,
            name(form.last_name.as_deref())?,
        ))
    }
}

impl TryFrom<&TeacherUpdateForm> for UpdateTeacher {
    type Error = FormError;

    fn try_from(form: &TeacherUpdateForm) -> Result<Self, Self::Error> {
        let id = form
            .id
            .and_then(|id| TeacherId::new(id).ok())
            .ok_or(FormError::InvalidTeacherId)?;

        Ok(UpdateTeacher::new(
            id,
            name(form.first_name.as_deref())?,
            name(form.last_name.as_deref())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FIRST_NAME_FIELD, FieldError, LAST_NAME_FIELD, field_errors};

    #[test]
    fn insert_form_reads_camel_case_and_lowercase_names() {
        let camel: TeacherInsertForm =
            serde_json::from_str(r#"{"firstName":"John","lastName":"Smith"}"#).unwrap();
        let lower: TeacherInsertForm =
            serde_json::from_str(r#"{"firstname":"John","lastname":"Smith"}"#).unwrap();

        assert_eq!(camel.first_name.as_deref(), Some("John"));
        assert_eq!(lower.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn insert_form_ignores_supplied_id() {
        let form: TeacherInsertForm =
            serde_json::from_str(r#"{"id":9,"firstName":"John","lastName":"Smith"}"#).unwrap();
        let new_teacher = NewTeacher::try_from(&form).unwrap();
        assert_eq!(new_teacher.first_name.as_str(), "John");
    }

    #[test]
    fn null_names_fail_validation() {
        let form: TeacherUpdateForm =
            serde_json::from_str(r#"{"id":1,"firstName":null,"lastName":"Smith"}"#).unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            field_errors(&errors, FIRST_NAME_FIELD),
            vec![FieldError::Empty, FieldError::SizeOutOfRange]
        );
        assert!(field_errors(&errors, LAST_NAME_FIELD).is_empty());
    }

    #[test]
    fn insert_and_update_forms_validate_identically() {
        let insert = TeacherInsertForm::new("Jo", " ");
        let update = TeacherUpdateForm::new(1, "Jo", " ");

        let insert_errors = insert.validate().unwrap_err();
        let update_errors = update.validate().unwrap_err();
        for field in [FIRST_NAME_FIELD, LAST_NAME_FIELD] {
            assert_eq!(
                field_errors(&insert_errors, field),
                field_errors(&update_errors, field)
            );
        }
    }

    #[test]
    fn update_form_without_id_is_rejected_on_conversion() {
        let form = TeacherUpdateForm {
            id: None,
            ..TeacherUpdateForm::new(1, "John", "Smith")
        };
        assert!(matches!(
            UpdateTeacher::try_from(&form),
            Err(FormError::InvalidTeacherId)
        ));
    }

    #[test]
    fn update_form_converts_to_domain() {
        let form = TeacherUpdateForm::new(4, "Jon", "Smith");
        let update = UpdateTeacher::try_from(&form).unwrap();
        assert_eq!(update.id.get(), 4);
        assert_eq!(update.first_name.as_str(), "Jon");
    }
}
