//! JSON endpoints for the `teachers` resource.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::dto::teachers::TeacherReadOnlyDto;
use crate::forms::teachers::{TeacherInsertForm, TeacherUpdateForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, teachers as teachers_service};

#[derive(Debug, Deserialize)]
pub struct LastNameQuery {
    pub lastname: String,
}

/// Location of a newly created teacher, relative to the collection path.
fn teacher_location(req: &HttpRequest, id: i32) -> String {
    format!("{}/{}", req.path().trim_end_matches('/'), id)
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = "teachers",
    params(("lastname" = String, Query, description = "Last name prefix, case-sensitive")),
    responses(
        (status = 200, description = "Teachers whose last name starts with the prefix", body = [TeacherReadOnlyDto]),
        (status = 400, description = "No teacher matches the prefix"),
        (status = 500, description = "Store failure"),
    )
)]
#[get("/teachers")]
pub async fn find_teachers(
    params: web::Query<LastNameQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match teachers_service::find_teachers_by_last_name_prefix(repo.get_ref(), &params.lastname) {
        Ok(teachers) => HttpResponse::Ok().json(
            teachers
                .into_iter()
                .map(TeacherReadOnlyDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ServiceError::EntityNotFound { .. }) => HttpResponse::BadRequest().finish(),
        Err(err) => {
            log::error!("Failed to search teachers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/teachers/{teacher_id}",
    tag = "teachers",
    params(("teacher_id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "The stored teacher", body = TeacherReadOnlyDto),
        (status = 404, description = "No teacher with this id"),
        (status = 500, description = "Store failure"),
    )
)]
#[get("/teachers/{teacher_id}")]
pub async fn get_teacher(
    teacher_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match teachers_service::get_teacher_by_id(repo.get_ref(), teacher_id.into_inner()) {
        Ok(teacher) => HttpResponse::Ok().json(TeacherReadOnlyDto::from(teacher)),
        Err(ServiceError::EntityNotFound { .. }) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load teacher: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = "teachers",
    request_body = TeacherInsertForm,
    responses(
        (status = 201, description = "Teacher created", body = TeacherReadOnlyDto,
            headers(("Location" = String, description = "Path of the new teacher"))),
        (status = 400, description = "Invalid first or last name"),
        (status = 500, description = "Store failure"),
    )
)]
#[post("/teachers")]
pub async fn add_teacher(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TeacherInsertForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        log::info!("Rejected teacher insert: {e}");
        return HttpResponse::BadRequest().finish();
    }

    match teachers_service::insert_teacher(repo.get_ref(), &form) {
        Ok(teacher) => {
            let dto = TeacherReadOnlyDto::from(teacher);
            HttpResponse::Created()
                .insert_header((header::LOCATION, teacher_location(&req, dto.id)))
                .json(dto)
        }
        Err(err) => {
            log::error!("Failed to insert teacher: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = "teachers",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "The removed teacher", body = TeacherReadOnlyDto),
        (status = 404, description = "No teacher with this id"),
        (status = 500, description = "Store failure"),
    )
)]
#[delete("/teachers/{id}")]
pub async fn delete_teacher(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match teachers_service::delete_teacher(repo.get_ref(), id.into_inner()) {
        Ok(teacher) => HttpResponse::Ok().json(TeacherReadOnlyDto::from(teacher)),
        Err(ServiceError::EntityNotFound { .. }) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete teacher: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = "teachers",
    params(("id" = i32, Path, description = "Teacher id")),
    request_body = TeacherUpdateForm,
    responses(
        (status = 200, description = "The updated teacher", body = TeacherReadOnlyDto),
        (status = 400, description = "Invalid first or last name"),
        (status = 401, description = "Body id differs from the path id"),
        (status = 404, description = "No teacher with this id"),
        (status = 500, description = "Store failure"),
    )
)]
#[put("/teachers/{id}")]
pub async fn update_teacher(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TeacherUpdateForm>,
) -> impl Responder {
    let id = id.into_inner();

    // Identity check precedes validation and any store access.
    if form.id != Some(id) {
        log::info!("Teacher id mismatch: path {id}, body {:?}", form.id);
        return HttpResponse::Unauthorized().finish();
    }

    if let Err(e) = form.validate() {
        log::info!("Rejected teacher update: {e}");
        return HttpResponse::BadRequest().finish();
    }

    match teachers_service::update_teacher(repo.get_ref(), &form) {
        Ok(teacher) => HttpResponse::Ok().json(TeacherReadOnlyDto::from(teacher)),
        Err(ServiceError::EntityNotFound { .. }) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => {
            log::info!("Rejected teacher update: {message}");
            HttpResponse::BadRequest().finish()
        }
        Err(err) => {
            log::error!("Failed to update teacher: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
