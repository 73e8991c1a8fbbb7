//! HTTP route registration.

use actix_web::{HttpResponse, Responder, get, web};
use utoipa::OpenApi;

use crate::dto::teachers::TeacherReadOnlyDto;
use crate::forms::teachers::{TeacherInsertForm, TeacherUpdateForm};
use crate::routes::teachers::{
    add_teacher, delete_teacher, find_teachers, get_teacher, update_teacher,
};

pub mod teachers;

#[derive(OpenApi)]
#[openapi(
    paths(
        teachers::find_teachers,
        teachers::get_teacher,
        teachers::add_teacher,
        teachers::update_teacher,
        teachers::delete_teacher,
    ),
    components(schemas(TeacherReadOnlyDto, TeacherInsertForm, TeacherUpdateForm)),
    tags((name = "teachers", description = "Teacher registry"))
)]
pub struct ApiDoc;

#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Mounts every teacher endpoint and the OpenAPI document under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(openapi_json)
            .service(find_teachers)
            .service(get_teacher)
            .service(add_teacher)
            .service(update_teacher)
            .service(delete_teacher),
    );
}
