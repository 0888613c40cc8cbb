use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::inquiry::ErrorResponse;
use crate::forms::inquiry::{CreateInquiryForm, ListInquiriesParams};
use crate::repository::{DieselRepository, ReadConsistency};
use crate::services::ServiceError;
use crate::services::inquiries as inquiry_service;

/// Unauthenticated submission endpoint.
#[post("/inquiries")]
pub async fn create_inquiry(
    form: web::Json<CreateInquiryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match inquiry_service::create_inquiry(repo.get_ref(), form.into_inner()) {
        Ok(response) => HttpResponse::Created().json(response),
        Err(ServiceError::Validation(e)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
        Err(ServiceError::Storage(e)) => {
            log::error!("Failed to create inquiry: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal error"))
        }
    }
}

/// Staff lookup endpoint. Authentication is enforced by the gateway in
/// front of the `/internal` scope.
#[get("/inquiries")]
pub async fn list_inquiries(
    params: web::Query<ListInquiriesParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let consistency = if params.strong {
        ReadConsistency::Strong
    } else {
        ReadConsistency::Default
    };

    match inquiry_service::list_inquiries(repo.get_ref(), params, consistency) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Validation(e)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()))
        }
        Err(ServiceError::Storage(e)) => {
            log::error!("Failed to list inquiries: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal error"))
        }
    }
}
