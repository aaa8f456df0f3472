use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header, HttpResponse, HttpResponseBuilder, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        // bodies can carry tokens or account data
        fn no_store(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
            builder.insert_header((header::CACHE_CONTROL, "no-store"));
            builder
        }

        match self {
            ApiResponse::Ok(v) => no_store(HttpResponse::Ok()).json(v),
            ApiResponse::Created(v) => no_store(HttpResponse::Created()).json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
