use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserFields, UserRes};
use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

#[post("")]
pub async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner().cleaned();
    body.validate()?;

    let fields = UserFields {
        name: body.name,
        ..Default::default()
    };

    let user = db
        .create_user(body.email.as_deref(), body.password.as_deref(), fields)
        .await
        .map_err(AppError::duplicate_email_as_field)?;

    Ok(ApiResponse::Created(user.into()))
}
