use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserRes};
use crate::utils::webutils::AuthenticatedUser;
use actix_web::{get, patch, web};
use std::sync::Arc;
use validator::Validate;

#[get("")]
pub async fn me(user: web::ReqData<AuthenticatedUser>) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(user.into_inner().0.into()))
}

#[patch("")]
pub async fn update_me(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<AuthenticatedUser>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let body = body.into_inner().cleaned();
    body.validate()?;

    let current = user.into_inner().0;
    if body.name.is_none() && body.password.is_none() {
        return Ok(ApiResponse::Ok(current.into()));
    }

    let updated = db
        .update_user(&current.id, body.name, body.password.as_deref())
        .await?;

    Ok(ApiResponse::Ok(updated.into()))
}
