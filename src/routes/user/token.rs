use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RTokenCreate, TokenRes};
use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

#[post("")]
pub async fn token(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RTokenCreate>,
) -> ApiResult<TokenRes> {
    let body = body.into_inner().cleaned();
    body.validate()?;

    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(AppError::AuthFailure);
    };

    let user = db.authenticate(&email, &password).await?;
    let token = db.get_or_create_token(&user.id).await?;

    Ok(ApiResponse::Ok(TokenRes { token }))
}
