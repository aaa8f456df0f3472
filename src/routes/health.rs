use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct HealthRes {
    pub status: String,
}

/// 200 once the user store answers a ping.
#[get("")]
pub async fn health(db: web::Data<Arc<DatabaseService>>) -> ApiResult<HealthRes> {
    db.ping().await?;
    Ok(ApiResponse::Ok(HealthRes { status: "ok".to_string() }))
}
