use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;
use std::sync::Arc;
use tracing::{debug, error};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;

/// The account that owns the bearer token on the current request.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub UserModel);

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(db) = req.app_data::<web::Data<Arc<DatabaseService>>>().cloned() else {
        error!("DatabaseService missing from app data");
        return Err((ErrorUnauthorized("Invalid token"), req));
    };

    match db.get_user_by_token(credentials.token()).await {
        Ok(user) if user.is_active => {
            req.extensions_mut().insert(AuthenticatedUser(user));
            Ok(req)
        }
        Ok(_) | Err(AppError::NotFound) => {
            debug!("rejected bearer token");
            Err((AppError::Unauthorized.into(), req))
        }
        Err(e) => Err((e.into(), req)),
    }
}
