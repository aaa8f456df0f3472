use crate::types::error::{AppError, FieldErrors, NON_FIELD_ERRORS};
use crate::utils::webutils::validate_token;
use actix_web::{error::JsonPayloadError, web};
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod health;
pub mod user;

/// Well-formed JSON of the wrong shape (e.g. `"email": 123`) is a validation
/// error; anything unparsable is a plain bad request.
pub fn json_payload_error(err: JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::Deserialize(e) if e.is_data() => {
            FieldErrors::single(NON_FIELD_ERRORS, &e.to_string()).into()
        }
        other => AppError::BadRequest(other.to_string()),
    }
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| json_payload_error(err).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let token_auth = HttpAuthentication::bearer(validate_token);

    cfg.app_data(json_config());
    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
            )
            .service(
                web::scope("/token")
                    .service(user::token::token)
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .service(user::me::update_me)
                    .wrap(token_auth)
            )
    );
}
