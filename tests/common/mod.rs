#![allow(dead_code)]

use account_auth::{
    db::database_service::DatabaseService,
    types::{error::AppError, user::UserFields},
};
use actix_web::{web, App};
use entity::user::Model as UserModel;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "testpass";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh in-memory SQLite database, migrated. One connection so every
    /// query sees the same database.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }
}

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(account_auth::routes::configure_routes)
    }

    pub async fn create_test_user(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        self.db
            .create_user(Some(email), Some(password), UserFields::named("Test User"))
            .await
    }

    /// Creates a user and returns it with a freshly issued token.
    pub async fn create_user_with_token(&self, email: &str) -> (UserModel, String) {
        let user = self
            .create_test_user(email, TEST_PASSWORD)
            .await
            .expect("Failed to create user");
        let token = self
            .db
            .get_or_create_token(&user.id)
            .await
            .expect("Failed to issue token");
        (user, token)
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_user() -> Value {
        json!({
            "email": "test@test.com",
            "password": "testpass",
            "name": "test user"
        })
    }

    pub fn credentials(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
