use crate::db::database_service::DatabaseService;
use crate::{types::error::AppError, utils::token::new_token};
use chrono::Utc;
use entity::auth_token::{ActiveModel as TokenActive, Column as TokenColumn, Entity as AuthToken};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use tracing::info;
use uuid::Uuid;

impl DatabaseService {
    pub async fn find_token_for_user(&self, user_id: &Uuid) -> Result<Option<String>, AppError> {
        Ok(AuthToken::find()
            .filter(TokenColumn::UserId.eq(*user_id))
            .one(&self.db)
            .await?
            .map(|t| t.key))
    }

    /// One token per user: an existing key is returned as is.
    pub async fn get_or_create_token(&self, user_id: &Uuid) -> Result<String, AppError> {
        if let Some(key) = self.find_token_for_user(user_id).await? {
            return Ok(key);
        }

        let inserted = TokenActive {
            key: Set(new_token()),
            user_id: Set(*user_id),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(token) => {
                info!(user_id = %user_id, "issued auth token");
                Ok(token.key)
            }
            // lost a race with another login for the same user
            Err(e) => match AppError::from(e) {
                AppError::AlreadyExists => self
                    .find_token_for_user(user_id)
                    .await?
                    .ok_or(AppError::AlreadyExists),
                other => Err(other),
            },
        }
    }

    pub async fn get_user_by_token(&self, key: &str) -> Result<UserModel, AppError> {
        let (_, user) = AuthToken::find_by_id(key.to_string())
            .find_also_related(User)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Token does not exist".into()))?;
        Ok(user.ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }
}
