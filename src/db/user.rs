use crate::db::database_service::DatabaseService;
use crate::{
    types::{
        error::{AppError, FieldErrors},
        user::{UserFields, MAX_EMAIL_LENGTH},
    },
    utils::{
        email::normalize_email,
        password::{dummy_verify, hash_password, unusable_password, verify_password},
        token::new_id,
    },
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

fn hash_or_internal(password: &str) -> Result<String, AppError> {
    hash_password(password).map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(self
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await?)
    }

    /// Signup: create user.
    ///
    /// The email is required and stored lowercased. A `None` password stores a
    /// marker that never verifies. Existing emails fail with `AlreadyExists`,
    /// including when a concurrent insert wins the unique index.
    pub async fn create_user(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        fields: UserFields,
    ) -> Result<UserModel, AppError> {
        let email = match email.map(normalize_email) {
            Some(email) if !email.is_empty() => email,
            _ => {
                return Err(FieldErrors::single("email", "Users must have an email address.").into())
            }
        };
        if email.chars().count() as u64 > MAX_EMAIL_LENGTH {
            return Err(FieldErrors::single(
                "email",
                "Ensure this field has no more than 255 characters.",
            )
            .into());
        }

        if self.user_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }

        let password = match password {
            Some(password) => hash_or_internal(password)?,
            None => unusable_password(),
        };
        let now = Utc::now();

        let user = UserActive {
            id: Set(new_id()),
            email: Set(email),
            name: Set(fields.name.unwrap_or_default()),
            password: Set(password),
            is_active: Set(fields.is_active),
            is_staff: Set(fields.is_staff),
            is_superuser: Set(fields.is_superuser),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(user_id = %user.id, staff = user.is_staff, "created user");
        Ok(user)
    }

    pub async fn create_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        fields: UserFields,
    ) -> Result<UserModel, AppError> {
        let fields = UserFields {
            is_staff: true,
            is_superuser: true,
            ..fields
        };
        self.create_user(email, password, fields).await
    }

    /// Returns the user only when the email exists, the account is active and
    /// the password matches. Every other outcome is the same `AuthFailure`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        let user = match self.find_user_by_email(email).await? {
            Some(user) => user,
            None => {
                dummy_verify(password);
                debug!("authentication failed");
                return Err(AppError::AuthFailure);
            }
        };

        if !verify_password(password, &user.password) || !user.is_active {
            debug!(user_id = %user.id, "authentication failed");
            return Err(AppError::AuthFailure);
        }

        Ok(user)
    }

    pub async fn set_password(&self, user_id: &Uuid, password: &str) -> Result<UserModel, AppError> {
        self.update_user(user_id, None, Some(password)).await
    }

    pub async fn update_user_name(&self, user_id: &Uuid, name: String) -> Result<UserModel, AppError> {
        self.update_user(user_id, Some(name), None).await
    }

    /// Applies a name and/or password change in one transaction.
    pub async fn update_user(
        &self,
        user_id: &Uuid,
        name: Option<String>,
        password: Option<&str>,
    ) -> Result<UserModel, AppError> {
        let password = password.map(hash_or_internal).transpose()?;
        let txn = self.db.begin().await?;

        let mut am: UserActive = User::find_by_id(*user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?
            .into();
        if let Some(name) = name {
            am.name = Set(name);
        }
        let password_changed = password.is_some();
        if let Some(password) = password {
            am.password = Set(password);
        }
        am.updated_at = Set(Utc::now());
        let user = am.update(&txn).await?;

        txn.commit().await?;
        if password_changed {
            info!(user_id = %user.id, "password changed");
        }
        Ok(user)
    }
}
