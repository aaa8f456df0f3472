use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_PASSWORD_LENGTH: u64 = 5;
pub const MAX_NAME_LENGTH: u64 = 255;
/// Matches the `varchar(255)` email column.
pub const MAX_EMAIL_LENGTH: u64 = 255;

/// Extra fields accepted by the account manager alongside email and password.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl Default for UserFields {
    fn default() -> Self {
        Self {
            name: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
        }
    }
}

impl UserFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct RUserCreate {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = MAX_EMAIL_LENGTH, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = MIN_PASSWORD_LENGTH, message = "Ensure this field has at least 5 characters.")
    )]
    pub password: Option<String>,
    #[validate(length(max = MAX_NAME_LENGTH, message = "Ensure this field has no more than 255 characters."))]
    pub name: Option<String>,
}

impl RUserCreate {
    /// Email is trimmed before validation, the password never is.
    pub fn cleaned(mut self) -> Self {
        self.email = self.email.map(|e| e.trim().to_string());
        self.name = self.name.map(|n| n.trim().to_string());
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct RUserUpdate {
    #[validate(length(
        min = MIN_PASSWORD_LENGTH,
        message = "Ensure this field has at least 5 characters."
    ))]
    pub password: Option<String>,
    #[validate(length(max = MAX_NAME_LENGTH, message = "Ensure this field has no more than 255 characters."))]
    pub name: Option<String>,
}

impl RUserUpdate {
    pub fn cleaned(mut self) -> Self {
        self.name = self.name.map(|n| n.trim().to_string());
        self
    }
}

/// Public view of a user. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserRes {
    pub email: String,
    pub name: String,
}

impl From<UserModel> for UserRes {
    fn from(user: UserModel) -> Self {
        Self {
            email: user.email,
            name: user.name,
        }
    }
}
