use crate::utils::constants::{MIN_PASSWORD_LEN, RESET_CODE_LEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AuthFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid {}-digit code", RESET_CODE_LEN)]
    InvalidResetCode,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginPayload {
    pub fn new(email: &str, password: &str) -> Result<Self, AuthFormError> {
        Ok(Self {
            email: required("email", email)?,
            password: required("password", password)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterPayload {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, AuthFormError> {
        Ok(Self {
            name: required("name", name)?,
            email: required("email", email)?,
            password: required("password", password)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordPayload {
    pub email: String,
}

impl ForgotPasswordPayload {
    pub fn new(email: &str) -> Result<Self, AuthFormError> {
        Ok(Self {
            email: required("email", email)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordPayload {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

impl ResetPasswordPayload {
    /// Checks the verification code and the new password pair before
    /// anything is sent.
    pub fn new(
        email: &str,
        code: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, AuthFormError> {
        let email = required("email", email)?;
        let code = code.trim();

        if code.len() != RESET_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AuthFormError::InvalidResetCode);
        }
        if new_password != confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }

        Ok(Self {
            email,
            code: code.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

/// Response of the login and register endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Plain message response used by the password flows and by API errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: Option<String>,
}

fn required(field: &'static str, value: &str) -> Result<String, AuthFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthFormError::MissingField(field));
    }

    Ok(value.to_string())
}
