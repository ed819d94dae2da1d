use serde::{Deserialize, Serialize};

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
}

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("email address is required")]
    MissingEmail,
    #[error("email address looks invalid")]
    InvalidEmail,
    #[error("password is required")]
    MissingPassword,
    #[error("passwords don't match")]
    PasswordMismatch,
    #[error("please agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Signup screen state. Checks mirror the form's submit gating; the server
/// does its own validation on top.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub agreed_to_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, SignupError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SignupError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(SignupError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(SignupError::MissingPassword);
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }

        Ok(SignupRequest {
            email: email.to_string(),
            password: self.password.clone(),
            age: self.age,
            gender: self.gender.clone(),
        })
    }
}
