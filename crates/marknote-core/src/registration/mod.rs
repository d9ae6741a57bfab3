//! Registration form state and submit flow.
//!
//! Each field carries its own validity flag, recomputed whenever that field
//! changes. Submitting is split into a synchronous guard ([`RegistrationForm::check`])
//! and an async send ([`send_registration`]) so a UI can release its state
//! borrow while the request is in flight.

mod client;
mod validation;

pub use client::{
    HttpRegistrationClient, RegisterError, RegisterResult, RegistrationClient, RegistrationPayload,
};
pub use validation::{
    is_email_valid, is_mobile_valid, is_password_valid, is_username_valid, MIN_PASSWORD_LEN,
    MOBILE_LEN,
};

use thiserror::Error;

use crate::notification::Toast;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const SUCCESS_MESSAGE: &str = "Registration Successful";
pub const FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// One of the four registration inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    Email,
    Mobile,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Username, Self::Password, Self::Email, Self::Mobile];

    /// Label shown above the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Email => "Email",
            Self::Mobile => "Mobile Number",
        }
    }

    /// DOM id of the input, also the payload key
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Email => "email",
            Self::Mobile => "mobile",
        }
    }

    /// HTML input type
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Email => "email",
            Self::Username | Self::Mobile => "text",
        }
    }

    /// Inline message shown while the field is invalid
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Username => "Please enter a username.",
            Self::Password => "Please enter a valid password (at least 6 characters).",
            Self::Email => "Please enter a valid email address.",
            Self::Mobile => "Please enter a valid mobile number (10 digits).",
        }
    }

    /// Validity rule for this field
    #[must_use]
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Self::Username => is_username_valid(value),
            Self::Password => is_password_valid(value),
            Self::Email => is_email_valid(value),
            Self::Mobile => is_mobile_valid(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
}

/// Transient registration form state.
///
/// Validity flags start out `true` so no error shows before the user types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RegistrationForm {
    username: String,
    password: String,
    email: String,
    mobile: String,
    username_valid: bool,
    password_valid: bool,
    email_valid: bool,
    mobile_valid: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            mobile: String::new(),
            username_valid: true,
            password_valid: true,
            email_valid: true,
            mobile_valid: true,
        }
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
        }
    }

    #[must_use]
    pub const fn is_valid(&self, field: Field) -> bool {
        match field {
            Field::Username => self.username_valid,
            Field::Password => self.password_valid,
            Field::Email => self.email_valid,
            Field::Mobile => self.mobile_valid,
        }
    }

    /// Inline error for `field`, if its flag is down
    #[must_use]
    pub const fn error_for(&self, field: Field) -> Option<&'static str> {
        if self.is_valid(field) {
            None
        } else {
            Some(field.error_message())
        }
    }

    /// Store a new value and recompute only that field's flag
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let valid = field.is_valid(&value);
        let (slot, flag) = match field {
            Field::Username => (&mut self.username, &mut self.username_valid),
            Field::Password => (&mut self.password, &mut self.password_valid),
            Field::Email => (&mut self.email, &mut self.email_valid),
            Field::Mobile => (&mut self.mobile, &mut self.mobile_valid),
        };
        *slot = value;
        *flag = valid;
    }

    /// Submit guard.
    ///
    /// Passes only when every trimmed value is non-blank and every flag is up.
    pub fn check(&self) -> Result<RegistrationPayload, ValidationError> {
        let complete = Field::ALL
            .iter()
            .all(|&field| !self.value(field).trim().is_empty() && self.is_valid(field));
        if !complete {
            return Err(ValidationError::MissingFields);
        }

        Ok(RegistrationPayload {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
        })
    }

    /// Apply the result of a finished submission to the form
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        if outcome.is_success() {
            *self = Self::default();
        }
    }

    /// Guard, send and apply in one step
    pub async fn submit<C: RegistrationClient>(&mut self, client: &C) -> SubmitOutcome {
        let outcome = match self.check() {
            Ok(payload) => send_registration(client, &payload).await,
            Err(error) => SubmitOutcome::Rejected(error),
        };
        self.finish(&outcome);
        outcome
    }
}

/// Result of a submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The guard failed; nothing was sent
    Rejected(ValidationError),
    /// The server accepted the registration
    Registered,
    /// The request was sent and failed
    Failed(RegisterError),
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Registered)
    }

    /// Whether the UI should move on to the login screen
    #[must_use]
    pub const fn redirects_to_login(&self) -> bool {
        self.is_success()
    }

    /// Toast to show for this outcome
    #[must_use]
    pub fn toast(&self) -> Toast {
        match self {
            Self::Rejected(_) => Toast::error(MISSING_FIELDS_MESSAGE),
            Self::Registered => Toast::success(SUCCESS_MESSAGE),
            Self::Failed(_) => Toast::error(FAILURE_MESSAGE),
        }
    }
}

/// Send a checked payload. Failures are logged and always reported back.
pub async fn send_registration<C: RegistrationClient>(
    client: &C,
    payload: &RegistrationPayload,
) -> SubmitOutcome {
    match client.register(payload).await {
        Ok(()) => {
            tracing::info!("Registration succeeded for {}", payload.username);
            SubmitOutcome::Registered
        }
        Err(error) => {
            tracing::error!("Error registering: {}", error);
            SubmitOutcome::Failed(error)
        }
    }
}
