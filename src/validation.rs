//! Form validation shared by the login and registration screens.
//!
//! Every check comes as a pure predicate plus a function returning the
//! user-facing message, `None` meaning the value is fine.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MOBILE_NUMBER_LEN: usize = 10;

/// Roles a new account can pick.
pub const ROLES: [&str; 2] = ["Chef", "Foodie"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_email_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_email_valid(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

pub fn is_mobile_valid(mobile: &str) -> bool {
    mobile.len() == MOBILE_NUMBER_LEN && mobile.bytes().all(|b| b.is_ascii_digit())
}

pub fn mobile_error(mobile: &str) -> Option<&'static str> {
    if mobile.is_empty() {
        Some("Mobile Number is required")
    } else if !mobile.bytes().all(|b| b.is_ascii_digit()) {
        Some("Mobile must contain only digits")
    } else if mobile.len() != MOBILE_NUMBER_LEN {
        Some("Mobile number must be exactly 10 digits")
    } else {
        None
    }
}

/// Keeps digits only, capped at the mobile number length.
pub fn sanitize_mobile(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MOBILE_NUMBER_LEN)
        .collect()
}

pub fn is_password_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if !is_password_valid(password) {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

pub fn confirm_password_error(password: &str, confirm_password: &str) -> Option<&'static str> {
    if confirm_password.is_empty() {
        Some("Confirm Password is required")
    } else if !password.is_empty() && confirm_password != password {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// One failed check on one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

fn collect(checks: impl IntoIterator<Item = (&'static str, Option<&'static str>)>) -> Vec<FieldError> {
    checks
        .into_iter()
        .filter_map(|(field, message)| message.map(|message| FieldError { field, message }))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldError> {
        collect([
            ("email", email_error(&self.email)),
            ("password", password_error(&self.password)),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let required = |value: &str, message: &'static str| value.is_empty().then_some(message);
        let role_error = if self.role.is_empty() {
            Some("Role is required")
        } else if !ROLES.contains(&self.role.as_str()) {
            Some("Please select a valid role")
        } else {
            None
        };
        collect([
            ("firstName", required(&self.first_name, "First Name is required")),
            ("lastName", required(&self.last_name, "Last Name is required")),
            ("mobileNumber", mobile_error(&self.mobile_number)),
            ("email", email_error(&self.email)),
            ("password", password_error(&self.password)),
            ("confirmPassword", confirm_password_error(&self.password, &self.confirm_password)),
            ("role", role_error),
        ])
    }
}
