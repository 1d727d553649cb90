use super::fields::{ErrorMap, FieldStore, CONFIRM_PASSWORD, EMAIL, PASSWORD, USERNAME};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const USERNAME_REQUIRED: &str = "Username is required";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const CREDENTIALS_REQUIRED: &str = "Please enter your credentials";

const USERNAME_MIN_CHARS: usize = 3;
const PASSWORD_MIN_CHARS: usize = 8;

/// Validates the registration form. Every field is checked
/// independently; the returned map contains an entry for each failing
/// field and nothing else. Pure and deterministic.
pub fn validate_signup(fields: &FieldStore) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let email = fields.value(EMAIL);
    if email.is_empty() {
        errors.insert(EMAIL.into(), EMAIL_REQUIRED.into());
    } else if !is_valid_email(email) {
        errors.insert(EMAIL.into(), EMAIL_INVALID.into());
    }

    let username = fields.value(USERNAME);
    if username.is_empty() {
        errors.insert(USERNAME.into(), USERNAME_REQUIRED.into());
    } else if username.chars().count() < USERNAME_MIN_CHARS {
        errors.insert(USERNAME.into(), USERNAME_TOO_SHORT.into());
    }

    let password = fields.value(PASSWORD);
    if password.is_empty() {
        errors.insert(PASSWORD.into(), PASSWORD_REQUIRED.into());
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.insert(PASSWORD.into(), PASSWORD_TOO_SHORT.into());
    }

    let confirm = fields.value(CONFIRM_PASSWORD);
    if confirm.is_empty() {
        errors.insert(CONFIRM_PASSWORD.into(), CONFIRM_PASSWORD_REQUIRED.into());
    } else if confirm != password {
        // Byte-for-byte comparison.
        errors.insert(CONFIRM_PASSWORD.into(), PASSWORDS_DO_NOT_MATCH.into());
    }

    errors
}

/// Sign-in precondition. The login form does not produce per-field
/// errors; either field being empty blocks submission with one
/// combined message.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CREDENTIALS_REQUIRED.into());
    }
    Ok(())
}

/// `local@domain.tld` shape: no whitespace, a single `@`, and a dotted
/// domain with non-empty labels around the last dot.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
