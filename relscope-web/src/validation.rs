//! Validation logic for the registration form.
//!
//! Extracted from the form component to keep the rules testable without a
//! browser.

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
    /// Password is too short (less than 8 characters)
    PasswordTooShort,
    /// Password confirmation doesn't match password
    PasswordsDoNotMatch,
}

impl ValidationError {
    /// The message shown next to the offending field.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::InvalidEmail => "Enter a valid email address",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordsDoNotMatch => "Passwords do not match",
        }
    }
}

/// Validates a display-name field (first or last name).
///
/// # Validation rules
/// - The name must not be empty
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates a password.
///
/// # Validation rules
/// - Password must not be empty
/// - Password must be at least 8 characters long
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if password.len() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates that the password confirmation matches the password.
pub fn validate_confirm_password(
    confirm_password: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if confirm_password != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_name("de la Cruz").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
        assert!(validate_email("a@b").is_ok()); // Minimal valid case
    }

    #[test]
    fn test_validate_email_invalid() {
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        assert_eq!(validate_email("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_email("userexample.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_validate_password_valid() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok()); // Exactly 8 characters
    }

    #[test]
    fn test_validate_password_invalid() {
        assert_eq!(validate_password(""), Err(ValidationError::Required));
        assert_eq!(
            validate_password("1234567"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("password123", "password123").is_ok());
        assert_eq!(
            validate_confirm_password("", "password123"),
            Err(ValidationError::Required)
        );
        assert_eq!(
            validate_confirm_password("different", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        // Case sensitive comparison
        assert_eq!(
            validate_confirm_password("Password123", "password123"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_error_messages_are_nonempty() {
        let errors = [
            ValidationError::Required,
            ValidationError::InvalidEmail,
            ValidationError::PasswordTooShort,
            ValidationError::PasswordsDoNotMatch,
        ];
        for error in errors {
            assert!(!error.message().is_empty());
        }
    }

    #[test]
    fn test_complete_registration_inputs() {
        assert!(validate_name("Ada").is_ok());
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_password("password123").is_ok());
        assert!(validate_confirm_password("password123", "password123").is_ok());
    }
}
