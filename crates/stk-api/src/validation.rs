use crate::error::ApiError;

/// Academic years offered by the login form and the faculty year filter
pub const ACADEMIC_YEARS: std::ops::RangeInclusive<u8> = 1..=4;

/// Validate an academic year (1-4)
///
/// # Examples
/// ```
/// use stk_api::validation::validate_academic_year;
///
/// assert!(validate_academic_year(2).is_ok());
/// assert!(validate_academic_year(5).is_err());
/// ```
pub fn validate_academic_year(year: u8) -> Result<(), ApiError> {
    if !ACADEMIC_YEARS.contains(&year) {
        return Err(ApiError::Validation(format!(
            "Invalid academic year: {}. Must be between 1 and 4",
            year
        )));
    }

    Ok(())
}

/// Validate the shape of an email address.
///
/// Mirrors the original form's `required`/`type="email"` inputs: the address
/// must be non-empty and contain a `@` with something on both sides. Anything
/// further would be pretending the mock login verifies identities.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::Validation("Email cannot be empty".to_string()));
    }

    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(ApiError::Validation(format!(
            "Invalid email address: '{}'",
            email
        )));
    }

    Ok(())
}
