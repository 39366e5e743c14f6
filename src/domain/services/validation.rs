//! Input validation for the portal's forms.
//!
//! Every function takes the raw submitted strings and returns either a typed,
//! normalized value or the first [`ValidationError`] encountered.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 120;
pub const EMAIL_MAX_LEN: usize = 120;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const REASON_MAX_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Full name must be between 2 and 120 characters")]
    NameLength,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Not a valid choice")]
    InvalidChoice,
    #[error("Not a valid date value (expected YYYY-MM-DD)")]
    InvalidDate,
    #[error("Not a valid time value (expected HH:MM)")]
    InvalidTime,
    #[error("Reason must be at most 255 characters")]
    ReasonTooLong,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Missing(field)),
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_email(email: Option<&str>) -> Result<String, ValidationError> {
    let email = normalize_email(required(email, "Email")?);
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

pub fn validate_registration(
    full_name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
    confirm: Option<&str>,
) -> Result<Registration, ValidationError> {
    let full_name = required(full_name, "Full name")?;
    let name_len = full_name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
        return Err(ValidationError::NameLength);
    }

    let email = validate_email(email)?;

    // Passwords are not trimmed; surrounding whitespace is part of the secret.
    let password = password.filter(|p| !p.is_empty()).ok_or(ValidationError::Missing("Password"))?;
    validate_password(password)?;

    let confirm = confirm.filter(|c| !c.is_empty()).ok_or(ValidationError::Missing("Confirm Password"))?;
    if confirm != password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(Registration {
        full_name: full_name.to_string(),
        email,
        password: password.to_string(),
    })
}

pub fn validate_login(email: Option<&str>, password: Option<&str>) -> Result<Credentials, ValidationError> {
    let email = validate_email(email)?;
    let password = password.filter(|p| !p.is_empty()).ok_or(ValidationError::Missing("Password"))?;
    Ok(Credentials {
        email,
        password: password.to_string(),
    })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime)
}

/// Checks the booking form. Whether `doctor_id` refers to an existing doctor
/// is left to the caller since it needs storage.
pub fn validate_booking(
    doctor_id: Option<&str>,
    date: Option<&str>,
    time: Option<&str>,
    reason: Option<&str>,
) -> Result<BookingRequest, ValidationError> {
    let doctor_id = required(doctor_id, "Doctor")?
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidChoice)?;

    let date = parse_date(required(date, "Date")?)?;
    let time = parse_time(required(time, "Time")?)?;

    let reason = reason.map(str::trim).filter(|r| !r.is_empty());
    if let Some(r) = reason {
        if r.chars().count() > REASON_MAX_LEN {
            return Err(ValidationError::ReasonTooLong);
        }
    }

    Ok(BookingRequest {
        doctor_id,
        date,
        time,
        reason: reason.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalization() {
        assert_eq!(normalize_email("  Demo@MediCare.App "), "demo@medicare.app");
        assert_eq!(validate_email(Some(" A@B.co ")).unwrap(), "a@b.co");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("demo@medicare.app"));
        assert!(!is_valid_email("demo"));
        assert!(!is_valid_email("@medicare.app"));
        assert!(!is_valid_email("demo@medicare"));
        assert!(!is_valid_email("demo@.app"));
        assert!(!is_valid_email("de mo@medicare.app"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_registration_rules() {
        let ok = validate_registration(Some("Jane Roe"), Some("Jane@Example.com"), Some("secret1"), Some("secret1")).unwrap();
        assert_eq!(ok.email, "jane@example.com");
        assert_eq!(ok.full_name, "Jane Roe");

        assert_eq!(
            validate_registration(Some("J"), Some("j@example.com"), Some("secret1"), Some("secret1")),
            Err(ValidationError::NameLength)
        );
        assert_eq!(
            validate_registration(Some("Jane"), Some("not-an-email"), Some("secret1"), Some("secret1")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_registration(Some("Jane"), Some("j@example.com"), Some("12345"), Some("12345")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_registration(Some("Jane"), Some("j@example.com"), Some("secret1"), Some("secret2")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration(None, Some("j@example.com"), Some("secret1"), Some("secret1")),
            Err(ValidationError::Missing("Full name"))
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login(Some("a@b.co"), Some("")), Err(ValidationError::Missing("Password")));
        assert_eq!(validate_login(Some(""), Some("x")), Err(ValidationError::Missing("Email")));
        assert!(validate_login(Some("a@b.co"), Some("x")).is_ok());
    }

    #[test]
    fn test_booking_rules() {
        let ok = validate_booking(Some("3"), Some("2030-05-01"), Some("09:30"), Some("  ")).unwrap();
        assert_eq!(ok.doctor_id, 3);
        assert_eq!(ok.time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(ok.reason, None);

        let with_seconds = validate_booking(Some("3"), Some("2030-05-01"), Some("09:30:15"), None).unwrap();
        assert_eq!(with_seconds.time, NaiveTime::from_hms_opt(9, 30, 15).unwrap());

        assert_eq!(validate_booking(Some("x"), Some("2030-05-01"), Some("09:30"), None), Err(ValidationError::InvalidChoice));
        assert_eq!(validate_booking(Some("3"), None, Some("09:30"), None), Err(ValidationError::Missing("Date")));
        assert_eq!(validate_booking(Some("3"), Some("01/05/2030"), Some("09:30"), None), Err(ValidationError::InvalidDate));
        assert_eq!(validate_booking(Some("3"), Some("2030-05-01"), Some("9am"), None), Err(ValidationError::InvalidTime));

        let long = "x".repeat(REASON_MAX_LEN + 1);
        assert_eq!(validate_booking(Some("3"), Some("2030-05-01"), Some("09:30"), Some(&long)), Err(ValidationError::ReasonTooLong));
        let max = "x".repeat(REASON_MAX_LEN);
        assert!(validate_booking(Some("3"), Some("2030-05-01"), Some("09:30"), Some(&max)).is_ok());
    }
}
