//! Input validation for auth credentials and booking forms.
//!
//! Validation failures are CLI argument errors; they never reach the
//! wire, so the messages are written for direct display.

use crate::error::CliError;
use chrono::NaiveDate;

pub fn validate_email(email: &str) -> crate::Result<()> {
    if email.is_empty() {
        return Err(CliError::InvalidArguments("Email is required".to_string()).into());
    }
    if email.len() > 254 {
        return Err(CliError::InvalidArguments("Email is too long".to_string()).into());
    }
    // Local part, exactly one @, and a dotted domain.
    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        _ => false,
    };
    if !valid {
        return Err(
            CliError::InvalidArguments("Please enter a valid email address".to_string()).into(),
        );
    }
    Ok(())
}

pub fn validate_password(password: &str) -> crate::Result<()> {
    if password.is_empty() {
        return Err(CliError::InvalidArguments("Password is required".to_string()).into());
    }
    if password.len() < 6 {
        return Err(CliError::InvalidArguments(
            "Password must be at least 6 characters".to_string(),
        )
        .into());
    }
    if password.len() > 128 {
        return Err(CliError::InvalidArguments("Password is too long".to_string()).into());
    }
    Ok(())
}

pub fn validate_name(name: &str, field_name: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArguments(format!("{} is required", field_name)).into());
    }
    if name.trim().len() < 2 {
        return Err(CliError::InvalidArguments(format!(
            "{} must be at least 2 characters",
            field_name
        ))
        .into());
    }
    if name.len() > 50 {
        return Err(CliError::InvalidArguments(format!("{} is too long", field_name)).into());
    }
    Ok(())
}

/// Accepts 10-digit numbers with an optional country prefix; separators
/// and spaces are ignored.
pub fn validate_phone(phone: &str) -> crate::Result<()> {
    if phone.is_empty() {
        return Err(CliError::InvalidArguments("Phone number is required".to_string()).into());
    }
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 10 || digits.len() > 13 {
        return Err(CliError::InvalidArguments(
            "Please enter a valid 10-digit phone number".to_string(),
        )
        .into());
    }
    Ok(())
}

pub fn validate_date(date: &str, field_name: &str) -> crate::Result<()> {
    parse_date(date, field_name)?;
    Ok(())
}

fn parse_date(date: &str, field_name: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArguments(format!(
            "Please enter a valid {} (YYYY-MM-DD format)",
            field_name
        ))
        .into()
    })
}

pub fn validate_time(time: &str, field_name: &str) -> crate::Result<()> {
    let valid = match time.split_once(':') {
        Some((h, m)) => {
            h.parse::<u8>().is_ok_and(|h| h < 24) && m.parse::<u8>().is_ok_and(|m| m < 60)
                && m.len() == 2
        }
        None => false,
    };
    if !valid {
        return Err(CliError::InvalidArguments(format!(
            "Please enter a valid {} (HH:MM format)",
            field_name
        ))
        .into());
    }
    Ok(())
}

pub fn validate_party_size(size: u64) -> crate::Result<()> {
    if size == 0 || size > 20 {
        return Err(
            CliError::InvalidArguments("Party size must be between 1 and 20".to_string()).into(),
        );
    }
    Ok(())
}

/// Check-out must be strictly after check-in, both valid dates.
pub fn validate_check_in_out(check_in: &str, check_out: &str) -> crate::Result<()> {
    let start = parse_date(check_in, "check-in date")?;
    let end = parse_date(check_out, "check-out date")?;
    if end <= start {
        return Err(CliError::InvalidArguments(
            "Check-out date must be after check-in date".to_string(),
        )
        .into());
    }
    Ok(())
}

pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }
    Ok(())
}
