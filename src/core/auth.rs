use crate::error::{AppError, CliError};
use crate::utils::validation;
use rpassword::read_password;
use std::io::{self, Write};

fn prompt_line(label: &str) -> Result<String, AppError> {
    print!("{}: ", label);
    io::stdout().flush().map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to flush stdout: {}",
            e
        )))
    })?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to read {}: {}",
            label, e
        )))
    })?;
    Ok(input.trim().to_string())
}

fn prompt_password() -> Result<String, AppError> {
    print!("Password: ");
    io::stdout().flush().map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to flush stdout: {}",
            e
        )))
    })?;

    let password = read_password().map_err(|e| {
        AppError::Cli(CliError::InvalidArguments(format!(
            "Failed to read password: {}",
            e
        )))
    })?;
    Ok(password.trim().to_string())
}

/// Login credentials collected interactively.
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn collect() -> Result<Self, AppError> {
        let email = prompt_line("Email")?;
        let password = prompt_password()?;
        Ok(Self { email, password })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validation::validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(AppError::Cli(CliError::InvalidArguments(
                "Password cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}

/// Signup details collected interactively. Stricter than login: the
/// password policy applies to new accounts only.
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl SignupInput {
    pub fn collect() -> Result<Self, AppError> {
        let full_name = prompt_line("Full name")?;
        let email = prompt_line("Email")?;
        let phone = prompt_line("Phone")?;
        let password = prompt_password()?;
        Ok(Self {
            full_name,
            email,
            password,
            phone,
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validation::validate_name(&self.full_name, "Full name")?;
        validation::validate_email(&self.email)?;
        validation::validate_password(&self.password)?;
        validation::validate_phone(&self.phone)?;
        Ok(())
    }
}
