//! Validation utilities for AgroAssist

use rust_decimal::Decimal;

/// Validate account username (3-32 chars, lowercase letters, digits, underscore)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 32 {
        return Err("Username must be 3-32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err("Username may contain only lowercase letters, digits and underscore");
    }
    Ok(())
}

/// Validate account password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate a ledger amount (strictly positive)
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Amount must be greater than zero");
    }
    Ok(())
}

/// Validate a city name for forecast lookups
pub fn validate_city_name(city: &str) -> Result<(), &'static str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err("City name cannot be empty");
    }
    if trimmed.len() > 80 {
        return Err("City name is too long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usernames() {
        assert!(validate_username("ravi_kumar").is_ok());
        assert!(validate_username("farmer42").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("Ravi").is_err());
        assert!(validate_username("ravi kumar").is_err());
    }

    #[test]
    fn test_passwords() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_amounts() {
        assert!(validate_amount(Decimal::new(100, 2)).is_ok());
        assert!(validate_amount(Decimal::ZERO).is_err());
        assert!(validate_amount(Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_city_names() {
        assert!(validate_city_name("Hyderabad").is_ok());
        assert!(validate_city_name("  ").is_err());
    }
}
