use thiserror::Error;

/// Calculation and reporting errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HedgeError {
    /// Negative stake, non-positive odds, empty list or malformed selection
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reporter received a value it cannot format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, HedgeError>;

/// Validation functions
pub fn validate_stake(name: &str, stake: f64) -> Result<()> {
    if !stake.is_finite() || stake < 0.0 {
        return Err(HedgeError::InvalidParameter(format!(
            "{} must be a non-negative amount, got {}",
            name, stake
        )));
    }
    Ok(())
}

pub fn validate_odds(name: &str, odds: f64) -> Result<()> {
    if !odds.is_finite() || odds <= 0.0 {
        return Err(HedgeError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, odds
        )));
    }
    Ok(())
}

pub fn validate_fraction(name: &str, fraction: f64) -> Result<()> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(HedgeError::InvalidParameter(format!(
            "{} must be in (0, 1], got {}",
            name, fraction
        )));
    }
    Ok(())
}

pub fn validate_not_empty<T>(name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(HedgeError::InvalidParameter(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}

pub fn validate_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(HedgeError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_stake_valid() {
        assert!(validate_stake("stake", 0.0).is_ok());
        assert!(validate_stake("stake", 100.0).is_ok());
    }

    #[test]
    fn test_validate_stake_invalid() {
        assert!(validate_stake("stake", -0.01).is_err());
        assert!(validate_stake("stake", f64::NAN).is_err());
        assert!(validate_stake("stake", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_odds_valid() {
        assert!(validate_odds("odds", 0.5).is_ok());
        assert!(validate_odds("odds", 1200.0).is_ok());
    }

    #[test]
    fn test_validate_odds_invalid() {
        assert!(validate_odds("odds", 0.0).is_err());
        assert!(validate_odds("odds", -3.0).is_err());
    }

    #[test]
    fn test_validate_fraction() {
        assert!(validate_fraction("place_fraction", 0.25).is_ok());
        assert!(validate_fraction("place_fraction", 1.0).is_ok());
        assert!(validate_fraction("place_fraction", 0.0).is_err());
        assert!(validate_fraction("place_fraction", 1.5).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hedges", &[1]).is_ok());
        assert!(validate_not_empty::<u8>("hedges", &[]).is_err());
    }

    #[test]
    fn test_validate_finite_is_input_error() {
        assert!(validate_finite("profit", 12.5).is_ok());
        assert!(matches!(
            validate_finite("profit", f64::NAN),
            Err(HedgeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let err = HedgeError::InvalidParameter("test error".to_string());
        assert!(err.to_string().contains("Invalid parameter"));

        let err = HedgeError::InvalidInput("bad".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad");
    }
}
