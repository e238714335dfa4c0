use crate::error::WeatherError;

/// Validate a user-supplied city string before it reaches the network layer.
///
/// Returns the trimmed city name to use as the query parameter.
pub fn validate_city(input: &str) -> Result<&str, WeatherError> {
    let city = input.trim();

    if city.is_empty() {
        return Err(WeatherError::EmptyCity);
    }

    if !city
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || "-'.,".contains(c))
    {
        return Err(WeatherError::InvalidCity);
    }

    Ok(city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_rejected() {
        let err = validate_city("").unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));
        assert!(err.to_string().contains("enter a city name"));
    }

    #[test]
    fn whitespace_only_is_rejected() {
        assert!(matches!(
            validate_city("   ").unwrap_err(),
            WeatherError::EmptyCity
        ));
    }

    #[test]
    fn plain_city_is_accepted_and_trimmed() {
        assert_eq!(validate_city("  London ").unwrap(), "London");
    }

    #[test]
    fn city_with_spaces_is_accepted() {
        assert_eq!(validate_city("New York").unwrap(), "New York");
    }

    #[test]
    fn city_with_hyphens_and_apostrophes_is_accepted() {
        assert_eq!(
            validate_city("Stratford-upon-Avon").unwrap(),
            "Stratford-upon-Avon"
        );
        assert_eq!(validate_city("L'Aquila").unwrap(), "L'Aquila");
    }

    #[test]
    fn digits_are_rejected() {
        let err = validate_city("London123").unwrap_err();
        assert!(matches!(err, WeatherError::InvalidCity));
        assert!(err.to_string().contains("invalid characters"));
    }
}
