use crate::utils::error::{CepError, Result};
use std::fmt;

pub const CEP_LENGTH: usize = 8;

/// Strips dashes, periods and surrounding whitespace from a raw code.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '-' && *c != '.').collect();
    stripped.trim().to_string()
}

/// Checks a normalized code is non-blank and exactly eight characters long.
///
/// Character class is not checked; the upstream service rejects non-digit
/// codes on its own.
pub fn validate(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(CepError::invalid_input("O CEP não pode ser nulo ou vazio."));
    }

    let len = code.chars().count();
    if len != CEP_LENGTH {
        return Err(CepError::invalid_input(format!(
            "O CEP deve ter {} dígitos, foram informados {}.",
            CEP_LENGTH, len
        )));
    }

    Ok(())
}

/// A normalized, validated postal code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    pub fn parse(raw: &str) -> Result<Self> {
        let code = normalize(raw);
        validate(&code)?;
        Ok(Cep(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("01001-000"), "01001000");
        assert_eq!(normalize("01.001-000"), "01001000");
        assert_eq!(normalize("  01001000\n"), "01001000");
        assert_eq!(normalize(" 01.001-000 "), "01001000");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["01001-000", " 1.2-3 ", "abc", "", "- 01001000 .", "9.9.9.9-9-9-9-9"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert!(matches!(validate(""), Err(CepError::InvalidInput { .. })));
        assert!(matches!(validate("   "), Err(CepError::InvalidInput { .. })));
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        assert!(matches!(validate("1234567"), Err(CepError::InvalidInput { .. })));
        assert!(matches!(validate("123456789"), Err(CepError::InvalidInput { .. })));
    }

    #[test]
    fn test_validate_accepts_any_eight_characters() {
        assert!(validate("12345678").is_ok());
        assert!(validate("abcdefgh").is_ok());
        // Counted in characters, not bytes.
        assert!(validate("ççççãããã").is_ok());
    }

    #[test]
    fn test_cep_parse() {
        let cep = Cep::parse(" 01001-000 ").unwrap();
        assert_eq!(cep.as_str(), "01001000");
        assert_eq!(cep.to_string(), "01001000");

        assert!(Cep::parse("0100-100").is_err());
    }

    #[test]
    fn test_invalid_input_message_is_portuguese() {
        let err = validate("123").unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            "CEP inválido: O CEP deve ter 8 dígitos, foram informados 3."
        );

        let err = validate("").unwrap_err();
        assert_eq!(
            err.user_friendly_message(),
            "CEP inválido: O CEP não pode ser nulo ou vazio."
        );
    }
}
