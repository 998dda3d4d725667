use crate::error::CoreError;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::validate(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Accepts exactly ten ASCII digits, no separators or country prefix.
    pub fn validate(value: &str) -> Result<(), CoreError> {
        if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidPhone);
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Phone;
    use crate::error::CoreError;

    #[test]
    fn phone_accepts_ten_digits() {
        for value in ["0000000000", "0123456789", "9999999999", "4155551212"] {
            let phone = Phone::parse(value).unwrap();
            assert_eq!(phone.as_str(), value);
        }
    }

    #[test]
    fn phone_rejects_wrong_length() {
        for value in ["", "123456789", "12345678901", "415555121"] {
            assert_eq!(Phone::validate(value), Err(CoreError::InvalidPhone));
        }
    }

    #[test]
    fn phone_rejects_non_digits() {
        for value in [
            "415-555-12",
            "+141555512",
            "41555512ab",
            "415 555 12",
            "٠١٢٣٤٥٦٧٨٩",
        ] {
            assert_eq!(Phone::validate(value), Err(CoreError::InvalidPhone));
        }
    }

    #[test]
    fn phone_rejects_multibyte_with_ten_chars() {
        // ten characters, eleven bytes
        assert_eq!(Phone::validate("123456789é"), Err(CoreError::InvalidPhone));
    }
}
