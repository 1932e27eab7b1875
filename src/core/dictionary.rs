use std::collections::HashMap;

use crate::core::config::EncodingMode;

/// An ordered character set used to turn bytes into text.
///
/// Each character's position is its digit value. The mode decides whether
/// the set is used for true radix conversion or RFC 4648 bit chunking.
#[derive(Debug, Clone)]
pub struct Dictionary {
    name: String,
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
    mode: EncodingMode,
    padding: Option<char>,
}

impl Dictionary {
    /// Creates a radix dictionary with no padding.
    ///
    /// # Errors
    ///
    /// Returns an error if the character set is empty or contains duplicates.
    pub fn new(name: impl Into<String>, chars: &str) -> Result<Self, String> {
        Self::new_with_mode(name, chars, EncodingMode::Radix, None)
    }

    /// Creates a dictionary with an explicit encoding mode and optional padding.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The character set is empty or contains duplicates
    /// - Chunked mode is used with a non-power-of-two size
    /// - The padding character is also a member of the set
    pub fn new_with_mode(
        name: impl Into<String>,
        chars: &str,
        mode: EncodingMode,
        padding: Option<char>,
    ) -> Result<Self, String> {
        let name = name.into();
        let chars: Vec<char> = chars.chars().collect();

        if chars.len() < 2 {
            return Err(format!(
                "Dictionary '{}' needs at least two characters, got {}",
                name,
                chars.len()
            ));
        }

        if mode == EncodingMode::Chunked && !chars.len().is_power_of_two() {
            return Err(format!(
                "Chunked mode requires power-of-two dictionary size, got {}",
                chars.len()
            ));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if char_to_index.insert(c, i).is_some() {
                return Err(format!("Duplicate character in dictionary '{}': {}", name, c));
            }
        }

        if let Some(pad) = padding
            && char_to_index.contains_key(&pad)
        {
            return Err(format!(
                "Padding character '{}' is part of dictionary '{}'",
                pad, name
            ));
        }

        Ok(Dictionary {
            name,
            chars,
            char_to_index,
            mode,
            padding,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base (radix) of the dictionary.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    pub fn mode(&self) -> &EncodingMode {
        &self.mode
    }

    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the dictionary.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    /// The digit-zero character, repeated once per leading zero byte.
    pub fn zero_char(&self) -> char {
        self.chars[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicates() {
        let err = Dictionary::new("dup", "0120").unwrap_err();
        assert!(err.contains("Duplicate character"));
    }

    #[test]
    fn test_rejects_single_char() {
        assert!(Dictionary::new("one", "0").is_err());
    }

    #[test]
    fn test_chunked_requires_power_of_two() {
        assert!(Dictionary::new_with_mode("b3", "abc", EncodingMode::Chunked, None).is_err());
        assert!(Dictionary::new_with_mode("b4", "abcd", EncodingMode::Chunked, None).is_ok());
    }

    #[test]
    fn test_padding_must_not_collide() {
        let err = Dictionary::new_with_mode("b4", "abcd", EncodingMode::Chunked, Some('a'))
            .unwrap_err();
        assert!(err.contains("Padding character"));
    }

    #[test]
    fn test_digit_lookup() {
        let dict = Dictionary::new("b11", "0123456789a").unwrap();
        assert_eq!(dict.base(), 11);
        assert_eq!(dict.encode_digit(10), Some('a'));
        assert_eq!(dict.encode_digit(11), None);
        assert_eq!(dict.decode_char('a'), Some(10));
        assert_eq!(dict.decode_char('b'), None);
        assert_eq!(dict.zero_char(), '0');
    }
}
