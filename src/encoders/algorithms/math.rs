use crate::core::dictionary::Dictionary;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

pub use super::errors::DecodeError;

/// Encodes bytes as a big-endian number written in the dictionary's radix.
///
/// Each leading zero byte becomes one leading zero-character.
pub fn encode(data: &[u8], dictionary: &Dictionary) -> String {
    if data.is_empty() {
        return String::new();
    }

    let zero = dictionary.zero_char();
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    if leading_zeros == data.len() {
        return zero.to_string().repeat(data.len());
    }

    let base = dictionary.base();
    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);

    // log2(base) bits per output digit
    let max_digits =
        ((data.len() - leading_zeros) * 8 * 1000) / (base as f64).log2() as usize / 1000 + 1;
    let mut result = Vec::with_capacity(max_digits + leading_zeros);

    let base_big = BigUint::from(base);

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base_big);
        // remainder < base, so it always fits and always has a character
        let digit = remainder.to_usize().unwrap_or(0);
        result.push(dictionary.encode_digit(digit).unwrap_or(zero));
        num = quotient;
    }

    result.extend(std::iter::repeat_n(zero, leading_zeros));

    result.reverse();
    result.into_iter().collect()
}

/// Decodes text written in the dictionary's radix back into bytes.
///
/// Each leading zero-character becomes one leading zero byte.
pub fn decode(encoded: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let base_big = BigUint::from(dictionary.base());
    let mut num = BigUint::zero();
    let mut leading_zeros = 0;

    for (position, c) in encoded.chars().enumerate() {
        let digit = dictionary
            .decode_char(c)
            .ok_or_else(|| DecodeError::invalid_character(c, position, dictionary.name()))?;

        if num.is_zero() && digit == 0 {
            leading_zeros += 1;
        } else {
            num *= &base_big;
            num += BigUint::from(digit);
        }
    }

    if num.is_zero() {
        return Ok(vec![0u8; leading_zeros]);
    }

    let bytes = num.to_bytes_be();

    let mut result = Vec::with_capacity(leading_zeros + bytes.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&bytes);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabets::basex_by_name;

    fn dict(name: &str) -> &'static Dictionary {
        basex_by_name(name).unwrap()
    }

    #[test]
    fn test_empty_roundtrip() {
        let d = dict("basex58");
        assert_eq!(encode(b"", d), "");
        assert_eq!(decode("", d).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_leading_zero_preservation() {
        let d = dict("basex58");
        let encoded = encode(&[0x00, 0x01], d);
        assert_eq!(encoded, "12");
        assert_eq!(decode(&encoded, d).unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_all_zero_bytes() {
        let d = dict("basex62");
        let encoded = encode(&[0, 0, 0], d);
        assert_eq!(encoded, "000");
        assert_eq!(decode(&encoded, d).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(b"hello", dict("basex58")), "Cn8eVZg");
        assert_eq!(encode(&[0xff], dict("basex16")), "ff");
        assert_eq!(encode(&[0x05], dict("basex2")), "101");
        assert_eq!(encode(&[0x0a], dict("basex11")), "a");
    }

    #[test]
    fn test_invalid_character() {
        let err = decode("12O0", dict("basex58")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                char: 'O',
                position: 2,
                alphabet: "basex58".to_string(),
            }
        );
    }

    #[test]
    fn test_roundtrip_every_alphabet() {
        let data: Vec<u8> = (0..=255u8).rev().chain(0..=255u8).collect();
        for d in crate::core::alphabets::basex() {
            let encoded = encode(&data, d);
            assert_eq!(decode(&encoded, d).unwrap(), data, "{}", d.name());
        }
    }
}
