use crate::core::dictionary::Dictionary;
use num_integer::lcm;

pub use super::errors::DecodeError;

fn bits_per_char(dictionary: &Dictionary) -> usize {
    dictionary.base().trailing_zeros() as usize
}

/// Encodes bytes by emitting `log2(base)` bits per character (RFC 4648).
pub fn encode_chunked(data: &[u8], dictionary: &Dictionary) -> String {
    let bits_per_char = bits_per_char(dictionary);

    let output_chars = (data.len() * 8).div_ceil(bits_per_char);
    let mut result = String::with_capacity(output_chars + 8);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mask = (1u32 << bits_per_char) - 1;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            push_digit(&mut result, dictionary, index);
        }
    }

    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        push_digit(&mut result, dictionary, index);
    }

    if let Some(pad_char) = dictionary.padding() {
        // Base64: LCM(6,8)=24, group=24/6=4
        // Base32: LCM(5,8)=40, group=40/5=8
        let group_size = lcm(bits_per_char, 8) / bits_per_char;
        let padded_chars = output_chars.div_ceil(group_size) * group_size;

        for _ in output_chars..padded_chars {
            result.push(pad_char);
        }
    }

    result
}

fn push_digit(out: &mut String, dictionary: &Dictionary, index: usize) {
    // index is masked to bits_per_char, so it is always < base
    if let Some(c) = dictionary.encode_digit(index) {
        out.push(c);
    }
}

/// Decodes RFC 4648 chunked text. Padding is optional; once a padding
/// character appears, only padding may follow.
pub fn decode_chunked(encoded: &str, dictionary: &Dictionary) -> Result<Vec<u8>, DecodeError> {
    let bits_per_char = bits_per_char(dictionary);
    let padding = dictionary.padding();

    let mut result = Vec::with_capacity((encoded.len() * bits_per_char) / 8);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut data_chars = 0usize;
    let mut in_padding = false;

    for (position, c) in encoded.chars().enumerate() {
        if Some(c) == padding {
            in_padding = true;
            continue;
        }

        if in_padding {
            return Err(DecodeError::invalid_character(
                c,
                position,
                dictionary.name(),
            ));
        }

        let digit = dictionary
            .decode_char(c)
            .ok_or_else(|| DecodeError::invalid_character(c, position, dictionary.name()))?;

        bit_buffer = (bit_buffer << bits_per_char) | (digit as u32);
        bits_in_buffer += bits_per_char;
        data_chars += 1;

        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    // A whole character left over means the input was truncated
    if bits_in_buffer >= bits_per_char {
        return Err(DecodeError::invalid_length(
            data_chars,
            "a complete final group",
            dictionary.name(),
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabets::{base32, base64, base64url};

    #[test]
    fn test_rfc4648_base64_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (plain, encoded) in vectors {
            assert_eq!(encode_chunked(plain, base64()), encoded);
            assert_eq!(decode_chunked(encoded, base64()).unwrap(), plain);
        }
    }

    #[test]
    fn test_rfc4648_base32_vectors() {
        let vectors: [(&[u8], &str); 4] = [
            (b"f", "MY======"),
            (b"fo", "MZXQ===="),
            (b"foob", "MZXW6YQ="),
            (b"foobar", "MZXW6YTBOI======"),
        ];
        for (plain, encoded) in vectors {
            assert_eq!(encode_chunked(plain, base32()), encoded);
            assert_eq!(decode_chunked(encoded, base32()).unwrap(), plain);
        }
    }

    #[test]
    fn test_unpadded_input_accepted() {
        assert_eq!(decode_chunked("aGVsbG8", base64()).unwrap(), b"hello");
        assert_eq!(encode_chunked(b"hello", base64url()), "aGVsbG8");
    }

    #[test]
    fn test_data_after_padding_rejected() {
        let err = decode_chunked("Zg==Zg==", base64()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidCharacter { char: 'Z', position: 4, .. }
        ));
    }

    #[test]
    fn test_truncated_input_rejected() {
        let err = decode_chunked("Zm9vY", base64()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLength { actual: 5, .. }));
    }

    #[test]
    fn test_invalid_character() {
        let err = decode_chunked("ab$d", base64()).unwrap_err();
        assert_eq!(err, DecodeError::invalid_character('$', 2, "base64"));
    }
}
