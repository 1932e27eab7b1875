use thiserror::Error;

/// Errors that can occur while decoding text back into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a character not in the dictionary
    #[error("invalid character '{char}' at position {position} for alphabet {alphabet}")]
    InvalidCharacter {
        char: char,
        position: usize,
        alphabet: String,
    },
    /// Invalid length for the encoding format
    #[error("invalid length {actual} for {alphabet}, expected {expected}")]
    InvalidLength {
        actual: usize,
        expected: String,
        alphabet: String,
    },
}

impl DecodeError {
    /// Create an InvalidCharacter error
    pub fn invalid_character(c: char, position: usize, alphabet: &str) -> Self {
        DecodeError::InvalidCharacter {
            char: c,
            position,
            alphabet: alphabet.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(actual: usize, expected: impl Into<String>, alphabet: &str) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            alphabet: alphabet.to_string(),
        }
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching name, if any is within a small edit distance.
///
/// Ties go to the earliest candidate, so the result follows the order of
/// `available`.
pub fn find_closest_name<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // 1-2 character typos for short names, up to 3 for longer names
    let threshold = if name.len() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}
