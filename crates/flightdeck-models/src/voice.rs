//! Flight-number extraction from free-text speech transcripts.
//!
//! Speech recognition hands the UI a raw transcript such as `"KL 692"`,
//! `"LH four five six"` or something entirely unrelated. [`parse_flight_number`]
//! makes a deterministic best-guess extraction and returns `None` when no
//! guess is possible; the caller then falls back to using the raw transcript
//! as the flight-number field.

// ---------------------------------------------------------------------------
// parse_flight_number
// ---------------------------------------------------------------------------

/// Extract a best-guess IATA flight number from a transcript.
///
/// The algorithm applies two strategies in order, first success wins:
///
/// 1. **Direct pattern** — the first occurrence of 2–3 consecutive letters
///    followed (optionally across whitespace) by 2–4 consecutive digits,
///    concatenated without a separator: `"KL 692"` → `"KL692"`.
/// 2. **Token scan** — split on whitespace; the first 2–3-letter token is
///    the airline code (later letter tokens are ignored), and every digit
///    token or spelled digit word (`"ZERO"`…`"NINE"`) is appended in order
///    to the digit string. Both parts must be present.
///
/// Total and deterministic over arbitrary input; never panics.
///
/// # Examples
///
/// ```
/// use flightdeck_models::parse_flight_number;
///
/// assert_eq!(parse_flight_number("KL 692").as_deref(), Some("KL692"));
/// assert_eq!(parse_flight_number("LH four five six").as_deref(), Some("LH456"));
/// assert_eq!(parse_flight_number("692"), None);
/// assert_eq!(parse_flight_number(""), None);
/// ```
pub fn parse_flight_number(transcript: &str) -> Option<String> {
    let cleaned = transcript.trim().to_uppercase();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(found) = direct_match(&cleaned) {
        return Some(found);
    }

    token_scan(&cleaned)
}

/// Scan for the first `[A-Z]{2,3}\s*[0-9]{2,4}` occurrence.
///
/// Matches the leftmost starting position, preferring the longest letter run
/// (up to 3) that still leads to digits, with digits taken greedily up to 4.
/// No word boundaries are required on either side.
fn direct_match(cleaned: &str) -> Option<String> {
    let chars: Vec<char> = cleaned.chars().collect();
    for start in 0..chars.len() {
        for letter_len in (2..=3).rev() {
            let end = start + letter_len;
            if end > chars.len() || !chars[start..end].iter().all(|c| c.is_ascii_uppercase()) {
                continue;
            }
            let mut pos = end;
            while pos < chars.len() && chars[pos].is_whitespace() {
                pos += 1;
            }
            let digits_start = pos;
            while pos < chars.len() && chars[pos].is_ascii_digit() && pos - digits_start < 4 {
                pos += 1;
            }
            if pos - digits_start >= 2 {
                let letters: String = chars[start..end].iter().collect();
                let digits: String = chars[digits_start..pos].iter().collect();
                return Some(letters + &digits);
            }
        }
    }
    None
}

/// Fallback: pair the first short letter token with accumulated digits.
fn token_scan(cleaned: &str) -> Option<String> {
    let mut airline_code: Option<&str> = None;
    let mut digits = String::new();

    for word in cleaned.split_whitespace() {
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
            digits.push_str(word);
            continue;
        }

        // Digit words win over code capture: "SIX" is a digit, not an
        // airline code, even though it is three letters long.
        if let Some(digit) = digit_word(word) {
            digits.push(digit);
            continue;
        }

        let is_short_code =
            (2..=3).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase());
        if is_short_code {
            // Only the first code-shaped token counts.
            airline_code.get_or_insert(word);
        }
    }

    match (airline_code, digits.is_empty()) {
        (Some(code), false) => Some(format!("{code}{digits}")),
        _ => None,
    }
}

/// Spelled-out digit words recognised by the token scan.
fn digit_word(word: &str) -> Option<char> {
    Some(match word {
        "ZERO" => '0',
        "ONE" => '1',
        "TWO" => '2',
        "THREE" => '3',
        "FOUR" => '4',
        "FIVE" => '5',
        "SIX" => '6',
        "SEVEN" => '7',
        "EIGHT" => '8',
        "NINE" => '9',
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_pattern_with_space() {
        assert_eq!(parse_flight_number("KL 692").as_deref(), Some("KL692"));
    }

    #[test]
    fn direct_pattern_adjacent() {
        assert_eq!(parse_flight_number("LH456").as_deref(), Some("LH456"));
    }

    #[test]
    fn direct_pattern_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_flight_number("  kl 692  ").as_deref(), Some("KL692"));
    }

    #[test]
    fn first_direct_match_wins() {
        assert_eq!(
            parse_flight_number("KL 692 or maybe LH 456").as_deref(),
            Some("KL692")
        );
    }

    #[test]
    fn three_letter_codes_and_four_digits() {
        assert_eq!(parse_flight_number("KLM 1234").as_deref(), Some("KLM1234"));
    }

    #[test]
    fn digits_are_capped_at_four() {
        assert_eq!(parse_flight_number("KL 12345").as_deref(), Some("KL1234"));
    }

    #[test]
    fn spoken_digit_words() {
        assert_eq!(
            parse_flight_number("LH four five six").as_deref(),
            Some("LH456")
        );
        assert_eq!(
            parse_flight_number("KL six nine two").as_deref(),
            Some("KL692")
        );
    }

    #[test]
    fn long_airline_names_are_not_codes() {
        // "LUFTHANSA" is not a 2-3 letter token, so nothing pairs with the
        // digit words and the caller falls back to the raw transcript.
        assert_eq!(parse_flight_number("lufthansa four five six"), None);
    }

    #[test]
    fn digits_only_yields_none() {
        assert_eq!(parse_flight_number("692"), None);
    }

    #[test]
    fn empty_and_blank_yield_none() {
        assert_eq!(parse_flight_number(""), None);
        assert_eq!(parse_flight_number("   "), None);
    }

    #[test]
    fn first_code_shaped_token_is_kept() {
        assert_eq!(
            parse_flight_number("KL not BA six nine two").as_deref(),
            Some("KL692")
        );
    }

    #[test]
    fn mixed_digit_tokens_and_words_accumulate_in_order() {
        assert_eq!(parse_flight_number("KL 6 nine 2").as_deref(), Some("KL692"));
    }

    #[test]
    fn digit_words_are_never_captured_as_airline_codes() {
        // "SIX" and "TWO" are code-shaped but must count as digits.
        assert_eq!(parse_flight_number("six nine two"), None);
    }

    #[test]
    fn unrelated_text_yields_none() {
        assert_eq!(parse_flight_number("what is the weather tomorrow"), None);
    }

    #[test]
    fn unicode_input_does_not_panic() {
        assert_eq!(parse_flight_number("vol aérien números"), None);
    }
}
