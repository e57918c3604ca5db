//! Form Helpers
//!
//! Pure string normalization for the booking form fields.

/// Proper-case a name: first letter of each word upper, rest lower.
/// Words are joined with single spaces ("john doe" -> "John Doe").
pub fn proper_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Strip everything but ASCII digits ("(778) 123-4567" -> "7781234567").
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Apply the (###) ###-#### mask progressively while typing.
/// Ignores non-digits in the input and caps at 10 digits, so pasting a
/// formatted number or typing past the end both come out right.
pub fn format_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_case() {
        assert_eq!(proper_case("john doe"), "John Doe");
        assert_eq!(proper_case("JOHN DOE"), "John Doe");
        assert_eq!(proper_case("  mary   anne  "), "Mary Anne");
        assert_eq!(proper_case(""), "");
        assert_eq!(proper_case("x"), "X");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(778) 123-4567"), "7781234567");
        assert_eq!(digits_only("no digits"), "");
        assert_eq!(digits_only("+1 604 555 0199"), "16045550199");
    }

    #[test]
    fn test_format_phone_progression() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("7"), "(7");
        assert_eq!(format_phone("778"), "(778");
        assert_eq!(format_phone("7781"), "(778) 1");
        assert_eq!(format_phone("778123"), "(778) 123");
        assert_eq!(format_phone("7781234"), "(778) 123-4");
        assert_eq!(format_phone("7781234567"), "(778) 123-4567");
    }

    #[test]
    fn test_format_phone_reformats_pasted_input() {
        // Pasting an already formatted number keeps it stable
        assert_eq!(format_phone("(778) 123-4567"), "(778) 123-4567");
        // Digits past the mask are dropped
        assert_eq!(format_phone("77812345678999"), "(778) 123-4567");
        assert_eq!(format_phone("778.123.4567 ext 9"), "(778) 123-4567");
    }

    #[test]
    fn test_format_phone_masks_adopted_digits() {
        // An adopted push stores the phone digits-only; the display re-masks it
        assert_eq!(format_phone("7781234567"), "(778) 123-4567");
        assert_eq!(format_phone("778123"), "(778) 123");
        // Re-masking an already masked value is a no-op at every length
        for masked in ["", "(7", "(778", "(778) 1", "(778) 123", "(778) 123-4567"] {
            assert_eq!(format_phone(masked), masked);
        }
    }
}
