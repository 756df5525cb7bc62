/// Title-cases each space-separated word: "john doe" -> "John Doe".
/// Consecutive spaces are preserved as entered.
pub fn capitalize_full_name(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Derives uppercase initials from a full name, skipping empty words:
/// "Mary Jane Watson" -> "MJW", "" -> "".
pub fn generate_initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).flat_map(char::to_uppercase).collect()
}

/// Makes a full name safe for use in an uploaded filename.
pub fn sanitize_screenshot_name(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_full_name() {
        assert_eq!(capitalize_full_name("john doe"), "John Doe");
        assert_eq!(capitalize_full_name("MARY JANE watson"), "Mary Jane Watson");
        assert_eq!(capitalize_full_name(""), "");
        assert_eq!(capitalize_full_name("o"), "O");
    }

    #[test]
    fn test_generate_initials() {
        assert_eq!(generate_initials("Mary Jane Watson"), "MJW");
        assert_eq!(generate_initials("john doe"), "JD");
        assert_eq!(generate_initials(""), "");
    }

    #[test]
    fn test_generate_initials_ignores_extra_whitespace() {
        assert_eq!(generate_initials("  Mary   Jane  "), "MJ");
        assert_eq!(generate_initials("   "), "");
    }

    #[test]
    fn test_sanitize_screenshot_name() {
        assert_eq!(sanitize_screenshot_name("John Doe"), "John_Doe");
        assert_eq!(sanitize_screenshot_name("a/b c"), "a_b_c");
    }
}
