//! Text case mapping.

/// Uppercase every ASCII letter, leaving all other characters untouched.
///
/// Locale independent. Non-ASCII letters such as `é` pass through as-is.
///
/// # Examples
/// ```
/// use firstcmake_utils::to_upper;
/// assert_eq!(to_upper("Hello, bob!"), "HELLO, BOB!");
/// assert_eq!(to_upper(""), "");
/// ```
pub fn to_upper(input: &str) -> String {
    input.to_ascii_uppercase()
}
