//! Field escaping.

const QUOTE: char = '"';

/// Escape a field for CSV output.
///
/// A field wrapped in a pair of double quotes is unwrapped first, remaining
/// quotes are doubled and the result is wrapped in quotes. An empty field is
/// returned as is, so missing values stay bare.
///
/// ```
/// use csvify::sanitize_string_for_csv;
///
/// assert_eq!(sanitize_string_for_csv(r#"He said "hi""#), r#""He said ""hi""""#);
/// assert_eq!(sanitize_string_for_csv(""), "");
/// ```
pub fn sanitize_string_for_csv(field: &str) -> String {
    if field.is_empty() {
        return String::new();
    }

    // Positional unwrap, not a CSV parse. A lone `"` is left alone.
    let inner = if field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE) {
        &field[1..field.len() - 1]
    } else {
        field
    };

    quote_field(inner)
}

/// Double every quote and wrap the text in quotes. Empty text becomes `""`.
pub(crate) fn quote_field(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(QUOTE);
    for ch in text.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
    out
}
