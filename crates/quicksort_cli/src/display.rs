use std::fmt::Display;

/// Renders a sequence as `[a, b, c]`.
pub fn format_sequence<T: Display>(data: &[T]) -> String {
    let mut out = String::from("[");
    for (i, value) in data.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&value.to_string());
    }
    out.push(']');
    out
}
