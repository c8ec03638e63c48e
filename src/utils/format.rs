use std::fmt::Display;

/// Render a sequence as `[a, b, c]`.
pub fn bracketed_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{}]", joined)
}

// NaN and the infinities print as Rust spells them: `NaN`, `inf`, `-inf`.
pub fn decimal(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}
