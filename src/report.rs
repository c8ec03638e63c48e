use serde::Serialize;

use crate::utils::format::{bracketed_list, decimal};

/// Everything the program prints, collected for the JSON output.
#[derive(Debug, Serialize)]
pub struct Report {
    pub size: usize,
    pub array: Vec<i64>,
    // serde_json writes NaN as null.
    pub odd_index_average: f64,
    pub factorials: Vec<u128>,
}

pub fn array_line(array: &[i64]) -> String {
    format!("Input array: {}", bracketed_list(array))
}

pub fn average_line(average: f64, precision: usize) -> String {
    format!(
        "Average of elements at odd indices: {}",
        decimal(average, precision)
    )
}

pub fn factorials_line(factorials: &[u128]) -> String {
    format!("Factorials: {}", bracketed_list(factorials))
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
