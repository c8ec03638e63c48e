// The array under study and the two values derived from it.

use std::io::{BufRead, Write};

use crate::error::{ProcessorError, Result};
use crate::input::TokenReader;
use crate::policy::{EmptyAveragePolicy, Policies};
use crate::utils::math::{self, Factorial};

/// Owns an immutable array. Both queries are recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayProcessor {
    values: Vec<i64>,
    policies: Policies,
}

impl ArrayProcessor {
    pub fn new(values: Vec<i64>, policies: Policies) -> Self {
        ArrayProcessor { values, policies }
    }

    /// Prompts for and reads `size` integers. Pass `None` as the prompt to read
    /// silently.
    pub fn read<R: BufRead, W: Write>(
        size: usize,
        tokens: &mut TokenReader<R>,
        prompt: Option<&mut W>,
        policies: Policies,
    ) -> Result<Self> {
        if let Some(out) = prompt {
            writeln!(out, "Enter {} integers separated by whitespace:", size)?;
            out.flush()?;
        }
        let values = tokens.read_i64s(size)?;
        info!("read array of {} integers", values.len());
        Ok(ArrayProcessor::new(values, policies))
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean of the elements at indices 1, 3, 5, ...
    pub fn odd_index_average(&self) -> Result<f64> {
        match math::odd_index_mean(&self.values) {
            Some(average) => Ok(average),
            None => match self.policies.empty_average {
                EmptyAveragePolicy::Nan => {
                    warn!(
                        "array of length {} has no odd index, average is NaN",
                        self.len()
                    );
                    Ok(f64::NAN)
                }
                EmptyAveragePolicy::Error => Err(ProcessorError::NoOddIndex { len: self.len() }),
            },
        }
    }

    /// Factorial of every element, in order.
    pub fn factorials(&self) -> Result<Vec<u128>> {
        let mut factorials = Vec::with_capacity(self.values.len());
        for (index, &value) in self.values.iter().enumerate() {
            let f = match math::factorial(value, self.policies.overflow, self.policies.negative) {
                Factorial::Exact(f) => {
                    if value < 0 {
                        warn!("factorial of negative {} at index {} taken as 1", value, index);
                    }
                    f
                }
                Factorial::Saturated => {
                    warn!("factorial of {} at index {} saturated", value, index);
                    u128::MAX
                }
                Factorial::Wrapped(f) => {
                    warn!("factorial of {} at index {} wrapped around", value, index);
                    f
                }
                Factorial::Overflow => {
                    return Err(ProcessorError::FactorialOverflow { value, index })
                }
                Factorial::Negative => {
                    return Err(ProcessorError::InvalidArgument { value, index })
                }
            };
            factorials.push(f);
        }
        Ok(factorials)
    }
}
