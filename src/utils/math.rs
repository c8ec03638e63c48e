// Arithmetic behind the odd-index average and the factorial sequence.

use crate::policy::{NegativePolicy, OverflowPolicy};

/// Mean of the values at indices 1, 3, 5, ... or `None` when there are none.
pub fn odd_index_mean(list: &[i64]) -> Option<f64> {
    let (sum, count) = list
        .iter()
        .skip(1)
        .step_by(2)
        .fold((0i128, 0usize), |(sum, count), &v| (sum + i128::from(v), count + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Result of a single factorial before policy errors are attached to an index.
#[derive(Debug, PartialEq, Eq)]
pub enum Factorial {
    Exact(u128),
    Saturated,
    Wrapped(u128),
    Overflow,
    Negative,
}

/// Product of 2..=value. 0! and 1! are the empty product.
pub fn factorial(value: i64, overflow: OverflowPolicy, negative: NegativePolicy) -> Factorial {
    if value < 0 {
        return match negative {
            NegativePolicy::Error => Factorial::Negative,
            NegativePolicy::EmptyProduct => Factorial::Exact(1),
        };
    }

    let mut product: u128 = 1;
    let mut exact = true;
    for i in 2..=value as u128 {
        match product.checked_mul(i) {
            Some(p) => product = p,
            None => match overflow {
                OverflowPolicy::Error => return Factorial::Overflow,
                OverflowPolicy::Saturate => return Factorial::Saturated,
                OverflowPolicy::Wrap => {
                    exact = false;
                    product = product.wrapping_mul(i);
                    // Once 128 factors of two are in, every later product is 0 too.
                    if product == 0 {
                        break;
                    }
                }
            },
        }
    }

    if exact {
        Factorial::Exact(product)
    } else {
        Factorial::Wrapped(product)
    }
}
