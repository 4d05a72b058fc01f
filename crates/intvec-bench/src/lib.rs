//! Benchmark workloads for the intvec container.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`pseudo_random_values`]: reproducible integer sequence from a seed
//! - [`filled_array`]: array built by repeated `push_back` (exercises growth)
//! - [`push_pop_churn`]: mixed append/remove workload

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use intvec::DynamicArray;

/// Generate `count` reproducible integers from `seed` (xorshift64).
pub fn pseudo_random_values(count: usize, seed: u64) -> Vec<i32> {
    let mut state = seed.max(1);
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as i32
        })
        .collect()
}

/// Build an array of `count` elements by appending one at a time.
pub fn filled_array(count: usize) -> DynamicArray {
    let mut array = DynamicArray::new();
    for i in 0..count {
        array.push_back(i as i32);
    }
    array
}

/// Run `rounds` of "push `burst` values, pop half of them" and return the
/// resulting array.
pub fn push_pop_churn(rounds: usize, burst: usize) -> DynamicArray {
    let mut array = DynamicArray::new();
    for round in 0..rounds {
        for i in 0..burst {
            array.push_back((round * burst + i) as i32);
        }
        for _ in 0..burst / 2 {
            array.pop_back();
        }
    }
    array
}
