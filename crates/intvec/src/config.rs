//! Growth policy configuration.

use crate::error::ArrayError;

/// Rule for choosing the new capacity when a full array grows.
///
/// Validated at construction; immutable afterwards. The default policy
/// allocates one slot from empty and doubles thereafter, giving capacities
/// 1, 2, 4, 8, ... over a run of appends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    growth_factor: usize,
}

impl GrowthPolicy {
    /// Default capacity of the first allocation from empty.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default multiplier applied to a full buffer.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Doubling policy, usable in `const` contexts.
    pub const DOUBLING: GrowthPolicy = GrowthPolicy {
        initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        growth_factor: Self::DEFAULT_GROWTH_FACTOR,
    };

    /// Create a policy.
    ///
    /// Returns `Err(ArrayError::InvalidPolicy)` if `initial_capacity` is
    /// zero or `growth_factor` is below 2 (either would let a full array
    /// "grow" without gaining a slot).
    pub fn new(initial_capacity: usize, growth_factor: usize) -> Result<Self, ArrayError> {
        if initial_capacity == 0 {
            return Err(ArrayError::InvalidPolicy {
                reason: "initial_capacity must be at least 1",
            });
        }
        if growth_factor < 2 {
            return Err(ArrayError::InvalidPolicy {
                reason: "growth_factor must be at least 2",
            });
        }
        Ok(Self {
            initial_capacity,
            growth_factor,
        })
    }

    /// Capacity of the first allocation from empty.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Multiplier applied to a full buffer.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity to grow to from a full buffer of `current` slots.
    pub fn next_capacity(&self, current: usize) -> Result<usize, ArrayError> {
        if current == 0 {
            return Ok(self.initial_capacity);
        }
        current
            .checked_mul(self.growth_factor)
            .ok_or(ArrayError::CapacityOverflow { current })
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}
