/// Minimal stateful step counter.
///
/// Holds a current number and a fixed step; [`advance`](Accumulator::advance)
/// moves by one step and returns the new value. The [`Factory`] renderer uses
/// a private instance to produce display indices.
///
/// [`Factory`]: crate::Factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    current: i64,
    step: i64,
}

impl Accumulator {
    pub const fn new(initial: i64, step: i64) -> Self {
        Self {
            current: initial,
            step,
        }
    }

    /// Adds the step to the current value and returns the result.
    pub fn advance(&mut self) -> i64 {
        self.current += self.step;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::Accumulator;

    #[test]
    fn advance_returns_new_value() {
        let mut acc = Accumulator::new(0, 3);
        assert_eq!(acc.advance(), 3);
        assert_eq!(acc.advance(), 6);
        assert_eq!(acc.advance(), 9);
    }

    #[test]
    fn starts_below_zero() {
        let mut acc = Accumulator::new(-1, 1);
        assert_eq!(acc.advance(), 0);
        assert_eq!(acc.advance(), 1);
    }

    #[test]
    fn negative_step() {
        let mut acc = Accumulator::new(10, -5);
        assert_eq!(acc.advance(), 5);
        assert_eq!(acc.advance(), 0);
        assert_eq!(acc.advance(), -5);
    }
}
