//! Circular index state machine for the promotional carousel.

/// Tracks the visible slot of a fixed-length image sequence. Transitions
/// wrap in both directions; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` slots, starting at index 0.
    ///
    /// `len` must be at least 1; the promotional set is fixed at 3.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel requires at least one slot");
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    /// Index of the visible slot, always in `[0, len)`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Advance one slot, wrapping past the end.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// Step back one slot, wrapping past the start.
    pub fn previous(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump directly to `index`. Out-of-range indices are ignored; the
    /// caller is trusted UI code (dot clicks), so this never panics.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Carousel::new(3).current(), 0);
    }

    #[test]
    fn test_next_wraps_after_full_cycle() {
        let mut carousel = Carousel::new(3);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_jump_then_next_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(1);
        carousel.jump_to(7);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_single_slot_carousel() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.current(), 0);
    }
}
