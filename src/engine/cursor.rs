use rand::Rng;

/// Position of a module within its current row view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn first() -> Self {
        Self { index: 0 }
    }

    /// A uniformly random position, or `None` when there are no rows.
    pub fn random<R: Rng + ?Sized>(row_count: usize, rng: &mut R) -> Option<Self> {
        (row_count > 0).then(|| Self {
            index: rng.gen_range(0..row_count),
        })
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Jump to a new random row. Repeats are allowed.
    pub fn reroll<R: Rng + ?Sized>(&mut self, row_count: usize, rng: &mut R) {
        if let Some(next) = Self::random(row_count, rng) {
            *self = next;
        }
    }

    /// Step forward, stopping at the last row. Returns whether it moved.
    pub fn next(&mut self, row_count: usize) -> bool {
        if self.index + 1 < row_count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back, stopping at the first row. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_within(self, row_count: usize) -> bool {
        self.index < row_count
    }

    pub fn clamp_to(&mut self, row_count: usize) {
        self.index = self.index.min(row_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let cursor = Cursor::random(5, &mut rng).unwrap();
            assert!(cursor.index() < 5);
        }
        assert!(Cursor::random(0, &mut rng).is_none());
    }

    #[test]
    fn test_reroll_eventually_visits_every_row() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut cursor = Cursor::first();
        let mut seen = [false; 4];
        for _ in 0..200 {
            cursor.reroll(4, &mut rng);
            seen[cursor.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_sequential_navigation_is_clamped() {
        let row_count = 3;
        let mut cursor = Cursor::first();
        assert!(!cursor.previous());
        assert_eq!(cursor.index(), 0);

        assert!(cursor.next(row_count));
        assert!(cursor.next(row_count));
        assert!(!cursor.next(row_count));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_arbitrary_sequences_never_leave_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for row_count in 1..6 {
            let mut cursor = Cursor::first();
            for _ in 0..100 {
                if rng.gen_bool(0.5) {
                    cursor.next(row_count);
                } else {
                    cursor.previous();
                }
                assert!(cursor.is_within(row_count));
            }
        }
    }

    #[test]
    fn test_clamp_to_smaller_view() {
        let mut cursor = Cursor::first();
        cursor.next(10);
        cursor.next(10);
        cursor.next(10);
        cursor.clamp_to(2);
        assert_eq!(cursor.index(), 1);
        cursor.clamp_to(0);
        assert_eq!(cursor.index(), 0);
    }
}
