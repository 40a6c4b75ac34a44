use crate::coordinate::Coordinate;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

/// Axis-aligned rectangle anchored at its top-left corner.
///
/// `w` and `h` must be non-negative. A rectangle with zero width or height is
/// degenerate and never intersects anything.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect<N> {
    pub x: N,
    pub y: N,
    pub w: N,
    pub h: N,
}

impl<N: Coordinate> Rect<N> {
    pub fn new(x: N, y: N, w: N, h: N) -> Self {
        Self { x, y, w, h }
    }

    pub fn width(&self) -> N {
        self.w
    }

    pub fn height(&self) -> N {
        self.h
    }

    pub fn left(&self) -> N {
        self.x
    }

    pub fn right(&self) -> N {
        self.x + self.w
    }

    pub fn top(&self) -> N {
        self.y
    }

    pub fn bottom(&self) -> N {
        self.y + self.h
    }

    pub fn is_degenerate(&self) -> bool {
        self.w == N::zero() || self.h == N::zero()
    }
}

impl<N: Coordinate + SampleUniform> Rect<N> {
    /// Returns a random rectangle whose origin lies inside `self` and whose
    /// size is at most `max_w` x `max_h`, clamped so it never leaves `self`.
    pub fn random_inside<R: Rng>(&self, max_w: N, max_h: N, rng: &mut R) -> Rect<N> {
        let x = rng.gen_range(self.left()..=self.right());
        let y = rng.gen_range(self.top()..=self.bottom());
        let w = Self::clamp_len(x, rng.gen_range(N::zero()..=max_w), self.right());
        let h = Self::clamp_len(y, rng.gen_range(N::zero()..=max_h), self.bottom());
        Rect { x, y, w, h }
    }

    // Shrinks `len` until `start + len` does not pass `end`. Float rounding
    // can put `start + (end - start)` one ulp past `end`.
    fn clamp_len(start: N, len: N, end: N) -> N {
        let mut len = if len > end - start { end - start } else { len };
        let two = N::one() + N::one();
        while len > N::zero() && start + len > end {
            len = len / two;
        }
        len
    }
}
