use common::coordinate::Coordinate;
use common::shapes::Rect;

// Check that Rect inner is fully contained in Rect outer
pub fn rect_contains_rect<N: Coordinate>(outer: &Rect<N>, inner: &Rect<N>) -> bool {
    outer.x <= inner.x
        && outer.right() >= inner.right()
        && outer.y <= inner.y
        && outer.bottom() >= inner.bottom()
}

/// Strict overlap test. Touching edges do not count and a degenerate
/// rectangle never intersects anything, itself included.
#[inline]
pub fn rect_rect<N: Coordinate>(a: &Rect<N>, b: &Rect<N>) -> bool {
    !(a.is_degenerate()
        || b.is_degenerate()
        || a.x >= b.right()
        || a.right() <= b.x
        || a.y >= b.bottom()
        || a.bottom() <= b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(rect_rect(&a, &b));
        assert!(rect_rect(&b, &a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!rect_rect(&a, &Rect::new(10, 0, 10, 10)));
        assert!(!rect_rect(&a, &Rect::new(0, 10, 10, 10)));
        assert!(!rect_rect(&a, &Rect::new(10, 10, 5, 5)));
    }

    #[test]
    fn degenerate_rects_never_intersect() {
        let line = Rect::new(2, 2, 5, 0);
        assert!(!rect_rect(&line, &line));
        assert!(!rect_rect(&line, &Rect::new(0, 0, 10, 10)));
        let point = Rect::new(1.0, 1.0, 0.0, 0.0);
        assert!(!rect_rect(&point, &Rect::new(0.0, 0.0, 4.0, 4.0)));
    }

    #[test]
    fn containment() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(rect_contains_rect(&outer, &outer));
        assert!(rect_contains_rect(&outer, &Rect::new(2, 2, 3, 3)));
        assert!(!rect_contains_rect(&outer, &Rect::new(8, 8, 3, 3)));
    }
}
