use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rect::new(2, 3, 4, 6);
    assert_eq!(rect.width(), 4);
    assert_eq!(rect.height(), 6);
    assert_eq!(rect.left(), 2);
    assert_eq!(rect.right(), 6);
    assert_eq!(rect.top(), 3);
    assert_eq!(rect.bottom(), 9);
}

#[test]
fn test_degenerate() {
    assert!(Rect::new(3, 3, 4, 0).is_degenerate());
    assert!(Rect::new(3, 3, 0, 4).is_degenerate());
    assert!(!Rect::new(3, 3, 1, 1).is_degenerate());
    assert!(Rect::new(0.0, 0.0, 0.0, 2.5).is_degenerate());
}

#[test]
fn test_default_is_zero() {
    let rect: Rect<f32> = Rect::default();
    assert_eq!(rect, Rect::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_random_inside_stays_inside_integer() {
    let bounds = Rect::new(0, 0, 100, 100);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let rect = bounds.random_inside(10, 10, &mut rng);
        assert!(rect.left() >= bounds.left());
        assert!(rect.top() >= bounds.top());
        assert!(rect.right() <= bounds.right());
        assert!(rect.bottom() <= bounds.bottom());
        assert!(rect.w <= 10 && rect.h <= 10);
    }
}

#[test]
fn test_random_inside_stays_inside_float() {
    let bounds = Rect::new(-50.0f64, 20.0, 100.0, 40.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let rect = bounds.random_inside(4.0, 4.0, &mut rng);
        assert!(rect.w >= 0.0 && rect.h >= 0.0);
        assert!(rect.w <= 4.0 && rect.h <= 4.0);
        assert!(rect.right() <= bounds.right());
        assert!(rect.bottom() <= bounds.bottom());
    }
}

#[test]
fn test_random_inside_never_rounds_past_edge() {
    let bounds = Rect::new(0.1f64, 0.2, 0.7, 0.3);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10_000 {
        let rect = bounds.random_inside(0.7, 0.3, &mut rng);
        assert!(rect.left() >= bounds.left() && rect.top() >= bounds.top());
        assert!(rect.right() <= bounds.right());
        assert!(rect.bottom() <= bounds.bottom());
    }
}
