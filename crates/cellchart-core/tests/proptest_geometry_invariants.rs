//! Property-based invariant tests for `Rect`.
//!
//! 1. Intersection is commutative.
//! 2. Intersection fits within both inputs.
//! 3. Contains agrees with intersection.
//! 4. No panics on extreme u16 values.

use cellchart_core::geometry::Rect;
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=200, 0u16..=200, 0u16..=200, 0u16..=200).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_commutative(a in small_rect_strategy(), b in small_rect_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn intersection_within_both(a in small_rect_strategy(), b in small_rect_strategy()) {
        let i = a.intersection(&b);
        if !i.is_empty() {
            prop_assert!(i.x >= a.x && i.x >= b.x);
            prop_assert!(i.y >= a.y && i.y >= b.y);
            prop_assert!(i.right() <= a.right() && i.right() <= b.right());
            prop_assert!(i.bottom() <= a.bottom() && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn contains_agrees_with_intersection(
        a in small_rect_strategy(),
        b in small_rect_strategy(),
        px in 0u16..=400,
        py in 0u16..=400,
    ) {
        let i = a.intersection(&b);
        prop_assert_eq!(i.contains(px, py), a.contains(px, py) && b.contains(px, py));
    }

    #[test]
    fn extreme_values_do_not_panic(r in rect_strategy(), px in any::<u16>(), py in any::<u16>()) {
        let _ = r.right();
        let _ = r.bottom();
        let _ = r.contains(px, py);
        let _ = r.intersection(&Rect::from_size(u16::MAX, u16::MAX));
    }
}
