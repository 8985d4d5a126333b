use perfusion_core::mask::Mask;

/// Reference membership for a square at (cx, cy) of `size`, per the inclusive half-size rule.
fn expected_member(x: i64, y: i64, cx: i64, cy: i64, size: i64, w: i64, h: i64) -> bool {
    let half = size / 2;
    x >= 0
        && y >= 0
        && x < w
        && y < h
        && (cx - half..=cx + half).contains(&x)
        && (cy - half..=cy + half).contains(&y)
}

#[test]
fn test_new_mask_is_empty() {
    let mask = Mask::new(8, 6);
    assert_eq!(mask.width(), 8);
    assert_eq!(mask.height(), 6);
    assert_eq!(mask.member_count(), 0);
    for y in 0..6 {
        for x in 0..8 {
            assert!(!mask.contains(x, y));
        }
    }
}

#[test]
fn test_out_of_range_never_member() {
    let mut mask = Mask::new(5, 5);
    mask.add_square(2, 2, 100);
    assert_eq!(mask.member_count(), 25);
    for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (i64::MIN, 2), (2, i64::MAX)] {
        assert!(!mask.contains(x, y), "({x}, {y}) should not be a member");
    }
}

#[test]
fn test_odd_square_membership() {
    let (w, h) = (12, 10);
    let mut mask = Mask::new(w as usize, h as usize);
    mask.add_square(5, 4, 5);
    assert_eq!(mask.member_count(), 25);
    for y in -2..h + 2 {
        for x in -2..w + 2 {
            assert_eq!(
                mask.contains(x, y),
                expected_member(x, y, 5, 4, 5, w, h),
                "mismatch at ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_even_square_is_one_wider() {
    let mut mask = Mask::new(20, 20);
    mask.add_square(10, 10, 4);
    // half = 2 -> columns 8..=12
    assert_eq!(mask.member_count(), 25);
    assert!(mask.contains(8, 8));
    assert!(mask.contains(12, 12));
    assert!(!mask.contains(13, 10));
}

#[test]
fn test_square_clipped_at_edge() {
    let (w, h) = (6, 6);
    let mut mask = Mask::new(w as usize, h as usize);
    mask.add_square(5, 0, 5);
    // columns 3..=5, rows 0..=2
    assert_eq!(mask.member_count(), 9);
    for y in 0..h {
        for x in 0..w {
            assert_eq!(mask.contains(x, y), expected_member(x, y, 5, 0, 5, w, h));
        }
    }
}

#[test]
fn test_non_positive_size_is_noop() {
    let mut mask = Mask::new(10, 10);
    mask.add_square(4, 4, 3);
    let before = mask.clone();

    mask.add_square(2, 2, 0);
    assert_eq!(mask.member_count(), 9);
    mask.add_square(7, 7, -5);
    assert_eq!(mask.member_count(), 9);
    assert_eq!(mask, before);
}

#[test]
fn test_squares_accumulate() {
    let mut mask = Mask::new(10, 10);
    mask.add_square(1, 1, 3);
    mask.add_square(2, 2, 3);
    // 3x3 at (0..=2) and 3x3 at (1..=3) overlap in a 2x2 block
    assert_eq!(mask.member_count(), 9 + 9 - 4);
}

#[test]
fn test_size_one_marks_center_only() {
    let mut mask = Mask::new(3, 3);
    mask.add_square(1, 1, 1);
    assert_eq!(mask.member_count(), 1);
    assert!(mask.contains(1, 1));
}

#[test]
fn test_extreme_centers_clip_without_overflow() {
    let mut mask = Mask::new(4, 4);
    mask.add_square(i64::MAX, 0, 5);
    mask.add_square(0, i64::MIN, 5);
    mask.add_square(i64::MIN, i64::MAX, i64::MAX);
    assert!(mask.is_empty());

    mask.add_square(0, 0, i64::MAX);
    assert_eq!(mask.member_count(), 16);
}
