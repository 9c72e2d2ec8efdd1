use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(100, 128), ((100u16 * 128 + 127) / 255) as u8);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = [10u8, 20, 30, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_then_premultiply_is_exact_for_valid_pixels() {
    for a in 0u8..=255 {
        for c in 0u8..=a {
            let mut px = [c, c / 2, 0, a];
            let orig = px;
            unpremultiply_rgba8_in_place(&mut px);
            premultiply_rgba8_in_place(&mut px);
            assert_eq!(px, orig, "alpha {a}, channel {c}");
        }
    }
}

#[test]
fn unpremultiply_opaque_is_identity() {
    let mut px = [12u8, 34, 56, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [12, 34, 56, 255]);
}
