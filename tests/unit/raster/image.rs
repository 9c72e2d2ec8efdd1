use super::*;

#[test]
fn transparent_image_is_zeroed() {
    let img = RasterImage::transparent(TargetSize::new(5, 3).unwrap());
    assert_eq!(img.data().len(), 5 * 3 * 4);
    assert!(img.is_fully_transparent());
    assert_eq!(img.size(), TargetSize::new(5, 3).unwrap());
}

#[test]
fn bits_per_pixel_is_four_channels_of_eight_bits() {
    assert_eq!(RasterImage::BITS_PER_PIXEL, 32);
}

#[test]
fn buffer_length_must_match_dimensions() {
    assert!(RasterImage::from_premul_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(RasterImage::from_premul_rgba8(0, 2, vec![]).is_err());
    assert!(RasterImage::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn pixel_lookup_is_row_major_and_bounded() {
    let mut data = vec![0u8; 3 * 2 * 4];
    let i = (3 + 2) * 4;
    data[i..i + 4].copy_from_slice(&[10, 20, 30, 40]);
    let img = RasterImage::from_premul_rgba8(3, 2, data).unwrap();

    assert_eq!(img.pixel(2, 1), Some([10, 20, 30, 40]));
    assert_eq!(img.pixel(3, 0), None);
    assert_eq!(img.pixel(0, 2), None);
    assert!(!img.is_fully_transparent());
}

#[test]
fn straight_copy_undoes_premultiplication() {
    let img = RasterImage::from_premul_rgba8(1, 1, vec![64, 32, 0, 128]).unwrap();
    assert_eq!(img.to_straight_rgba8(), vec![128, 64, 0, 128]);
    // The premultiplied buffer itself is unchanged.
    assert_eq!(img.into_data(), vec![64, 32, 0, 128]);
}
