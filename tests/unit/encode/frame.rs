use super::*;

fn gradient_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let a = ((x * 255) / width.max(1)) as u8;
            let c = ((y * 255) / height.max(1)) as u8;
            // Keep premultiplied channels <= alpha.
            data.extend_from_slice(&[c.min(a), (c / 2).min(a), a / 3, a]);
        }
    }
    RasterImage::from_premul_rgba8(width, height, data).unwrap()
}

#[test]
fn frame_records_size_and_bit_depth() {
    let frame = encode_frame(RasterImage::transparent(TargetSize::square(16))).unwrap();
    assert_eq!(frame.size, TargetSize::square(16));
    assert_eq!(frame.bit_count, 32);
    assert_eq!(&frame.bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn decode_restores_premultiplied_pixels_exactly() {
    let original = gradient_image(48, 31);
    let frame = encode_frame(original.clone()).unwrap();
    let decoded = decode_frame(&frame).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn png_stores_straight_alpha() {
    let original = gradient_image(8, 8);
    let frame = encode_frame(original.clone()).unwrap();
    let png = image::load_from_memory(&frame.bytes).unwrap().to_rgba8();
    assert_eq!(png.into_raw(), original.to_straight_rgba8());
}

#[test]
fn encoding_is_deterministic() {
    let a = encode_frame(gradient_image(24, 24)).unwrap();
    let b = encode_frame(gradient_image(24, 24)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn decode_garbage_is_encode_error() {
    let frame = EncodedFrame {
        size: TargetSize::square(4),
        bit_count: 32,
        bytes: b"not a png".to_vec(),
    };
    let err = decode_frame(&frame).unwrap_err();
    assert!(matches!(err, IcopackError::Encode(_)));
}
