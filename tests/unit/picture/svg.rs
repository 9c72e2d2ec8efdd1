use super::*;

const RECT_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
  <rect x="0" y="0" width="100" height="50" fill="#ff0000"/>
</svg>"##;

#[test]
fn parse_ok_reports_viewport_bounds() {
    let picture = SvgPicture::from_data(RECT_SVG, None).unwrap();
    let bounds = picture.bounding_box();
    assert_eq!(bounds, Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn bounds_are_viewport_not_content_extent() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="32">
  <rect x="40" y="10" width="4" height="4" fill="#00ff00"/>
</svg>"##;
    let picture = SvgPicture::from_data(svg, None).unwrap();
    assert_eq!(picture.bounding_box(), Rect::new(0.0, 0.0, 64.0, 32.0));
}

#[test]
fn parse_err_is_load_error() {
    let err = SvgPicture::from_data(br#"<svg"#, None).unwrap_err();
    assert!(matches!(err, IcopackError::Load(_)), "{err}");
}

#[test]
fn empty_document_is_rejected_before_rendering() {
    let err = SvgPicture::from_data(
        br#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"></svg>"#,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, IcopackError::Load(_)), "{err}");
    assert!(err.to_string().contains("no drawable content"));
}

#[test]
fn load_missing_file_names_the_path() {
    let err = SvgPicture::load(Path::new("does/not/exist.svg")).unwrap_err();
    assert!(matches!(err, IcopackError::Load(_)));
    assert!(err.to_string().contains("does/not/exist.svg"));
}

#[test]
fn render_identity_fills_canvas() {
    let picture = SvgPicture::from_data(RECT_SVG, None).unwrap();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(100, 50).unwrap();
    picture
        .render(&mut pixmap.as_mut(), Affine::IDENTITY)
        .unwrap();

    let data = pixmap.data();
    let center = ((25 * 100 + 50) * 4) as usize;
    assert_eq!(&data[center..center + 4], &[255, 0, 0, 255]);
}
