use super::*;

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [200, 100, 50, 255]), [200, 100, 50, 255]);
}

#[test]
fn half_alpha_blends() {
    // 50% white over opaque black.
    let out = over([0, 0, 0, 255], [128, 128, 128, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
}

#[test]
fn in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn in_place_layers_every_pixel() {
    let mut dst = vec![0, 0, 0, 255, 0, 0, 0, 255];
    over_in_place(&mut dst, &[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(dst, vec![255, 0, 0, 255, 0, 0, 0, 255]);
}

#[test]
fn unpremultiply_restores_straight_colour() {
    let mut buf = vec![64, 32, 0, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    unpremultiply_in_place(&mut buf);
    assert_eq!(&buf[..4], &[128, 64, 0, 128]);
    assert_eq!(&buf[4..8], &[9, 9, 9, 0]);
    assert_eq!(&buf[8..], &[1, 2, 3, 255]);
}
