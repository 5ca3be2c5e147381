use super::*;
use crate::catalog::device::{DEVICES, device_by_key};

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 32, 0, 128],
        premultiplied: true,
    }
}

#[test]
fn png_round_trips_straight_alpha() {
    let bytes = encode_png(&frame()).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [128, 64, 0, 128]);
}

#[test]
fn short_buffer_is_a_render_error() {
    let bad = FrameRGBA {
        data: vec![0; 4],
        ..frame()
    };
    assert!(matches!(encode_png(&bad), Err(LifecalError::Render(_))));
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("target/unit_export/nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.png");

    write_png(&frame(), &path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (2, 1));
}

#[test]
fn file_names() {
    assert_eq!(
        wallpaper_file_name(&DEVICES[0], Theme::Midnight),
        "life-calendar-iphone-15-pro-max-midnight.png"
    );
    assert_eq!(
        goal_wallpaper_file_name(device_by_key("1920x1080").unwrap(), Theme::Ruby),
        "life-calendar-goal-full-hd-ruby.png"
    );
    assert_eq!(calendar_file_name(2025), "life-calendar-2025.png");
}
