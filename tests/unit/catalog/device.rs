use super::*;

#[test]
fn catalog_keys_match_dimensions() {
    for d in &DEVICES {
        assert_eq!(d.key, format!("{}x{}", d.width, d.height));
        assert_eq!(device_by_key(d.key).unwrap(), d);
    }
    assert!(device_by_key("640x480").is_err());
}

#[test]
fn default_is_largest_iphone() {
    let d = default_device();
    assert_eq!(d.key, "1290x2796");
    assert_eq!(d.category, DeviceCategory::Phone);
}

#[test]
fn first_for_category_follows_catalog_order() {
    assert_eq!(first_for_category(DeviceCategory::Phone).key, "1290x2796");
    assert_eq!(first_for_category(DeviceCategory::Desktop).key, "1920x1080");
    assert_eq!(first_for_category(DeviceCategory::Tablet).key, "2048x2732");
}

#[test]
fn layout_depends_on_category() {
    assert_eq!(DeviceCategory::Phone.layout(), LayoutKind::Vertical);
    assert_eq!(DeviceCategory::Tablet.layout(), LayoutKind::Vertical);
    assert_eq!(DeviceCategory::Desktop.layout(), LayoutKind::Horizontal);
}

#[test]
fn slug_replaces_non_alphanumerics() {
    assert_eq!(default_device().slug(), "iphone-15-pro-max");
    assert_eq!(device_by_key("2048x2732").unwrap().slug(), "ipad-pro-12-9-");
    assert_eq!(device_by_key("1179x2556").unwrap().slug(), "iphone-15-14-pro");
}

#[test]
fn preview_keeps_aspect_ratio() {
    let phone = default_device().preview_size();
    assert_eq!(phone.width, 200);
    assert_eq!(phone.height, 433);

    let desk = device_by_key("1920x1080").unwrap().preview_size();
    assert_eq!((desk.width, desk.height), (400, 225));
}
