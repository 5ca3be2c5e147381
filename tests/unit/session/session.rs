use super::*;
use crate::catalog::device::device_by_key;

#[test]
fn default_session_is_midnight_on_largest_iphone() {
    let s = SessionConfig::default();
    assert_eq!(s.theme, Theme::Midnight);
    assert_eq!(s.device.key, "1290x2796");
}

#[test]
fn updates_return_new_values_and_leave_old_untouched() {
    let before = SessionConfig::default();
    let after = before.update(SessionEvent::ThemeSelected(Theme::Ocean));
    assert_eq!(before.theme, Theme::Midnight);
    assert_eq!(after.theme, Theme::Ocean);
    assert_eq!(after.device, before.device);
}

#[test]
fn category_switch_picks_first_resolution() {
    let s = SessionConfig::default()
        .update(SessionEvent::ResolutionSelected(
            device_by_key("1080x2400").unwrap(),
        ))
        .update(SessionEvent::CategorySelected(DeviceCategory::Desktop));
    assert_eq!(s.device.key, "1920x1080");

    let s = s.update(SessionEvent::ResolutionSelected(
        device_by_key("3840x2160").unwrap(),
    ));
    assert_eq!(s.device.key, "3840x2160");
    let s = s.update(SessionEvent::CategorySelected(DeviceCategory::Desktop));
    assert_eq!(s.device.key, "1920x1080");
}
