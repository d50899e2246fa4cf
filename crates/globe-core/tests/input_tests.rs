// Host-side tests for pointer and wheel normalization.

use globe_core::*;

#[test]
fn pointer_buttons_match_dom_bitmask() {
    assert_eq!(PointerButtons(1), PointerButtons::PRIMARY);
    assert_eq!(PointerButtons(2), PointerButtons::SECONDARY);
    assert_eq!(PointerButtons(4), PointerButtons::AUXILIARY);
    let both = PointerButtons::PRIMARY | PointerButtons::SECONDARY;
    assert!(both.contains(PointerButtons::PRIMARY));
    assert!(both.contains(PointerButtons::SECONDARY));
    assert_ne!(both, PointerButtons::PRIMARY);
}

#[test]
fn pointer_buttons_press_and_release() {
    let held = PointerButtons::NONE.with(PointerButtons::PRIMARY, true);
    assert_eq!(held, PointerButtons::PRIMARY);
    let held = held.with(PointerButtons::AUXILIARY, true);
    assert!(held.contains(PointerButtons::AUXILIARY));
    let released = held
        .with(PointerButtons::PRIMARY, false)
        .with(PointerButtons::AUXILIARY, false);
    assert_eq!(released, PointerButtons::NONE);
}

#[test]
fn dom_delta_modes_map_to_units() {
    assert_eq!(ScrollUnit::from_dom_delta_mode(0), ScrollUnit::Pixel);
    assert_eq!(ScrollUnit::from_dom_delta_mode(1), ScrollUnit::Line);
    assert_eq!(ScrollUnit::from_dom_delta_mode(2), ScrollUnit::Page);
    assert_eq!(ScrollUnit::from_dom_delta_mode(9), ScrollUnit::Pixel);
}

#[test]
fn wheel_deltas_convert_to_pixels() {
    assert_eq!(wheel_delta_pixels(50.0, ScrollUnit::Pixel), 50.0);
    assert_eq!(
        wheel_delta_pixels(3.0, ScrollUnit::Line),
        3.0 * WHEEL_LINE_HEIGHT_PX
    );
    assert_eq!(
        wheel_delta_pixels(-1.0, ScrollUnit::Page),
        -WHEEL_PAGE_HEIGHT_PX
    );
}
