//! Tests for widgets/popup

use super::*;

fn frame_area() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, frame_area(), 30, 7, 1);

    assert_eq!(popup.x, 1);
    assert_eq!(popup.y, 3);
    assert_eq!(popup.width, 30);
    assert_eq!(popup.height, 7);
}

#[test]
fn test_popup_below_anchor_clamps_height_to_bounds() {
    let anchor = Rect {
        x: 0,
        y: 18,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, frame_area(), 30, 7, 0);

    assert_eq!(popup.y, 21);
    assert_eq!(popup.height, 3); // 24 - 21
}

#[test]
fn test_popup_below_anchor_clamps_width_to_bounds() {
    let anchor = Rect {
        x: 60,
        y: 0,
        width: 20,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, frame_area(), 40, 5, 2);

    assert_eq!(popup.x, 62);
    assert_eq!(popup.width, 18); // 80 - 62
}

#[test]
fn test_popup_below_anchor_at_bottom_edge_is_empty() {
    let anchor = Rect {
        x: 0,
        y: 21,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, frame_area(), 30, 7, 0);

    assert_eq!(popup.height, 0);
}
