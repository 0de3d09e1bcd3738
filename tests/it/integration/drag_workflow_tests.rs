//! Full drag-gesture workflows: placement, resize, clamping, interleaving.
//!
//! These tests drive a [`ResizableBox`] the way a host view tree would: the
//! owner holds the current geometry, calls one controller method per pointer
//! event, and stores whatever comes back.

use std::sync::Arc;

use boxparts::{BoxGeometry, Point, ResizableBox, SessionManager, Size};

use crate::helpers::TestBoxBuilder;

#[test]
fn corner_resize_with_clamping_scenario() {
    // Box "selecting": 200x200 at (50, 50), corner size 30, min length 60.
    let (bbox, g0) = TestBoxBuilder::new("selecting").build();

    // (55, 55) is within 30 of both the left and top borders -> LeftTop.
    let start = Point::new(55.0, 55.0);

    let g1 = bbox.drag_changed(&g0, start, Point::new(10.0, 10.0));
    assert_eq!(g1.size(), Size::new(190.0, 190.0));
    assert_eq!(g1.origin(), Point::new(60.0, 60.0));

    // A later event of the same gesture transforms the original snapshot,
    // not g1: width/height floor at 60 and the origin clamps to the fence
    // 50 + 200 - 60 = 190.
    let g2 = bbox.drag_changed(&g1, start, Point::new(300.0, 300.0));
    assert_eq!(g2.size(), Size::new(60.0, 60.0));
    assert_eq!(g2.origin(), Point::new(190.0, 190.0));

    let g3 = bbox.drag_ended(&g2, Point::new(300.0, 300.0));
    assert_eq!(g3, g2);
}

#[test]
fn shrink_past_min_length_stops_exactly_at_min() {
    let (bbox, g0) = TestBoxBuilder::new("shrink")
        .with_corner_size(10.0) // min length 20
        .with_size(200.0, 200.0)
        .with_origin(0.0, 0.0)
        .build();

    // Right edge band, dragged far left.
    let g1 = bbox.drag_changed(&g0, Point::new(195.0, 100.0), Point::new(-300.0, 0.0));
    assert_eq!(g1.size().width, 20.0);
    assert_eq!(g1.size().height, 200.0);
}

#[test]
fn body_drag_preserves_size_across_the_whole_gesture() {
    let (bbox, g0) = TestBoxBuilder::new("mover").build();
    let start = Point::new(150.0, 150.0);

    let mut g = g0;
    for step in [(5.0, 5.0), (12.0, -3.0), (40.0, 18.0)] {
        g = bbox.drag_changed(&g, start, Point::new(step.0, step.1));
        assert_eq!(g.size(), g0.size());
    }
    let ended = bbox.drag_ended(&g, Point::new(40.0, 18.0));
    assert_eq!(ended.origin(), Point::new(90.0, 68.0));
    assert_eq!(ended.size(), g0.size());
}

#[test]
fn fence_holds_for_left_top_resize_after_right_bottom_growth() {
    let (bbox, g0) = TestBoxBuilder::new("fence").build();

    // Drag the LeftTop corner far toward the opposite corner: the origin
    // must never cross base origin + base width - min length.
    let g1 = bbox.drag_changed(&g0, Point::new(55.0, 55.0), Point::new(10_000.0, 10_000.0));
    assert_eq!(g1.origin().x, 50.0 + 200.0 - 60.0);
    assert_eq!(g1.origin().y, 50.0 + 200.0 - 60.0);
    bbox.drag_ended(&g1, Point::new(10_000.0, 10_000.0));
}

#[test]
fn floating_box_is_placed_once_then_draggable() {
    let (bbox, g0) = TestBoxBuilder::new("floating").floating().build();
    assert!(g0.is_floating());

    // First layout reports the rendered frame's top-left.
    let placed = bbox
        .on_appear(&g0, Point::new(120.0, 80.0))
        .expect("floating box must be placed on first layout");
    assert!(!placed.is_floating());
    assert_eq!(placed.origin(), Point::new(120.0, 80.0));

    // Subsequent layout passes must not re-fire.
    assert_eq!(bbox.on_appear(&placed, Point::new(0.0, 0.0)), None);

    // And the placed box drags normally.
    let dragged = bbox.drag_changed(&placed, Point::new(220.0, 180.0), Point::new(10.0, 0.0));
    assert_eq!(dragged.origin(), Point::new(130.0, 80.0));
}

#[test]
fn two_boxes_drag_independently_through_one_manager() {
    let sessions = Arc::new(SessionManager::new());
    let (box_a, a0) = TestBoxBuilder::new("A")
        .with_sessions(Arc::clone(&sessions))
        .with_origin(0.0, 0.0)
        .build();
    let (box_b, b0) = TestBoxBuilder::new("B")
        .with_sessions(Arc::clone(&sessions))
        .with_origin(400.0, 400.0)
        .build();

    // Interleave events of two concurrent gestures.
    let a1 = box_a.drag_changed(&a0, Point::new(100.0, 100.0), Point::new(10.0, 10.0));
    let b1 = box_b.drag_changed(&b0, Point::new(500.0, 500.0), Point::new(-5.0, -5.0));
    let a2 = box_a.drag_changed(&a1, Point::new(100.0, 100.0), Point::new(20.0, 20.0));
    let b2 = box_b.drag_ended(&b1, Point::new(-5.0, -5.0));
    let a3 = box_a.drag_ended(&a2, Point::new(20.0, 20.0));

    assert_eq!(a3.origin(), Point::new(20.0, 20.0));
    assert_eq!(b2.origin(), Point::new(395.0, 395.0));
    assert_eq!(a3.size(), a0.size());
    assert_eq!(b2.size(), b0.size());
}

#[test]
fn cancelled_gesture_reverts_and_allows_a_fresh_one() {
    let (bbox, g0) = TestBoxBuilder::new("cancel").build();

    let dragged = bbox.drag_changed(&g0, Point::new(150.0, 150.0), Point::new(60.0, 60.0));
    let reverted = bbox.drag_cancelled(&dragged);
    assert_eq!(reverted.origin(), g0.origin());
    assert_eq!(reverted.size(), g0.size());

    // The next gesture classifies afresh: this one starts on the right edge.
    let g1 = bbox.drag_changed(&reverted, Point::new(245.0, 150.0), Point::new(15.0, 0.0));
    assert_eq!(g1.size().width, 215.0);
    assert_eq!(g1.origin(), g0.origin());
}

#[test]
fn geometry_recreated_each_render_does_not_reset_the_gesture() {
    // Simulate the host recreating the controller between events, as a
    // declarative tree does on every render.
    let sessions = Arc::new(SessionManager::new());
    let g0 = BoxGeometry::anchored(Size::new(200.0, 200.0), Point::new(50.0, 50.0));
    let start = Point::new(55.0, 55.0);

    let first = ResizableBox::new("selecting", Arc::clone(&sessions));
    let g1 = first.drag_changed(&g0, start, Point::new(10.0, 10.0));
    drop(first);

    let second = ResizableBox::new("selecting", Arc::clone(&sessions));
    // Still LeftTop from the original snapshot, not re-classified as Body.
    let g2 = second.drag_changed(&g1, Point::new(150.0, 150.0), Point::new(20.0, 20.0));
    assert_eq!(g2.size(), Size::new(180.0, 180.0));
    assert_eq!(g2.origin(), Point::new(70.0, 70.0));
}
