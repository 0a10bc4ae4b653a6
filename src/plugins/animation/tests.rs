use bevy::prelude::*;
use rstest::rstest;

use super::*;
use crate::common::assets::SpriteSheet;
use crate::common::test_utils::run_system_once;

fn sheet(w: u32, h: u32) -> SpriteSheet {
    SpriteSheet::new(UVec2::new(w, h))
}

fn layout(frame_count: u32, ticks_per_frame: u32, looping: bool) -> ClipLayout {
    ClipLayout {
        frame_size: UVec2::splat(32),
        origin: UVec2::ZERO,
        frame_count,
        ticks_per_frame,
        looping,
    }
}

fn clip(frame_count: u32, ticks_per_frame: u32, looping: bool) -> Animation {
    Animation::new(Some(&sheet(512, 64)), layout(frame_count, ticks_per_frame, looping))
        .expect("valid clip")
}

// -----------------------------------------------------------------------------
// Construction
// -----------------------------------------------------------------------------

#[test]
fn missing_sheet_is_rejected() {
    assert_eq!(
        Animation::new(None, layout(4, 2, true)),
        Err(AnimationError::MissingSource)
    );
}

#[rstest]
#[case(UVec2::new(0, 32), 4, 2, "frame_width")]
#[case(UVec2::new(32, 0), 4, 2, "frame_height")]
#[case(UVec2::splat(32), 0, 2, "frame_count")]
#[case(UVec2::splat(32), 4, 0, "ticks_per_frame")]
fn zero_parameters_name_the_field(
    #[case] frame_size: UVec2,
    #[case] frame_count: u32,
    #[case] ticks_per_frame: u32,
    #[case] expected: &str,
) {
    let bad = ClipLayout { frame_size, frame_count, ticks_per_frame, ..layout(1, 1, true) };
    match Animation::new(Some(&sheet(512, 64)), bad) {
        Err(AnimationError::InvalidParameter { field, value }) => {
            assert_eq!(field, expected);
            assert_eq!(value, 0);
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn error_messages_are_descriptive() {
    let err = AnimationError::InvalidParameter { field: "frame_count", value: 0 };
    assert!(err.to_string().contains("frame_count"));
}

// -----------------------------------------------------------------------------
// advance / reset
// -----------------------------------------------------------------------------

#[rstest]
#[case(1, 1)]
#[case(3, 2)]
#[case(8, 6)]
fn looping_clip_wraps_once_per_cycle(#[case] frames: u32, #[case] speed: u32) {
    let mut a = clip(frames, speed, true);
    let total = frames * speed;

    let completions: Vec<u32> = (1..=total).filter(|_| a.advance()).collect();

    assert_eq!(completions, vec![total]);
    assert_eq!(a.current_frame(), 0);
    assert!(!a.is_finished());
}

#[test]
fn looping_clip_keeps_cycling() {
    let mut a = clip(2, 3, true);
    let completions = (0..60).filter(|_| a.advance()).count();
    assert_eq!(completions, 10);
}

#[test]
fn one_shot_reports_finished_forever_and_pins_last_frame() {
    let mut a = clip(4, 2, false);

    for tick in 1..8 {
        assert!(!a.advance(), "finished early on tick {tick}");
    }
    assert!(a.advance());
    assert!(a.is_finished());
    assert_eq!(a.current_frame(), 3);

    for _ in 0..20 {
        assert!(a.advance());
        assert_eq!(a.current_frame(), 3);
        assert_eq!(a.frame_timer(), 0);
    }
}

#[test]
fn reset_restores_initial_state() {
    let mut a = clip(4, 2, false);
    for _ in 0..11 {
        a.advance();
    }
    assert!(a.is_finished());

    a.reset();
    assert_eq!(a.current_frame(), 0);
    assert_eq!(a.frame_timer(), 0);
    assert!(!a.is_finished());

    a.advance();
    a.reset();
    assert_eq!(a.frame_timer(), 0);
}

#[test]
fn duration_matches_ticks_to_finish() {
    let mut a = clip(10, 5, false);
    let ticks = (1..=100).find(|_| a.advance());
    assert_eq!(ticks, Some(a.duration_ticks()));
}

// -----------------------------------------------------------------------------
// Frame rectangles
// -----------------------------------------------------------------------------

#[test]
fn frame_rect_walks_along_the_row() {
    let layout = ClipLayout { origin: UVec2::new(0, 32), ..layout(3, 1, true) };
    let mut a = Animation::new(Some(&sheet(96, 64)), layout).expect("valid");

    assert_eq!(a.current_frame_rect(), Some(Rect::new(0.0, 32.0, 32.0, 64.0)));
    a.advance();
    assert_eq!(a.current_frame_rect(), Some(Rect::new(32.0, 32.0, 64.0, 64.0)));
    a.advance();
    assert_eq!(a.current_frame_rect(), Some(Rect::new(64.0, 32.0, 96.0, 64.0)));
}

#[test]
fn frame_rect_outside_sheet_is_none() {
    // Third frame would end at x = 96 on a 64 px wide sheet.
    let mut a = Animation::new(Some(&sheet(64, 32)), layout(3, 1, true)).expect("valid");
    assert!(a.current_frame_rect().is_some());
    a.advance();
    a.advance();
    assert_eq!(a.current_frame_rect(), None);

    let low = ClipLayout { origin: UVec2::new(0, 32), ..layout(1, 1, true) };
    let a = Animation::new(Some(&sheet(64, 32)), low).expect("valid");
    assert_eq!(a.current_frame_rect(), None);
}

#[rstest]
#[case(UVec2::new(u32::MAX - 10, 0), 0)]
#[case(UVec2::new(0, u32::MAX - 10), 0)]
#[case(UVec2::new(u32::MAX - 40, 0), 1)]
fn frame_rect_past_pixel_range_is_none(#[case] origin: UVec2, #[case] frame: u32) {
    let far = ClipLayout { origin, ..layout(2, 1, true) };
    let mut a = Animation::new(Some(&sheet(64, 32)), far).expect("valid");
    for _ in 0..frame {
        a.advance();
    }
    assert_eq!(a.current_frame(), frame);
    assert_eq!(a.current_frame_rect(), None);
}

// -----------------------------------------------------------------------------
// Store
// -----------------------------------------------------------------------------

#[test]
fn store_rejects_empty_name_and_overwrites_existing() {
    let mut store = AnimationStore::new();
    assert_eq!(store.add("", clip(2, 1, true)), Err(AnimationError::EmptyName));

    store.add("walk", clip(2, 1, true)).expect("add");
    store.add("walk", clip(5, 1, true)).expect("overwrite");
    assert_eq!(store.get("walk").map(|a| a.layout().frame_count), Some(5));
}

#[test]
fn set_current_unknown_name_keeps_current() {
    let mut store = AnimationStore::new();
    store.add("walk", clip(2, 1, true)).expect("add");
    assert!(store.set_current("walk"));

    assert!(!store.set_current("fly"));
    assert_eq!(store.current_name(), Some("walk"));
}

#[test]
fn reselecting_same_name_keeps_progress() {
    let mut store = AnimationStore::new();
    store.add("walk", clip(4, 1, true)).expect("add");
    store.set_current("walk");

    store.advance();
    store.advance();
    assert!(store.set_current("walk"));

    assert_eq!(store.current().map(Animation::current_frame), Some(2));
}

#[test]
fn switching_names_restarts_target() {
    let mut store = AnimationStore::new();
    store.add("walk", clip(4, 1, true)).expect("add");
    store.add("attack", clip(4, 1, false)).expect("add");

    store.set_current("attack");
    store.advance();
    store.set_current("walk");
    store.advance();
    store.set_current("attack");

    assert_eq!(store.current().map(Animation::current_frame), Some(0));
}

#[test]
fn empty_store_is_inert() {
    let mut store = AnimationStore::new();
    assert!(!store.advance());
    assert_eq!(store.current_frame_rect(), None);
    assert_eq!(store.current_name(), None);
    assert!(store.is_current_finished());
}

#[test]
fn removed_current_heals_to_nothing_active() {
    let mut store = AnimationStore::new();
    store.add("walk", clip(4, 1, true)).expect("add");
    store.set_current("walk");

    store.remove("walk");

    assert!(store.current().is_none());
    assert_eq!(store.current_name(), None);
    assert!(!store.advance());
}

#[test]
fn store_advance_reports_clip_completion() {
    let mut store = AnimationStore::new();
    store.add("spawn", clip(2, 2, false)).expect("add");
    store.set_current("spawn");

    assert!(!store.advance());
    assert!(!store.advance());
    assert!(!store.advance());
    assert!(store.advance());
    assert!(store.is_current_finished());
}

// -----------------------------------------------------------------------------
// Sprite sync
// -----------------------------------------------------------------------------

#[test]
fn sync_sets_rect_or_hides() {
    let mut world = World::new();

    let mut good = AnimationStore::new();
    good.add("idle", clip(2, 1, true)).expect("add");
    good.set_current("idle");

    let shown = world.spawn((good, Sprite::default(), Visibility::Hidden)).id();
    let hidden = world
        .spawn((AnimationStore::new(), Sprite::default(), Visibility::Visible))
        .id();

    run_system_once(&mut world, sync_sprite_frames);

    assert_eq!(
        world.get::<Sprite>(shown).and_then(|s| s.rect),
        Some(Rect::new(0.0, 0.0, 32.0, 32.0))
    );
    assert_eq!(world.get::<Visibility>(shown), Some(&Visibility::Inherited));
    assert_eq!(world.get::<Visibility>(hidden), Some(&Visibility::Hidden));
}
