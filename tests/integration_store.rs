use term_desk::geometry::{PixelRect, Point, Size};
use term_desk::theme::Theme;
use term_desk::window::{DesktopStore, SettingsPatch, ShellSettings};

fn store() -> DesktopStore {
    let mut store = DesktopStore::new(ShellSettings::default());
    store.apply_work_area(PixelRect::new(0, 1, 120, 38));
    store
}

#[test]
fn open_sequences_yield_distinct_ids_and_z() {
    let mut store = store();
    for _ in 0..25 {
        store.open_window("Welcome", "Welcome", None);
    }
    let windows = store.windows();
    for (i, a) in windows.iter().enumerate() {
        for b in &windows[i + 1..] {
            assert_ne!(a.id(), b.id());
            assert_ne!(a.z_index(), b.z_index());
        }
    }
}

#[test]
fn focus_moves_target_to_back_of_paint_order() {
    let mut store = store();
    let a = store.open_window("A", "A", None);
    let b = store.open_window("B", "B", None);
    let c = store.open_window("C", "C", None);
    let d = store.open_window("D", "D", None);
    store.focus_window(b);
    let order: Vec<_> = store.windows().iter().map(|w| w.id()).collect();
    assert_eq!(order, vec![a, c, d, b]);
    // the others kept their relative order
    store.focus_window(a);
    let order: Vec<_> = store.windows().iter().map(|w| w.id()).collect();
    assert_eq!(order, vec![c, d, b, a]);
}

#[test]
fn closed_ids_are_gone_and_inert() {
    let mut store = store();
    let a = store.open_window("A", "A", None);
    let b = store.open_window("B", "B", None);
    store.close_window(a);
    assert!(store.windows().iter().all(|w| w.id() != a));
    // stale operations are silent no-ops
    store.focus_window(a);
    store.move_window(a, Point::new(1, 1));
    store.resize_window(a, Size::new(40, 12));
    store.set_maximized(a, true);
    store.close_window(a);
    assert_eq!(store.len(), 1);
    assert_eq!(store.focused(), Some(b));
}

#[test]
fn maximize_restore_round_trips_arbitrary_geometry() {
    let mut store = store();
    let cases = [
        PixelRect::new(0, 1, 20, 8),
        PixelRect::new(-12, -3, 55, 30),
        PixelRect::new(90, 30, 14, 4),
    ];
    for rect in cases {
        let id = store.open_window("A", "A", Some(rect));
        store.set_maximized(id, true);
        assert_eq!(
            store.window(id).unwrap().frame_rect(),
            store.work_area(),
            "maximized window fills the work area"
        );
        store.set_maximized(id, false);
        assert_eq!(store.window(id).unwrap().frame_rect(), rect);
    }
}

#[test]
fn minimized_windows_stay_listed_but_leave_the_surface() {
    let mut store = store();
    let a = store.open_window("A", "A", Some(PixelRect::new(10, 5, 30, 10)));
    store.set_minimized(a, true);
    // full listing keeps it (taskbar view)
    assert!(store.windows().iter().any(|w| w.id() == a));
    // the desktop render pass filters on !minimized
    let surface: Vec<_> = store
        .windows()
        .into_iter()
        .filter(|w| !w.minimized())
        .collect();
    assert!(surface.is_empty());
    assert_eq!(store.window_at(15, 8), None);
    assert_eq!(store.focused(), None);
}

#[test]
fn settings_updates_are_merged_and_immediately_visible() {
    let mut store = store();
    store.update_settings(SettingsPatch {
        theme: Some(Theme::Light),
    });
    assert_eq!(store.settings().theme, Theme::Light);
    store.update_settings(SettingsPatch { theme: None });
    assert_eq!(store.settings().theme, Theme::Light);
}
