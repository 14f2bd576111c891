use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use term_desk::desktop::DesktopShell;
use term_desk::geometry::{PixelRect, Point};
use term_desk::registry::AppRegistry;
use term_desk::window::ShellSettings;

fn shell() -> DesktopShell {
    let mut shell = DesktopShell::new(AppRegistry::with_builtin_apps(), ShellSettings::default());
    shell.resize(80, 24);
    shell
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

fn up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

#[test]
fn title_drag_moves_by_pointer_delta() {
    let mut shell = shell();
    let id = shell.open_app("Calculator").unwrap();
    // first cascade slot inside the work area
    assert_eq!(
        shell.store().window(id).unwrap().frame_rect(),
        PixelRect::new(2, 2, 48, 16)
    );
    // title row is one below the frame top
    shell.handle_event(&down(10, 3));
    shell.handle_event(&drag(50, 13));
    assert_eq!(
        shell.store().window(id).unwrap().position(),
        Point::new(42, 12)
    );
    shell.handle_event(&up(50, 13));
    // further drags are inert once the button is released
    shell.handle_event(&drag(60, 20));
    assert_eq!(
        shell.store().window(id).unwrap().position(),
        Point::new(42, 12)
    );
}

#[test]
fn selection_lives_on_the_bare_background_only() {
    let mut shell = shell();
    shell.open_app("Calculator");
    // background press: gesture starts degenerate and invisible
    shell.handle_event(&down(60, 21));
    assert!(shell.selection().active());
    assert!(shell.selection().rect().is_none());
    shell.handle_event(&drag(70, 21));
    // one axis still zero: still suppressed
    assert!(shell.selection().rect().is_none());
    shell.handle_event(&drag(70, 16));
    assert_eq!(shell.selection().rect(), Some(PixelRect::new(60, 16, 10, 5)));
    // release anywhere ends the gesture
    shell.handle_event(&up(5, 5));
    assert!(!shell.selection().active());
}

#[test]
fn window_press_never_starts_a_selection() {
    let mut shell = shell();
    shell.open_app("Calculator");
    // inside the window body
    shell.handle_event(&down(10, 10));
    assert!(!shell.selection().active());
}

#[test]
fn escape_cancels_an_active_selection() {
    let mut shell = shell();
    shell.handle_event(&down(40, 10));
    shell.handle_event(&drag(50, 15));
    assert!(shell.selection().active());
    shell.handle_event(&Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(!shell.selection().active());
}

#[test]
fn chrome_rows_do_not_start_selections() {
    let mut shell = shell();
    // top bar row
    shell.handle_event(&down(40, 0));
    assert!(!shell.selection().active());
    // taskbar row
    shell.handle_event(&down(40, 23));
    assert!(!shell.selection().active());
}

#[test]
fn resize_drag_from_the_corner_grows_the_window() {
    let mut shell = shell();
    let id = shell.open_app("Calculator").unwrap();
    // bottom-right corner of the (2,2)+(48,16) frame
    shell.handle_event(&down(49, 17));
    shell.handle_event(&drag(59, 21));
    let window = shell.store().window(id).unwrap();
    assert_eq!(window.position(), Point::new(2, 2));
    assert_eq!(window.size().width, 58);
    assert_eq!(window.size().height, 20);
    shell.handle_event(&up(59, 21));
}
