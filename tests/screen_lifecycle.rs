//! Whole-app flows: navigation, container lifetimes, static screens.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use greetly::ui::app::App;
use greetly::ui::details::DetailsScreen;
use greetly::ui::input::handle_key;
use greetly::ui::message::MessageScreen;
use greetly::ui::navigation::Screen;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn typed_name_travels_to_the_message_screen() {
    let mut app = App::new();

    // Clear "Android", then type "Jo".
    for _ in 0.."Android".len() {
        handle_key(&mut app, press(KeyCode::Backspace));
    }
    handle_key(&mut app, press(KeyCode::Char('J')));
    handle_key(&mut app, press(KeyCode::Char('o')));
    handle_key(&mut app, press(KeyCode::Enter));

    match app.screen() {
        Screen::Message(screen) => {
            assert_eq!(screen.recipient(), "Jo");
            assert_eq!(screen.state().message, "message");
        }
        _ => panic!("expected message screen"),
    }
}

#[test]
fn greeting_container_survives_a_round_trip() {
    let mut app = App::new();
    handle_key(&mut app, press(KeyCode::Char('!')));
    handle_key(&mut app, ctrl('d'));
    assert!(matches!(app.screen(), Screen::Details(_)));

    handle_key(&mut app, press(KeyCode::Esc));
    match app.screen() {
        Screen::Greeting(screen) => {
            assert_eq!(screen.state().name, "Android!");
            assert_eq!(screen.state().greeting_message, "Hello Android!!");
        }
        _ => panic!("expected greeting screen"),
    }
}

#[test]
fn esc_on_the_start_screen_quits() {
    let mut app = App::new();
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn message_container_emits_nothing_after_its_snapshot() {
    let mut screen = MessageScreen::new("Android".to_string());
    let rx = screen.store_mut().subscribe();

    assert_eq!(rx.try_recv().unwrap().message, "message");
    assert!(rx.try_recv().is_err());
}

#[test]
fn details_date_matches_the_full_date_shape() {
    let screen = DetailsScreen::new();
    let date = &screen.state().current_date;

    // "<Weekday>, <Month> <Day>, <Year>"
    let mut parts = date.splitn(2, ", ");
    let weekday = parts.next().unwrap();
    let rest = parts.next().expect("date has a weekday part");
    assert!(!weekday.is_empty());
    assert!(weekday.chars().all(|ch| ch.is_ascii_alphabetic()));

    let mut rest_parts = rest.rsplitn(2, ", ");
    let year = rest_parts.next().unwrap();
    let month_day = rest_parts.next().expect("date has a month-day part");
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|ch| ch.is_ascii_digit()));

    let mut md = month_day.split(' ');
    let month = md.next().unwrap();
    let day: u32 = md.next().unwrap().parse().unwrap();
    assert!(month.chars().all(|ch| ch.is_ascii_alphabetic()));
    assert!((1..=31).contains(&day));
}

#[test]
fn details_date_is_identical_across_reads() {
    let screen = DetailsScreen::new();
    let first = screen.state().current_date.clone();
    let second = screen.state().current_date.clone();
    assert_eq!(first, second);
}
