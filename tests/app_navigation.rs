mod common;

use std::time::Duration;

use common::{flow_for, free_port};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use termfolio::config::ThemeMode;
use termfolio::contact::{ContactIntent, FormField, SubmitStatus, NETWORK_ERROR_MESSAGE};
use termfolio::ui::app::{App, Page, UiCommand};
use termfolio::ui::input::handle_key;
use termfolio::ui::render::draw;

fn make_app() -> App {
    let endpoint = format!("http://127.0.0.1:{}/api/contact", free_port());
    App::new("Ada Lovelace", ThemeMode::Dark, flow_for(&endpoint, Duration::from_secs(5)))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Render `app` into an off-screen buffer and return it as plain text.
fn render_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_home_shows_owner_and_typewriter_frame() {
    let mut app = make_app();
    app.on_typewriter_frame("Passionate ab".into());

    let screen = render_text(&app);
    assert!(screen.contains("Ada Lovelace"));
    assert!(screen.contains("Passionate ab"));
    assert!(screen.contains("1 Home"));
}

#[test]
fn test_every_page_renders_in_both_themes() {
    let mut app = make_app();
    for theme in [ThemeMode::Dark, ThemeMode::Light] {
        if app.theme() != theme {
            app.toggle_theme();
        }
        for page in Page::ALL {
            app.set_page(page);
            let screen = render_text(&app);
            assert!(screen.contains(page.title()), "{:?} missing title", page);
        }
    }
}

#[test]
fn test_projects_page_lists_filtered_projects() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Char('3')));
    assert_eq!(app.page(), Page::Projects);

    let all = render_text(&app);
    assert!(all.contains("Movie Management System"));

    handle_key(&mut app, key(KeyCode::Right));
    let filtered = render_text(&app);
    let visible = app.visible_projects();
    assert!(!visible.is_empty());
    assert!(filtered.contains(visible[0].title));
    assert!(filtered.contains(app.project_filter().label()));
}

#[test]
fn test_contact_page_shows_typed_values_and_error_banner() {
    let mut app = make_app();
    handle_key(&mut app, key(KeyCode::Char('4')));
    for ch in "Grace".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    assert!(render_text(&app).contains("Grace"));

    app.contact().dispatch(ContactIntent::Submit);
    app.contact().dispatch(ContactIntent::Failed {
        message: NETWORK_ERROR_MESSAGE.into(),
    });
    assert!(render_text(&app).contains("Network error"));
    assert_eq!(
        app.contact_snapshot().submit_status,
        SubmitStatus::Error {
            message: NETWORK_ERROR_MESSAGE.into()
        }
    );
}

#[test]
fn test_ctrl_s_with_blank_fields_does_not_queue() {
    let mut app = make_app();
    let (tx, mut rx) = tokio::sync::mpsc::channel(4);
    app.attach_commands(tx);
    app.set_page(Page::Contact);

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(rx.try_recv().is_err());
    assert_eq!(app.contact_snapshot().focused, FormField::Name);
    assert!(render_text(&app).contains("Please fill in the Name field."));
}

#[test]
fn test_ctrl_s_with_complete_form_queues_submit() {
    let mut app = make_app();
    let (tx, mut rx) = tokio::sync::mpsc::channel(4);
    app.attach_commands(tx);
    app.set_page(Page::Contact);
    for field in FormField::ALL {
        app.dispatch_contact(ContactIntent::Edit {
            field,
            value: "x".into(),
        });
    }

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert_eq!(rx.try_recv().ok(), Some(UiCommand::SubmitContact));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = make_app();
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
}
