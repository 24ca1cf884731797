use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::slider::{sleep_until_deadline, MonotonicClock};
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{Event, EventStream, MouseEventKind};
use futures::StreamExt;
use std::io;

/// Run the banner until the user quits or a shutdown signal arrives.
///
/// One loop owns the app: it redraws, then waits for whichever comes first
/// of a terminal event, the next slider deadline, or shutdown.
pub async fn run(config: Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, MonotonicClock::new());
    let mut events = EventStream::new();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let deadline = app.deadline_instant();
        tokio::select! {
            _ = shutdown.wait() => break,
            _ = sleep_until_deadline(deadline) => app.on_deadline(),
            event = events.next() => match event {
                Some(Ok(event)) => handle_event(&mut app, event),
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal event stream failed");
                    break;
                }
                None => break,
            },
        }
    }

    drop(guard);
    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                app.on_mouse_move(mouse.column, mouse.row);
            }
        }
        Event::FocusGained => app.on_focus_change(true),
        Event::FocusLost => app.on_focus_change(false),
        Event::Resize(cols, rows) => app.on_resize(cols, rows),
        _ => {}
    }
}
