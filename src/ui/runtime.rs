use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::cancel::CancelToken;
use crate::config::{Config, ConfigStore};
use crate::contact::{ContactClient, ContactFlow};
use crate::typewriter::{Animator, AnimatorHandle, PhraseSequence, TypewriterState, TypewriterTimings};
use crate::ui::app::{App, Page, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_QUEUE: usize = 8;

/// Run the TUI on the calling thread until the user quits.
///
/// Blocks; call from a dedicated thread (e.g. `spawn_blocking`). Async work
/// (typewriter timer, submissions) runs on `runtime`.
pub fn run(config: ConfigStore, runtime: Handle) -> io::Result<()> {
    let settings = config.get();
    let client = ContactClient::new(&settings.contact).map_err(io::Error::other)?;
    let flow = ContactFlow::new(
        Arc::new(client),
        Duration::from_millis(settings.contact.success_reset_ms),
    );
    let phrases = PhraseSequence::new(settings.site.phrases.iter().cloned())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut app = App::new(settings.site.owner.clone(), settings.site.theme, flow.clone());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    app.attach_commands(command_tx);
    runtime.spawn(pump_commands(command_rx, flow));

    let shutdown = CancelToken::new();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let mut typewriter = TypewriterMount::new(runtime, phrases, &settings, events.sender());
    typewriter.sync(&mut app);

    tracing::info!("Portfolio UI started");
    let result = event_loop(&mut terminal, &mut app, &events, &mut typewriter);

    typewriter.unmount(&mut app);
    shutdown.cancel();
    drop(guard);
    tracing::info!("Portfolio UI stopped");
    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    typewriter: &mut TypewriterMount,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => {
                handle_key(app, key);
                typewriter.sync(app);
            }
            Ok(AppEvent::Typewriter { mount, text }) => {
                // Frames queued by an earlier mount are dropped
                if typewriter.is_current(mount) {
                    app.on_typewriter_frame(text);
                }
            }
            // Tick and resize only trigger a redraw; submit status changes
            // arrive through the shared flow state.
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::InputLost(message)) => return Err(io::Error::other(message)),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

/// Forwards submit requests from the UI thread to the contact flow.
///
/// Each submission runs in its own task so the pump keeps draining; the
/// flow's in-flight guard turns duplicates into no-ops.
async fn pump_commands(mut rx: mpsc::Receiver<UiCommand>, flow: ContactFlow) {
    while let Some(command) = rx.recv().await {
        match command {
            UiCommand::SubmitContact => {
                let flow = flow.clone();
                tokio::spawn(async move {
                    let outcome = flow.submit().await;
                    tracing::debug!(?outcome, "Submit finished");
                });
            }
        }
    }
}

/// The typewriter runs only while the home page is visible. Leaving the
/// page cancels the timer; coming back starts over from the first phrase.
struct TypewriterMount {
    runtime: Handle,
    initial: TypewriterState,
    events: Sender<AppEvent>,
    handle: Option<AnimatorHandle>,
    generation: u64,
}

impl TypewriterMount {
    fn new(
        runtime: Handle,
        phrases: PhraseSequence,
        config: &Config,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            runtime,
            initial: TypewriterState::new(phrases, TypewriterTimings::from(&config.typewriter)),
            events,
            handle: None,
            generation: 0,
        }
    }

    fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    fn is_current(&self, mount: u64) -> bool {
        self.is_mounted() && mount == self.generation
    }

    fn sync(&mut self, app: &mut App) {
        match (app.page() == Page::Home, self.is_mounted()) {
            (true, false) => self.mount(app),
            (false, true) => self.unmount(app),
            _ => {}
        }
    }

    fn mount(&mut self, app: &mut App) {
        app.on_typewriter_frame(self.initial.displayed().to_string());
        self.generation = self.generation.wrapping_add(1);
        let mount = self.generation;
        let events = self.events.clone();
        let _enter = self.runtime.enter();
        self.handle = Some(Animator::spawn(self.initial.clone(), move |state| {
            let _ = events.send(AppEvent::Typewriter {
                mount,
                text: state.displayed().to_string(),
            });
        }));
        tracing::debug!("Typewriter mounted");
    }

    fn unmount(&mut self, app: &mut App) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            tracing::debug!("Typewriter unmounted");
        }
        app.on_typewriter_unmounted();
    }
}
