// Module declarations
pub mod components;
pub mod widgets;

// Core modules
pub mod action;
pub mod component;
pub mod hit_test;
pub mod keys;
pub mod layout;
pub mod mouse;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use component::{Component, Effect, Element};
pub use keys::key_to_action;
pub use mouse::mouse_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use chrono::NaiveDate;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::selection::{DateRange, RangeListener};

/// Main entry point for the interactive picker
///
/// Runs until the user quits and returns the range selected at that point.
/// `listener` sees every change along the way.
pub async fn run(
    config: Config,
    today: NaiveDate,
    initial_range: DateRange,
    listener: Box<dyn RangeListener>,
) -> Result<DateRange, io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let initial_state = AppState::new(config, today, initial_range);
    let mut runtime = Runtime::new(initial_state, listener);

    // Mount the month list with the real viewport
    let size = terminal.size()?;
    runtime.dispatch(Action::Resize {
        width: size.width,
        height: size.height,
    });

    let result = event_loop(&mut terminal, &mut runtime, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|()| runtime.range())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
    tick_rate: Duration,
) -> Result<(), io::Error> {
    let renderer = Renderer::new();

    loop {
        // Process any actions from effects FIRST (settle timers)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::trace!("LOOP: Processed {} actions", actions_processed);
        }

        // Animation frame
        if runtime.needs_tick() {
            runtime.dispatch(Action::Tick(Instant::now()));
        }

        // Render
        terminal.draw(|f| {
            let element = runtime.build();
            let config = &runtime.state().system.config.display;
            renderer.render(&element, f.area(), f.buffer_mut(), config);
        })?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let now = Instant::now();
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                key_to_action(key, runtime.state(), now)
            }
            Event::Mouse(mouse) => mouse_to_action(mouse, runtime.state(), now),
            Event::Resize(width, height) => Some(Action::Resize { width, height }),
            _ => None,
        };

        if let Some(action) = action {
            if action == Action::Quit {
                tracing::debug!("ACTION: Quitting picker");
                return Ok(());
            }
            runtime.dispatch(action);
        }
    }
}
