use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::reducer::reduce;
use super::state::AppState;
use crate::selection::{DateRange, RangeListener};

/// Component runtime - manages state and action processing
///
/// The Runtime is responsible for:
/// - Owning the application state
/// - Dispatching actions through the reducer
/// - Notifying the host listener of range changes
/// - Running delayed effects on the tokio executor
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Host callback for selection changes
    listener: Box<dyn RangeListener>,
}

impl Runtime {
    /// Create a new runtime with initial state and the host's range listener
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState, listener: Box<dyn RangeListener>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            listener,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Snapshot of the selected range
    pub fn range(&self) -> DateRange {
        self.state.picker.range()
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect
    ///
    /// Listener notifications run synchronously so the host sees every change
    /// in dispatch order. Everything else goes to the async executor.
    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::RangeChanged(range) => {
                debug!("EFFECT: range changed to {}", range);
                self.listener.range_changed(&range);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Delay { .. } => {
                trace!("EFFECT: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// True while the event loop should keep sending animation frames
    pub fn needs_tick(&self) -> bool {
        self.state.scroll.is_animating()
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Delay { after, action } => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = action_tx.send(action);
                });
            }
            // Listener notifications never leave the runtime thread
            Effect::RangeChanged(_) => {
                tracing::warn!("RangeChanged effect reached async executor");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tui::keys::key_to_action;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn test_state(config: Config) -> AppState {
        AppState::new(config, date(16), DateRange::EMPTY)
    }

    fn recording_runtime(config: Config) -> (Runtime, Arc<Mutex<Vec<DateRange>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let listener = move |range: &DateRange| sink.lock().unwrap().push(*range);
        (Runtime::new(test_state(config), Box::new(listener)), seen)
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let (runtime, _) = recording_runtime(Config::default());
        assert!(runtime.range().is_empty());
        assert!(!runtime.needs_tick());
    }

    #[tokio::test]
    async fn test_dispatch_notifies_listener() {
        let (mut runtime, seen) = recording_runtime(Config::default());

        runtime.dispatch(Action::SelectDate(date(3)));
        runtime.dispatch(Action::SelectDate(date(8)));
        runtime.dispatch(Action::ClearRange);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                DateRange::new(Some(date(3)), None),
                DateRange::new(Some(date(3)), Some(date(8))),
                DateRange::EMPTY,
            ]
        );
    }

    #[tokio::test]
    async fn test_action_queue() {
        let (mut runtime, _) = recording_runtime(Config::default());

        let tx = runtime.action_sender();
        tx.send(Action::Resize { width: 40, height: 30 }).unwrap();
        tx.send(Action::OpenMonthSelector).unwrap();

        let count = runtime.process_actions();

        assert_eq!(count, 2);
        assert!(runtime.state().scroll.is_mounted());
        assert!(runtime.state().selector.open);
    }

    #[tokio::test]
    async fn test_delayed_settle_updates_current_month() {
        let mut config = Config::default();
        config.scroll.settle_ms = 10;
        let (mut runtime, _) = recording_runtime(config);
        runtime.dispatch(Action::Resize { width: 40, height: 30 });

        let layout = runtime.state().scroll.layout().clone();
        let viewport = runtime.state().scroll.viewport_height();
        let target = layout.centered_offset(16, viewport).unwrap();
        let delta = target as i32 - runtime.state().scroll.offset() as i32;
        runtime.dispatch(Action::Scroll { delta, at: Instant::now() });

        // The label only changes once the settle timer fires
        assert_eq!(runtime.state().picker.current_month, crate::window::CENTER_INDEX);

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        while runtime.state().picker.current_month != 16 && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(20)).await;
            runtime.process_actions();
        }
        assert_eq!(runtime.state().picker.current_month, 16);
    }

    #[tokio::test]
    async fn test_effect_action_is_redispatched() {
        let (mut runtime, _) = recording_runtime(Config::default());
        runtime.effect_tx.send(Effect::Action(Action::OpenMonthSelector)).unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        runtime.process_actions();

        assert!(runtime.state().selector.open);
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let (runtime, _) = recording_runtime(Config::default());
        assert!(matches!(runtime.build(), Element::Overlay { .. }));
    }

    #[tokio::test]
    async fn test_needs_tick_while_animating() {
        let (mut runtime, _) = recording_runtime(Config::default());
        runtime.dispatch(Action::Resize { width: 40, height: 30 });
        runtime.dispatch(Action::SelectMonth { index: 2, at: Instant::now() });
        assert!(runtime.needs_tick());
    }

    #[tokio::test]
    async fn test_quit_key() {
        let (runtime, _) = recording_runtime(Config::default());
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key_to_action(key, runtime.state(), Instant::now()), Some(Action::Quit));
    }
}
