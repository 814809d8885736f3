//! Playback scheduler for captured operation logs.
//!
//! The scheduler owns the items, the captured log, the playback cursor and
//! the last rendered state. A run is a spawned task consuming the log one
//! operation at a time and suspending only in cancellable timed waits.
//! At most one run is active: every operation that starts a run or changes
//! what is being played cancels the previous run first, and a new run
//! consumes nothing until the previous run task has exited.

use super::cancel::{wait, CancellationToken};
use super::pacing::{fill_duration, Transition};
use super::renderer::Renderer;
use crate::capture::capture;
use parking_lot::{Mutex, RwLock};
use sortvis_algorithms::SortingAlgorithm;
use sortvis_core::{
    clock_seed, generate_items, LinearCongruentialGenerator, Operation, OperationLog,
    RandomNumberGenerator, SortableItem,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::Mutex as RunLock;
use tokio::task::JoinHandle;

/// Configuration for the playback scheduler.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackConfig {
    /// Number of items to generate.
    pub item_count: usize,
    /// Duration of one playback step.
    pub step_timing: Duration,
    /// Whether comparisons are shown (and take time) during playback.
    pub visualize_comparisons: bool,
    /// Initial seed; the wall clock is used when unset.
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            item_count: 32,
            step_timing: Duration::from_millis(250),
            visualize_comparisons: false,
            seed: None,
        }
    }
}

impl PlaybackConfig {
    /// Set the number of items.
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Set the step duration.
    pub fn with_step_timing(mut self, step_timing: Duration) -> Self {
        self.step_timing = step_timing;
        self
    }

    /// Set the step duration from a speed in steps per second.
    pub fn with_speed(mut self, steps_per_second: u32) -> Self {
        self.step_timing = Duration::from_secs(1) / steps_per_second.max(1);
        self
    }

    /// Enable or disable comparison visualization.
    pub fn with_comparisons(mut self, visualize: bool) -> Self {
        self.visualize_comparisons = visualize;
        self
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Current state of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Idle, including after the log was played to its end.
    Stopped,
    /// A run is consuming the log.
    Running,
}

/// Lifecycle notification for external state indication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// A run was started.
    Started,
    /// The active run was cancelled or played to the end.
    Stopped,
}

/// Lifecycle handler function type
pub type LifecycleHandler = Box<dyn Fn(LifecycleEvent) + Send + Sync>;

type Handlers = Arc<RwLock<Vec<LifecycleHandler>>>;

/// Held by a run task for its whole lifetime.
type Exclusive = Arc<RunLock<()>>;

/// State shared between the scheduler handle and its run task.
struct Playback<R> {
    algorithm: Arc<dyn SortingAlgorithm>,
    rng: Box<dyn RandomNumberGenerator>,
    item_count: usize,
    step_timing: Duration,
    visualize_comparisons: bool,
    items: Vec<SortableItem>,
    log: Arc<OperationLog>,
    /// Index of the next operation to consume.
    cursor: usize,
    last_state: Vec<SortableItem>,
    /// Bumped whenever something is rendered or the cursor rewinds, so
    /// work finishing after a wait can tell whether it is stale.
    frame: u64,
    run: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
    renderer: R,
}

impl<R: Renderer> Playback<R> {
    fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|token| !token.is_cancelled())
    }

    /// Cancel the active run. Returns true if one was running.
    fn cancel_run(&mut self) -> bool {
        self.run.take().is_some_and(|token| token.cancel())
    }

    fn regenerate(&mut self) {
        self.items = generate_items(self.item_count, self.rng.as_mut());
    }

    fn recapture(&mut self) {
        self.log = Arc::new(capture(self.algorithm.as_ref(), &self.items));
    }

    /// Rewind to before the first operation and show the initial state.
    fn rewind(&mut self) {
        self.cursor = 0;
        self.frame += 1;
        self.last_state = self.log.initial().to_vec();
        self.renderer.clear_comparison();
        self.renderer.render(&self.last_state);
    }
}

/// Work left to finish once a wait is over.
enum Pending {
    Comparison {
        frame: u64,
        wait: Duration,
    },
    Change {
        frame: u64,
        wait: Duration,
        target: Vec<SortableItem>,
    },
}

/// Replays captured operation logs at a configurable pace.
///
/// Cloning yields another handle to the same scheduler.
pub struct PlaybackScheduler<R: Renderer> {
    playback: Arc<Mutex<Playback<R>>>,
    handlers: Handlers,
    exclusive: Exclusive,
}

impl<R: Renderer> Clone for PlaybackScheduler<R> {
    fn clone(&self) -> Self {
        Self {
            playback: Arc::clone(&self.playback),
            handlers: Arc::clone(&self.handlers),
            exclusive: Arc::clone(&self.exclusive),
        }
    }
}

impl<R: Renderer> PlaybackScheduler<R> {
    /// Create a scheduler using the default linear congruential generator.
    ///
    /// Items are generated and captured right away, and the initial state
    /// is rendered.
    pub fn new(config: PlaybackConfig, algorithm: Arc<dyn SortingAlgorithm>, renderer: R) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self::with_rng(
            config,
            algorithm,
            Box::new(LinearCongruentialGenerator::new(seed)),
            renderer,
        )
    }

    /// Create a scheduler with a custom random number generator.
    ///
    /// The generator is used as is; `config.seed` is ignored.
    pub fn with_rng(
        config: PlaybackConfig,
        algorithm: Arc<dyn SortingAlgorithm>,
        rng: Box<dyn RandomNumberGenerator>,
        renderer: R,
    ) -> Self {
        let mut playback = Playback {
            algorithm,
            rng,
            item_count: config.item_count,
            step_timing: config.step_timing,
            visualize_comparisons: config.visualize_comparisons,
            items: Vec::new(),
            log: Arc::new(OperationLog::default()),
            cursor: 0,
            last_state: Vec::new(),
            frame: 0,
            run: None,
            task: None,
            renderer,
        };

        playback.regenerate();
        playback.recapture();
        playback.rewind();

        Self {
            playback: Arc::new(Mutex::new(playback)),
            handlers: Arc::new(RwLock::new(Vec::new())),
            exclusive: Arc::new(RunLock::new(())),
        }
    }

    /// Register a lifecycle handler.
    ///
    /// Handlers run on the thread that triggered the transition and must
    /// not register further handlers.
    pub fn on_lifecycle<F>(&self, handler: F)
    where
        F: Fn(LifecycleEvent) + Send + Sync + 'static,
    {
        self.handlers.write().push(Box::new(handler));
    }

    fn emit(&self, event: LifecycleEvent) {
        emit(&self.handlers, event);
    }

    /// Use a different algorithm, recapturing the log for the current items.
    pub fn use_algorithm(&self, algorithm: Arc<dyn SortingAlgorithm>) {
        let stopped = {
            let mut playback = self.playback.lock();
            let stopped = playback.cancel_run();
            tracing::debug!("Switching playback algorithm to {}", algorithm.name());
            playback.algorithm = algorithm;
            playback.recapture();
            playback.rewind();
            stopped
        };

        if stopped {
            self.emit(LifecycleEvent::Stopped);
        }
    }

    /// Use a different number of items, regenerating them from the current seed.
    pub fn use_item_count(&self, count: usize) {
        let stopped = {
            let mut playback = self.playback.lock();
            let stopped = playback.cancel_run();
            tracing::debug!("Switching playback item count to {}", count);
            playback.item_count = count;
            playback.regenerate();
            playback.recapture();
            playback.rewind();
            stopped
        };

        if stopped {
            self.emit(LifecycleEvent::Stopped);
        }
    }

    /// Set the duration of one step. Applies from the next wait on.
    pub fn use_step_timing(&self, step_timing: Duration) {
        self.playback.lock().step_timing = step_timing;
    }

    /// Enable or disable comparison visualization.
    pub fn visualize_comparisons(&self, visualize: bool) {
        self.playback.lock().visualize_comparisons = visualize;
    }

    /// Reseed the generator and regenerate the items.
    ///
    /// Without a seed, the current wall-clock time in milliseconds is used.
    pub fn scramble(&self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(clock_seed);
        let stopped = {
            let mut playback = self.playback.lock();
            let stopped = playback.cancel_run();
            tracing::debug!("Scrambling {} items with seed {}", playback.item_count, seed);
            playback.rng.use_seed(seed);
            playback.regenerate();
            playback.recapture();
            playback.rewind();
            stopped
        };

        if stopped {
            self.emit(LifecycleEvent::Stopped);
        }
    }

    /// Start or resume playback.
    ///
    /// Does nothing while running. A log that was played to its end is
    /// rewound first. Outside a Tokio runtime nothing is started.
    pub fn start(&self) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("Playback can only be started within a Tokio runtime");
            return;
        };

        let token = {
            let mut playback = self.playback.lock();
            if playback.is_running() {
                return;
            }

            if playback.cursor >= playback.log.len() {
                playback.rewind();
            }

            if playback.items.is_empty() {
                tracing::warn!("Starting playback without any items");
            }

            let token = CancellationToken::new();
            playback.run = Some(token.clone());
            tracing::debug!(
                "Playback started at operation {} of {}",
                playback.cursor,
                playback.log.len()
            );
            token
        };

        self.emit(LifecycleEvent::Started);

        let handle = runtime.spawn(run(
            Arc::clone(&self.playback),
            Arc::clone(&self.handlers),
            Arc::clone(&self.exclusive),
            token,
        ));
        self.playback.lock().task = Some(handle);
    }

    /// Stop playback, keeping the cursor where it is.
    pub fn stop(&self) {
        let stopped = self.playback.lock().cancel_run();

        if stopped {
            tracing::debug!("Playback stopped");
            self.emit(LifecycleEvent::Stopped);
        }
    }

    /// Stop playback and rewind to the initial state.
    pub fn reset(&self) {
        let stopped = {
            let mut playback = self.playback.lock();
            let stopped = playback.cancel_run();
            playback.rewind();
            stopped
        };

        tracing::debug!("Playback reset");
        if stopped {
            self.emit(LifecycleEvent::Stopped);
        }
    }

    /// Wait until the most recently started run task has exited.
    pub async fn settled(&self) {
        let handle = self.playback.lock().task.take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                tracing::warn!("Playback task ended abnormally: {}", err);
            }
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.playback.lock().is_running() {
            PlaybackState::Running
        } else {
            PlaybackState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    /// Index of the next operation to consume
    pub fn cursor(&self) -> usize {
        self.playback.lock().cursor
    }

    /// Check whether the whole log has been consumed
    pub fn is_exhausted(&self) -> bool {
        let playback = self.playback.lock();
        playback.cursor >= playback.log.len()
    }

    /// The currently captured operation log
    pub fn log(&self) -> Arc<OperationLog> {
        Arc::clone(&self.playback.lock().log)
    }

    /// The current items, in their scrambled order
    pub fn items(&self) -> Vec<SortableItem> {
        self.playback.lock().items.clone()
    }

    /// The state most recently rendered or being transitioned to
    pub fn last_state(&self) -> Vec<SortableItem> {
        self.playback.lock().last_state.clone()
    }

    pub fn item_count(&self) -> usize {
        self.playback.lock().item_count
    }

    pub fn step_timing(&self) -> Duration {
        self.playback.lock().step_timing
    }

    pub fn algorithm(&self) -> Arc<dyn SortingAlgorithm> {
        Arc::clone(&self.playback.lock().algorithm)
    }

    /// Access the renderer.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.playback.lock().renderer)
    }
}

fn emit(handlers: &Handlers, event: LifecycleEvent) {
    for handler in handlers.read_recursive().iter() {
        handler(event);
    }
}

/// Consume the log until it is exhausted or `token` is cancelled.
async fn run<R: Renderer>(
    playback: Arc<Mutex<Playback<R>>>,
    handlers: Handlers,
    exclusive: Exclusive,
    token: CancellationToken,
) {
    // A cancelled predecessor still finishes its in-flight operation.
    let _exclusive = exclusive.lock_owned().await;

    // A fresh pass shows the initial state for one step first.
    let opening = {
        let mut playback = playback.lock();
        if token.is_cancelled() {
            return;
        }

        if playback.cursor == 0 {
            playback.rewind();
            Some(playback.step_timing)
        } else {
            None
        }
    };

    if let Some(step) = opening {
        wait(step, &token).await;
    }

    loop {
        let pending = {
            let mut guard = playback.lock();
            let playback = &mut *guard;
            if token.is_cancelled() {
                break;
            }

            let Some(operation) = playback.log.get(playback.cursor).cloned() else {
                break;
            };
            playback.cursor += 1;
            playback.frame += 1;
            let frame = playback.frame;

            tracing::trace!(cursor = playback.cursor, "Consuming {:?}", operation);

            match operation {
                Operation::Comparison { a, b } => {
                    if !playback.visualize_comparisons {
                        continue;
                    }

                    let step = playback.step_timing;
                    playback
                        .renderer
                        .highlight_comparison(&a, &b, fill_duration(step));
                    Pending::Comparison { frame, wait: step }
                }
                Operation::Change { sequence } => {
                    let transition =
                        Transition::between(&playback.last_state, &sequence, playback.step_timing);
                    playback.last_state.clone_from(&sequence);

                    if transition.is_still() {
                        playback.renderer.render(&sequence);
                        continue;
                    }

                    playback.renderer.begin_transition(&transition);
                    Pending::Change {
                        frame,
                        wait: transition.total(),
                        target: sequence,
                    }
                }
            }
        };

        // The operation in flight is always finished, unless something
        // newer has been rendered meanwhile.
        match pending {
            Pending::Comparison { frame, wait: step } => {
                wait(step, &token).await;
                let mut playback = playback.lock();
                if playback.frame == frame {
                    playback.renderer.clear_comparison();
                }
            }
            Pending::Change {
                frame,
                wait: duration,
                target,
            } => {
                wait(duration, &token).await;
                let mut playback = playback.lock();
                if playback.frame == frame {
                    playback.renderer.render(&target);
                }
            }
        }
    }

    let exhausted = {
        let mut playback = playback.lock();
        let ours = playback
            .run
            .as_ref()
            .is_some_and(|active| active.same_as(&token));

        if ours && playback.cursor >= playback.log.len() {
            playback.run = None;
            token.cancel()
        } else {
            false
        }
    };

    if exhausted {
        tracing::debug!("Playback reached the end of the log");
        emit(&handlers, LifecycleEvent::Stopped);
    }
}
