//! Simulated developer: one FIFO task queue advanced by tokio timers.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::SimulationSettings;
use crate::feed::{ActivityKind, ActivitySink};
use crate::models::{Model, ModelSummary};
use crate::random::SharedRandom;
use crate::tasks::Task;

use super::phrases::{ambient_phrases, AMBIENT_KINDS, FOCUS_PHRASES, PROGRESS_PHRASES};
use super::types::{Specialization, WorkerIdentity, WorkerStatus};

/// Progress added per advancement tick is drawn from `[MIN, MAX)`
const PROGRESS_STEP_MIN: f64 = 5.0;
const PROGRESS_STEP_MAX: f64 = 20.0;

/// Point-in-time view of a worker
#[derive(Debug, Clone, Serialize)]
pub struct WorkerSnapshot {
    pub id: u32,
    pub name: String,
    pub specialization: Specialization,
    pub status: WorkerStatus,
    pub model: ModelSummary,
    /// Project path of the current run
    pub project: Option<String>,
    /// Description of the head task
    pub current_task: Option<String>,
    /// Short activity text set by the team tick
    pub focus: Option<String>,
    /// Progress on the head task, in `[0, 100)`
    pub progress: f64,
    /// Remaining tasks, head first
    pub queue: Vec<Task>,
    /// Tasks completed since the last start
    pub completed: u32,
}

#[derive(Debug, Default)]
struct WorkerState {
    /// Bumped on every start and stop; ticks from older runs are ignored
    generation: u64,
    status: WorkerStatus,
    project: Option<String>,
    queue: VecDeque<Task>,
    progress: f64,
    focus: Option<String>,
    completed: u32,
}

/// State shared between the worker handle and its timer tasks
struct WorkerShared {
    identity: WorkerIdentity,
    model: &'static Model,
    sink: Arc<dyn ActivitySink>,
    rng: SharedRandom,
    timing: SimulationSettings,
    state: Mutex<WorkerState>,
}

impl WorkerShared {
    fn emit(&self, message: &str, kind: ActivityKind) {
        self.sink
            .record(self.identity.id, &self.identity.name, message, kind);
    }

    /// Reset the run and load `tasks`. Returns the new generation when the
    /// worker ends up working.
    fn assign(&self, project: &str, tasks: Vec<Task>) -> Option<u64> {
        let mut state = self.state.lock();
        state.generation += 1;
        state.project = Some(project.to_string());
        state.queue = tasks.into();
        state.progress = 0.0;
        state.focus = None;
        state.completed = 0;

        if state.queue.is_empty() {
            state.status = WorkerStatus::Idle;
            self.emit(
                "No tasks assigned, waiting for assignments",
                ActivityKind::Info,
            );
            return None;
        }
        if let Some(head) = state.queue.front_mut() {
            head.begin();
        }
        state.status = WorkerStatus::Working;

        info!(
            worker = %self.identity.name,
            specialization = %self.identity.specialization,
            tasks = state.queue.len(),
            "Worker started"
        );
        self.emit(
            &format!("Starting work on project using {}", self.model.name),
            ActivityKind::Start,
        );
        Some(state.generation)
    }

    /// One advancement step. Returns whether the worker is still working.
    ///
    /// With `expected` set, the step only applies to that run.
    fn advance(&self, expected: Option<u64>) -> bool {
        let mut state = self.state.lock();
        if expected.is_some_and(|g| g != state.generation) {
            return false;
        }
        if state.status != WorkerStatus::Working || state.queue.is_empty() {
            return false;
        }

        let (step, progress_line) = {
            let mut rng = self.rng.lock();
            let step = rng.range_f64(PROGRESS_STEP_MIN, PROGRESS_STEP_MAX);
            let line = rng
                .chance(self.timing.progress_event_probability)
                .then(|| PROGRESS_PHRASES[rng.pick_index(PROGRESS_PHRASES.len())]);
            (step, line)
        };
        state.progress += step;
        debug!(worker = %self.identity.name, progress = state.progress, "Advance tick");

        if let Some(line) = progress_line {
            self.emit(line, ActivityKind::Progress);
        }

        if state.progress >= 100.0 {
            self.complete_head(&mut state);
        }
        state.status == WorkerStatus::Working
    }

    fn complete_head(&self, state: &mut WorkerState) {
        let Some(mut done) = state.queue.pop_front() else {
            return;
        };
        done.complete();
        state.completed += 1;
        state.progress = 0.0;
        state.focus = None;
        self.emit(&format!("Completed: {}", done.description), ActivityKind::Complete);

        if let Some(next) = state.queue.front_mut() {
            next.begin();
            let message = format!("Started: {}", next.description);
            self.emit(&message, ActivityKind::Start);
        } else {
            state.status = WorkerStatus::Idle;
            info!(
                worker = %self.identity.name,
                completed = state.completed,
                "Worker finished its queue"
            );
            self.emit(
                "All tasks completed, waiting for new assignments",
                ActivityKind::Info,
            );
        }
    }

    /// One ambient step. Returns whether the worker is still working.
    fn ambient(&self, expected: Option<u64>) -> bool {
        let state = self.state.lock();
        if expected.is_some_and(|g| g != state.generation) {
            return false;
        }
        if state.status != WorkerStatus::Working {
            return false;
        }

        let line = {
            let mut rng = self.rng.lock();
            if rng.chance(self.timing.activity_probability) {
                let phrases = ambient_phrases(self.identity.specialization);
                let phrase = phrases[rng.pick_index(phrases.len())];
                let kind = AMBIENT_KINDS[rng.pick_index(AMBIENT_KINDS.len())];
                Some((phrase, kind))
            } else {
                None
            }
        };
        if let Some((phrase, kind)) = line {
            self.emit(phrase, kind);
        }
        true
    }

    fn ambient_period(&self) -> Duration {
        let jitter = self
            .rng
            .lock()
            .range_f64(0.0, self.timing.activity_jitter_ms as f64);
        Duration::from_millis(self.timing.activity_base_ms + jitter as u64)
    }
}

/// A simulated developer.
///
/// Timer-driven methods (`start`) must be called from within a tokio runtime.
pub struct Worker {
    shared: Arc<WorkerShared>,
    timers: Mutex<Vec<JoinHandle<()>>>,
}

impl Worker {
    pub fn new(
        identity: WorkerIdentity,
        model: &'static Model,
        sink: Arc<dyn ActivitySink>,
        rng: SharedRandom,
        timing: SimulationSettings,
    ) -> Self {
        Self {
            shared: Arc::new(WorkerShared {
                identity,
                model,
                sink,
                rng,
                timing,
                state: Mutex::new(WorkerState::default()),
            }),
            timers: Mutex::new(Vec::new()),
        }
    }

    pub fn identity(&self) -> &WorkerIdentity {
        &self.shared.identity
    }

    /// Model bound at configuration time
    pub fn model(&self) -> &'static Model {
        self.shared.model
    }

    pub fn status(&self) -> WorkerStatus {
        self.shared.state.lock().status
    }

    /// Begin a run on `project` and spawn the advancement and ambient timers.
    ///
    /// Timers of a previous run are cancelled first. An empty task list leaves
    /// the worker idle with no timers.
    pub fn start(&self, project: &str, tasks: Vec<Task>) {
        self.cancel_timers();
        let Some(generation) = self.shared.assign(project, tasks) else {
            return;
        };

        let advance = {
            let shared = Arc::clone(&self.shared);
            let period = Duration::from_millis(shared.timing.advance_interval_ms);
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(period).await;
                    if !shared.advance(Some(generation)) {
                        break;
                    }
                }
            })
        };
        let ambient = {
            let shared = Arc::clone(&self.shared);
            tokio::spawn(async move {
                loop {
                    tokio::time::sleep(shared.ambient_period()).await;
                    if !shared.ambient(Some(generation)) {
                        break;
                    }
                }
            })
        };

        let mut timers = self.timers.lock();
        timers.push(advance);
        timers.push(ambient);
    }

    /// Load a run without spawning timers. Returns whether the worker is working.
    pub fn assign(&self, project: &str, tasks: Vec<Task>) -> bool {
        self.cancel_timers();
        self.shared.assign(project, tasks).is_some()
    }

    /// Run one advancement step now. Returns whether the worker is still working.
    pub fn tick(&self) -> bool {
        self.shared.advance(None)
    }

    /// Run one ambient step now. Returns whether the worker is working.
    pub fn ambient_tick(&self) -> bool {
        self.shared.ambient(None)
    }

    /// Maybe change the focus text of a working worker. Emits nothing.
    pub fn nudge(&self) {
        let mut state = self.shared.state.lock();
        if state.status != WorkerStatus::Working {
            return;
        }
        let mut rng = self.shared.rng.lock();
        if rng.chance(self.shared.timing.nudge_probability) {
            let focus = FOCUS_PHRASES[rng.pick_index(FOCUS_PHRASES.len())];
            state.focus = Some(focus.to_string());
        }
    }

    /// Go idle, clear the run and cancel every timer.
    ///
    /// No tick of the cancelled run has an effect once this returns.
    pub fn stop(&self) {
        {
            let mut state = self.shared.state.lock();
            state.generation += 1;
            let was_working = state.status == WorkerStatus::Working;
            state.status = WorkerStatus::Idle;
            state.queue.clear();
            state.progress = 0.0;
            state.focus = None;
            if was_working {
                info!(worker = %self.shared.identity.name, "Worker stopped");
            }
            self.shared.emit("Stopped working", ActivityKind::Info);
        }
        self.cancel_timers();
    }

    /// Timers still pending
    pub fn active_timers(&self) -> usize {
        let mut timers = self.timers.lock();
        timers.retain(|h| !h.is_finished());
        timers.len()
    }

    pub fn snapshot(&self) -> WorkerSnapshot {
        let state = self.shared.state.lock();
        let identity = &self.shared.identity;
        WorkerSnapshot {
            id: identity.id,
            name: identity.name.clone(),
            specialization: identity.specialization,
            status: state.status,
            model: self.shared.model.summary(),
            project: state.project.clone(),
            current_task: state.queue.front().map(|t| t.description.clone()),
            focus: state.focus.clone(),
            progress: state.progress,
            queue: state.queue.iter().cloned().collect(),
            completed: state.completed,
        }
    }

    fn cancel_timers(&self) {
        for handle in self.timers.lock().drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
