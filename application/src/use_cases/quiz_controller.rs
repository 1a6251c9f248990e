//! Quiz Controller
//!
//! The quiz state machine. Owns the observable [`UiState`], sequences
//! load / answer / next operations on top of [`BuildQuizUseCase`], and runs
//! the timed "shake" feedback for wrong answers.
//!
//! # State
//!
//! The state is a set of overlapping flags rather than a strict enum:
//! content can be visible while a new quiz loads, behind an error banner,
//! or under the answer dialog. Every update is an atomic read-modify-write
//! on a [`watch`] channel, so front ends always observe whole snapshots.
//!
//! # Concurrency
//!
//! - Each [`load_next_quiz`](QuizController::load_next_quiz) call is stamped
//!   with a sequence number. A load applies its result only if no newer load
//!   was started meanwhile; superseded results are dropped.
//! - Shake timers are keyed by option id. Picking the same wrong option
//!   again aborts the running timer and starts a fresh window.
//!
//! All methods that start background work must run inside a Tokio runtime.

use crate::config::QuizParams;
use crate::use_cases::build_quiz::{BuildQuizError, BuildQuizUseCase};
use crate::use_cases::quiz_state::{NO_QUIZ_MESSAGE, QuizOption, UiState};
use dog_quiz_domain::Quiz;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct ShakeTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Bookkeeping that must change together with the published state.
///
/// Lock order: `session` first, then the watch channel.
#[derive(Default)]
struct Session {
    current_quiz: Option<Arc<Quiz>>,
    latest_load: u64,
    shake_timers: HashMap<String, ShakeTimer>,
    next_timer_generation: u64,
}

impl Session {
    fn cancel_shake_timers(&mut self) {
        for (_, timer) in self.shake_timers.drain() {
            timer.handle.abort();
        }
    }
}

/// Quiz state machine driving a single quiz screen
pub struct QuizController {
    use_case: BuildQuizUseCase,
    params: QuizParams,
    state: watch::Sender<UiState>,
    session: Mutex<Session>,
}

impl QuizController {
    /// Create an idle controller. No quiz is loaded until
    /// [`load_next_quiz`](Self::load_next_quiz) is called.
    pub fn new(use_case: BuildQuizUseCase, params: QuizParams) -> Arc<Self> {
        let (state, _) = watch::channel(UiState::default());
        Arc::new(Self {
            use_case,
            params,
            state,
            session: Mutex::new(Session::default()),
        })
    }

    /// Create a controller and immediately start loading the first quiz,
    /// so the first observable state is `loading`.
    pub fn start(use_case: BuildQuizUseCase, params: QuizParams) -> Arc<Self> {
        let controller = Self::new(use_case, params);
        controller.load_next_quiz();
        controller
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// The quiz currently being answered, if any
    pub fn current_quiz(&self) -> Option<Arc<Quiz>> {
        self.lock_session().current_quiz.clone()
    }

    /// Initialize, retry, or advance to the next quiz.
    ///
    /// Clears the error and the revealed answer, sets `loading`, and builds a
    /// quiz in the background. Previous options and image stay visible until
    /// the new quiz arrives, and stay untouched if building fails.
    pub fn load_next_quiz(self: &Arc<Self>) -> JoinHandle<()> {
        let seq = {
            let mut session = self.lock_session();
            session.latest_load += 1;
            self.state.send_modify(|state| {
                state.revealed_answer = None;
                state.error_msg = None;
                state.loading = true;
            });
            session.latest_load
        };
        debug!("Starting quiz load #{}", seq);

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let result = this.use_case.execute().await;
            this.apply_load_result(seq, result);
        })
    }

    /// Handle a tap on an answer option
    pub fn select_option(self: &Arc<Self>, selected_id: &str) {
        let mut session = self.lock_session();

        let Some(quiz) = session.current_quiz.clone() else {
            warn!("Option '{}' selected with no active quiz", selected_id);
            self.state
                .send_modify(|state| state.error_msg = Some(NO_QUIZ_MESSAGE.to_string()));
            return;
        };

        if self.use_case.check_answer(&quiz, selected_id) {
            let name = quiz.correct_answer().display_name();
            info!("Correct answer picked: {}", name);
            self.state
                .send_modify(|state| state.revealed_answer = Some(name));
        } else {
            debug!("Wrong answer picked: {}", selected_id);
            self.start_shake(&mut session, selected_id);
        }
    }

    /// Dismiss the answer dialog, leaving everything else as is
    pub fn close_answer_dialog(&self) {
        self.state.send_modify(|state| state.revealed_answer = None);
    }

    fn apply_load_result(&self, seq: u64, result: Result<Quiz, BuildQuizError>) {
        let mut session = self.lock_session();

        if session.latest_load != seq {
            debug!(
                "Discarding result of quiz load #{} (latest is #{})",
                seq, session.latest_load
            );
            return;
        }

        match result {
            Ok(quiz) => {
                info!("Quiz load #{} ready", seq);
                let options: Vec<QuizOption> = quiz.options().iter().map(QuizOption::from).collect();
                let image = quiz.image().clone();
                session.cancel_shake_timers();
                session.current_quiz = Some(Arc::new(quiz));
                self.state.send_modify(|state| {
                    state.options = options;
                    state.image = Some(image);
                    state.error_msg = None;
                    state.loading = false;
                });
            }
            Err(e) => {
                warn!("Quiz load #{} failed: {}", seq, e);
                self.state.send_modify(|state| {
                    state.error_msg = Some(e.to_string());
                    state.loading = false;
                });
            }
        }
    }

    fn start_shake(self: &Arc<Self>, session: &mut Session, option_id: &str) {
        session.next_timer_generation += 1;
        let generation = session.next_timer_generation;

        self.state
            .send_modify(|state| state.set_shaking(option_id, true));

        let this = Arc::clone(self);
        let id = option_id.to_string();
        let window = self.params.shake_duration;
        // The session lock is held until the timer is registered, so the
        // task cannot look itself up before it is in the map.
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            this.finish_shake(&id, generation);
        });

        let timer = ShakeTimer { generation, handle };
        if let Some(previous) = session.shake_timers.insert(option_id.to_string(), timer) {
            previous.handle.abort();
        }
    }

    fn finish_shake(&self, option_id: &str, generation: u64) {
        let mut session = self.lock_session();
        let is_current = session
            .shake_timers
            .get(option_id)
            .is_some_and(|t| t.generation == generation);
        if !is_current {
            return;
        }
        session.shake_timers.remove(option_id);
        self.state
            .send_modify(|state| state.set_shaking(option_id, false));
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
