//! Command handling on top of the quiz controller, without any I/O

use crate::quiz::command::Command;
use crate::quiz::score::Score;
use dog_quiz_application::{QuizController, QuizOption};
use dog_quiz_domain::Quiz;
use std::sync::Arc;
use tracing::debug;

/// What a command did, for the REPL to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pick was right; carries the breed's display name
    Correct(String),
    /// The pick was wrong; the option is now shaking
    Wrong(QuizOption),
    /// A new quiz is loading
    Loading,
    Help,
    Quit,
    /// The command could not be applied to the current screen
    Invalid(String),
}

/// A player's run of quizzes: the controller plus the score
pub struct QuizSession {
    controller: Arc<QuizController>,
    score: Score,
    scored_quiz: Option<Arc<Quiz>>,
}

impl QuizSession {
    pub fn new(controller: Arc<QuizController>) -> Self {
        Self {
            controller,
            score: Score::default(),
            scored_quiz: None,
        }
    }

    pub fn controller(&self) -> &Arc<QuizController> {
        &self.controller
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Select(index) => self.select(index),
            Command::Next | Command::Retry => {
                self.controller.close_answer_dialog();
                self.controller.load_next_quiz();
                Outcome::Loading
            }
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }

    fn select(&mut self, index: usize) -> Outcome {
        let state = self.controller.state();
        let (Some(option), Some(quiz)) = (
            state.options.get(index).cloned(),
            self.controller.current_quiz(),
        ) else {
            return Outcome::Invalid(format!("There is no option {} yet.", index + 1));
        };

        let is_new_quiz = self
            .scored_quiz
            .as_ref()
            .is_none_or(|scored| !Arc::ptr_eq(scored, &quiz));
        if is_new_quiz {
            debug!("Scoring a new quiz");
            self.score.start_quiz();
            self.scored_quiz = Some(Arc::clone(&quiz));
        }

        self.controller.select_option(&option.id);

        if quiz.is_correct_answer(&option.id) {
            self.score.record_correct();
            Outcome::Correct(quiz.correct_answer().display_name())
        } else {
            self.score.record_wrong();
            Outcome::Wrong(option)
        }
    }
}
