//! REPL (Read-Eval-Print Loop) for the terminal quiz

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::LoadingSpinner;
use crate::quiz::command::Command;
use crate::quiz::score::Score;
use crate::quiz::session::{Outcome, QuizSession};
use dog_quiz_application::{QuizController, UiState};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Interactive quiz REPL
///
/// Reading a line blocks the calling thread, so run it on a multi-threaded
/// runtime: loads and shake timers keep running on the other workers.
pub struct QuizRepl {
    session: QuizSession,
    formatter: ConsoleFormatter,
    config: ReplConfig,
}

impl QuizRepl {
    pub fn new(controller: Arc<QuizController>, formatter: ConsoleFormatter) -> Self {
        Self {
            session: QuizSession::new(controller),
            formatter,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run until the player quits or the round limit is reached.
    /// Returns the final score.
    pub async fn run(mut self) -> RlResult<Score> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();
        let mut redraw = true;

        loop {
            if redraw {
                self.wait_until_idle().await;
                print!("{}", self.formatter.render(&self.session.controller().state()));
                redraw = false;
            }

            let line = match rl.readline("dog> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    println!("Type h for available commands");
                    continue;
                }
            };

            match self.session.apply(command) {
                Outcome::Correct(name) => {
                    print!("{}", ConsoleFormatter::format_answer(&name));
                    if self.rounds_complete() {
                        info!("Round limit reached");
                        break;
                    }
                }
                Outcome::Wrong(option) => {
                    print!("{}", ConsoleFormatter::format_wrong(&option));
                    print!(
                        "{}",
                        ConsoleFormatter::format_options(&self.session.controller().state().options)
                    );
                }
                Outcome::Loading => {
                    println!();
                    redraw = true;
                }
                Outcome::Help => print!("{}", ConsoleFormatter::help()),
                Outcome::Invalid(message) => println!("{}", message),
                Outcome::Quit => break,
            }
        }

        let score = self.session.score().clone();
        println!();
        print!("{}", ConsoleFormatter::format_score(&score));
        println!("Bye!");
        Ok(score)
    }

    fn rounds_complete(&self) -> bool {
        self.config
            .rounds
            .is_some_and(|rounds| self.session.score().answered() >= rounds)
    }

    /// Block (with a spinner) until no load is in flight
    async fn wait_until_idle(&self) {
        let mut rx = self.session.controller().subscribe();
        let message = {
            let state = rx.borrow();
            if !state.loading {
                return;
            }
            loading_message(&state)
        };

        let _spinner = if self.config.show_progress {
            LoadingSpinner::start(message)
        } else {
            LoadingSpinner::hidden()
        };
        if rx.wait_for(|state| !state.loading).await.is_err() {
            warn!("Quiz controller went away while loading");
        }
    }

    fn print_welcome(&self) {
        println!();
        print!("{}", ConsoleFormatter::header("Dog Quiz - Guess the Breed"));
        println!();
        if let Some(rounds) = self.config.rounds {
            println!("Rounds: {}", rounds);
            println!();
        }
        print!("{}", ConsoleFormatter::help());
        println!();
    }
}

fn loading_message(state: &UiState) -> &'static str {
    if state.has_content() {
        "Fetching the next dog..."
    } else {
        "Fetching a dog..."
    }
}
