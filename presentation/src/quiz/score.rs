//! Session score

/// Answered quizzes and how many were right on the first pick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    answered: u32,
    first_try: u32,
    current_missed: bool,
    current_answered: bool,
}

impl Score {
    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn first_try(&self) -> u32 {
        self.first_try
    }

    /// Start tracking a new quiz
    pub fn start_quiz(&mut self) {
        self.current_missed = false;
        self.current_answered = false;
    }

    pub fn record_wrong(&mut self) {
        if !self.current_answered {
            self.current_missed = true;
        }
    }

    /// Count a correct pick. Only the first one per quiz counts.
    pub fn record_correct(&mut self) {
        if self.current_answered {
            return;
        }
        self.current_answered = true;
        self.answered += 1;
        if !self.current_missed {
            self.first_try += 1;
        }
    }
}
