//! Console rendering of the quiz screen

use crate::config::OutputConfig;
use crate::output::preview::ascii_preview;
use crate::quiz::score::Score;
use colored::Colorize;
use dog_quiz_application::{QuizOption, UiState};
use dog_quiz_domain::DecodedImage;

/// Marker drawn around an option while it shakes
const SHAKE_MARKER: &str = "~";

/// Renders [`UiState`] snapshots as plain terminal text
pub struct ConsoleFormatter {
    config: OutputConfig,
}

impl ConsoleFormatter {
    /// Create a formatter. Disabling color turns it off process-wide,
    /// including the spinner and help text.
    pub fn new(config: OutputConfig) -> Self {
        if !config.color {
            colored::control::set_override(false);
        }
        Self { config }
    }

    /// Format a complete quiz screen
    ///
    /// Sections appear only when the state carries them: photo, options,
    /// error banner, revealed answer.
    pub fn render(&self, state: &UiState) -> String {
        let mut output = String::new();

        if let Some(image) = &state.image {
            output.push_str(&self.format_image(image));
            output.push('\n');
        }

        if !state.options.is_empty() {
            output.push_str(&format!("{}\n", "Which breed is this?".cyan().bold()));
            output.push_str(&Self::format_options(&state.options));
        }

        if let Some(error) = &state.error_msg {
            output.push('\n');
            output.push_str(&Self::format_error(error));
        }

        if let Some(answer) = &state.revealed_answer {
            output.push('\n');
            output.push_str(&Self::format_answer(answer));
        }

        output
    }

    /// Photo preview (when enabled) followed by its size and source
    pub fn format_image(&self, image: &DecodedImage) -> String {
        let mut output = String::new();

        if self.config.image_preview {
            for line in ascii_preview(image, self.config.preview_width, self.config.color) {
                output.push_str(&line);
                output.push('\n');
            }
        }

        output.push_str(&format!(
            "{}\n",
            format!("{}x{}  {}", image.width(), image.height(), image.source_url()).dimmed()
        ));
        output
    }

    /// Numbered option list; shaking options are highlighted
    pub fn format_options(options: &[QuizOption]) -> String {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if option.shaking {
                    format!(
                        "  {}) {}\n",
                        i + 1,
                        format!("{m} {} {m}", option.display_text, m = SHAKE_MARKER)
                            .red()
                            .bold()
                    )
                } else {
                    format!("  {}) {}\n", i + 1, option.display_text)
                }
            })
            .collect()
    }

    pub fn format_error(message: &str) -> String {
        format!(
            "{} {}  {}\n",
            "x".red().bold(),
            message.red(),
            "(press r to retry)".dimmed()
        )
    }

    pub fn format_answer(name: &str) -> String {
        format!(
            "{} {}  {}\n",
            "v".green().bold(),
            format!("Correct! It's a {}.", name).green().bold(),
            "(press n for the next dog)".dimmed()
        )
    }

    pub fn format_wrong(option: &QuizOption) -> String {
        format!(
            "{} {}\n",
            "x".red().bold(),
            format!("Not a {}. Try again!", option.display_text).yellow()
        )
    }

    pub fn format_score(score: &Score) -> String {
        format!(
            "{} {}/{} correct on the first try\n",
            "Score:".cyan().bold(),
            score.first_try(),
            score.answered()
        )
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  1-4      - Pick an option\n");
        output.push_str("  n, next  - Next quiz\n");
        output.push_str("  r, retry - Retry after an error\n");
        output.push_str("  h, help  - Show this help\n");
        output.push_str("  q, quit  - Quit\n");
        output
    }

    pub fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }
}
