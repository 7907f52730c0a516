//! Viewer navigation state.

/// A parsed viewer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance one example.
    Next,
    /// Go back one example.
    Prev,
    /// Jump to a 1-based example number.
    Jump(i64),
    /// `j` with something that is not a number.
    JumpInvalid,
    /// Show the dataset summary screen.
    Info,
    /// Re-display the help.
    Help,
    /// Leave the viewer.
    Quit,
    /// Anything unrecognized.
    Unknown,
}

/// What the loop should do after applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current example (and the help below it).
    Continue,
    /// Show the dataset summary screen.
    ShowInfo,
    /// Display an error message; the cursor did not move.
    Rejected(String),
    /// Terminate the loop.
    Quit,
}

/// Parse one input line into a command.
pub fn parse_command(line: &str) -> Command {
    let input = line.trim().to_lowercase();

    if let Some(rest) = input.strip_prefix("j ") {
        return match rest.trim().parse::<i64>() {
            Ok(number) => Command::Jump(number),
            Err(_) => Command::JumpInvalid,
        };
    }

    match input.as_str() {
        "n" => Command::Next,
        "p" => Command::Prev,
        "i" => Command::Info,
        "h" => Command::Help,
        "q" => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Cursor over a loaded dataset. Navigation clamps at both ends; only an
/// explicit jump outside the range is reported as an error.
#[derive(Debug)]
pub struct ViewerSession {
    index: usize,
    total: usize,
}

impl ViewerSession {
    /// Start at the first example.
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    /// Current 0-based example index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of examples in the session.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Apply one command to the session.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Next => {
                if self.index + 1 < self.total {
                    self.index += 1;
                }
                Outcome::Continue
            }
            Command::Prev => {
                self.index = self.index.saturating_sub(1);
                Outcome::Continue
            }
            Command::Jump(number) => {
                // Commands are 1-based; the cursor is 0-based.
                let target = number - 1;
                if target >= 0 && (target as usize) < self.total {
                    self.index = target as usize;
                    Outcome::Continue
                } else {
                    Outcome::Rejected(format!(
                        "Invalid index. Must be between 1 and {}.",
                        self.total
                    ))
                }
            }
            Command::JumpInvalid => Outcome::Rejected("Invalid number.".to_string()),
            Command::Info => Outcome::ShowInfo,
            Command::Help => Outcome::Continue,
            Command::Quit => Outcome::Quit,
            Command::Unknown => Outcome::Rejected("Unknown command.".to_string()),
        }
    }
}
