//! The typing effect in the hero terminal.
//!
//! [`CommandTyper`] types a command one character at a time, holds it, deletes it, pauses, and
//! moves on to the next command, forever. It only computes frames; the caller owns the timer.

use std::time::Duration;

use crate::config::TerminalConfig;

/// One step of the animation: the text to show and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct CommandTyper {
    commands: Vec<String>,
    command: usize,
    chars: usize,
    deleting: bool,
    type_delay: Duration,
    delete_delay: Duration,
    hold_delay: Duration,
    next_delay: Duration,
}

impl CommandTyper {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            commands: config.commands.clone(),
            command: 0,
            chars: 0,
            deleting: false,
            type_delay: Duration::from_millis(config.type_delay_ms),
            delete_delay: Duration::from_millis(config.delete_delay_ms),
            hold_delay: Duration::from_millis(config.hold_delay_ms),
            next_delay: Duration::from_millis(config.next_delay_ms),
        }
    }

    /// Advance one step. Returns `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<Frame> {
        let command = self.commands.get(self.command)?;
        let len = command.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }

        let text = command.chars().take(self.chars).collect();
        let mut delay = if self.deleting {
            self.delete_delay
        } else {
            self.type_delay
        };

        if !self.deleting && self.chars == len {
            delay = self.hold_delay;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            delay = self.next_delay;
            self.deleting = false;
            self.command = (self.command + 1) % self.commands.len();
        }

        Some(Frame { text, delay })
    }

    /// The command currently being typed or deleted.
    pub fn current_command(&self) -> Option<&str> {
        self.commands.get(self.command).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typer(commands: &[&str]) -> CommandTyper {
        CommandTyper::new(&TerminalConfig {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        })
    }

    fn frame(text: &str, ms: u64) -> Frame {
        Frame {
            text: text.to_string(),
            delay: Duration::from_millis(ms),
        }
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut typer = typer(&["ls", "id"]);
        let frames: Vec<_> = std::iter::from_fn(|| typer.tick()).take(9).collect();

        assert_eq!(
            frames,
            vec![
                frame("l", 100),
                frame("ls", 2000),
                frame("l", 50),
                frame("", 500),
                frame("i", 100),
                frame("id", 2000),
                frame("i", 50),
                frame("", 500),
                // wraps back to the first command
                frame("l", 100),
            ]
        );
    }

    #[test]
    fn single_character_commands() {
        let mut typer = typer(&["w"]);
        assert_eq!(typer.tick(), Some(frame("w", 2000)));
        assert_eq!(typer.tick(), Some(frame("", 500)));
        assert_eq!(typer.tick(), Some(frame("w", 2000)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typer = typer(&["ñé"]);
        assert_eq!(typer.tick().unwrap().text, "ñ");
        assert_eq!(typer.tick().unwrap().text, "ñé");
    }

    #[test]
    fn no_commands_means_no_frames() {
        let mut typer = typer(&[]);
        assert_eq!(typer.tick(), None);
        assert_eq!(typer.current_command(), None);
    }

    #[test]
    fn default_commands() {
        let typer = CommandTyper::new(&TerminalConfig::default());
        assert_eq!(typer.current_command(), Some("nmap -sS 192.168.1.0/24"));
    }
}
