use serde::{Deserialize, Serialize};

/// Input the host feeds into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Char(char),
    Backspace,
    Restart,
    Quit,
}

impl Action {
    /// Edits `input` for `Char` and `Backspace`. Other actions leave it alone.
    pub fn apply_to(self, input: &mut String) {
        match self {
            Self::Char(c) => input.extend(c.to_lowercase()),
            Self::Backspace => {
                input.pop();
            }
            Self::Restart | Self::Quit => {}
        }
    }

    pub const fn is_edit(self) -> bool {
        matches!(self, Self::Char(_) | Self::Backspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_are_lowercased() {
        let mut input = String::new();
        Action::Char('C').apply_to(&mut input);
        Action::Char('a').apply_to(&mut input);
        assert_eq!(input, "ca");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut input = String::new();
        Action::Backspace.apply_to(&mut input);
        assert_eq!(input, "");

        input.push_str("ab");
        Action::Backspace.apply_to(&mut input);
        assert_eq!(input, "a");
    }

    #[test]
    fn control_actions_do_not_edit() {
        let mut input = String::from("x");
        Action::Restart.apply_to(&mut input);
        Action::Quit.apply_to(&mut input);
        assert_eq!(input, "x");
        assert!(!Action::Quit.is_edit());
        assert!(Action::Backspace.is_edit());
    }
}
