//! Connectivity state transitions.
//!
//! Decides whether two consecutive probe results constitute a transition
//! worth recording. State is threaded explicitly through each loop
//! iteration, so detection is a pure function.

/// A change in connectivity between two consecutive probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The connection went from up to down.
    Lost,
    /// The connection went from down to up.
    Restored,
}

impl Transition {
    /// Human-readable log message for this transition.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Lost => "Internet connection lost",
            Self::Restored => "Internet connection restored",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Compare the latest probe result against the previously recorded state.
///
/// Returns the new state and the transition to record, if any. The new
/// state is always `current`: state tracking is unconditional, logging is
/// conditional.
pub fn detect_transition(current: bool, previous: bool) -> (bool, Option<Transition>) {
    let transition = match (previous, current) {
        (true, false) => Some(Transition::Lost),
        (false, true) => Some(Transition::Restored),
        _ => None,
    };
    (current, transition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_on_up_to_down() {
        let (state, transition) = detect_transition(false, true);
        assert!(!state);
        assert_eq!(transition, Some(Transition::Lost));
    }

    #[test]
    fn test_restored_on_down_to_up() {
        let (state, transition) = detect_transition(true, false);
        assert!(state);
        assert_eq!(transition, Some(Transition::Restored));
    }

    #[test]
    fn test_no_transition_when_still_up() {
        let (state, transition) = detect_transition(true, true);
        assert!(state);
        assert_eq!(transition, None);
    }

    #[test]
    fn test_no_transition_when_still_down() {
        let (state, transition) = detect_transition(false, false);
        assert!(!state);
        assert_eq!(transition, None);
    }

    #[test]
    fn test_detection_is_idempotent() {
        // Same inputs always yield the same outputs, no hidden state.
        for &(current, previous) in &[(true, true), (true, false), (false, true), (false, false)] {
            let first = detect_transition(current, previous);
            let second = detect_transition(current, previous);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(Transition::Lost.message(), "Internet connection lost");
        assert_eq!(Transition::Restored.message(), "Internet connection restored");
        assert_eq!(Transition::Lost.to_string(), "Internet connection lost");
    }
}
