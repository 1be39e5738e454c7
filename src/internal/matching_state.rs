use std::collections::BTreeSet;

/// The longest accepted prefix recorded so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AcceptedPrefix {
    /// Byte offset one past the last character of the prefix.
    pub(crate) end: usize,
    /// Number of trace steps belonging to the prefix.
    pub(crate) steps: usize,
    /// The active states after the prefix.
    pub(crate) final_states: BTreeSet<String>,
}

/// Bookkeeping of the single-pass longest prefix search.
///
/// The search is anchored at the start of the input, so unlike an unanchored scanner there is
/// no start position to track.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct MatchingState {
    state: InnerMatchingState,
    last_match: Option<AcceptedPrefix>,
}

impl MatchingState {
    /// Create a new matching state.
    #[inline]
    pub(crate) fn new() -> Self {
        MatchingState::default()
    }

    /// The runner moved into an accepting configuration.
    pub(crate) fn transition_to_accepting(
        &mut self,
        end: usize,
        steps: usize,
        final_states: BTreeSet<String>,
    ) {
        match self.state {
            InnerMatchingState::Longest => {
                // Nothing can follow a failed step
            }
            _ => {
                self.state = InnerMatchingState::Accepting;
                self.last_match = Some(AcceptedPrefix {
                    end,
                    steps,
                    final_states,
                });
            }
        }
    }

    /// The runner moved into a configuration without final states.
    pub(crate) fn transition_to_non_accepting(&mut self) {
        match self.state {
            InnerMatchingState::None => {
                // Continue search for an accepting configuration
            }
            InnerMatchingState::Accepting => self.state = InnerMatchingState::Passed,
            InnerMatchingState::Passed | InnerMatchingState::Longest => {}
        }
    }

    /// The runner failed on a symbol. Every longer prefix fails on the same symbol.
    pub(crate) fn no_transition(&mut self) {
        self.state = InnerMatchingState::Longest;
    }

    /// Returns true once no longer prefix can be accepted.
    #[inline]
    pub(crate) fn is_longest_match(&self) -> bool {
        self.state == InnerMatchingState::Longest
    }

    /// Returns the longest accepted prefix found.
    pub(crate) fn into_last_match(self) -> Option<AcceptedPrefix> {
        self.last_match
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum InnerMatchingState {
    /// No accepting configuration seen so far.
    #[default]
    None,
    /// The current configuration accepts. Its prefix is recorded.
    Accepting,
    /// An earlier configuration accepted, the current one does not.
    Passed,
    /// A step failed. The recorded prefix, if any, is final.
    Longest,
}
