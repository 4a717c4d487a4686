#![forbid(unsafe_code)]

//! Widget lifecycle as an explicit transition table.
//!
//! ```text
//! Unattached --Attach--> Live --Detach--> Detached --Attach--> Live
//! Live --LanguageChanged--> Live    full rebuild, content preserved
//! Live --ValueSet--> Live           in-place replacement
//! ```
//!
//! Every `(Phase, Input)` pair is covered by [`transition`]; there is no
//! phase in which two sessions exist and no input that drops content set
//! before attachment.

/// Lifecycle phase of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed, never attached. No session.
    Unattached,
    /// Attached with exactly one live session.
    Live,
    /// Was live, now detached. Session released, content kept as pending.
    Detached,
}

impl Phase {
    /// Whether a session exists in this phase.
    #[must_use]
    pub const fn has_session(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// Host-originated input, already classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Element entered a live document.
    Attach,
    /// Element left the document.
    Detach,
    /// Language selector set to a different value.
    LanguageChanged,
    /// Language selector set to its current value.
    LanguageUnchanged,
    /// Content set through the `value` property or attribute.
    ValueSet,
}

impl Input {
    /// Every input, for exhaustive checks.
    pub const ALL: [Input; 5] = [
        Self::Attach,
        Self::Detach,
        Self::LanguageChanged,
        Self::LanguageUnchanged,
        Self::ValueSet,
    ];
}

/// What the controller must do for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Nothing.
    Ignore,
    /// Resolve initial content, clear host content, build the session.
    Mount,
    /// Store the new selector; no session to rebuild.
    RecordLanguage,
    /// Store the new selector and rebuild the session around current content.
    RecordLanguageAndRebuild,
    /// Keep the value for the next mount.
    StorePending,
    /// Replace the session document in place.
    ReplaceContent,
    /// Snapshot the document into pending, then destroy the session.
    Release,
}

/// Result of one step of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub next: Phase,
    pub effect: Effect,
}

impl Transition {
    const fn to(next: Phase, effect: Effect) -> Self {
        Self { next, effect }
    }
}

/// The transition table.
#[must_use]
pub const fn transition(phase: Phase, input: Input) -> Transition {
    use Effect::*;
    use Input::*;
    use Phase::*;

    match (phase, input) {
        (Unattached | Detached, Attach) => Transition::to(Live, Mount),
        (Unattached | Detached, LanguageChanged) => Transition::to(phase, RecordLanguage),
        (Unattached | Detached, ValueSet) => Transition::to(phase, StorePending),
        (Unattached | Detached, Detach | LanguageUnchanged) => Transition::to(phase, Ignore),

        // Re-fired connect callbacks (e.g. the element was moved within
        // the same document) must not build a second session.
        (Live, Attach) => Transition::to(Live, Ignore),
        (Live, LanguageChanged) => Transition::to(Live, RecordLanguageAndRebuild),
        (Live, LanguageUnchanged) => Transition::to(Live, Ignore),
        (Live, ValueSet) => Transition::to(Live, ReplaceContent),
        (Live, Detach) => Transition::to(Detached, Release),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [Phase; 3] = [Phase::Unattached, Phase::Live, Phase::Detached];

    #[test]
    fn attach_always_ends_live() {
        for phase in PHASES {
            assert_eq!(transition(phase, Input::Attach).next, Phase::Live);
        }
    }

    #[test]
    fn only_live_rebuilds_on_language_change() {
        for phase in PHASES {
            let effect = transition(phase, Input::LanguageChanged).effect;
            if phase == Phase::Live {
                assert_eq!(effect, Effect::RecordLanguageAndRebuild);
            } else {
                assert_eq!(effect, Effect::RecordLanguage);
            }
        }
    }

    #[test]
    fn unchanged_language_is_idempotent() {
        for phase in PHASES {
            assert_eq!(
                transition(phase, Input::LanguageUnchanged),
                Transition {
                    next: phase,
                    effect: Effect::Ignore
                }
            );
        }
    }

    #[test]
    fn value_is_patched_when_live_and_stored_otherwise() {
        assert_eq!(
            transition(Phase::Live, Input::ValueSet).effect,
            Effect::ReplaceContent
        );
        assert_eq!(
            transition(Phase::Unattached, Input::ValueSet).effect,
            Effect::StorePending
        );
        assert_eq!(
            transition(Phase::Detached, Input::ValueSet).effect,
            Effect::StorePending
        );
    }

    #[test]
    fn session_effects_agree_with_phase() {
        // Effects that touch a session only fire from phases that own one,
        // and Mount only fires from phases that do not.
        for phase in PHASES {
            for input in Input::ALL {
                let t = transition(phase, input);
                match t.effect {
                    Effect::ReplaceContent | Effect::Release | Effect::RecordLanguageAndRebuild => {
                        assert!(phase.has_session(), "{phase:?} --{input:?}-->");
                    }
                    Effect::Mount => {
                        assert!(!phase.has_session(), "{phase:?} --{input:?}-->");
                        assert!(t.next.has_session());
                    }
                    Effect::Ignore | Effect::RecordLanguage | Effect::StorePending => {
                        assert_eq!(t.next, phase);
                    }
                }
            }
        }
    }

    #[test]
    fn detach_releases_only_live_sessions() {
        assert_eq!(
            transition(Phase::Live, Input::Detach),
            Transition {
                next: Phase::Detached,
                effect: Effect::Release
            }
        );
        assert_eq!(
            transition(Phase::Unattached, Input::Detach).effect,
            Effect::Ignore
        );
    }
}
