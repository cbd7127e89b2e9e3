//! Scanner status vocabulary → OSCAL decision vocabulary

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compliance decision for a rule or a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionState {
    Satisfied,
    NotSatisfied,
    NotApplicable,
    NotSelected,
    NotAddressed,
}

impl DecisionState {
    /// Map an OpenSCAP rule-result status (case-insensitive).
    ///
    /// `error` and `notchecked` count as failures so unresolved checks never
    /// pass review. Unknown or empty input is `NotAddressed`.
    pub fn from_scan_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "pass" => Self::Satisfied,
            "fail" | "error" | "notchecked" => Self::NotSatisfied,
            "notapplicable" => Self::NotApplicable,
            "notselected" => Self::NotSelected,
            _ => Self::NotAddressed,
        }
    }

    /// The state as it appears in OSCAL JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Satisfied => "satisfied",
            Self::NotSatisfied => "not-satisfied",
            Self::NotApplicable => "not-applicable",
            Self::NotSelected => "not-selected",
            Self::NotAddressed => "not-addressed",
        }
    }

    /// Exemption signals that push a control without any pass to not-applicable
    pub fn is_exemption(&self) -> bool {
        matches!(self, Self::NotApplicable | Self::NotSelected)
    }
}

impl std::fmt::Display for DecisionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combine the decisions of every rule that maps to one control.
///
/// Precedence, first match wins:
/// 1. any not-satisfied → not-satisfied
/// 2. no satisfied and any not-applicable/not-selected → not-applicable
/// 3. otherwise → satisfied, including a control fed only by not-addressed rules
pub fn finalize<'a, I>(states: I) -> DecisionState
where
    I: IntoIterator<Item = &'a DecisionState>,
{
    let mut any_satisfied = false;
    let mut any_exemption = false;

    for state in states {
        match state {
            DecisionState::NotSatisfied => return DecisionState::NotSatisfied,
            DecisionState::Satisfied => any_satisfied = true,
            other if other.is_exemption() => any_exemption = true,
            _ => {}
        }
    }

    if !any_satisfied && any_exemption {
        DecisionState::NotApplicable
    } else {
        DecisionState::Satisfied
    }
}

/// Decisions seen so far per control identifier
#[derive(Debug, Default)]
pub struct ControlStatusTracker {
    states: BTreeMap<String, Vec<DecisionState>>,
}

impl ControlStatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, control_id: &str, state: DecisionState) {
        self.states
            .entry(control_id.to_string())
            .or_default()
            .push(state);
    }

    pub fn states(&self, control_id: &str) -> &[DecisionState] {
        self.states
            .get(control_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Final decision for every tracked control, ordered by control id
    pub fn finalize_all(&self) -> BTreeMap<String, DecisionState> {
        self.states
            .iter()
            .map(|(control_id, states)| (control_id.clone(), finalize(states)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::DecisionState::*;

    const ALL: [DecisionState; 5] = [
        Satisfied,
        NotSatisfied,
        NotApplicable,
        NotSelected,
        NotAddressed,
    ];

    #[test]
    fn test_status_mapping() {
        assert_eq!(DecisionState::from_scan_status("pass"), Satisfied);
        assert_eq!(DecisionState::from_scan_status("PASS"), Satisfied);
        assert_eq!(DecisionState::from_scan_status("fail"), NotSatisfied);
        assert_eq!(DecisionState::from_scan_status("Error"), NotSatisfied);
        assert_eq!(DecisionState::from_scan_status("notchecked"), NotSatisfied);
        assert_eq!(DecisionState::from_scan_status("notapplicable"), NotApplicable);
        assert_eq!(DecisionState::from_scan_status("NotSelected"), NotSelected);
        assert_eq!(DecisionState::from_scan_status("bogus"), NotAddressed);
        assert_eq!(DecisionState::from_scan_status(""), NotAddressed);
        assert_eq!(DecisionState::from_scan_status("informational"), NotAddressed);
    }

    #[test]
    fn test_serialized_names() {
        for state in ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
    }

    #[test]
    fn test_failure_dominates() {
        assert_eq!(finalize(&[Satisfied, NotSatisfied]), NotSatisfied);
        assert_eq!(finalize(&[NotApplicable, NotSatisfied, NotSelected]), NotSatisfied);
    }

    #[test]
    fn test_exemptions_without_pass() {
        assert_eq!(finalize(&[NotApplicable, NotSelected]), NotApplicable);
        assert_eq!(finalize(&[NotSelected, NotAddressed]), NotApplicable);
        assert_eq!(finalize(&[NotApplicable, Satisfied]), Satisfied);
    }

    #[test]
    fn test_only_not_addressed_resolves_satisfied() {
        assert_eq!(finalize(&[NotAddressed]), Satisfied);
        assert_eq!(finalize(&[NotAddressed, NotAddressed]), Satisfied);
    }

    #[test]
    fn test_finalize_depends_only_on_distinct_states() {
        // Every subset of the five states, in forward and reverse order and duplicated
        for mask in 1u32..(1 << ALL.len()) {
            let subset: Vec<DecisionState> = ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, s)| *s)
                .collect();

            let expected = finalize(&subset);

            let mut reversed = subset.clone();
            reversed.reverse();
            assert_eq!(finalize(&reversed), expected);

            let mut doubled = subset.clone();
            doubled.extend(subset.iter().rev().copied());
            assert_eq!(finalize(&doubled), expected);
        }
    }

    #[test]
    fn test_tracker() {
        let mut tracker = ControlStatusTracker::new();
        tracker.record("AC-2", Satisfied);
        tracker.record("AC-2", NotSatisfied);
        tracker.record("AC-2", Satisfied);
        tracker.record("AC-3", NotApplicable);

        assert_eq!(tracker.states("AC-2").len(), 3);
        assert!(tracker.states("AC-9").is_empty());

        let finals = tracker.finalize_all();
        assert_eq!(finals["AC-2"], NotSatisfied);
        assert_eq!(finals["AC-3"], NotApplicable);
        assert_eq!(finals.keys().collect::<Vec<_>>(), vec!["AC-2", "AC-3"]);
    }
}
