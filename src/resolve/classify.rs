//! Per-step display status derivation

use crate::model::{CurrentMarker, SequenceDirection, StepDescriptor, StepStatus, StepValue};

use super::index_map::ValueIndex;

/// Outcome of classifying one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub status: StepStatus,
    /// True when an identifier marker had no entry in the value index and the
    /// step degraded to `default`.
    pub marker_unmatched: bool,
}

impl Classification {
    fn settled(status: StepStatus) -> Self {
        Classification {
            status,
            marker_unmatched: false,
        }
    }
}

/// Derive the display status of one step.
///
/// `display_pos` is the step's position in the already direction-adjusted
/// display sequence: position 0 is the first rendered step regardless of
/// direction. `values` maps declared identifiers to original-list positions.
///
/// Decision order, first match wins:
/// 1. an explicit non-default `status` override on the descriptor,
/// 2. the `Finish` sentinel marker finishes every step,
/// 3. without a declared `value`, an integer marker orders against
///    `display_pos` directly,
/// 4. with a declared `value`, the marker is looked up in `values`; a miss
///    degrades the step to `default` and flags `marker_unmatched`,
/// 5. a step whose own key (declared value, else position) equals the marker
///    is `process`,
/// 6. everything else is `default`.
///
/// Comparisons are strict: a text marker never order-compares against
/// positions and never equals a numeric value. Total over all inputs; pure,
/// so repeated calls with unchanged inputs agree.
pub fn classify(
    step: &StepDescriptor,
    display_pos: usize,
    current: &CurrentMarker,
    direction: SequenceDirection,
    values: &ValueIndex,
) -> Classification {
    if step.status.is_override() {
        return Classification::settled(step.status);
    }

    let marker = match current {
        CurrentMarker::Finish => return Classification::settled(StepStatus::Finish),
        CurrentMarker::Step(value) => value,
    };

    match &step.value {
        None => {
            if let Some(anchor) = marker.as_int() {
                if direction.is_completed(display_pos as i64, anchor) {
                    return Classification::settled(StepStatus::Finish);
                }
            }
        }
        Some(_) => {
            let Some(match_pos) = values.position(marker) else {
                return Classification {
                    status: StepStatus::Default,
                    marker_unmatched: true,
                };
            };
            if direction.is_completed(display_pos as i64, match_pos as i64) {
                return Classification::settled(StepStatus::Finish);
            }
        }
    }

    let is_current = match &step.value {
        Some(value) => value == marker,
        None => *marker == StepValue::Int(display_pos as i64),
    };
    if is_current {
        return Classification::settled(StepStatus::Process);
    }

    Classification::settled(StepStatus::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> StepDescriptor {
        StepDescriptor::default()
    }

    fn classify_status(
        step: &StepDescriptor,
        display_pos: usize,
        current: &CurrentMarker,
        direction: SequenceDirection,
        values: &ValueIndex,
    ) -> StepStatus {
        classify(step, display_pos, current, direction, values).status
    }

    #[test]
    fn test_override_always_wins() {
        let step = plain().with_status(StepStatus::Error);
        for marker in [
            CurrentMarker::index(0),
            CurrentMarker::index(5),
            CurrentMarker::Finish,
        ] {
            for direction in [SequenceDirection::Positive, SequenceDirection::Reverse] {
                let outcome = classify(&step, 0, &marker, direction, &ValueIndex::default());
                assert_eq!(outcome.status, StepStatus::Error);
                assert!(!outcome.marker_unmatched);
            }
        }
    }

    #[test]
    fn test_finish_sentinel_finishes_everything() {
        let values = ValueIndex::default();
        let status = classify_status(
            &plain(),
            3,
            &CurrentMarker::Finish,
            SequenceDirection::Positive,
            &values,
        );
        assert_eq!(status, StepStatus::Finish);
        let with_value = plain().with_value("a");
        let status = classify_status(
            &with_value,
            0,
            &CurrentMarker::Finish,
            SequenceDirection::Reverse,
            &values,
        );
        assert_eq!(status, StepStatus::Finish);
    }

    #[test]
    fn test_index_mode_positive_ordering() {
        let values = ValueIndex::default();
        let marker = CurrentMarker::index(2);
        let expected = [
            StepStatus::Finish,
            StepStatus::Finish,
            StepStatus::Process,
            StepStatus::Default,
        ];
        for (pos, want) in expected.iter().enumerate() {
            let got = classify_status(&plain(), pos, &marker, SequenceDirection::Positive, &values);
            assert_eq!(got, *want, "display position {pos}");
        }
    }

    #[test]
    fn test_index_mode_reverse_ordering() {
        let values = ValueIndex::default();
        let marker = CurrentMarker::index(1);
        let expected = [
            StepStatus::Default,
            StepStatus::Process,
            StepStatus::Finish,
            StepStatus::Finish,
        ];
        for (pos, want) in expected.iter().enumerate() {
            let got = classify_status(&plain(), pos, &marker, SequenceDirection::Reverse, &values);
            assert_eq!(got, *want, "display position {pos}");
        }
    }

    #[test]
    fn test_text_marker_never_matches_index_mode() {
        let values = ValueIndex::default();
        let marker = CurrentMarker::value("2");
        for pos in 0..4 {
            let got = classify_status(&plain(), pos, &marker, SequenceDirection::Positive, &values);
            assert_eq!(got, StepStatus::Default, "display position {pos}");
        }
    }

    #[test]
    fn test_identifier_mode_matching() {
        let options: Vec<StepDescriptor> = ["a", "b", "c"]
            .iter()
            .map(|v| plain().with_value(*v))
            .collect();
        let values = ValueIndex::from_options(&options);
        let marker = CurrentMarker::value("b");
        let expected = [StepStatus::Finish, StepStatus::Process, StepStatus::Default];
        for (pos, (step, want)) in options.iter().zip(expected.iter()).enumerate() {
            let got = classify_status(step, pos, &marker, SequenceDirection::Positive, &values);
            assert_eq!(got, *want, "value {:?}", step.value);
        }
    }

    #[test]
    fn test_identifier_mode_unmatched_marker_degrades() {
        let options = vec![plain().with_value("a"), plain().with_value("b")];
        let values = ValueIndex::from_options(&options);
        let marker = CurrentMarker::value("z");
        for (pos, step) in options.iter().enumerate() {
            let outcome = classify(step, pos, &marker, SequenceDirection::Positive, &values);
            assert_eq!(outcome.status, StepStatus::Default);
            assert!(outcome.marker_unmatched);
        }
    }

    #[test]
    fn test_numeric_value_never_matches_text_marker() {
        let options = vec![plain().with_value(2i64)];
        let values = ValueIndex::from_options(&options);
        let outcome = classify(
            &options[0],
            0,
            &CurrentMarker::value("2"),
            SequenceDirection::Positive,
            &values,
        );
        assert_eq!(outcome.status, StepStatus::Default);
        assert!(outcome.marker_unmatched);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let options = vec![plain().with_value("a"), plain().with_value("b")];
        let values = ValueIndex::from_options(&options);
        let marker = CurrentMarker::value("a");
        let first = classify(&options[1], 1, &marker, SequenceDirection::Positive, &values);
        for _ in 0..3 {
            let again = classify(&options[1], 1, &marker, SequenceDirection::Positive, &values);
            assert_eq!(again, first);
        }
    }
}
