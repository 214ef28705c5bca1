//! Evaluation session - throttles frames, runs the evaluator, counts reps
//!
//! One `Session` per exercise run. It owns the throttle, the selected
//! evaluator and the rep counter state; nothing is shared between sessions.

use serde::Serialize;

use super::config::SessionConfig;
use super::throttle::Throttle;
use crate::error::SessionError;
use crate::evaluation::{EvaluationResult, Exercise, FormEvaluator};
use crate::overlay::{build_overlay, OverlayFrame};
use crate::pose::{Frame, Landmark};
use crate::reps::{advance, DisplayPhase, RepCounterState, RepEvent};

/// Host-side readiness of the camera and pose engine
#[derive(Clone, Debug, PartialEq)]
pub enum EngineStatus {
    Ready,
    Unavailable(String),
}

/// Latest published state for the UI
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub rep_count: u32,
    pub display_phase: DisplayPhase,
    pub evaluation_result: EvaluationResult,
}

/// Totals reported when a session stops
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub exercise: Exercise,
    pub rep_count: u32,
    pub accepted_frames: u32,
    pub dropped_frames: u32,
    pub invalid_frames: u32,
}

pub struct Session {
    exercise: Exercise,
    config: SessionConfig,
    evaluator: Box<dyn FormEvaluator>,
    throttle: Throttle,
    reps: RepCounterState,
    snapshot: Snapshot,
    /// Landmarks of the last accepted frame, kept for the overlay
    last_landmarks: Vec<Landmark>,
    accepted_frames: u32,
    dropped_frames: u32,
    invalid_frames: u32,
}

impl Session {
    /// Start a session, or fail without side effects if the host could not
    /// bring up its camera or pose engine.
    pub fn start(
        exercise: Exercise,
        config: SessionConfig,
        engine: EngineStatus,
    ) -> Result<Self, SessionError> {
        if let EngineStatus::Unavailable(reason) = engine {
            log::error!("Cannot start {} session: {}", exercise, reason);
            return Err(SessionError::EngineUnavailable { reason });
        }
        config.validate()?;

        let reps = RepCounterState::new();
        log::info!(
            "Started {} session (throttle {} ms, gate {} frames)",
            exercise,
            config.throttle_ms,
            config.good_form_frames
        );

        Ok(Self {
            exercise,
            config,
            evaluator: exercise.evaluator(),
            throttle: Throttle::new(config.throttle_ms),
            snapshot: Snapshot {
                rep_count: reps.rep_count(),
                display_phase: reps.display_phase(),
                evaluation_result: EvaluationResult::default(),
            },
            reps,
            last_landmarks: Vec::new(),
            accepted_frames: 0,
            dropped_frames: 0,
            invalid_frames: 0,
        })
    }

    /// Feed one frame from the pose engine
    ///
    /// Returns the new snapshot if the frame was accepted, `None` if it was
    /// empty (no body detected) or throttled. Rejected frames change nothing.
    pub fn push_frame(&mut self, landmarks: &[Landmark], timestamp_ms: f64) -> Option<&Snapshot> {
        if landmarks.is_empty() {
            return None;
        }
        if !self.throttle.try_accept(timestamp_ms) {
            self.dropped_frames += 1;
            return None;
        }
        self.accepted_frames += 1;

        let result = self.evaluator.evaluate(landmarks);

        match Frame::new(landmarks) {
            Some(frame) => {
                let signal = self.evaluator.phase_signal(&frame);
                let before = self.reps.display_phase();
                let event = advance(
                    &mut self.reps,
                    signal,
                    result.is_correct_form(),
                    self.config.good_form_frames,
                    timestamp_ms,
                );
                let after = self.reps.display_phase();
                if after != before {
                    log::debug!(
                        "{}: phase {} -> {}",
                        self.exercise,
                        before.as_str(),
                        after.as_str()
                    );
                }
                self.log_event(event);
            }
            None => {
                self.invalid_frames += 1;
            }
        }

        self.last_landmarks.clear();
        self.last_landmarks.extend_from_slice(landmarks);
        self.snapshot = Snapshot {
            rep_count: self.reps.rep_count(),
            display_phase: self.reps.display_phase(),
            evaluation_result: result,
        };
        Some(&self.snapshot)
    }

    fn log_event(&self, event: RepEvent) {
        match event {
            RepEvent::DownCommitted => log::debug!("{}: bottom of rep committed", self.exercise),
            RepEvent::RepCompleted { rep_count } => {
                log::info!("{}: rep {} completed", self.exercise, rep_count)
            }
            RepEvent::Descending { good_frames: 0 } => {
                log::debug!("{}: form broke on the way down", self.exercise)
            }
            _ => {}
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Joint and bone highlighting for the last accepted frame
    pub fn overlay(&self) -> OverlayFrame {
        build_overlay(&self.last_landmarks, &self.snapshot.evaluation_result)
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn rep_state(&self) -> &RepCounterState {
        &self.reps
    }

    pub fn display_label(&self) -> &'static str {
        self.exercise.phase_label(self.snapshot.display_phase)
    }

    /// End the session; its state is dropped with it
    pub fn stop(self) -> SessionSummary {
        let summary = SessionSummary {
            exercise: self.exercise,
            rep_count: self.reps.rep_count(),
            accepted_frames: self.accepted_frames,
            dropped_frames: self.dropped_frames,
            invalid_frames: self.invalid_frames,
        };
        log::info!(
            "Stopped {} session: {} reps, {} frames accepted, {} dropped, {} invalid",
            summary.exercise,
            summary.rep_count,
            summary.accepted_frames,
            summary.dropped_frames,
            summary.invalid_frames
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::{pushup_pose, squat_pose};
    use crate::reps::MotionPhase;

    fn squat_session() -> Session {
        Session::start(Exercise::Squat, SessionConfig::default(), EngineStatus::Ready).unwrap()
    }

    #[test]
    fn unavailable_engine_fails_start() {
        let err = Session::start(
            Exercise::PushUp,
            SessionConfig::default(),
            EngineStatus::Unavailable("camera not found".into()),
        )
        .err();
        assert_eq!(
            err,
            Some(SessionError::EngineUnavailable {
                reason: "camera not found".into()
            })
        );
    }

    #[test]
    fn invalid_config_fails_start() {
        let config = SessionConfig {
            good_form_frames: 0,
            ..Default::default()
        };
        assert!(matches!(
            Session::start(Exercise::Squat, config, EngineStatus::Ready),
            Err(SessionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn fresh_session_snapshot() {
        let session = squat_session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.rep_count, 0);
        assert_eq!(snapshot.display_phase, DisplayPhase::Initial);
        assert!(snapshot.evaluation_result.is_correct_form());
        assert_eq!(session.display_label(), "Get ready to start");
        assert!(session.overlay().is_empty());
    }

    #[test]
    fn throttled_frames_change_nothing() {
        let mut session = squat_session();
        let down = squat_pose(0.02, 170.0, 10.0);

        assert!(session.push_frame(&down, 0.0).is_some());
        let before = session.rep_state().clone();
        for t in [10.0, 50.0, 99.0] {
            assert!(session.push_frame(&down, t).is_none());
        }
        assert_eq!(session.rep_state(), &before);
        assert_eq!(session.stop().dropped_frames, 3);
    }

    #[test]
    fn nan_timestamp_is_dropped_and_keeps_the_interval() {
        let mut session = squat_session();
        let pose = squat_pose(0.1, 170.0, 10.0);

        assert!(session.push_frame(&pose, 0.0).is_some());
        assert!(session.push_frame(&pose, f64::NAN).is_none());
        assert!(session.push_frame(&pose, 1.0).is_none());
        assert!(session.push_frame(&pose, 100.0).is_some());

        let summary = session.stop();
        assert_eq!(summary.accepted_frames, 2);
        assert_eq!(summary.dropped_frames, 2);
    }

    #[test]
    fn empty_frames_skip_the_throttle() {
        let mut session = squat_session();
        assert!(session.push_frame(&[], 0.0).is_none());
        // The empty frame did not consume a throttle slot
        assert!(session.push_frame(&squat_pose(0.1, 170.0, 10.0), 10.0).is_some());
    }

    #[test]
    fn short_frames_degrade_without_touching_reps() {
        let mut session = squat_session();
        let partial = vec![Landmark::new(0.5, 0.5, 0.0); 20];

        let snapshot = session.push_frame(&partial, 0.0).cloned().unwrap();
        assert!(!snapshot.evaluation_result.is_correct_form());
        assert!(snapshot.evaluation_result.issues().is_empty());
        assert_eq!(snapshot.display_phase, DisplayPhase::Initial);
        assert!(session.overlay().is_empty());
        assert_eq!(session.stop().invalid_frames, 1);
    }

    #[test]
    fn counts_a_clean_squat() {
        let mut session = squat_session();
        let mut t = 0.0;
        for _ in 0..6 {
            let snapshot = session.push_frame(&squat_pose(0.02, 170.0, 20.0), t).unwrap();
            assert!(snapshot.evaluation_result.issues().is_empty());
            t += 100.0;
        }
        assert_eq!(session.rep_state().motion_phase(), MotionPhase::Down);
        assert_eq!(session.display_label(), "Squat position");

        let snapshot = session.push_frame(&squat_pose(0.1, 170.0, 20.0), t).unwrap();
        assert_eq!(snapshot.rep_count, 1);
        assert_eq!(snapshot.display_phase, DisplayPhase::Up);
        assert_eq!(session.display_label(), "Standing position");
    }

    #[test]
    fn overlay_marks_issue_joints() {
        let mut session =
            Session::start(Exercise::PushUp, SessionConfig::default(), EngineStatus::Ready).unwrap();
        session.push_frame(&pushup_pose(130.0, 175.0), 0.0);

        let overlay = session.overlay();
        assert_eq!(overlay.labels.len(), 1);
        assert!(overlay.joints[crate::pose::LEFT_ELBOW].flagged);
        assert!(!overlay.joints[crate::pose::LEFT_KNEE].flagged);
    }
}
