//! `ExerciseSession` - the JS-facing handle for one exercise run
//!
//! Wraps a [`Session`] and converts to/from JS values. Stopping drops the
//! inner session; later calls on a stopped handle return `undefined`.

use wasm_bindgen::prelude::*;

use super::landmarks::decode_landmarks;
use crate::error::SessionError;
use crate::evaluation::Exercise;
use crate::session::{EngineStatus, Session, SessionConfig};

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Current time from `performance.now()`, if the page exposes it
fn performance_now() -> Option<f64> {
    let window = web_sys::window()?;
    let performance = window.performance()?;
    Some(performance.now())
}

#[wasm_bindgen]
pub struct ExerciseSession {
    inner: Option<Session>,
}

#[wasm_bindgen]
impl ExerciseSession {
    /// Start a session for `"squat"` or `"pushup"`
    ///
    /// Pass `engineError` when the camera or pose engine failed to start;
    /// the constructor then throws and no session exists. `config` is an
    /// optional `{ throttleMs, goodFormFrames }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(
        exercise: &str,
        engine_error: Option<String>,
        config: JsValue,
    ) -> Result<ExerciseSession, JsValue> {
        let exercise: Exercise = exercise.parse()?;

        let config = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| SessionError::InvalidConfig(e.to_string()))?
        };

        let engine = match engine_error {
            Some(reason) => EngineStatus::Unavailable(reason),
            None => EngineStatus::Ready,
        };

        Ok(Self {
            inner: Some(Session::start(exercise, config, engine)?),
        })
    }

    /// Feed one frame (flat x, y, z, visibility values) with its timestamp
    ///
    /// Returns the new snapshot, or `undefined` if the frame was empty,
    /// malformed or throttled.
    #[wasm_bindgen(js_name = pushFrame)]
    pub fn push_frame(&mut self, data: &[f64], timestamp_ms: f64) -> JsValue {
        let Some(session) = self.inner.as_mut() else {
            return JsValue::UNDEFINED;
        };

        let landmarks = match decode_landmarks(data) {
            Ok(landmarks) => landmarks,
            Err(e) => {
                log::warn!("{}", e);
                return JsValue::UNDEFINED;
            }
        };

        match session.push_frame(&landmarks, timestamp_ms) {
            Some(snapshot) => to_js(snapshot),
            None => JsValue::UNDEFINED,
        }
    }

    /// Same as `pushFrame`, stamped with `performance.now()`
    #[wasm_bindgen(js_name = pushFrameNow)]
    pub fn push_frame_now(&mut self, data: &[f64]) -> JsValue {
        match performance_now() {
            Some(now) => self.push_frame(data, now),
            None => {
                log::warn!("performance.now() unavailable, frame skipped");
                JsValue::UNDEFINED
            }
        }
    }

    /// Latest `{ repCount, displayPhase, evaluationResult }`
    pub fn snapshot(&self) -> JsValue {
        match &self.inner {
            Some(session) => to_js(session.snapshot()),
            None => JsValue::UNDEFINED,
        }
    }

    /// Joint/bone highlighting for the last accepted frame
    pub fn overlay(&self) -> JsValue {
        match &self.inner {
            Some(session) => to_js(&session.overlay()),
            None => JsValue::UNDEFINED,
        }
    }

    #[wasm_bindgen(js_name = displayLabel)]
    pub fn display_label(&self) -> Option<String> {
        self.inner
            .as_ref()
            .map(|session| session.display_label().to_string())
    }

    #[wasm_bindgen(getter, js_name = repCount)]
    pub fn rep_count(&self) -> u32 {
        self.inner
            .as_ref()
            .map(|session| session.snapshot().rep_count)
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// End the session and return its summary
    pub fn stop(&mut self) -> JsValue {
        match self.inner.take() {
            Some(session) => to_js(&session.stop()),
            None => JsValue::UNDEFINED,
        }
    }
}
