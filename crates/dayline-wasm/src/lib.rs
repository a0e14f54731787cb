//! WASM bindings for dayline-engine.
//!
//! Exposes the interaction controller to a JavaScript presentation layer as
//! the stateful [`TimelineBoard`]. Complex types cross the boundary as JSON
//! strings via serde DTOs; task ids cross as `f64` (they are small counters,
//! well inside the float-exact integer range) so callers never deal with
//! BigInt.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dayline-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/dayline-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/dayline_wasm.wasm
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use dayline_engine::{Controller, DragOutcome, Schedule, TaskDraft, TaskFields, TaskId};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum DragOutcomeDto {
    Ignored,
    Moved { from: f64, to: f64 },
    Reverted { origin: f64 },
}

impl From<DragOutcome> for DragOutcomeDto {
    fn from(outcome: DragOutcome) -> Self {
        match outcome {
            DragOutcome::Ignored => Self::Ignored,
            DragOutcome::Moved { from, to } => Self::Moved { from, to },
            DragOutcome::Reverted { origin } => Self::Reverted { origin },
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}

fn task_id(id: f64) -> TaskId {
    TaskId(id as u64)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// The scheduling board a JS timeline widget renders from.
///
/// All mutations go through this object; the host re-reads [`tasks`] and
/// [`conflicts`] after each call and must never hold authoritative state of
/// its own. (`tasks`: [`TimelineBoard::tasks`], `conflicts`:
/// [`TimelineBoard::conflicts`].)
#[wasm_bindgen]
pub struct TimelineBoard {
    controller: Controller,
}

#[wasm_bindgen]
impl TimelineBoard {
    /// An empty board.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TimelineBoard {
        TimelineBoard {
            controller: Controller::new(Schedule::new()),
        }
    }

    /// A board seeded with the six-task demo day.
    #[wasm_bindgen(js_name = "demoDay")]
    pub fn demo_day() -> TimelineBoard {
        TimelineBoard {
            controller: Controller::new(Schedule::demo_day()),
        }
    }

    /// Current tasks sorted by start time, as a JSON array.
    pub fn tasks(&self) -> Result<String, JsValue> {
        to_json(&self.controller.schedule().tasks_by_start())
    }

    /// Current conflict set, as a JSON array of `{task_ids, message}`.
    pub fn conflicts(&self) -> Result<String, JsValue> {
        to_json(&self.controller.schedule().conflicts())
    }

    /// The active notification as JSON `{seq, message, severity}`, or `null`.
    pub fn notification(&self) -> Result<JsValue, JsValue> {
        match self.controller.notification() {
            Some(n) => Ok(JsValue::from_str(&to_json(n)?)),
            None => Ok(JsValue::NULL),
        }
    }

    /// Guarded auto-dismiss: clears the notification only if `seq` still
    /// matches the displayed one. Call from a `setTimeout` of 4000 ms.
    #[wasm_bindgen(js_name = "dismissNotification")]
    pub fn dismiss_notification(&mut self, seq: f64) -> bool {
        self.controller.dismiss_notification(seq as u64)
    }

    /// Submit the create dialog with a JSON task draft
    /// (`{title, description?, priority?, start?, duration?, ...}`).
    /// Returns the new task's id, or `null` on rejection (the rejection is
    /// reported through the notification).
    #[wasm_bindgen(js_name = "createTask")]
    pub fn create_task(&mut self, draft_json: &str) -> Result<Option<f64>, JsValue> {
        let draft: TaskDraft = serde_json::from_str(draft_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid task draft JSON: {}", e)))?;
        Ok(self.controller.submit_create(draft).map(|id| id.0 as f64))
    }

    /// Submit the edit dialog with a JSON field set
    /// (`{title, description?, priority?, start, duration}`).
    #[wasm_bindgen(js_name = "updateTask")]
    pub fn update_task(&mut self, id: f64, fields_json: &str) -> Result<bool, JsValue> {
        let fields: TaskFields = serde_json::from_str(fields_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid task fields JSON: {}", e)))?;
        Ok(self.controller.submit_update(task_id(id), fields))
    }

    #[wasm_bindgen(js_name = "deleteTask")]
    pub fn delete_task(&mut self, id: f64) {
        self.controller.delete_task(task_id(id));
    }

    #[wasm_bindgen(js_name = "dragStart")]
    pub fn drag_start(&mut self, id: f64) {
        self.controller.drag_start(task_id(id));
    }

    /// Complete a drag. Returns JSON: `{"kind":"ignored"}`,
    /// `{"kind":"moved","from":..,"to":..}`, or
    /// `{"kind":"reverted","origin":..}` — on `reverted` the host snaps its
    /// optimistic position back to `origin`.
    #[wasm_bindgen(js_name = "dragEnd")]
    pub fn drag_end(
        &mut self,
        id: f64,
        offset_px: f64,
        px_per_hour: f64,
    ) -> Result<String, JsValue> {
        let outcome = self.controller.drag_end(task_id(id), offset_px, px_per_hour);
        to_json(&DragOutcomeDto::from(outcome))
    }

    #[wasm_bindgen(js_name = "openCreateDialog")]
    pub fn open_create_dialog(&mut self) {
        self.controller.open_create_dialog();
    }

    #[wasm_bindgen(js_name = "openEditDialog")]
    pub fn open_edit_dialog(&mut self, id: f64) -> bool {
        self.controller.open_edit_dialog(task_id(id))
    }

    #[wasm_bindgen(js_name = "cancelDialog")]
    pub fn cancel_dialog(&mut self) {
        self.controller.cancel_dialog();
    }

    #[wasm_bindgen(js_name = "zoomIn")]
    pub fn zoom_in(&mut self) -> f64 {
        self.controller.zoom_in();
        self.controller.zoom_level()
    }

    #[wasm_bindgen(js_name = "zoomOut")]
    pub fn zoom_out(&mut self) -> f64 {
        self.controller.zoom_out();
        self.controller.zoom_level()
    }

    #[wasm_bindgen(js_name = "resetZoom")]
    pub fn reset_zoom(&mut self) -> f64 {
        self.controller.reset_zoom();
        self.controller.zoom_level()
    }
}

impl Default for TimelineBoard {
    fn default() -> Self {
        Self::new()
    }
}
