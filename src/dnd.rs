//! Drag-and-Drop Protocol
//!
//! Card-to-column drags over the native HTML5 drag events. The dragged
//! task travels as a stringified id in the drag payload; dragover is pure
//! visual affordance and only a drop dispatches a mutation.

use web_sys::DragEvent;

/// Payload key the dragged task id is stored under
pub const TASK_ID_KEY: &str = "taskId";

/// Attach the dragged task to the drag payload with a move affordance.
pub fn card_drag_start(ev: &DragEvent, task_id: u32) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(TASK_ID_KEY, &task_id.to_string());
        dt.set_effect_allowed("move");
    }
}

/// Signal the move affordance while hovering a column.
///
/// Idempotent; fires repeatedly during a hover and never mutates anything.
pub fn column_drag_over(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(dt) = ev.data_transfer() {
        dt.set_drop_effect("move");
    }
}

/// Extract the dropped task id, if the payload carries a usable one.
pub fn dropped_task_id(ev: &DragEvent) -> Option<u32> {
    ev.prevent_default();
    let payload = ev.data_transfer()?.get_data(TASK_ID_KEY).ok()?;
    parse_task_id(&payload)
}

/// Parse a drag payload into a task id.
///
/// Ids are positive integers; zero, negative, garbage and empty payloads
/// are all rejected so a malformed drop stays a no-op.
pub fn parse_task_id(payload: &str) -> Option<u32> {
    match payload.trim().parse::<u32>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id_accepts_positive_integers() {
        assert_eq!(parse_task_id("42"), Some(42));
        assert_eq!(parse_task_id(" 7 "), Some(7));
        assert_eq!(parse_task_id("1"), Some(1));
    }

    #[test]
    fn test_parse_task_id_rejects_zero() {
        assert_eq!(parse_task_id("0"), None);
    }

    #[test]
    fn test_parse_task_id_rejects_malformed_payloads() {
        assert_eq!(parse_task_id(""), None);
        assert_eq!(parse_task_id("   "), None);
        assert_eq!(parse_task_id("abc"), None);
        assert_eq!(parse_task_id("12abc"), None);
        assert_eq!(parse_task_id("-3"), None);
        assert_eq!(parse_task_id("4.5"), None);
    }
}
