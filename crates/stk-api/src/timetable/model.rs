use serde::Serialize;
use stk_store::models::TimetableSlot;

/// The full weekly grid: the fixed axes plus every scheduled slot. Cells not
/// covered by a slot render as free
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableResponse {
    pub days: Vec<String>,
    pub time_slots: Vec<String>,
    pub slots: Vec<TimetableSlot>,
}

/// Lookup result for a single (day, time) cell; `slot` is `null` for a free
/// period
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotLookupResponse {
    pub day: String,
    pub time: String,
    pub slot: Option<TimetableSlot>,
}
