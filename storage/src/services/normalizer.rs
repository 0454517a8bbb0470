use chrono::NaiveDateTime;
use validator::Validate;

use crate::dto::record::{
    CreateRecordRequest, NewWorkoutRecord, RawNumber, UpdateRecordRequest, WorkoutRecordPatch,
};
use crate::error::NormalizeError;

const DEFAULT_WEIGHT_UNIT: &str = "kg";

/// Turn a raw create payload into a fully-typed record payload.
///
/// Numeric fields may arrive as JSON numbers or numeric strings; anything
/// that does not parse fails with a `NormalizeError` naming the field.
pub fn normalize_record(req: &CreateRecordRequest) -> Result<NewWorkoutRecord, NormalizeError> {
    Ok(NewWorkoutRecord {
        user_id: coerce_int("userId", &req.user_id)?,
        exercise_id: coerce_int("exerciseId", &req.exercise_id)?,
        reps: coerce_int("reps", &req.reps)?,
        weight: coerce_float("weight", &req.weight)?,
        weight_unit: normalize_weight_unit(req.weight_unit.as_deref()),
        sets: coerce_int("sets", &req.sets)?,
        workout_time: combine_workout_time(&req.date, &req.time)?,
    })
}

/// Turn a raw sparse-update payload into a typed patch.
///
/// `date` and `time` only combine into a new `workout_time` when both are
/// present; a lone half is ignored.
pub fn normalize_update(req: &UpdateRecordRequest) -> Result<WorkoutRecordPatch, NormalizeError> {
    let workout_time = match (req.date.as_deref(), req.time.as_deref()) {
        (Some(date), Some(time)) => Some(combine_workout_time(date, time)?),
        _ => None,
    };

    Ok(WorkoutRecordPatch {
        reps: req
            .reps
            .as_ref()
            .map(|raw| coerce_int("reps", raw))
            .transpose()?,
        weight: req
            .weight
            .as_ref()
            .map(|raw| coerce_float("weight", raw))
            .transpose()?,
        weight_unit: req
            .weight_unit
            .as_deref()
            .map(|unit| normalize_weight_unit(Some(unit))),
        sets: req
            .sets
            .as_ref()
            .map(|raw| coerce_int("sets", raw))
            .transpose()?,
        workout_time,
    })
}

/// Normalize every element of a batch-sync payload.
///
/// `records` must be a JSON array; the first malformed element aborts the
/// whole batch with its index in the error.
pub fn normalize_batch(
    records: &serde_json::Value,
) -> Result<Vec<NewWorkoutRecord>, NormalizeError> {
    let items = records.as_array().ok_or(NormalizeError::RecordsNotAnArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let raw: CreateRecordRequest =
                serde_json::from_value(item.clone()).map_err(|e| {
                    NormalizeError::InvalidBatchElement {
                        index,
                        reason: e.to_string(),
                    }
                })?;
            raw.validate()
                .map_err(|e| NormalizeError::InvalidBatchElement {
                    index,
                    reason: e.to_string(),
                })?;
            normalize_record(&raw).map_err(|e| NormalizeError::InvalidBatchElement {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn coerce_int(field: &'static str, raw: &RawNumber) -> Result<i64, NormalizeError> {
    match raw {
        RawNumber::Int(value) => Ok(*value),
        RawNumber::Float(value) => float_to_int(field, *value),
        RawNumber::Text(text) => {
            let trimmed = text.trim();
            if let Ok(value) = trimmed.parse::<i64>() {
                return Ok(value);
            }
            let value: f64 = trimmed.parse().map_err(|_| NormalizeError::InvalidNumber {
                field,
                value: text.clone(),
            })?;
            float_to_int(field, value)
        }
    }
}

fn float_to_int(field: &'static str, value: f64) -> Result<i64, NormalizeError> {
    if value.fract() == 0.0 && value.is_finite() {
        Ok(value as i64)
    } else {
        Err(NormalizeError::InvalidInteger {
            field,
            value: value.to_string(),
        })
    }
}

fn coerce_float(field: &'static str, raw: &RawNumber) -> Result<f64, NormalizeError> {
    let value = match raw {
        RawNumber::Int(value) => *value as f64,
        RawNumber::Float(value) => *value,
        RawNumber::Text(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| NormalizeError::InvalidNumber {
                    field,
                    value: text.clone(),
                })?
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(NormalizeError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }
}

fn normalize_weight_unit(unit: Option<&str>) -> String {
    match unit {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_WEIGHT_UNIT.to_string(),
    }
}

fn combine_workout_time(date: &str, time: &str) -> Result<NaiveDateTime, NormalizeError> {
    let combined = format!("{date}T{time}");

    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M"))
        .map_err(|_| NormalizeError::InvalidWorkoutTime {
            date: date.to_string(),
            time: time.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn base_request() -> CreateRecordRequest {
        CreateRecordRequest {
            user_id: RawNumber::Int(1),
            exercise_id: RawNumber::Int(2),
            reps: RawNumber::Int(10),
            weight: RawNumber::Float(82.5),
            weight_unit: Some("kg".to_string()),
            sets: RawNumber::Int(3),
            date: "2025-12-31".to_string(),
            time: "10:30:00".to_string(),
        }
    }

    fn expected_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 31)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_normalizes_numeric_payload() {
        let payload = normalize_record(&base_request()).unwrap();

        assert_eq!(
            payload,
            NewWorkoutRecord {
                user_id: 1,
                exercise_id: 2,
                reps: 10,
                weight: 82.5,
                weight_unit: "kg".to_string(),
                sets: 3,
                workout_time: expected_time(),
            }
        );
    }

    #[test]
    fn test_coerces_numeric_strings() {
        let req = CreateRecordRequest {
            user_id: RawNumber::Text("1".to_string()),
            exercise_id: RawNumber::Text("2".to_string()),
            reps: RawNumber::Text("10".to_string()),
            weight: RawNumber::Text("82.5".to_string()),
            sets: RawNumber::Text("3".to_string()),
            ..base_request()
        };

        let payload = normalize_record(&req).unwrap();

        assert_eq!(payload.user_id, 1);
        assert_eq!(payload.exercise_id, 2);
        assert_eq!(payload.reps, 10);
        assert_eq!(payload.weight, 82.5);
        assert_eq!(payload.sets, 3);
    }

    #[test]
    fn test_accepts_integer_valued_float_strings() {
        let req = CreateRecordRequest {
            reps: RawNumber::Text("10.0".to_string()),
            ..base_request()
        };

        assert_eq!(normalize_record(&req).unwrap().reps, 10);
    }

    #[test]
    fn test_weight_unit_defaults_when_absent() {
        let req = CreateRecordRequest {
            weight_unit: None,
            ..base_request()
        };

        assert_eq!(normalize_record(&req).unwrap().weight_unit, "kg");
    }

    #[test]
    fn test_weight_unit_defaults_when_empty() {
        let req = CreateRecordRequest {
            weight_unit: Some(String::new()),
            ..base_request()
        };

        assert_eq!(normalize_record(&req).unwrap().weight_unit, "kg");
    }

    #[test]
    fn test_weight_unit_preserved_when_present() {
        let req = CreateRecordRequest {
            weight_unit: Some("lbs".to_string()),
            ..base_request()
        };

        assert_eq!(normalize_record(&req).unwrap().weight_unit, "lbs");
    }

    #[test]
    fn test_rejects_non_numeric_field() {
        let req = CreateRecordRequest {
            reps: RawNumber::Text("ten".to_string()),
            ..base_request()
        };

        assert_eq!(
            normalize_record(&req).unwrap_err(),
            NormalizeError::InvalidNumber {
                field: "reps",
                value: "ten".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_empty_numeric_string() {
        let req = CreateRecordRequest {
            user_id: RawNumber::Text(String::new()),
            ..base_request()
        };

        assert!(matches!(
            normalize_record(&req).unwrap_err(),
            NormalizeError::InvalidNumber { field: "userId", .. }
        ));
    }

    #[test]
    fn test_rejects_fractional_integer_field() {
        let req = CreateRecordRequest {
            sets: RawNumber::Float(2.5),
            ..base_request()
        };

        assert!(matches!(
            normalize_record(&req).unwrap_err(),
            NormalizeError::InvalidInteger { field: "sets", .. }
        ));
    }

    #[test]
    fn test_combines_date_and_time() {
        let payload = normalize_record(&base_request()).unwrap();

        assert_eq!(payload.workout_time, expected_time());
    }

    #[test]
    fn test_accepts_time_without_seconds() {
        let req = CreateRecordRequest {
            time: "10:30".to_string(),
            ..base_request()
        };

        assert_eq!(normalize_record(&req).unwrap().workout_time, expected_time());
    }

    #[test]
    fn test_rejects_malformed_date() {
        let req = CreateRecordRequest {
            date: "not-a-date".to_string(),
            ..base_request()
        };

        assert_eq!(
            normalize_record(&req).unwrap_err(),
            NormalizeError::InvalidWorkoutTime {
                date: "not-a-date".to_string(),
                time: "10:30:00".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_malformed_time() {
        let req = CreateRecordRequest {
            time: "25:99".to_string(),
            ..base_request()
        };

        assert!(matches!(
            normalize_record(&req).unwrap_err(),
            NormalizeError::InvalidWorkoutTime { .. }
        ));
    }

    #[test]
    fn test_update_patch_keeps_absent_fields_untouched() {
        let req = UpdateRecordRequest {
            reps: Some(RawNumber::Int(5)),
            weight: None,
            weight_unit: None,
            sets: None,
            date: None,
            time: None,
        };

        let patch = normalize_update(&req).unwrap();

        assert_eq!(
            patch,
            WorkoutRecordPatch {
                reps: Some(5),
                ..WorkoutRecordPatch::default()
            }
        );
    }

    #[test]
    fn test_update_combines_timestamp_only_when_both_present() {
        let date_only = UpdateRecordRequest {
            reps: None,
            weight: None,
            weight_unit: None,
            sets: None,
            date: Some("2025-12-31".to_string()),
            time: None,
        };
        assert_eq!(normalize_update(&date_only).unwrap().workout_time, None);

        let both = UpdateRecordRequest {
            time: Some("10:30:00".to_string()),
            ..date_only
        };
        assert_eq!(
            normalize_update(&both).unwrap().workout_time,
            Some(expected_time())
        );
    }

    #[test]
    fn test_update_empty_weight_unit_resets_to_default() {
        let req = UpdateRecordRequest {
            reps: None,
            weight: None,
            weight_unit: Some(String::new()),
            sets: None,
            date: None,
            time: None,
        };

        assert_eq!(
            normalize_update(&req).unwrap().weight_unit,
            Some("kg".to_string())
        );
    }

    #[test]
    fn test_update_rejects_bad_number() {
        let req = UpdateRecordRequest {
            reps: None,
            weight: Some(RawNumber::Text("heavy".to_string())),
            weight_unit: None,
            sets: None,
            date: None,
            time: None,
        };

        assert!(matches!(
            normalize_update(&req).unwrap_err(),
            NormalizeError::InvalidNumber { field: "weight", .. }
        ));
    }

    #[test]
    fn test_batch_normalizes_all_elements() {
        let records = json!([
            {"userId": 1, "exerciseId": 1, "reps": 10, "weight": 60, "sets": 3,
             "date": "2025-12-01", "time": "08:00:00"},
            {"userId": "1", "exerciseId": "2", "reps": "8", "weight": "62.5", "sets": "3",
             "date": "2025-12-02", "time": "08:15:00"},
            {"userId": 2, "exerciseId": 3, "reps": 5, "weight": 100, "weightUnit": "lbs",
             "sets": 5, "date": "2025-12-03", "time": "18:45"},
        ]);

        let payloads = normalize_batch(&records).unwrap();

        assert_eq!(payloads.len(), 3);
        assert_eq!(payloads[1].weight, 62.5);
        assert_eq!(payloads[2].weight_unit, "lbs");
    }

    #[test]
    fn test_batch_rejects_non_array() {
        assert_eq!(
            normalize_batch(&json!("not an array")).unwrap_err(),
            NormalizeError::RecordsNotAnArray
        );
        assert_eq!(
            normalize_batch(&json!({"userId": 1})).unwrap_err(),
            NormalizeError::RecordsNotAnArray
        );
    }

    #[test]
    fn test_batch_reports_failing_element_index() {
        let records = json!([
            {"userId": 1, "exerciseId": 1, "reps": 10, "weight": 60, "sets": 3,
             "date": "2025-12-01", "time": "08:00:00"},
            {"userId": 1, "exerciseId": 1, "reps": "ten", "weight": 60, "sets": 3,
             "date": "2025-12-01", "time": "08:00:00"},
        ]);

        let err = normalize_batch(&records).unwrap_err();

        assert!(matches!(
            err,
            NormalizeError::InvalidBatchElement { index: 1, .. }
        ));
        assert!(err.to_string().starts_with("records[1]:"));
    }

    #[test]
    fn test_batch_rejects_element_with_missing_fields() {
        let records = json!([{"userId": 1}]);

        assert!(matches!(
            normalize_batch(&records).unwrap_err(),
            NormalizeError::InvalidBatchElement { index: 0, .. }
        ));
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert_eq!(normalize_batch(&json!([])).unwrap(), vec![]);
    }
}
