//! Response validation
//!
//! Checks the shape of a review service payload once at the boundary and turns
//! it into typed `Homework` records. Nothing past this point touches raw JSON.

use crate::domain::entities::{Homework, HomeworkId};
use crate::domain::errors::{Malformed, PollResult};
use serde_json::{Map, Value};

const HOMEWORKS_KEY: &str = "homeworks";

/// Verify the top-level contract and return the raw homework records.
pub fn validate_response(payload: &Value) -> PollResult<&[Value]> {
    let object = payload.as_object().ok_or(Malformed::NotAMapping)?;
    let homeworks = object.get(HOMEWORKS_KEY).ok_or(Malformed::MissingKey)?;
    let records = homeworks.as_array().ok_or(Malformed::WrongType)?;
    Ok(records.as_slice())
}

/// Extract a typed homework from the record at `index`.
pub fn parse_homework(index: usize, record: &Value) -> PollResult<Homework> {
    let object = record
        .as_object()
        .ok_or(Malformed::RecordNotAMapping { index })?;

    let id = match required(object, index, "id", &[])? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return Err(Malformed::WrongFieldType { index, field: "id" }.into()),
    };
    let name = required_str(object, index, "name", &["homework_name"])?;
    let status = required_str(object, index, "status", &[])?;

    Ok(Homework {
        id: HomeworkId::new(id),
        name,
        status,
    })
}

/// Validate the payload and parse every record. A single bad record fails the
/// whole batch.
pub fn parse_homeworks(payload: &Value) -> PollResult<Vec<Homework>> {
    validate_response(payload)?
        .iter()
        .enumerate()
        .map(|(index, record)| parse_homework(index, record))
        .collect()
}

fn required<'a>(
    object: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
    aliases: &[&str],
) -> PollResult<&'a Value> {
    std::iter::once(field)
        .chain(aliases.iter().copied())
        .filter_map(|key| object.get(key))
        .find(|value| !value.is_null())
        .ok_or_else(|| Malformed::MissingField { index, field }.into())
}

fn required_str(
    object: &Map<String, Value>,
    index: usize,
    field: &'static str,
    aliases: &[&str],
) -> PollResult<String> {
    required(object, index, field, aliases)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Malformed::WrongFieldType { index, field }.into())
}
