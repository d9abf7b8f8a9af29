//! Curriculum documents.
//!
//! Two JSON shapes are understood:
//! - **Day map** (as produced by the timetable extractor): an object keyed
//!   by day name, in timetable order, each value an array of sessions.
//!   ```json
//!   { "Ponedeljak": [ { "subject": "...", "type": "P", "groups": ["A1"],
//!                       "time": "8:15-10:00", "location": "..." } ] }
//!   ```
//! - **Day list** (the serde form of [`Curriculum`]):
//!   `[ { "day": "Ponedeljak", "classes": [ ... ] } ]`
//!
//! Key order of the day map is preserved.

use std::io::{Read, Write};

use serde_json::{Map, Value};

use crate::compensation::CompensationRequest;
use crate::error::LoadError;
use crate::models::{Curriculum, Day, Session};

/// Parses a day-map document.
pub fn curriculum_from_day_map(json: &str) -> Result<Curriculum, LoadError> {
    let map: Map<String, Value> = serde_json::from_str(json)?;
    day_map_to_curriculum(map)
}

/// Parses either document shape.
pub fn curriculum_from_json(json: &str) -> Result<Curriculum, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    value_to_curriculum(value)
}

/// Reads either document shape from a reader.
pub fn read_curriculum<R: Read>(reader: R) -> Result<Curriculum, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    value_to_curriculum(value)
}

/// Renders a curriculum as a pretty-printed day list.
pub fn curriculum_to_json(curriculum: &Curriculum) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(curriculum)?)
}

/// Renders a curriculum as a day map.
pub fn curriculum_to_day_map(curriculum: &Curriculum) -> Result<String, LoadError> {
    let mut map = Map::new();
    for day in &curriculum.days {
        map.insert(day.name.clone(), serde_json::to_value(&day.sessions)?);
    }
    Ok(serde_json::to_string(&Value::Object(map))?)
}

/// Writes a curriculum as a pretty-printed day list.
pub fn write_curriculum<W: Write>(mut writer: W, curriculum: &Curriculum) -> Result<(), LoadError> {
    serde_json::to_writer_pretty(&mut writer, curriculum)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Reads compensation settings.
pub fn read_request<R: Read>(reader: R) -> Result<CompensationRequest, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

fn value_to_curriculum(value: Value) -> Result<Curriculum, LoadError> {
    match value {
        Value::Object(map) => day_map_to_curriculum(map),
        other => Ok(serde_json::from_value(other)?),
    }
}

fn day_map_to_curriculum(map: Map<String, Value>) -> Result<Curriculum, LoadError> {
    let mut days = Vec::with_capacity(map.len());
    for (name, sessions) in map {
        let sessions: Vec<Session> = serde_json::from_value(sessions)?;
        days.push(Day { name, sessions });
    }
    Ok(Curriculum { days })
}
