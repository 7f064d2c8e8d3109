//! Construction of the canonical model from a raw description.

use fsmgen_ir::{Actions, CanonicalFsm, LocalParam, Register, State, Transition, Wire};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::merge::merge_by_name;
use crate::shape::{
    attribute_text, expand, flag_field, scalar_text, text_field, width_field, Record, Shorthand,
};

const DEFAULT_NAME: &str = "FSM";
const DEFAULT_CLOCK: &str = "clock";
const DEFAULT_RESET: &str = "reset";
const DEFAULT_CONDITION: &str = "1";

/// State keys that are part of the model rather than presentation attributes.
const STATE_KEYS: [&str; 5] = ["name", "next", "onEntry", "onExit", "onSelf"];

/// Normalizes a raw description into a canonical machine.
///
/// Returns `Ok(None)` when `raw` is not a record. Returns an error when an item
/// cannot be coerced, e.g. a state without a name.
pub fn normalize(raw: &Value) -> Result<Option<CanonicalFsm>, NormalizeError> {
    let Some(record) = raw.as_object() else {
        return Ok(None);
    };

    let mut raw_states = expand(record.get("states"), Shorthand::Field("next"), "states")?;
    for (i, state) in raw_states.iter_mut().enumerate() {
        let next = expand(
            state.get("next"),
            Shorthand::Field("condition"),
            &format!("states[{i}].next"),
        )?;
        state.insert(
            "next".to_string(),
            Value::Array(next.into_iter().map(Value::Object).collect()),
        );
    }

    let states = merge_by_name(raw_states, "states")?
        .iter()
        .map(build_state)
        .collect::<Result<Vec<_>, _>>()?;

    let wires = expand(record.get("wires"), Shorthand::Merge("init"), "wires")?
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Ok(Wire {
                name: required_name(rec, || format!("wires[{i}]"))?,
                width: width_field(rec, "width"),
                init: text_field(rec, "init"),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    let registers = expand(record.get("registers"), Shorthand::Merge("width"), "registers")?
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            Ok(Register {
                name: required_name(rec, || format!("registers[{i}]"))?,
                width: width_field(rec, "width"),
                init: text_field(rec, "init"),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    let localparams = expand(record.get("localparams"), Shorthand::Field("expr"), "localparams")?
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let path = || format!("localparams[{i}]");
            Ok(LocalParam {
                name: required_name(rec, path)?,
                expr: text_field(rec, "expr").ok_or_else(|| NormalizeError::MissingField {
                    path: path(),
                    field: "expr",
                })?,
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    let width = width_field(record, "width").unwrap_or_else(|| derive_width(states.len()));
    let initial_state =
        text_field(record, "initialState").or_else(|| states.first().map(|s| s.name.clone()));

    Ok(Some(CanonicalFsm {
        name: text_field(record, "name").unwrap_or_else(|| DEFAULT_NAME.to_string()),
        clock: text_field(record, "clock").unwrap_or_else(|| DEFAULT_CLOCK.to_string()),
        reset: text_field(record, "reset").unwrap_or_else(|| DEFAULT_RESET.to_string()),
        async_reset: text_field(record, "asyncReset"),
        condition: text_field(record, "condition"),
        width,
        ascii: flag_field(record, "ascii"),
        initial_state,
        states,
        wires,
        registers,
        localparams,
    }))
}

/// Returns the state register width for `count` states: `ceil(log2(count))`,
/// never less than one bit.
pub fn derive_width(count: usize) -> u32 {
    if count <= 1 {
        return 1;
    }
    usize::BITS - (count - 1).leading_zeros()
}

fn required_name(rec: &Record, path: impl Fn() -> String) -> Result<String, NormalizeError> {
    text_field(rec, "name").ok_or_else(|| NormalizeError::MissingName { path: path() })
}

fn build_state(rec: &Record) -> Result<State, NormalizeError> {
    let name = required_name(rec, || "states".to_string())?;

    let next = match rec.get("next") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| build_transition(item, &name, i))
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    let attributes: IndexMap<String, String> = rec
        .iter()
        .filter(|(key, _)| !STATE_KEYS.contains(&key.as_str()))
        .filter_map(|(key, value)| attribute_text(value).map(|text| (key.clone(), text)))
        .collect();

    Ok(State {
        on_entry: actions(rec.get("onEntry")),
        on_exit: actions(rec.get("onExit")),
        on_self: actions(rec.get("onSelf")),
        name,
        next,
        attributes,
    })
}

fn build_transition(item: &Value, source: &str, index: usize) -> Result<Transition, NormalizeError> {
    let path = || format!("states[{source}].next[{index}]");
    let Some(rec) = item.as_object() else {
        return Err(NormalizeError::InvalidItem { path: path() });
    };
    let condition = rec
        .get("condition")
        .or_else(|| rec.get("cond"))
        .and_then(scalar_text)
        .unwrap_or_else(|| DEFAULT_CONDITION.to_string());
    Ok(Transition {
        target: required_name(rec, path)?,
        condition,
        actions: actions(rec.get("actions")),
    })
}

/// Coerces an action field; empty sets collapse to `None`.
fn actions(value: Option<&Value>) -> Option<Actions> {
    let actions = match value? {
        Value::Array(items) => Actions::Statements(items.iter().filter_map(scalar_text).collect()),
        Value::Object(assigns) => Actions::Assignments(
            assigns
                .iter()
                .filter_map(|(reg, expr)| scalar_text(expr).map(|e| (reg.clone(), e)))
                .collect(),
        ),
        scalar => Actions::Statements(scalar_text(scalar).into_iter().collect()),
    };
    (!actions.is_empty()).then_some(actions)
}
