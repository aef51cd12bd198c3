//! Render context: the config document plus the computed values.

use crate::costs::CostResult;
use crate::error::{PropgenError, Result};
use crate::schedule::ScheduleResult;
use serde::Serialize;
use serde_json::Value;

/// Context key holding the [`ScheduleResult`].
pub const SCHEDULE_KEY: &str = "programmazione_calcolata";

/// Context key holding the [`CostResult`].
pub const COST_KEY: &str = "costi_calcolati";

/// Everything a fragment can reference.
///
/// Built once per run and read-only afterwards: rendering borrows it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    value: Value,
    schedule: ScheduleResult,
    cost: CostResult,
}

impl RenderContext {
    /// The JSON document templates are rendered against.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn schedule(&self) -> &ScheduleResult {
        &self.schedule
    }

    pub fn cost(&self) -> &CostResult {
        &self.cost
    }

    /// Look up a dotted path such as `progetto.titolo`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.value, |value, key| value.as_object()?.get(key))
    }

    /// Look up a dotted path that must hold a scalar, rendered as text.
    pub fn require_text(&self, path: &str) -> Result<String> {
        match self.lookup(path) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(Value::Null) | None => Err(PropgenError::Config(format!(
                "missing required field '{}'",
                path
            ))),
            Some(_) => Err(PropgenError::Config(format!(
                "field '{}' must be a single value",
                path
            ))),
        }
    }
}

impl Serialize for RenderContext {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Merge the computed values into a copy of the raw config document.
///
/// `raw` is left untouched. Existing keys named [`SCHEDULE_KEY`] or
/// [`COST_KEY`] are replaced.
pub fn build_context(
    raw: &Value,
    schedule: ScheduleResult,
    cost: CostResult,
) -> Result<RenderContext> {
    let mut map = raw
        .as_object()
        .cloned()
        .ok_or_else(|| PropgenError::Config("config document must be a mapping".to_string()))?;

    let schedule_value = to_context_value(&schedule, SCHEDULE_KEY)?;
    let cost_value = to_context_value(&cost, COST_KEY)?;

    for (key, value) in [(SCHEDULE_KEY, schedule_value), (COST_KEY, cost_value)] {
        if map.insert(key.to_string(), value).is_some() {
            log::warn!("config key '{}' is overwritten by computed values", key);
        }
    }

    Ok(RenderContext {
        value: Value::Object(map),
        schedule,
        cost,
    })
}

fn to_context_value<T: Serialize>(result: &T, key: &str) -> Result<Value> {
    serde_json::to_value(result)
        .map_err(|e| PropgenError::Config(format!("cannot serialize '{}': {}", key, e)))
}
