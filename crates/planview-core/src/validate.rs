//! Validation of raw plan JSON into a [`PlanDocument`].
//!
//! The validator walks the JSON value in document order and stops at the first
//! problem, reporting it as [`PlanError::MalformedPlan`] with the path of the
//! offending field (`phases[1].tasks[0].start_date`). Nothing is returned on
//! failure; a plan is either fully valid or rejected.

use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{IoResultExt, PlanError, Result},
    models::{leading_days, Phase, PlanDate, PlanDocument, Priority, Summary, Task},
    params::LoadPlan,
};

/// Read and validate a plan document from a JSON file.
///
/// # Errors
///
/// Returns `PlanError::FileSystem` if the file cannot be read, otherwise the
/// same errors as [`parse_plan`].
pub fn load_plan(params: &LoadPlan) -> Result<PlanDocument> {
    debug!("Loading plan from {}", params.path.display());
    let text = std::fs::read_to_string(&params.path).fs_context(&params.path)?;
    parse_plan(&text)
}

/// Parse and validate plan JSON text.
///
/// # Errors
///
/// Returns `PlanError::Serialization` if the text is not JSON and
/// `PlanError::MalformedPlan` if it does not describe a valid plan.
pub fn parse_plan(text: &str) -> Result<PlanDocument> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value)
}

/// Validate a JSON value as a plan document.
///
/// # Errors
///
/// Returns `PlanError::MalformedPlan` describing the first missing or invalid
/// field.
///
/// # Examples
///
/// ```rust
/// use planview_core::{validate::validate, PlanError};
///
/// let err = validate(&serde_json::json!({})).unwrap_err();
/// assert!(matches!(err, PlanError::MalformedPlan { .. }));
/// ```
pub fn validate(value: &Value) -> Result<PlanDocument> {
    let root = Fields::root(value)?;

    let goal = root.non_empty_string("goal")?;
    let total_duration = root.string("total_duration")?;
    if leading_days(&total_duration).is_none() {
        return Err(PlanError::malformed("invalid duration: total_duration"));
    }
    let start_date = root.date("start_date")?;
    let end_date = root.date("end_date")?;

    let (phase_values, phases_path) = root.non_empty_array("phases")?;
    let phases = phase_values
        .iter()
        .enumerate()
        .map(|(index, value)| validate_phase(value, format!("{phases_path}[{index}]")))
        .collect::<Result<Vec<_>>>()?;

    let summary = root.object("summary")?;
    let summary = Summary {
        milestones: summary.string_list("milestones")?,
        remarks: summary.string("remarks")?,
    };

    let ai_enhanced = root.optional_bool("ai_enhanced")?;
    let project_type = root.optional_string("project_type")?;

    debug!(
        "Validated plan with {} phases and {} tasks",
        phases.len(),
        phases.iter().map(|phase| phase.tasks.len()).sum::<usize>()
    );

    Ok(PlanDocument {
        goal,
        total_duration,
        start_date,
        end_date,
        phases,
        summary,
        ai_enhanced,
        project_type,
    })
}

fn validate_phase(value: &Value, path: String) -> Result<Phase> {
    let fields = Fields::new(value, path)?;
    let name = fields.string("phase")?;

    let (task_values, tasks_path) = fields.non_empty_array("tasks")?;
    let tasks = task_values
        .iter()
        .enumerate()
        .map(|(index, value)| validate_task(value, format!("{tasks_path}[{index}]")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Phase { name, tasks })
}

fn validate_task(value: &Value, path: String) -> Result<Task> {
    let fields = Fields::new(value, path)?;

    let task_name = fields.non_empty_string("task_name")?;
    let description = fields.string("description")?;
    let priority = fields.priority("priority")?;
    let start_date = fields.date("start_date")?;
    let end_date = fields.date("end_date")?;
    if end_date < start_date {
        return Err(PlanError::malformed(format!("date order: {}", fields.path)));
    }
    let duration = fields.string("duration")?;
    let dependencies = if fields.is_present("dependencies") {
        fields.string_list("dependencies")?
    } else {
        Vec::new()
    };

    Ok(Task {
        task_name,
        description,
        duration,
        start_date,
        end_date,
        dependencies,
        priority,
    })
}

/// A JSON object together with its path inside the plan.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn root(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                map,
                path: String::new(),
            }),
            _ => Err(PlanError::malformed("invalid type: plan, expected object")),
        }
    }

    fn new(value: &'a Value, path: String) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            _ => Err(invalid_type(&path, "object")),
        }
    }

    fn child(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// Null counts as absent.
    fn is_present(&self, key: &str) -> bool {
        self.map.get(key).is_some_and(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> Result<(&'a Value, String)> {
        let path = self.child(key);
        match self.map.get(key) {
            Some(value) if !value.is_null() => Ok((value, path)),
            _ => Err(PlanError::malformed(format!("missing field: {path}"))),
        }
    }

    fn string(&self, key: &str) -> Result<String> {
        let (value, path) = self.required(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid_type(&path, "string"))
    }

    fn non_empty_string(&self, key: &str) -> Result<String> {
        let text = self.string(key)?;
        if text.trim().is_empty() {
            return Err(PlanError::malformed(format!("empty field: {}", self.child(key))));
        }
        Ok(text)
    }

    fn date(&self, key: &str) -> Result<PlanDate> {
        let text = self.string(key)?;
        PlanDate::parse(&text)
            .map_err(|_| PlanError::malformed(format!("unparseable date: {}", self.child(key))))
    }

    fn priority(&self, key: &str) -> Result<Priority> {
        let text = self.string(key)?;
        text.parse()
            .map_err(|_| PlanError::malformed(format!("invalid priority: {}", self.child(key))))
    }

    fn array(&self, key: &str) -> Result<(&'a Vec<Value>, String)> {
        let (value, path) = self.required(key)?;
        match value.as_array() {
            Some(items) => Ok((items, path)),
            None => Err(invalid_type(&path, "array")),
        }
    }

    fn non_empty_array(&self, key: &str) -> Result<(&'a Vec<Value>, String)> {
        let (items, path) = self.array(key)?;
        if items.is_empty() {
            return Err(PlanError::malformed(format!("empty collection: {path}")));
        }
        Ok((items, path))
    }

    fn string_list(&self, key: &str) -> Result<Vec<String>> {
        let (items, path) = self.array(key)?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid_type(&format!("{path}[{index}]"), "string"))
            })
            .collect()
    }

    fn object(&self, key: &str) -> Result<Fields<'a>> {
        let (value, path) = self.required(key)?;
        Fields::new(value, path)
    }

    fn optional_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(_) => Err(invalid_type(&self.child(key), "boolean")),
        }
    }

    fn optional_string(&self, key: &str) -> Result<Option<String>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(invalid_type(&self.child(key), "string")),
        }
    }
}

fn invalid_type(path: &str, expected: &str) -> PlanError {
    PlanError::malformed(format!("invalid type: {path}, expected {expected}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn task(name: &str, start: &str, end: &str) -> Value {
        json!({
            "task_name": name,
            "description": format!("{name} description"),
            "duration": "3 days",
            "start_date": start,
            "end_date": end,
            "dependencies": [],
            "priority": "High"
        })
    }

    fn sample() -> Value {
        json!({
            "goal": "Launch a product in 30 days",
            "total_duration": "30 days",
            "start_date": "2025-01-01",
            "end_date": "2025-01-30",
            "phases": [
                {
                    "phase": "Planning",
                    "tasks": [
                        task("Market Research", "2025-01-01", "2025-01-03"),
                        task("Define Requirements", "2025-01-04", "2025-01-06")
                    ]
                },
                {
                    "phase": "Testing",
                    "tasks": [task("Unit Testing", "2025-01-07", "2025-01-30")]
                }
            ],
            "summary": {
                "milestones": ["Planning Complete (2025-01-06)"],
                "remarks": "Looks doable."
            }
        })
    }

    fn reason(value: &Value) -> String {
        match validate(value) {
            Err(PlanError::MalformedPlan { reason }) => reason,
            other => panic!("expected MalformedPlan, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_plan() {
        let plan = validate(&sample()).expect("sample plan is valid");
        assert_eq!(plan.goal, "Launch a product in 30 days");
        assert_eq!(plan.total_days(), Some(30));
        assert_eq!(plan.phases.len(), 2);
        assert_eq!(plan.phases[0].tasks.len(), 2);
        assert_eq!(plan.phases[0].tasks[1].task_name, "Define Requirements");
        assert_eq!(plan.summary.milestones.len(), 1);
        assert_eq!(plan.ai_enhanced, None);
    }

    #[test]
    fn test_empty_object_is_rejected() {
        assert_eq!(reason(&json!({})), "missing field: goal");
    }

    #[test]
    fn test_non_object_root() {
        assert_eq!(reason(&json!([1, 2])), "invalid type: plan, expected object");
    }

    #[test]
    fn test_missing_phases() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("phases");
        assert_eq!(reason(&value), "missing field: phases");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let mut value = sample();
        value["summary"] = Value::Null;
        assert_eq!(reason(&value), "missing field: summary");
    }

    #[test]
    fn test_empty_phases() {
        let mut value = sample();
        value["phases"] = json!([]);
        assert_eq!(reason(&value), "empty collection: phases");
    }

    #[test]
    fn test_empty_tasks() {
        let mut value = sample();
        value["phases"][1]["tasks"] = json!([]);
        assert_eq!(reason(&value), "empty collection: phases[1].tasks");
    }

    #[test]
    fn test_unparseable_task_date() {
        let mut value = sample();
        value["phases"][0]["tasks"][1]["start_date"] = json!("next tuesday");
        assert_eq!(
            reason(&value),
            "unparseable date: phases[0].tasks[1].start_date"
        );
    }

    #[test]
    fn test_unparseable_plan_date() {
        let mut value = sample();
        value["end_date"] = json!("2025-13-01");
        assert_eq!(reason(&value), "unparseable date: end_date");
    }

    #[test]
    fn test_first_error_wins() {
        let mut value = sample();
        value["start_date"] = json!("nope");
        value["phases"] = json!([]);
        assert_eq!(reason(&value), "unparseable date: start_date");
    }

    #[test]
    fn test_wrong_type() {
        let mut value = sample();
        value["goal"] = json!(42);
        assert_eq!(reason(&value), "invalid type: goal, expected string");

        let mut value = sample();
        value["phases"][0]["tasks"][0]["dependencies"] = json!(["ok", 3]);
        assert_eq!(
            reason(&value),
            "invalid type: phases[0].tasks[0].dependencies[1], expected string"
        );
    }

    #[test]
    fn test_blank_goal() {
        let mut value = sample();
        value["goal"] = json!("   ");
        assert_eq!(reason(&value), "empty field: goal");
    }

    #[test]
    fn test_total_duration_needs_leading_integer() {
        let mut value = sample();
        value["total_duration"] = json!("a month");
        assert_eq!(reason(&value), "invalid duration: total_duration");
    }

    #[test]
    fn test_oversized_total_duration_saturates() {
        let mut value = sample();
        value["total_duration"] = json!("99999999999999999999 days");
        let plan = validate(&value).unwrap();
        assert_eq!(plan.total_days(), Some(i64::MAX));
    }

    #[test]
    fn test_priority_is_case_insensitive() {
        let mut value = sample();
        value["phases"][0]["tasks"][0]["priority"] = json!("mEdIuM");
        let plan = validate(&value).unwrap();
        assert_eq!(plan.phases[0].tasks[0].priority, Priority::Medium);
    }

    #[test]
    fn test_unknown_priority() {
        let mut value = sample();
        value["phases"][0]["tasks"][0]["priority"] = json!("Urgent");
        assert_eq!(
            reason(&value),
            "invalid priority: phases[0].tasks[0].priority"
        );
    }

    #[test]
    fn test_task_dates_out_of_order() {
        let mut value = sample();
        value["phases"][1]["tasks"][0]["start_date"] = json!("2025-02-01");
        assert_eq!(reason(&value), "date order: phases[1].tasks[0]");
    }

    #[test]
    fn test_missing_dependencies_default_to_empty() {
        let mut value = sample();
        value["phases"][0]["tasks"][0]
            .as_object_mut()
            .unwrap()
            .remove("dependencies");
        let plan = validate(&value).unwrap();
        assert!(plan.phases[0].tasks[0].dependencies.is_empty());
    }

    #[test]
    fn test_duration_is_not_reconciled() {
        let mut value = sample();
        value["phases"][0]["tasks"][0]["duration"] = json!("10 days");
        let plan = validate(&value).unwrap();
        let task = &plan.phases[0].tasks[0];
        assert_eq!(task.duration, "10 days");
        assert_eq!(task.duration_days(), Some(10));
    }

    #[test]
    fn test_optional_server_fields() {
        let mut value = sample();
        value["ai_enhanced"] = json!(false);
        value["project_type"] = json!("product_launch");
        let plan = validate(&value).unwrap();
        assert_eq!(plan.ai_enhanced, Some(false));
        assert_eq!(plan.project_type.as_deref(), Some("product_launch"));

        value["ai_enhanced"] = json!("yes");
        assert_eq!(reason(&value), "invalid type: ai_enhanced, expected boolean");
    }

    #[test]
    fn test_load_plan_missing_file() {
        let err = load_plan(&LoadPlan {
            path: "/nonexistent/plan.json".into(),
        })
        .unwrap_err();
        assert!(matches!(err, PlanError::FileSystem { .. }));
    }

    #[test]
    fn test_parse_plan_rejects_non_json() {
        let err = parse_plan("{ not json").unwrap_err();
        assert!(matches!(err, PlanError::Serialization { .. }));
    }
}
