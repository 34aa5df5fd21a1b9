//! The Task field-constraint set and the validation that consults it.
//!
//! This table is the single source of truth for which Task fields are
//! required and how they are typed. The service layer validates against it,
//! and the API serves it verbatim (`GET /api/tasks/schema`) so the browser
//! client can derive its form checks from the same data instead of keeping a
//! second hand-written schema.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    /// Wire name of the field (matches the serialized Task).
    pub name: &'static str,
    /// Human-readable label, used in validation messages and form labels.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const TASK_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "nomTask",
        label: "Task name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "nomEmploye",
        label: "Employee name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "dateDebut",
        label: "Start date",
        kind: FieldKind::Date,
        required: true,
    },
    FieldSpec {
        name: "dateFin",
        label: "End date",
        kind: FieldKind::Date,
        required: true,
    },
];

const NOM_TASK: &FieldSpec = &TASK_FIELDS[0];
const NOM_EMPLOYE: &FieldSpec = &TASK_FIELDS[1];
const DATE_DEBUT: &FieldSpec = &TASK_FIELDS[2];
const DATE_FIN: &FieldSpec = &TASK_FIELDS[3];

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskFormError {
    #[error("{label} is required")]
    Missing {
        field: &'static str,
        label: &'static str,
    },
    #[error("{label} is not a valid date")]
    InvalidDate {
        field: &'static str,
        label: &'static str,
    },
}

impl TaskFormError {
    pub fn field(&self) -> &'static str {
        match self {
            TaskFormError::Missing { field, .. } => field,
            TaskFormError::InvalidDate { field, .. } => field,
        }
    }
}

fn join_messages(errors: &[TaskFormError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every failed check for a submitted form, reported together so the client
/// can mark all offending fields at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct TaskFormErrors(pub Vec<TaskFormError>);

/// Raw form values as submitted, before any checking.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawTaskForm<'a> {
    pub nom_task: Option<&'a str>,
    pub nom_employe: Option<&'a str>,
    pub date_debut: Option<&'a str>,
    pub date_fin: Option<&'a str>,
}

/// A fully validated set of fields for creating a Task.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidNewTask {
    pub nom_task: String,
    pub nom_employe: String,
    pub date_debut: NaiveDateTime,
    pub date_fin: NaiveDateTime,
}

/// A validated partial update. `None` means "leave the column alone".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskChanges {
    pub nom_task: Option<String>,
    pub nom_employe: Option<String>,
    pub date_debut: Option<NaiveDateTime>,
    pub date_fin: Option<NaiveDateTime>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.nom_task.is_none()
            && self.nom_employe.is_none()
            && self.date_debut.is_none()
            && self.date_fin.is_none()
    }
}

/// Parses the date formats the contract accepts: RFC 3339, a bare datetime,
/// or a calendar date (taken as midnight). The client's date inputs submit
/// the last form.
pub fn parse_date_value(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

fn check_text(spec: &FieldSpec, raw: Option<&str>) -> Result<String, TaskFormError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => Ok(v.to_string()),
        None => Err(TaskFormError::Missing {
            field: spec.name,
            label: spec.label,
        }),
    }
}

fn check_date(spec: &FieldSpec, raw: Option<&str>) -> Result<NaiveDateTime, TaskFormError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Err(TaskFormError::Missing {
            field: spec.name,
            label: spec.label,
        }),
        Some(v) => parse_date_value(v).ok_or(TaskFormError::InvalidDate {
            field: spec.name,
            label: spec.label,
        }),
    }
}

/// Validates a create form: every field in [`TASK_FIELDS`] must be present
/// and well-formed. All failures are reported together.
pub fn validate_new(form: RawTaskForm<'_>) -> Result<ValidNewTask, TaskFormErrors> {
    let mut errors = Vec::new();

    let nom_task = check_text(NOM_TASK, form.nom_task)
        .map_err(|e| errors.push(e))
        .ok();
    let nom_employe = check_text(NOM_EMPLOYE, form.nom_employe)
        .map_err(|e| errors.push(e))
        .ok();
    let date_debut = check_date(DATE_DEBUT, form.date_debut)
        .map_err(|e| errors.push(e))
        .ok();
    let date_fin = check_date(DATE_FIN, form.date_fin)
        .map_err(|e| errors.push(e))
        .ok();

    match (nom_task, nom_employe, date_debut, date_fin) {
        (Some(nom_task), Some(nom_employe), Some(date_debut), Some(date_fin)) => Ok(ValidNewTask {
            nom_task,
            nom_employe,
            date_debut,
            date_fin,
        }),
        _ => Err(TaskFormErrors(errors)),
    }
}

/// Validates an update form: fields that are absent stay untouched, fields
/// that are present must satisfy the same constraints as on create (a
/// required field cannot be blanked out).
pub fn validate_changes(form: RawTaskForm<'_>) -> Result<TaskChanges, TaskFormErrors> {
    let mut errors = Vec::new();
    let mut changes = TaskChanges::default();

    if form.nom_task.is_some() {
        match check_text(NOM_TASK, form.nom_task) {
            Ok(v) => changes.nom_task = Some(v),
            Err(e) => errors.push(e),
        }
    }
    if form.nom_employe.is_some() {
        match check_text(NOM_EMPLOYE, form.nom_employe) {
            Ok(v) => changes.nom_employe = Some(v),
            Err(e) => errors.push(e),
        }
    }
    if form.date_debut.is_some() {
        match check_date(DATE_DEBUT, form.date_debut) {
            Ok(v) => changes.date_debut = Some(v),
            Err(e) => errors.push(e),
        }
    }
    if form.date_fin.is_some() {
        match check_date(DATE_FIN, form.date_fin) {
            Ok(v) => changes.date_fin = Some(v),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(TaskFormErrors(errors))
    }
}
