//! Scripted input replay.
//!
//! A replay script is a YAML list of input events, each optionally carrying
//! expectations about the form state right after the event:
//!
//! ```yaml
//! - input: email
//!   value: www
//!   expect:
//!     errors: 1
//! - select: Administrator
//! - clear: email
//!   expect:
//!     status: incomplete
//!     submittable: false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::field::FieldKind;
use crate::form::{FieldChange, FormSnapshot, RegistrationForm};
use crate::gate::FormStatus;

/// One scripted event. Exactly one of `input`, `select` or `clear` is set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    #[serde(default)]
    pub input: Option<FieldKind>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub select: Option<String>,
    #[serde(default)]
    pub clear: Option<FieldKind>,
    #[serde(default)]
    pub expect: Option<Expectation>,
}

/// Assertions checked after a step. Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    /// Number of failing fields
    #[serde(default)]
    pub errors: Option<usize>,
    /// Exact set of failing fields, in field order
    #[serde(default)]
    pub error_fields: Option<Vec<FieldKind>>,
    #[serde(default)]
    pub status: Option<FormStatus>,
    #[serde(default)]
    pub submittable: Option<bool>,
    /// Stored (masked) value of the field this step changed
    #[serde(default)]
    pub value: Option<String>,
}

impl Step {
    /// Convert the step into the change it describes.
    pub fn change(&self) -> Result<FieldChange> {
        match (&self.input, &self.select, &self.clear) {
            (Some(kind), None, None) => {
                let value = self
                    .value
                    .clone()
                    .with_context(|| format!("input step for '{}' is missing 'value'", kind))?;
                Ok(FieldChange::input(*kind, value))
            }
            (None, Some(role), None) => Ok(FieldChange::select_role(role.clone())),
            (None, None, Some(kind)) => Ok(FieldChange::Clear(*kind)),
            (None, None, None) => anyhow::bail!("step must set one of 'input', 'select' or 'clear'"),
            _ => anyhow::bail!("step sets more than one of 'input', 'select' and 'clear'"),
        }
    }

    /// Field this step changes.
    pub fn field(&self) -> Option<FieldKind> {
        self.input
            .or(self.clear)
            .or(self.select.as_ref().map(|_| FieldKind::Role))
    }
}

/// Parsed replay script.
#[derive(Debug, Clone, Default)]
pub struct ReplayScript {
    pub steps: Vec<Step>,
}

impl ReplayScript {
    pub fn parse(content: &str) -> Result<Self> {
        let steps: Vec<Step> =
            serde_yaml::from_str(content).context("Failed to parse replay script")?;

        for (i, step) in steps.iter().enumerate() {
            step.change()
                .with_context(|| format!("Invalid step {}", i + 1))?;
        }

        Ok(Self { steps })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid replay script {}", path.display()))
    }
}

/// Outcome of a single replayed step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// 1-based step number
    pub step: usize,
    pub field: FieldKind,
    pub snapshot: FormSnapshot,
    /// Human-readable description of each failed expectation
    pub mismatches: Vec<String>,
}

impl StepReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Outcome of a whole script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    pub steps: Vec<StepReport>,
    pub passed: bool,
}

/// Drive `form` through every step of `script`.
pub fn run(form: &mut RegistrationForm, script: &ReplayScript) -> Result<ReplayOutcome> {
    let mut reports = Vec::with_capacity(script.steps.len());

    for (i, step) in script.steps.iter().enumerate() {
        let change = step.change().with_context(|| format!("Invalid step {}", i + 1))?;
        let field = step.field().unwrap_or(FieldKind::Role);
        let snapshot = form.apply(change);

        let mismatches = step
            .expect
            .as_ref()
            .map(|expect| check_expectation(expect, field, &snapshot))
            .unwrap_or_default();

        if !mismatches.is_empty() {
            tracing::warn!(step = i + 1, field = %field, ?mismatches, "replay expectation failed");
        }

        reports.push(StepReport {
            step: i + 1,
            field,
            snapshot,
            mismatches,
        });
    }

    let passed = reports.iter().all(StepReport::passed);
    Ok(ReplayOutcome {
        steps: reports,
        passed,
    })
}

fn check_expectation(expect: &Expectation, field: FieldKind, snapshot: &FormSnapshot) -> Vec<String> {
    let mut mismatches = Vec::new();

    if let Some(errors) = expect.errors {
        if snapshot.error_count != errors {
            mismatches.push(format!(
                "expected {} error(s), got {}",
                errors, snapshot.error_count
            ));
        }
    }

    if let Some(fields) = &expect.error_fields {
        let actual: Vec<FieldKind> = snapshot.errors.fields().collect();
        if &actual != fields {
            mismatches.push(format!(
                "expected failing fields {}, got {}",
                join_fields(fields),
                join_fields(&actual)
            ));
        }
    }

    if let Some(status) = expect.status {
        if snapshot.status != status {
            mismatches.push(format!("expected status {}, got {}", status, snapshot.status));
        }
    }

    if let Some(submittable) = expect.submittable {
        if snapshot.submittable != submittable {
            mismatches.push(format!(
                "expected submittable={}, got {}",
                submittable, snapshot.submittable
            ));
        }
    }

    if let Some(value) = &expect.value {
        let actual = snapshot.values.get(field);
        if actual != value {
            mismatches.push(format!(
                "expected {} value {:?}, got {:?}",
                field, value, actual
            ));
        }
    }

    mismatches
}

fn join_fields(fields: &[FieldKind]) -> String {
    if fields.is_empty() {
        return "[]".to_string();
    }
    let names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
    format!("[{}]", names.join(", "))
}
