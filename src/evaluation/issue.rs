//! Form issues and evaluation results

use serde::Serialize;

/// How serious a detected form problem is
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// A single detected form problem
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub message: &'static str,
    pub severity: Severity,
    /// Landmark indices implicated by this issue
    pub affected_joints: Vec<usize>,
}

impl Issue {
    pub fn new(message: &'static str, severity: Severity, affected_joints: &[usize]) -> Self {
        Self {
            message,
            severity,
            affected_joints: affected_joints.to_vec(),
        }
    }

    pub fn affects(&self, joint: usize) -> bool {
        self.affected_joints.contains(&joint)
    }
}

/// Outcome of evaluating one frame
///
/// For a complete frame `is_correct_form` is derived from `issues`, so the
/// only way to build one is through [`EvaluationResult::from_issues`].
/// [`EvaluationResult::no_signal`] is the degraded result for frames that
/// could not be evaluated at all.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    is_correct_form: bool,
    issues: Vec<Issue>,
}

impl EvaluationResult {
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            is_correct_form: issues.is_empty(),
            issues,
        }
    }

    /// No reliable signal: not correct, but no defects either
    pub fn no_signal() -> Self {
        Self {
            is_correct_form: false,
            issues: Vec::new(),
        }
    }

    pub fn is_correct_form(&self) -> bool {
        self.is_correct_form
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// True if any issue implicates the given landmark
    pub fn flags_joint(&self, joint: usize) -> bool {
        self.issues.iter().any(|issue| issue.affects(joint))
    }
}

impl Default for EvaluationResult {
    /// Before any frame has been evaluated nothing is wrong yet
    fn default() -> Self {
        Self::from_issues(Vec::new())
    }
}
