//! Per-type element properties.
//!
//! The editor the documents come from treats properties as an open attribute
//! bag; here each element type gets a concrete record so the type-specific
//! branches in validation and conversion are checked exhaustively at compile
//! time.

use crate::registry::ElementType;
use serde::{Deserialize, Serialize};

/// How an approval step advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum StepType {
    Auto,
    ActionBased,
}

impl From<StepType> for i64 {
    fn from(value: StepType) -> Self {
        match value {
            StepType::Auto => 1,
            StepType::ActionBased => 2,
        }
    }
}

impl TryFrom<i64> for StepType {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StepType::Auto),
            2 => Ok(StepType::ActionBased),
            other => Err(format!("invalid step_type code: {other}")),
        }
    }
}

/// Whether a condition element carries a plain condition or an auto action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ConditionKind {
    Condition,
    AutoAction,
}

impl Default for ConditionKind {
    fn default() -> Self {
        ConditionKind::Condition
    }
}

impl From<ConditionKind> for i64 {
    fn from(value: ConditionKind) -> Self {
        match value {
            ConditionKind::Condition => 1,
            ConditionKind::AutoAction => 2,
        }
    }
}

impl TryFrom<i64> for ConditionKind {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ConditionKind::Condition),
            2 => Ok(ConditionKind::AutoAction),
            other => Err(format!("invalid condition kind code: {other}")),
        }
    }
}

/// Terminal outcome tag carried by an `End` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndAction {
    #[default]
    Complete,
    Approve,
    Reject,
    Return,
}

/// Joins a condition clause to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

/// One row of a condition element's ordered logic list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionClause {
    pub field: String,
    pub operation: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StartProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalStepProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<i64>,
    /// Intended unique among approval steps; duplicates are flagged by
    /// advisory validation, not rejected at write time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_type: Option<StepType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<i64>,
    /// Values above 1 turn the step into a parallel approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_approvals: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priority_approver_groups: Vec<i64>,
    pub active_ind: bool,
}

impl Default for ApprovalStepProps {
    fn default() -> Self {
        Self {
            name: None,
            service_type: None,
            seq: None,
            step_type: None,
            status: None,
            group: None,
            required_approvals: None,
            priority_approver_groups: Vec::new(),
            active_ind: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionStepProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

impl Default for ActionStepProps {
    fn default() -> Self {
        Self {
            name: None,
            action: None,
            to_status: None,
            sub_status: None,
            active_ind: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionStepProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: ConditionKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub condition_logic: Vec<ConditionClause>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

impl Default for ConditionStepProps {
    fn default() -> Self {
        Self {
            name: None,
            kind: ConditionKind::Condition,
            condition_logic: Vec::new(),
            to_status: None,
            sub_status: None,
            active_ind: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelGroupProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Group ids approving in parallel; validity requires at least one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parallel_groups: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub action: EndAction,
}

/// Tagged union of per-type property records. The variant is the single
/// source of truth for an element's type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementProperties {
    Start(StartProps),
    ApprovalStep(ApprovalStepProps),
    ActionStep(ActionStepProps),
    ConditionStep(ConditionStepProps),
    ParallelGroup(ParallelGroupProps),
    End(EndProps),
}

impl ElementProperties {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementProperties::Start(_) => ElementType::Start,
            ElementProperties::ApprovalStep(_) => ElementType::ApprovalStep,
            ElementProperties::ActionStep(_) => ElementType::ActionStep,
            ElementProperties::ConditionStep(_) => ElementType::ConditionStep,
            ElementProperties::ParallelGroup(_) => ElementType::ParallelGroup,
            ElementProperties::End(_) => ElementType::End,
        }
    }

    /// The empty record for a given element type.
    pub fn default_for(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Start => ElementProperties::Start(StartProps::default()),
            ElementType::ApprovalStep => {
                ElementProperties::ApprovalStep(ApprovalStepProps::default())
            }
            ElementType::ActionStep => ElementProperties::ActionStep(ActionStepProps::default()),
            ElementType::ConditionStep => {
                ElementProperties::ConditionStep(ConditionStepProps::default())
            }
            ElementType::ParallelGroup => {
                ElementProperties::ParallelGroup(ParallelGroupProps::default())
            }
            ElementType::End => ElementProperties::End(EndProps::default()),
        }
    }

    /// Parses a raw properties bag against a known element type.
    pub fn from_value(
        element_type: ElementType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match element_type {
            ElementType::Start => ElementProperties::Start(serde_json::from_value(value)?),
            ElementType::ApprovalStep => {
                ElementProperties::ApprovalStep(serde_json::from_value(value)?)
            }
            ElementType::ActionStep => {
                ElementProperties::ActionStep(serde_json::from_value(value)?)
            }
            ElementType::ConditionStep => {
                ElementProperties::ConditionStep(serde_json::from_value(value)?)
            }
            ElementType::ParallelGroup => {
                ElementProperties::ParallelGroup(serde_json::from_value(value)?)
            }
            ElementType::End => ElementProperties::End(serde_json::from_value(value)?),
        })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ElementProperties::Start(p) => p.name.as_deref(),
            ElementProperties::ApprovalStep(p) => p.name.as_deref(),
            ElementProperties::ActionStep(p) => p.name.as_deref(),
            ElementProperties::ConditionStep(p) => p.name.as_deref(),
            ElementProperties::ParallelGroup(p) => p.name.as_deref(),
            ElementProperties::End(p) => p.name.as_deref(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let slot = match self {
            ElementProperties::Start(p) => &mut p.name,
            ElementProperties::ApprovalStep(p) => &mut p.name,
            ElementProperties::ActionStep(p) => &mut p.name,
            ElementProperties::ConditionStep(p) => &mut p.name,
            ElementProperties::ParallelGroup(p) => &mut p.name,
            ElementProperties::End(p) => &mut p.name,
        };
        *slot = Some(name.into());
    }

    pub fn as_approval_step(&self) -> Option<&ApprovalStepProps> {
        match self {
            ElementProperties::ApprovalStep(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_approval_step_mut(&mut self) -> Option<&mut ApprovalStepProps> {
        match self {
            ElementProperties::ApprovalStep(p) => Some(p),
            _ => None,
        }
    }
}

impl From<ApprovalStepProps> for ElementProperties {
    fn from(props: ApprovalStepProps) -> Self {
        ElementProperties::ApprovalStep(props)
    }
}

impl From<ActionStepProps> for ElementProperties {
    fn from(props: ActionStepProps) -> Self {
        ElementProperties::ActionStep(props)
    }
}

impl From<ConditionStepProps> for ElementProperties {
    fn from(props: ConditionStepProps) -> Self {
        ElementProperties::ConditionStep(props)
    }
}

impl From<ParallelGroupProps> for ElementProperties {
    fn from(props: ParallelGroupProps) -> Self {
        ElementProperties::ParallelGroup(props)
    }
}

impl From<EndProps> for ElementProperties {
    fn from(props: EndProps) -> Self {
        ElementProperties::End(props)
    }
}

impl From<StartProps> for ElementProperties {
    fn from(props: StartProps) -> Self {
        ElementProperties::Start(props)
    }
}
