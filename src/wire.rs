//! Serde shapes for the backend's nested tree representation.
//!
//! A service record carries an ordered list of approval steps, each with
//! nested actions, conditions, and parallel-approval-groups. The record
//! structs describe what the backend returns on load; the request structs are
//! what the backend accepts on save. Optional request fields are skipped when
//! unset — the wire format distinguishes "absent" from "empty array".

use crate::graph::{ConditionClause, ConditionKind, StepType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRecord {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub name_ara: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRecord {
    pub id: i64,
    pub action: i64,
    pub to_status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    pub condition_logic: Vec<ConditionClause>,
    pub to_status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelGroupRecord {
    pub id: i64,
    pub group: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalStepRecord {
    pub id: i64,
    pub service_type: i64,
    pub seq: i64,
    pub step_type: StepType,
    pub status: i64,
    pub group: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_approvals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_approver_groups: Option<Vec<i64>>,
    pub active_ind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_approval_groups: Option<Vec<ParallelGroupRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvalstepcondition_set: Option<Vec<ConditionRecord>>,
}

impl Default for ApprovalStepRecord {
    fn default() -> Self {
        Self {
            id: 0,
            service_type: 0,
            seq: 0,
            step_type: StepType::Auto,
            status: 0,
            group: 0,
            required_approvals: None,
            priority_approver_groups: None,
            active_ind: true,
            actions: None,
            parallel_approval_groups: None,
            approvalstepcondition_set: None,
        }
    }
}

/// The backend's nested tree for one service, as loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterStepRecord {
    pub service: ServiceRecord,
    pub steps: Vec<ApprovalStepRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRequest {
    pub action: i64,
    pub to_status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionRequest {
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    pub condition_logic: Vec<ConditionClause>,
    pub to_status: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status: Option<i64>,
    pub active_ind: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelGroupRequest {
    pub group: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalStepRequest {
    pub service_type: i64,
    pub seq: i64,
    pub step_type: StepType,
    pub status: i64,
    pub group: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_approvals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_approver_groups: Option<Vec<i64>>,
    pub active_ind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_approval_groups: Option<Vec<ParallelGroupRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approvalstepcondition_set: Option<Vec<ConditionRequest>>,
}

impl Default for ApprovalStepRequest {
    fn default() -> Self {
        Self {
            service_type: 0,
            seq: 0,
            step_type: StepType::Auto,
            status: 0,
            group: 0,
            required_approvals: None,
            priority_approver_groups: None,
            active_ind: true,
            actions: None,
            parallel_approval_groups: None,
            approvalstepcondition_set: None,
        }
    }
}

/// The save payload for one service's approval steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterStepRequest {
    pub service_code: String,
    pub steps: Vec<ApprovalStepRequest>,
}
