use serde::{Deserialize, Serialize};

use super::SelectOption;

/// One AI agent as served by `GET /api/agents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub team: Team,
    pub status: AgentStatus,
    pub metrics: AgentMetrics,
    #[serde(rename = "jira")]
    pub issues: IssueTracking,
    #[serde(rename = "transferTargets", default)]
    pub transfer_targets: Vec<TransferTarget>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Team {
    #[serde(rename = "Éxito Estudiantil")]
    StudentSuccess,
    #[serde(rename = "Gestión de Matrícula")]
    Enrollment,
}

impl SelectOption for Team {
    const ALL: &'static [Self] = &[Team::StudentSuccess, Team::Enrollment];

    fn value(&self) -> &'static str {
        match self {
            Team::StudentSuccess => "Éxito Estudiantil",
            Team::Enrollment => "Gestión de Matrícula",
        }
    }
}

impl Team {
    pub fn display_name(&self) -> &'static str {
        self.value()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    #[serde(rename = "Operativo")]
    Operational,
    #[serde(rename = "Advertencia")]
    Warning,
    #[serde(rename = "Crítico")]
    Critical,
}

impl SelectOption for AgentStatus {
    const ALL: &'static [Self] = &[
        AgentStatus::Operational,
        AgentStatus::Warning,
        AgentStatus::Critical,
    ];

    fn value(&self) -> &'static str {
        match self {
            AgentStatus::Operational => "Operativo",
            AgentStatus::Warning => "Advertencia",
            AgentStatus::Critical => "Crítico",
        }
    }
}

impl AgentStatus {
    pub fn display_name(&self) -> &'static str {
        self.value()
    }

    /// Badge colors for the status pill
    pub fn badge_class(&self) -> &'static str {
        match self {
            AgentStatus::Operational => "bg-green-100 text-green-800 border-green-200",
            AgentStatus::Warning => "bg-yellow-100 text-yellow-800 border-yellow-200",
            AgentStatus::Critical => "bg-red-100 text-red-800 border-red-200",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            AgentStatus::Operational => "bg-green-500",
            AgentStatus::Warning => "bg-yellow-500",
            AgentStatus::Critical => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AgentMetrics {
    #[serde(rename = "outboundCalls")]
    pub outbound_calls: u32,
    pub transfers: u32,
    /// Seconds
    #[serde(rename = "avgHandleTime")]
    pub avg_handle_time: u32,
}

/// Jira issue counters for the agent's project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IssueTracking {
    #[serde(rename = "openIssues")]
    pub open_issues: u32,
    pub backlog: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferTarget {
    pub name: String,
    pub number: String,
}
