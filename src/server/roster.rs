//! Fixed agent roster served by `GET /api/agents`.

use crate::models::{AgentMetrics, AgentRecord, AgentStatus, IssueTracking, Team, TransferTarget};

fn target(name: &str, number: &str) -> TransferTarget {
    TransferTarget {
        name: name.to_string(),
        number: number.to_string(),
    }
}

pub fn mock_agents() -> Vec<AgentRecord> {
    vec![
        AgentRecord {
            id: "agent-001".to_string(),
            name: "Athena".to_string(),
            team: Team::StudentSuccess,
            status: AgentStatus::Operational,
            metrics: AgentMetrics { outbound_calls: 1250, transfers: 52, avg_handle_time: 180 },
            issues: IssueTracking { open_issues: 2, backlog: 5 },
            transfer_targets: vec![
                target("Soporte Académico", "+1 (800) 555-0101"),
                target("Bienestar Estudiantil", "+1 (800) 555-0102"),
            ],
        },
        AgentRecord {
            id: "agent-002".to_string(),
            name: "Helios".to_string(),
            team: Team::Enrollment,
            status: AgentStatus::Operational,
            metrics: AgentMetrics { outbound_calls: 980, transfers: 30, avg_handle_time: 150 },
            issues: IssueTracking { open_issues: 1, backlog: 3 },
            transfer_targets: vec![
                target("Admisiones LATAM", "+57 601 345 6789"),
                target("Admisiones México", "+52 55 1234 5678"),
            ],
        },
        AgentRecord {
            id: "agent-003".to_string(),
            name: "Orion".to_string(),
            team: Team::StudentSuccess,
            status: AgentStatus::Warning,
            metrics: AgentMetrics { outbound_calls: 1500, transfers: 180, avg_handle_time: 240 },
            issues: IssueTracking { open_issues: 8, backlog: 12 },
            transfer_targets: vec![target("Soporte Técnico Nivel 1", "+1 (888) 555-0103")],
        },
        AgentRecord {
            id: "agent-004".to_string(),
            name: "Cygnus".to_string(),
            team: Team::Enrollment,
            status: AgentStatus::Critical,
            metrics: AgentMetrics { outbound_calls: 200, transfers: 95, avg_handle_time: 300 },
            issues: IssueTracking { open_issues: 15, backlog: 25 },
            // No fixed transfer destinations
            transfer_targets: vec![],
        },
    ]
}
