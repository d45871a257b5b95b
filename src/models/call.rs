use serde::{Deserialize, Serialize};

use super::SelectOption;

/// Retell agent used by the call test page.
pub const TARGET_AGENT_ID: &str = "agent_be6e732a54198e22eb2b2713ed";

/// Default origin number (our Retell number).
pub const DEFAULT_FROM_NUMBER: &str = "+525593372460";

/// Body of `POST /api/retell/call`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallRequest {
    pub from_number: String,
    pub agent_id: String,
    #[serde(rename = "retell_llm_dynamic_variables")]
    pub dynamic_variables: DynamicVariables,
}

/// Variables injected into the Retell LLM prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DynamicVariables {
    pub to_number: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "current_tim")]
    pub current_time: String,
    pub week: Week,
    #[serde(rename = "current_bimester")]
    pub bimester: Bimester,
    #[serde(rename = "fecha_inicio")]
    pub start_date: String,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Week {
    #[default]
    #[serde(rename = "Semana1")]
    One,
    #[serde(rename = "Semana2")]
    Two,
    #[serde(rename = "Semana3")]
    Three,
    #[serde(rename = "Semana4")]
    Four,
    #[serde(rename = "Semana5")]
    Five,
    #[serde(rename = "Semana6")]
    Six,
    #[serde(rename = "Semana7")]
    Seven,
    #[serde(rename = "Semana8")]
    Eight,
    #[serde(rename = "Semana9")]
    Nine,
}

impl SelectOption for Week {
    const ALL: &'static [Self] = &[
        Week::One,
        Week::Two,
        Week::Three,
        Week::Four,
        Week::Five,
        Week::Six,
        Week::Seven,
        Week::Eight,
        Week::Nine,
    ];

    fn value(&self) -> &'static str {
        match self {
            Week::One => "Semana1",
            Week::Two => "Semana2",
            Week::Three => "Semana3",
            Week::Four => "Semana4",
            Week::Five => "Semana5",
            Week::Six => "Semana6",
            Week::Seven => "Semana7",
            Week::Eight => "Semana8",
            Week::Nine => "Semana9",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Bimester {
    #[default]
    #[serde(rename = "Bimestre 01")]
    First,
    #[serde(rename = "Bimestre 02")]
    Second,
    #[serde(rename = "Bimestre 03")]
    Third,
}

impl SelectOption for Bimester {
    const ALL: &'static [Self] = &[Bimester::First, Bimester::Second, Bimester::Third];

    fn value(&self) -> &'static str {
        match self {
            Bimester::First => "Bimestre 01",
            Bimester::Second => "Bimestre 02",
            Bimester::Third => "Bimestre 03",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RiskLevel {
    #[default]
    #[serde(rename = "Alto riesgo académico")]
    High,
    #[serde(rename = "Riesgo académico")]
    Moderate,
    #[serde(rename = "Sin riesgo académico")]
    NoRisk,
}

impl SelectOption for RiskLevel {
    const ALL: &'static [Self] = &[RiskLevel::High, RiskLevel::Moderate, RiskLevel::NoRisk];

    fn value(&self) -> &'static str {
        match self {
            RiskLevel::High => "Alto riesgo académico",
            RiskLevel::Moderate => "Riesgo académico",
            RiskLevel::NoRisk => "Sin riesgo académico",
        }
    }
}

/// Successful call creation. Retell returns many more fields; they are
/// carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CallResponse {
    pub call_id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body of the call endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            details: Some(details.into()),
        }
    }

    /// Most specific message available: `details`, then `error`, then the status.
    pub fn into_message(self, status: u16) -> String {
        self.details
            .filter(|d| !d.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
            .unwrap_or_else(|| format!("Error {}", status))
    }
}
