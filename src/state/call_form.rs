//! Call test form state
//!
//! Field values, the submission lifecycle, and the once-a-second timestamp
//! that is sent as `current_tim`.

use chrono::{DateTime, Datelike, TimeZone};

use crate::api::ApiError;
use crate::models::{
    Bimester, CallRequest, CallResponse, DynamicVariables, RiskLevel, SelectOption, Week,
    DEFAULT_FROM_NUMBER, TARGET_AGENT_ID,
};

const WEEKDAYS: [&str; 7] = ["domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado"];

/// `"<día>, YYYY-MM-DD HH:MM:SS"` in the zone of `at`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let day = WEEKDAYS[at.weekday().num_days_from_sunday() as usize];
    format!("{}, {}", day, at.format("%Y-%m-%d %H:%M:%S"))
}

/// Current local time, formatted for the form.
pub fn current_timestamp() -> String {
    format_timestamp(&chrono::Local::now())
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded(CallResponse),
    Failed(String),
}

/// Editable fields of the form. The timestamp is not editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallField {
    FromNumber,
    ToNumber,
    FirstName,
    StartDate,
    Week,
    Bimester,
    RiskLevel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallForm {
    pub from_number: String,
    pub variables: DynamicVariables,
    pub phase: SubmissionPhase,
}

impl CallForm {
    pub fn new(timestamp: String) -> Self {
        Self {
            from_number: DEFAULT_FROM_NUMBER.to_string(),
            variables: DynamicVariables {
                to_number: String::new(),
                first_name: String::new(),
                current_time: timestamp,
                week: Week::default(),
                bimester: Bimester::default(),
                start_date: String::new(),
                risk_level: RiskLevel::default(),
            },
            phase: SubmissionPhase::Idle,
        }
    }

    /// Update one field. Select fields ignore values outside their option set.
    /// The last outcome stays visible until the next submission.
    pub fn set_field(&mut self, field: CallField, value: String) {
        let vars = &mut self.variables;
        match field {
            CallField::FromNumber => self.from_number = value,
            CallField::ToNumber => vars.to_number = value,
            CallField::FirstName => vars.first_name = value,
            CallField::StartDate => vars.start_date = value,
            CallField::Week => {
                if let Some(week) = Week::from_value(&value) {
                    vars.week = week;
                }
            }
            CallField::Bimester => {
                if let Some(bimester) = Bimester::from_value(&value) {
                    vars.bimester = bimester;
                }
            }
            CallField::RiskLevel => {
                if let Some(risk_level) = RiskLevel::from_value(&value) {
                    vars.risk_level = risk_level;
                }
            }
        }
    }

    /// Clock tick: refresh only the timestamp.
    pub fn tick(&mut self, timestamp: String) {
        self.variables.current_time = timestamp;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.from_number.is_empty() && !self.variables.to_number.is_empty()
    }

    /// Enter `Submitting` and build the request, or `None` if submission is
    /// currently disabled. Clears the previous outcome.
    pub fn begin_submission(&mut self) -> Option<CallRequest> {
        if !self.can_submit() {
            return None;
        }

        self.phase = SubmissionPhase::Submitting;
        Some(CallRequest {
            from_number: self.from_number.clone(),
            agent_id: TARGET_AGENT_ID.to_string(),
            dynamic_variables: self.variables.clone(),
        })
    }

    pub fn finish_submission(&mut self, outcome: Result<CallResponse, ApiError>) {
        self.phase = match outcome {
            Ok(response) => {
                tracing::info!("Call created: {}", response.call_id);
                SubmissionPhase::Succeeded(response)
            }
            Err(e) => {
                tracing::warn!("Call request failed: {}", e);
                SubmissionPhase::Failed(e.user_message())
            }
        };
    }
}
