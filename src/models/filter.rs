use super::{AgentRecord, AgentStatus, SelectOption, Team};

/// Wildcard value of a filter selector.
pub const WILDCARD: &str = "all";

/// Either the `"all"` wildcard or one concrete option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: SelectOption> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Selector::All => WILDCARD,
            Selector::Only(option) => option.value(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        if value == WILDCARD {
            Some(Selector::All)
        } else {
            T::from_value(value).map(Selector::Only)
        }
    }
}

/// Current dashboard filter selections. Both fields are always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub team: Selector<Team>,
    pub status: Selector<AgentStatus>,
}

impl FilterState {
    pub fn matches(&self, agent: &AgentRecord) -> bool {
        self.team.matches(&agent.team) && self.status.matches(&agent.status)
    }

    /// Shallow merge: fields missing from the update keep their value.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(team) = update.team {
            self.team = team;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Partial change to a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub team: Option<Selector<Team>>,
    pub status: Option<Selector<AgentStatus>>,
}

impl FilterUpdate {
    pub fn team(team: Selector<Team>) -> Self {
        Self {
            team: Some(team),
            ..Default::default()
        }
    }

    pub fn status(status: Selector<AgentStatus>) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}
