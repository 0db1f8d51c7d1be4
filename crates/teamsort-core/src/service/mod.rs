//! Assignment service: the boundary a collaborator (CLI, chat transport)
//! talks to.
//!
//! The check-then-act flow `lookup -> allocate -> record` is closed against
//! races by the store's conditional insert. When the insert reports that
//! another request got there first, the stored team is returned instead of
//! the one computed locally.


use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use teamsort_config::TeamsortConfig;
use tracing::{debug, info, warn};

use crate::allocator::{RandomTieBreak, TieBreak, allocate};
use crate::errors::TeamsortError;
use crate::store::{
    AssignmentRecord, AssignmentStore, RecordOutcome, StoreError, UserId, UserProfile, open_store,
};
use crate::teams::{RosterError, Team, TeamIndex, TeamRoster};

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("Assignment store unavailable: {source}")]
    StoreUnavailable {
        #[from]
        source: StoreError,
    },

    #[error("User {user_id} is not an operator")]
    Unauthorized { user_id: UserId },
}

impl TeamsortError for AssignmentError {
    fn error_code(&self) -> &'static str {
        match self {
            AssignmentError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            AssignmentError::Unauthorized { .. } => "UNAUTHORIZED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, AssignmentError::Unauthorized { .. })
    }
}

/// Failures while building a service from configuration.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TeamsortError for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            StartupError::Roster(_) => "EMPTY_ROSTER",
            StartupError::Store(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, StartupError::Roster(_))
    }
}

/// A user's team as handed back to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub user_id: UserId,
    pub team_index: TeamIndex,
    pub team: Team,
    /// `true` only for the call that created the assignment.
    pub newly_assigned: bool,
}

impl Placement {
    pub fn caption(&self) -> String {
        self.team.caption()
    }
}

pub struct TeamService {
    roster: TeamRoster,
    store: Arc<dyn AssignmentStore>,
    tie_break: Box<dyn TieBreak>,
    operators: HashSet<UserId>,
}

impl TeamService {
    /// Service over `store` with random tie-breaking and no operators.
    pub fn new(roster: TeamRoster, store: Arc<dyn AssignmentStore>) -> Self {
        Self {
            roster,
            store,
            tie_break: Box::new(RandomTieBreak),
            operators: HashSet::new(),
        }
    }

    /// Build the roster, operator set and store described by `config`.
    ///
    /// `default_db_path` is used by the redb backend when no path is configured.
    pub fn from_config(
        config: &TeamsortConfig,
        default_db_path: &Path,
    ) -> Result<Self, StartupError> {
        let roster = TeamRoster::from_config(config.teams())?;
        let store = open_store(&config.store, default_db_path)?;
        Ok(Self::new(roster, store)
            .with_operators(config.operators.ids().iter().copied().map(UserId::new)))
    }

    pub fn with_tie_break(mut self, tie_break: impl TieBreak + 'static) -> Self {
        self.tie_break = Box::new(tie_break);
        self
    }

    pub fn with_operators(mut self, operators: impl IntoIterator<Item = UserId>) -> Self {
        self.operators = operators.into_iter().collect();
        self
    }

    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    /// Current assignment of `user_id`, if any. No side effects.
    pub fn lookup(&self, user_id: UserId) -> Result<Option<Placement>, AssignmentError> {
        let placement = match self.store.lookup(user_id)? {
            Some(index) => Some(self.placement(user_id, index, false)?),
            None => None,
        };
        debug!(
            event = "core.assignment.lookup_completed",
            user_id = %user_id,
            assigned = placement.is_some()
        );
        Ok(placement)
    }

    /// Full stored record of `user_id`, including display metadata.
    pub fn assignment(&self, user_id: UserId) -> Result<Option<AssignmentRecord>, AssignmentError> {
        Ok(self.store.get(user_id)?)
    }

    /// Return the user's team, assigning one first if needed.
    ///
    /// Calling this repeatedly for the same user always yields the same team.
    /// Concurrent first calls for one user agree on a single team.
    pub fn allocate_and_record(
        &self,
        user_id: UserId,
        profile: UserProfile,
    ) -> Result<Placement, AssignmentError> {
        if let Some(existing) = self.store.lookup(user_id)? {
            debug!(
                event = "core.assignment.already_assigned",
                user_id = %user_id,
                team_index = %existing
            );
            return self.placement(user_id, existing, false);
        }

        info!(event = "core.assignment.allocate_started", user_id = %user_id);

        let counts = self.store.counts(self.roster.len())?;
        let chosen = allocate(&counts, self.tie_break.as_ref());
        let record = AssignmentRecord::new(user_id, chosen, profile);

        match self.store.record(record)? {
            RecordOutcome::Inserted => {
                info!(
                    event = "core.assignment.recorded",
                    user_id = %user_id,
                    team_index = %chosen,
                    backend = %self.store.backend()
                );
                self.placement(user_id, chosen, true)
            }
            RecordOutcome::AlreadyPresent(stored) => {
                warn!(
                    event = "core.assignment.race_lost",
                    user_id = %user_id,
                    computed = %chosen,
                    stored = %stored,
                    "Concurrent request assigned this user first"
                );
                self.placement(user_id, stored, false)
            }
        }
    }

    /// Members per team, one entry per roster position.
    pub fn team_counts(&self) -> Result<Vec<usize>, AssignmentError> {
        Ok(self.store.counts(self.roster.len())?)
    }

    /// Clear every assignment. Returns how many were removed.
    ///
    /// Performs no authorization; call [`TeamService::authorize_operator`] first.
    pub fn reset_all(&self) -> Result<usize, AssignmentError> {
        let removed = self.store.reset()?;
        info!(
            event = "core.assignment.reset_completed",
            removed = removed,
            backend = %self.store.backend()
        );
        Ok(removed)
    }

    /// `Ok` when `user_id` is a configured operator.
    pub fn authorize_operator(&self, user_id: UserId) -> Result<(), AssignmentError> {
        if self.operators.contains(&user_id) {
            Ok(())
        } else {
            warn!(event = "core.assignment.unauthorized", user_id = %user_id);
            Err(AssignmentError::Unauthorized { user_id })
        }
    }

    fn placement(
        &self,
        user_id: UserId,
        team_index: TeamIndex,
        newly_assigned: bool,
    ) -> Result<Placement, AssignmentError> {
        let team = self.roster.get(team_index).cloned().ok_or_else(|| {
            AssignmentError::from(StoreError::UnknownTeam {
                user_id,
                team_index,
                team_count: self.roster.len(),
            })
        })?;
        Ok(Placement {
            user_id,
            team_index,
            team,
            newly_assigned,
        })
    }
}
