use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sideline_db::object_id::{SubmissionId, TeamId};
use sideline_db::AssignmentStatus;

/// The four numbers shown on a team card. Only `assigned` is produced by the
/// current flows; the other statuses exist in the data model but nothing
/// writes them yet, so those counts read zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCounts {
    pub assigned: usize,
    pub invited: usize,
    pub accepted: usize,
    pub declined: usize,
}

impl RosterCounts {
    pub fn from_statuses(statuses: &[AssignmentStatus]) -> RosterCounts {
        let mut counts = RosterCounts::default();
        for status in statuses {
            match status {
                AssignmentStatus::Assigned => counts.assigned += 1,
                AssignmentStatus::Invited => counts.invited += 1,
                AssignmentStatus::Accepted => counts.accepted += 1,
                AssignmentStatus::Declined => counts.declined += 1,
            }
        }
        counts
    }
}

/// Local card state for the assignment surface: one entry per selected team,
/// holding the submission ids shown as assigned.
///
/// Mutations here are optimistic. `apply_drop` and `remove` report exactly
/// what changed so the caller can revert that same delta if the server write
/// fails; the revert always happens on failure, never selectively.
#[derive(Debug, Default)]
pub struct RosterBoard {
    cards: HashMap<TeamId, Vec<SubmissionId>>,
}

impl RosterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole board, e.g. after a season switch. Nothing carries
    /// over; each card starts from the authoritative roster passed in.
    pub fn reset(&mut self, cards: impl IntoIterator<Item = (TeamId, Vec<SubmissionId>)>) {
        self.cards = cards.into_iter().collect();
    }

    pub fn card(&self, team: &TeamId) -> Option<&[SubmissionId]> {
        self.cards.get(team).map(|c| c.as_slice())
    }

    pub fn counts(&self, team: &TeamId) -> RosterCounts {
        RosterCounts {
            assigned: self.cards.get(team).map(|c| c.len()).unwrap_or(0),
            ..RosterCounts::default()
        }
    }

    /// Union the dropped batch into the team's card, skipping ids already
    /// present. Returns the ids actually added; an empty result means there
    /// is nothing to persist. Drops on a team without a rendered card are
    /// ignored.
    pub fn apply_drop(&mut self, team: TeamId, submissions: &[SubmissionId]) -> Vec<SubmissionId> {
        let Some(card) = self.cards.get_mut(&team) else {
            return Vec::new();
        };

        let mut added = Vec::new();
        for submission in submissions {
            if !card.contains(submission) {
                card.push(*submission);
                added.push(*submission);
            }
        }
        added
    }

    /// Roll back a failed drop: remove exactly the ids `apply_drop` reported
    /// as added.
    pub fn revert_drop(&mut self, team: TeamId, added: &[SubmissionId]) {
        if let Some(card) = self.cards.get_mut(&team) {
            card.retain(|s| !added.contains(s));
        }
    }

    /// Remove one athlete from a card. Returns whether it was present, so the
    /// caller knows whether a failed delete needs a `restore`.
    pub fn remove(&mut self, team: TeamId, submission: SubmissionId) -> bool {
        match self.cards.get_mut(&team) {
            Some(card) => {
                let before = card.len();
                card.retain(|s| *s != submission);
                card.len() != before
            }
            None => false,
        }
    }

    /// Roll back a failed removal.
    pub fn restore(&mut self, team: TeamId, submission: SubmissionId) {
        if let Some(card) = self.cards.get_mut(&team) {
            if !card.contains(&submission) {
                card.push(submission);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<SubmissionId> {
        (0..n).map(|_| SubmissionId::new()).collect()
    }

    #[test]
    fn drop_is_an_idempotent_union() {
        let team = TeamId::new();
        let subs = ids(3);
        let mut board = RosterBoard::new();
        board.reset([(team, vec![subs[0]])]);

        let added = board.apply_drop(team, &subs);
        assert_eq!(added, subs[1..].to_vec(), "only new ids are added");
        assert_eq!(board.counts(&team).assigned, 3);

        let added = board.apply_drop(team, &subs);
        assert!(added.is_empty(), "repeating the drop adds nothing");
        assert_eq!(board.counts(&team).assigned, 3);
    }

    #[test]
    fn failed_drop_reverts_only_what_was_added() {
        let team = TeamId::new();
        let subs = ids(3);
        let mut board = RosterBoard::new();
        board.reset([(team, vec![subs[0]])]);

        let added = board.apply_drop(team, &subs);
        board.revert_drop(team, &added);

        assert_eq!(board.card(&team).unwrap(), &[subs[0]]);
    }

    #[test]
    fn remove_and_restore() {
        let team = TeamId::new();
        let subs = ids(2);
        let mut board = RosterBoard::new();
        board.reset([(team, subs.clone())]);

        assert!(board.remove(team, subs[0]));
        assert_eq!(board.counts(&team).assigned, 1);
        assert!(!board.remove(team, subs[0]), "already gone");

        board.restore(team, subs[0]);
        assert_eq!(board.counts(&team).assigned, 2);
    }

    #[test]
    fn drop_on_unrendered_card_is_ignored() {
        let mut board = RosterBoard::new();
        let added = board.apply_drop(TeamId::new(), &ids(2));
        assert!(added.is_empty());
    }

    #[test]
    fn season_switch_resets_every_card() {
        let old_team = TeamId::new();
        let new_team = TeamId::new();
        let mut board = RosterBoard::new();
        board.reset([(old_team, ids(3))]);

        board.reset([(new_team, Vec::new())]);

        assert!(board.card(&old_team).is_none(), "no cross-season leakage");
        assert_eq!(board.counts(&old_team).assigned, 0);
        assert_eq!(board.counts(&new_team).assigned, 0);
    }

    #[test]
    fn placeholder_counts_read_zero() {
        let team = TeamId::new();
        let mut board = RosterBoard::new();
        board.reset([(team, ids(2))]);

        let counts = board.counts(&team);
        assert_eq!(counts.invited, 0);
        assert_eq!(counts.accepted, 0);
        assert_eq!(counts.declined, 0);
    }

    #[test]
    fn counts_from_statuses() {
        let statuses = vec![
            AssignmentStatus::Assigned,
            AssignmentStatus::Assigned,
            AssignmentStatus::Invited,
        ];
        let counts = RosterCounts::from_statuses(&statuses);
        assert_eq!(counts.assigned, 2);
        assert_eq!(counts.invited, 1);
        assert_eq!(counts.accepted, 0);
    }
}
