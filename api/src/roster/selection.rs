use std::collections::HashSet;

use sideline_db::object_id::TeamId;

/// Multi-select state for the team rail.
///
/// Every operation takes the *visible order*: the team ids as currently
/// filtered and sorted for display. A shift-click resolves its range against
/// that projection at click time, so re-sorting or re-filtering the rail
/// between clicks changes which teams a shift-click touches. That is
/// deliberate; the anchor is remembered as a team id, never as an index.
#[derive(Debug, Default)]
pub struct TeamSelection {
    selected: HashSet<TeamId>,
    anchor: Option<TeamId>,
}

impl TeamSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, team: &TeamId) -> bool {
        self.selected.contains(team)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected teams in the given visible order.
    pub fn selected_in_order(&self, visible: &[TeamId]) -> Vec<TeamId> {
        visible
            .iter()
            .filter(|team| self.selected.contains(team))
            .copied()
            .collect()
    }

    /// A plain click toggles the team at `index` and makes it the anchor for
    /// a later shift-click.
    pub fn click(&mut self, visible: &[TeamId], index: usize) {
        let Some(team) = visible.get(index) else {
            return;
        };

        if !self.selected.remove(team) {
            self.selected.insert(*team);
        }
        self.anchor = Some(*team);
    }

    /// Applies the anchor's current selected state to every team between the
    /// anchor and `index`, inclusive, in the visible order. With no anchor in
    /// view this degrades to a plain click.
    pub fn shift_click(&mut self, visible: &[TeamId], index: usize) {
        if index >= visible.len() {
            return;
        }

        let anchor_index = self
            .anchor
            .and_then(|anchor| visible.iter().position(|t| *t == anchor));
        let Some(anchor_index) = anchor_index else {
            self.click(visible, index);
            return;
        };

        let select = self
            .anchor
            .map(|anchor| self.selected.contains(&anchor))
            .unwrap_or(true);

        let (lo, hi) = if anchor_index <= index {
            (anchor_index, index)
        } else {
            (index, anchor_index)
        };

        for t in &visible[lo..=hi] {
            if select {
                self.selected.insert(*t);
            } else {
                self.selected.remove(t);
            }
        }
    }

    /// Clears everything. Called on season switch so no selected team ids
    /// leak across seasons.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(n: usize) -> Vec<TeamId> {
        (0..n).map(|_| TeamId::new()).collect()
    }

    #[test]
    fn click_toggles() {
        let visible = teams(3);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 1);
        assert!(sel.is_selected(&visible[1]));

        sel.click(&visible, 1);
        assert!(!sel.is_selected(&visible[1]));
        assert!(sel.is_empty());
    }

    #[test]
    fn shift_click_selects_inclusive_range() {
        let visible = teams(6);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 1);
        sel.shift_click(&visible, 4);

        assert_eq!(sel.selected_in_order(&visible), visible[1..=4].to_vec());
    }

    #[test]
    fn shift_click_works_backwards() {
        let visible = teams(6);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 4);
        sel.shift_click(&visible, 1);

        assert_eq!(sel.selected_in_order(&visible), visible[1..=4].to_vec());
    }

    #[test]
    fn shift_click_deselects_when_anchor_deselected() {
        let visible = teams(5);
        let mut sel = TeamSelection::new();

        // Select everything, then toggle index 1 off and shift-click to 3.
        sel.click(&visible, 0);
        sel.shift_click(&visible, 4);
        sel.click(&visible, 1);
        sel.shift_click(&visible, 3);

        assert_eq!(
            sel.selected_in_order(&visible),
            vec![visible[0], visible[4]]
        );
    }

    #[test]
    fn range_follows_the_visible_order_at_click_time() {
        let visible = teams(5);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 0);

        // Reverse the rail before the shift-click. The anchor is now at the
        // far end, so the same target index covers a different set.
        let reversed: Vec<TeamId> = visible.iter().rev().copied().collect();
        sel.shift_click(&reversed, 2);

        assert_eq!(sel.selected_in_order(&reversed), reversed[2..=4].to_vec());
    }

    #[test]
    fn shift_click_without_visible_anchor_degrades_to_click() {
        let visible = teams(4);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 0);
        // Filter the anchor out of view.
        let filtered = visible[1..].to_vec();
        sel.shift_click(&filtered, 2);

        assert!(sel.is_selected(&visible[0]));
        assert!(sel.is_selected(&filtered[2]));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn reset_clears_selection_and_anchor() {
        let visible = teams(3);
        let mut sel = TeamSelection::new();

        sel.click(&visible, 0);
        sel.shift_click(&visible, 2);
        sel.reset();

        assert!(sel.is_empty());

        // After a reset the next shift-click has no anchor to range from.
        sel.shift_click(&visible, 2);
        assert_eq!(sel.len(), 1);
    }
}
