//! # Refrigerator State
//!
//! The pure state record behind the session store: the known refrigerators,
//! the currently-selected refrigerator, and the currently-selected grocery.
//!
//! ## State Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  RefrigeratorState Operations                           │
//! │                                                                         │
//! │  Frontend Action           Store Operation           State Change       │
//! │  ───────────────           ───────────────           ────────────       │
//! │                                                                         │
//! │  Fetch fridges ──────────► set_refrigerators() ────► list replaced     │
//! │                                                                         │
//! │  Pick a fridge ──────────► set_selected_refrigerator(r)                 │
//! │                                │                                        │
//! │                                ├─ r.id known ──────► selection = r     │
//! │                                └─ r.id unknown ────► rejected (false)  │
//! │                                                                         │
//! │  Pick a grocery ─────────► set_selected_grocery() ─► selection = g     │
//! │                                                                         │
//! │  Log out / leave ────────► reset() ────────────────► all fields empty  │
//! │                                                                         │
//! │  View state ─────────────► getters ────────────────► (read only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This type is plain data: no locking, no persistence. The session layer
//! (`fridge-session`) wraps it in a shared handle and snapshots it to the
//! session cache after every mutation.

use serde::{Deserialize, Serialize};

use crate::types::{GroceryEntity, Refrigerator};

/// The refrigerator-domain state record.
///
/// ## Invariants
/// - `refrigerators` preserves insertion order; the store itself enforces no
///   uniqueness (callers supply consistent data).
/// - `selected_refrigerator`, when `Some`, matched an element of
///   `refrigerators` by id at the moment it was set. Replacing the list does
///   NOT re-validate the selection (see [`Self::set_refrigerators`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefrigeratorState {
    /// All refrigerators the current user is a member of.
    pub refrigerators: Vec<Refrigerator>,

    /// The refrigerator the user is currently working in, if any.
    pub selected_refrigerator: Option<Refrigerator>,

    /// The grocery item or search result currently in focus, if any.
    pub selected_grocery: Option<GroceryEntity>,
}

impl RefrigeratorState {
    /// Creates the initial empty state: no refrigerators, no selections.
    pub fn new() -> Self {
        RefrigeratorState::default()
    }

    // -------------------------------------------------------------------------
    // Getters (read only)
    // -------------------------------------------------------------------------

    /// Returns the currently-selected grocery, if any.
    pub fn selected_grocery(&self) -> Option<&GroceryEntity> {
        self.selected_grocery.as_ref()
    }

    /// Returns the currently-selected refrigerator, if any.
    pub fn selected_refrigerator(&self) -> Option<&Refrigerator> {
        self.selected_refrigerator.as_ref()
    }

    /// Returns the live list of refrigerators (not a copy).
    pub fn refrigerators(&self) -> &[Refrigerator] {
        &self.refrigerators
    }

    /// Looks up a refrigerator by id.
    ///
    /// Linear scan in insertion order; if the caller supplied duplicate ids,
    /// the first match wins.
    pub fn refrigerator_by_id(&self, id: i64) -> Option<&Refrigerator> {
        self.refrigerators.iter().find(|fridge| fridge.id == id)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Overwrites the selected grocery. No validation is performed.
    pub fn set_selected_grocery(&mut self, grocery: GroceryEntity) {
        self.selected_grocery = Some(grocery);
    }

    /// Selects a refrigerator, if its id is known.
    ///
    /// ## Behavior
    /// - If `refrigerators` contains an element with `refrigerator.id`:
    ///   stores the **caller-supplied value** (not the matched list element)
    ///   as the selection and returns `true`.
    /// - Otherwise: leaves all state unchanged and returns `false`.
    ///
    /// The id check guards against selecting a refrigerator the store does
    /// not know about (e.g., stale caller input). Note that it validates only
    /// the *existence of the id*: the stored value is whatever the caller
    /// passed, which may differ field-by-field from the list element.
    pub fn set_selected_refrigerator(&mut self, refrigerator: Refrigerator) -> bool {
        if self.refrigerator_by_id(refrigerator.id).is_some() {
            self.selected_refrigerator = Some(refrigerator);
            return true;
        }
        false
    }

    /// Replaces the entire refrigerator list.
    ///
    /// Selections are NOT reconciled: a `selected_refrigerator` or
    /// `selected_grocery` referencing an entity absent from the new list is
    /// kept as-is. Callers that need consistency re-select after replacing
    /// the list.
    pub fn set_refrigerators(&mut self, refrigerators: Vec<Refrigerator>) {
        self.refrigerators = refrigerators;
    }

    /// Clears all three fields back to the initial empty state.
    pub fn reset(&mut self) {
        self.refrigerators = Vec::new();
        self.selected_refrigerator = None;
        self.selected_grocery = None;
    }

    /// Checks whether the state is the initial empty state.
    pub fn is_empty(&self) -> bool {
        self.refrigerators.is_empty()
            && self.selected_refrigerator.is_none()
            && self.selected_grocery.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_fridge(id: i64, name: &str) -> Refrigerator {
        Refrigerator::new(id, name)
    }

    fn test_grocery(id: i64, name: &str) -> GroceryEntity {
        GroceryEntity {
            id,
            name: name.to_string(),
            description: None,
            physical_expire_date: Utc::now(),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = RefrigeratorState::new();
        assert!(state.refrigerators().is_empty());
        assert!(state.selected_refrigerator().is_none());
        assert!(state.selected_grocery().is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_refrigerator_by_id_finds_first_match() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![
            test_fridge(1, "A"),
            test_fridge(2, "B"),
            test_fridge(2, "B-duplicate"),
        ]);

        assert_eq!(state.refrigerator_by_id(2).unwrap().name, "B");
        assert!(state.refrigerator_by_id(99).is_none());
    }

    #[test]
    fn test_select_known_refrigerator_stores_caller_value() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A"), test_fridge(2, "B")]);

        // Same id as the list element, but different attributes: the caller's
        // value is what gets stored.
        let stale = Refrigerator {
            id: 1,
            name: "A (renamed)".to_string(),
            address: Some("Elsewhere".to_string()),
        };
        assert!(state.set_selected_refrigerator(stale.clone()));
        assert_eq!(state.selected_refrigerator(), Some(&stale));
    }

    #[test]
    fn test_select_unknown_refrigerator_is_rejected() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A"), test_fridge(2, "B")]);
        assert!(state.set_selected_refrigerator(test_fridge(1, "A")));

        // Rejection leaves the previous selection untouched.
        assert!(!state.set_selected_refrigerator(test_fridge(3, "C")));
        assert_eq!(state.selected_refrigerator().unwrap().id, 1);
    }

    #[test]
    fn test_select_on_empty_list_is_rejected() {
        let mut state = RefrigeratorState::new();
        assert!(!state.set_selected_refrigerator(test_fridge(1, "A")));
        assert!(state.selected_refrigerator().is_none());
    }

    #[test]
    fn test_set_selected_grocery_is_unconditional_and_idempotent() {
        let mut state = RefrigeratorState::new();
        let milk = test_grocery(10, "Milk");

        state.set_selected_grocery(milk.clone());
        let once = state.clone();
        state.set_selected_grocery(milk.clone());

        assert_eq!(state, once);
        assert_eq!(state.selected_grocery(), Some(&milk));
    }

    #[test]
    fn test_replacing_list_keeps_dangling_selection() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A")]);
        assert!(state.set_selected_refrigerator(test_fridge(1, "A")));

        // The selected id is gone from the new list; the selection survives.
        state.set_refrigerators(vec![test_fridge(2, "B")]);
        assert_eq!(state.selected_refrigerator().unwrap().id, 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A")]);
        assert!(state.set_selected_refrigerator(test_fridge(1, "A")));
        state.set_selected_grocery(test_grocery(10, "Milk"));

        state.reset();

        assert!(state.refrigerators().is_empty());
        assert!(state.selected_refrigerator().is_none());
        assert!(state.selected_grocery().is_none());
    }

    #[test]
    fn test_spec_scenario() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A"), test_fridge(2, "B")]);

        assert_eq!(state.refrigerator_by_id(2).unwrap().name, "B");

        assert!(!state.set_selected_refrigerator(test_fridge(3, "C")));
        assert!(state.selected_refrigerator().is_none());

        let pick = test_fridge(1, "A");
        assert!(state.set_selected_refrigerator(pick.clone()));
        assert_eq!(state.selected_refrigerator(), Some(&pick));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = RefrigeratorState::new();
        state.set_refrigerators(vec![test_fridge(1, "A")]);
        state.set_selected_grocery(test_grocery(10, "Milk"));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("selectedRefrigerator"));
        let back: RefrigeratorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
