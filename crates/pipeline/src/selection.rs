//! Selection state and the user actions that mutate it.
//!
//! `SelectionState` is owned by the caller (one per session) and passed
//! into the engine by reference. Every `SelectionAction` touches exactly one
//! field; no action resets another, and no action is ever rejected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The literal used by the dropdowns to mean "no constraint".
pub const ALL_SENTINEL: &str = "all";

// =============================================================================
// Tab
// =============================================================================

/// The three mutually exclusive listing tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Only cards whose status is `Active`
    #[default]
    Your,
    All,
    /// Reachable, but currently lists the same cards as `All`
    Blocked,
}

impl Tab {
    pub const ALL_TABS: [Tab; 3] = [Tab::Your, Tab::All, Tab::Blocked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Your => "your",
            Tab::All => "all",
            Tab::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}', expected one of: your, all, blocked")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "your" => Ok(Tab::Your),
            "all" => Ok(Tab::All),
            "blocked" => Ok(Tab::Blocked),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FilterValue
// =============================================================================

/// A dropdown selection: either the `all` sentinel or a concrete value.
///
/// Concrete values are not validated against the data. A value no card
/// carries just produces an empty listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    pub fn only(value: impl Into<String>) -> Self {
        FilterValue::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// The concrete value, or `None` for the sentinel.
    pub fn value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Only(value) => Some(value),
        }
    }

    /// True if `candidate` passes this filter.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(value) => value == candidate,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(raw: &str) -> Self {
        if raw == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Only(raw.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(raw: String) -> Self {
        if raw == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Only(raw)
        }
    }
}

impl From<FilterValue> for String {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::All => ALL_SENTINEL.to_string(),
            FilterValue::Only(value) => value,
        }
    }
}

impl FromStr for FilterValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterValue::from(s))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(ALL_SENTINEL))
    }
}

// =============================================================================
// Actions
// =============================================================================

/// One user interaction with the listing controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAction {
    SelectTab(Tab),
    /// Raw search box contents, stored without trimming
    Search(String),
    ChooseCardType(FilterValue),
    ChooseCardName(FilterValue),
    ToggleFilterPanel,
}

// =============================================================================
// SelectionState
// =============================================================================

/// Everything the user has chosen that shapes the visible listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub active_tab: Tab,
    pub search_query: String,
    pub card_type_filter: FilterValue,
    pub card_name_filter: FilterValue,
    /// Whether the filter dropdown panel is shown. Never affects the listing.
    pub is_filter_open: bool,
}

impl SelectionState {
    /// The initial state: `your` tab, empty search, both dropdowns on `all`,
    /// panel closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action, mutating exactly the field it targets.
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::SelectTab(tab) => self.active_tab = tab,
            SelectionAction::Search(text) => self.search_query = text,
            SelectionAction::ChooseCardType(value) => self.card_type_filter = value,
            SelectionAction::ChooseCardName(value) => self.card_name_filter = value,
            SelectionAction::ToggleFilterPanel => self.is_filter_open = !self.is_filter_open,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.apply(SelectionAction::SelectTab(tab));
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.apply(SelectionAction::Search(text.into()));
    }

    pub fn set_card_type_filter(&mut self, value: impl Into<FilterValue>) {
        self.apply(SelectionAction::ChooseCardType(value.into()));
    }

    pub fn set_card_name_filter(&mut self, value: impl Into<FilterValue>) {
        self.apply(SelectionAction::ChooseCardName(value.into()));
    }

    pub fn toggle_filter_panel(&mut self) {
        self.apply(SelectionAction::ToggleFilterPanel);
    }

    /// True if the search box or either dropdown narrows the listing.
    /// The tab is not counted.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || !self.card_type_filter.is_all()
            || !self.card_name_filter.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();

        assert_eq!(state.active_tab, Tab::Your);
        assert_eq!(state.search_query, "");
        assert!(state.card_type_filter.is_all());
        assert!(state.card_name_filter.is_all());
        assert!(!state.is_filter_open);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_each_action_touches_one_field() {
        let mut state = SelectionState::new();
        state.set_search("card");
        state.set_card_type_filter("burner");
        state.set_card_name_filter("Burner Card 1");

        let before = state.clone();
        state.select_tab(Tab::Blocked);
        assert_eq!(
            state,
            SelectionState {
                active_tab: Tab::Blocked,
                ..before.clone()
            }
        );

        let before = state.clone();
        state.set_card_type_filter("all");
        assert_eq!(
            state,
            SelectionState {
                card_type_filter: FilterValue::All,
                ..before
            }
        );
        assert_eq!(state.search_query, "card");
        assert_eq!(state.card_name_filter, FilterValue::only("Burner Card 1"));

        let before = state.clone();
        state.set_search("Subscription");
        assert_eq!(
            state,
            SelectionState {
                search_query: "Subscription".to_string(),
                ..before.clone()
            }
        );

        let before = state.clone();
        state.set_card_name_filter("Subscription Card 1");
        assert_eq!(
            state,
            SelectionState {
                card_name_filter: FilterValue::only("Subscription Card 1"),
                ..before.clone()
            }
        );

        let before = state.clone();
        state.toggle_filter_panel();
        assert_eq!(
            state,
            SelectionState {
                is_filter_open: true,
                ..before
            }
        );
        assert_eq!(state.active_tab, Tab::Blocked);
        assert_eq!(state.search_query, "Subscription");
        assert!(state.card_type_filter.is_all());
    }

    #[test]
    fn test_search_is_stored_raw() {
        let mut state = SelectionState::new();
        state.set_search("  Burner ");

        assert_eq!(state.search_query, "  Burner ");
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_toggle_filter_panel() {
        let mut state = SelectionState::new();

        state.toggle_filter_panel();
        assert!(state.is_filter_open);
        state.toggle_filter_panel();
        assert!(!state.is_filter_open);
    }

    #[test]
    fn test_filter_value_sentinel() {
        assert_eq!(FilterValue::from("all"), FilterValue::All);
        assert_eq!(FilterValue::from("All"), FilterValue::only("All"));
        assert_eq!(FilterValue::from(""), FilterValue::only(""));
        assert_eq!(FilterValue::All.to_string(), "all");
        assert_eq!(FilterValue::only("burner").to_string(), "burner");
    }

    #[test]
    fn test_filter_value_matches() {
        assert!(FilterValue::All.matches("anything"));
        assert!(FilterValue::only("burner").matches("burner"));
        assert!(!FilterValue::only("burner").matches("Burner"));
    }

    #[test]
    fn test_tab_parsing() {
        for tab in Tab::ALL_TABS {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!(
            "Your".parse::<Tab>().unwrap_err(),
            UnknownTab("Your".to_string())
        );
    }

    #[test]
    fn test_state_serializes_with_sentinel() {
        let mut state = SelectionState::new();
        state.set_card_name_filter("Burner Card 2");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["active_tab"], "your");
        assert_eq!(json["card_type_filter"], "all");
        assert_eq!(json["card_name_filter"], "Burner Card 2");
    }
}
