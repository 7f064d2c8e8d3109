//! States and the transitions leaving them.

use std::borrow::Cow;

use fsmgen_common::NamePart;
use indexmap::IndexMap;
use serde::Serialize;

use crate::actions::Actions;

/// A guarded edge from the owning state to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// The name of the state entered when this transition fires.
    ///
    /// Not required to name a declared state; an undeclared target surfaces
    /// as an undeclared identifier in emitted text.
    #[serde(rename = "name")]
    pub target: String,
    /// The guard expression text.
    pub condition: String,
    /// Actions executed on the edge where this transition fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}

/// A named state with its ordered outgoing transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    /// The state name, unique within a canonical model.
    pub name: String,
    /// Outgoing transitions in priority order.
    pub next: Vec<Transition>,
    /// Actions executed on the edge that enters this state.
    #[serde(rename = "onEntry", skip_serializing_if = "Option::is_none")]
    pub on_entry: Option<Actions>,
    /// Actions executed on the edge that leaves this state.
    #[serde(rename = "onExit", skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<Actions>,
    /// Actions executed on every cycle spent idling in this state.
    #[serde(rename = "onSelf", skip_serializing_if = "Option::is_none")]
    pub on_self: Option<Actions>,
    /// Presentation attributes passed through to diagram output.
    #[serde(flatten)]
    pub attributes: IndexMap<String, String>,
}

impl State {
    /// Creates a state with no transitions, actions, or attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next: Vec::new(),
            on_entry: None,
            on_exit: None,
            on_self: None,
            attributes: IndexMap::new(),
        }
    }

    /// Returns `true` if any action set of this state or its transitions is non-empty.
    pub fn has_actions(&self) -> bool {
        [&self.on_entry, &self.on_exit, &self.on_self]
            .into_iter()
            .chain(self.next.iter().map(|t| &t.actions))
            .any(|actions| actions.as_ref().is_some_and(|a| !a.is_empty()))
    }
}

impl NamePart for State {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl NamePart for Transition {
    fn name_part(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.target)
    }
}
