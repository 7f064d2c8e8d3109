//! W102: Unreachable state, no path leads to the state from the initial state.

use fsmgen_diagnostics::{Category, DiagnosticCode, DiagnosticSink};
use fsmgen_ir::CanonicalFsm;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::helpers::{report, state_subject};
use crate::LintRule;

/// Detects declared states that cannot be reached from the initial state.
///
/// Transitions are treated as unconditional edges. Nothing is reported when the
/// initial state itself is undeclared (E101 covers that).
pub struct UnreachableState;

/// Builds the state graph over declared states; edges to undeclared targets are dropped.
fn state_graph(fsm: &CanonicalFsm) -> DiGraphMap<&str, ()> {
    let mut graph = DiGraphMap::new();
    for state in &fsm.states {
        graph.add_node(state.name.as_str());
    }
    for (source, transition) in fsm.transitions() {
        if graph.contains_node(transition.target.as_str()) {
            graph.add_edge(source.name.as_str(), transition.target.as_str(), ());
        }
    }
    graph
}

impl LintRule for UnreachableState {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 102)
    }

    fn name(&self) -> &str {
        "unreachable-state"
    }

    fn check(&self, fsm: &CanonicalFsm, sink: &DiagnosticSink) {
        let Some(initial) = fsm.initial_state.as_deref() else {
            return;
        };
        let graph = state_graph(fsm);
        if !graph.contains_node(initial) {
            return;
        }

        let mut reached = Vec::new();
        let mut dfs = Dfs::new(&graph, initial);
        while let Some(node) = dfs.next(&graph) {
            reached.push(node);
        }

        for state in &fsm.states {
            if reached.contains(&state.name.as_str()) {
                continue;
            }
            sink.emit(
                report(
                    self,
                    format!("state `{}` is unreachable", state.name),
                )
                .with_subject(state_subject(&state.name))
                .with_note(format!("no path leads here from `{initial}`")),
            );
        }
    }
}
