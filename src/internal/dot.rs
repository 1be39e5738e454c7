//! Conversion of an automaton to the graphviz dot format.

use std::io::Write;

use dot_writer::{Attributes, Color, DotWriter, RankDirection, Shape};

use crate::Automaton;

/// Render the automaton to a graphviz dot format.
///
/// Nodes are numbered in state order. The initial state is drawn blue, final states are red
/// circles. Every `from --symbol--> to` gets an edge of its own.
pub(crate) fn automaton_render<W: Write>(automaton: &Automaton, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    let node_ids = automaton
        .states()
        .enumerate()
        .map(|(index, state)| (state, format!("node_{}", index)))
        .collect::<std::collections::BTreeMap<_, _>>();
    for state in automaton.states() {
        let mut node = digraph.node_auto();
        node.set_label(&state.escape_default().to_string());
        if state == automaton.initial_state() {
            node.set_color(Color::Blue).set_pen_width(3.0);
        }
        if automaton.is_final(state) {
            node.set_shape(Shape::Circle)
                .set_color(Color::Red)
                .set_pen_width(3.0);
        }
    }
    for edge in automaton.edges() {
        let (Some(from), Some(to)) = (
            node_ids.get(edge.from.as_str()),
            node_ids.get(edge.to.as_str()),
        ) else {
            continue;
        };
        digraph
            .edge(from, to)
            .attributes()
            .set_label(&edge.symbol.escape_default().to_string());
    }
}
