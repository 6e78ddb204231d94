//! Index-based argument graph.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::fmt::Write as _;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use rebut_core::{sentence_set, AttackKind, Sentence};
use rebut_engine::Derivation;

/// The kind of a collapsed edge between two supports.
///
/// `Both` marks an ordered pair of supports connected by a normal and a
/// reverse attack at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Only normal attacks between the pair.
    Normal,
    /// Only reverse attacks between the pair.
    Reverse,
    /// Both attack kinds between the same ordered pair.
    Both,
}

impl EdgeKind {
    fn merge(self, attack: AttackKind) -> EdgeKind {
        match (self, attack) {
            (EdgeKind::Normal, AttackKind::Normal) => EdgeKind::Normal,
            (EdgeKind::Reverse, AttackKind::Reverse) => EdgeKind::Reverse,
            _ => EdgeKind::Both,
        }
    }
}

impl From<AttackKind> for EdgeKind {
    fn from(kind: AttackKind) -> Self {
        match kind {
            AttackKind::Normal => EdgeKind::Normal,
            AttackKind::Reverse => EdgeKind::Reverse,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EdgeKind::Normal => "normal",
            EdgeKind::Reverse => "reverse",
            EdgeKind::Both => "both",
        };
        write!(f, "{label}")
    }
}

/// The abstract argumentation graph induced by a [`Derivation`].
///
/// Node indices are stable for the lifetime of the graph and match the
/// indices in the rendered solver facts.
#[derive(Clone, Debug)]
pub struct ArgumentGraph {
    nodes: Vec<BTreeSet<Sentence>>,
    index: HashMap<BTreeSet<Sentence>, usize>,
    edges: BTreeMap<(usize, usize), EdgeKind>,
}

impl ArgumentGraph {
    /// Collapse a derivation into the index-based graph.
    pub fn build(derivation: &Derivation) -> Self {
        let mut nodes = Vec::new();
        let mut index = HashMap::new();
        for deduction in &derivation.deductions {
            if !index.contains_key(&deduction.premise) {
                index.insert(deduction.premise.clone(), nodes.len());
                nodes.push(deduction.premise.clone());
            }
        }

        let mut edges: BTreeMap<(usize, usize), EdgeKind> = BTreeMap::new();
        for attack in &derivation.attacks {
            let src = index[&attack.attacker.premise];
            let dst = index[&attack.attackee.premise];
            edges
                .entry((src, dst))
                .and_modify(|kind| *kind = kind.merge(attack.kind))
                .or_insert_with(|| attack.kind.into());
        }

        ArgumentGraph {
            nodes,
            index,
            edges,
        }
    }

    /// The distinct supports, in index order.
    pub fn nodes(&self) -> &[BTreeSet<Sentence>] {
        &self.nodes
    }

    /// The index of a support, if present.
    pub fn node_index(&self, premise: &BTreeSet<Sentence>) -> Option<usize> {
        self.index.get(premise).copied()
    }

    /// The collapsed edges as `(src, dst, kind)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, EdgeKind)> + '_ {
        self.edges
            .iter()
            .map(|(&(src, dst), &kind)| (src, dst, kind))
    }

    /// Render the solver input: one `arg(i).` fact per node and one
    /// `att(i, j).` fact per directed pair, direction preserved.
    pub fn asp_facts(&self) -> String {
        let mut out = String::new();
        for idx in 0..self.nodes.len() {
            let _ = writeln!(out, "arg({idx}).");
        }
        for &(src, dst) in self.edges.keys() {
            let _ = writeln!(out, "att({src}, {dst}).");
        }
        out
    }

    /// Union of the supports named by `indices`; unknown indices are
    /// ignored.
    pub fn premises(&self, indices: &BTreeSet<usize>) -> BTreeSet<Sentence> {
        indices
            .iter()
            .filter_map(|&idx| self.nodes.get(idx))
            .flatten()
            .cloned()
            .collect()
    }

    /// The graph as a petgraph [`DiGraph`], nodes labelled with their
    /// support sets.
    pub fn to_petgraph(&self) -> DiGraph<String, EdgeKind> {
        let mut graph = DiGraph::new();
        let handles: Vec<NodeIndex> = self
            .nodes
            .iter()
            .map(|premise| graph.add_node(sentence_set(premise)))
            .collect();
        for (&(src, dst), &kind) in &self.edges {
            graph.add_edge(handles[src], handles[dst], kind);
        }
        graph
    }

    /// Graphviz DOT rendering of the graph.
    pub fn dot(&self) -> String {
        format!("{}", Dot::new(&self.to_petgraph()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rebut_core::{Framework, Preference, Rule};
    use rebut_engine::derive_for_contraries;

    fn asm(sym: &str) -> Sentence {
        Sentence::asm(sym)
    }

    fn support(sentences: &[Sentence]) -> BTreeSet<Sentence> {
        sentences.iter().cloned().collect()
    }

    fn three_way_framework() -> Framework {
        let (a, b, c) = (asm("a"), asm("b"), asm("c"));
        Framework::new(
            [a.clone(), b.clone(), c.clone()].into(),
            [
                Preference::less_than(a.clone(), b.clone()),
                Preference::less_than(c.clone(), b.clone()),
            ]
            .into(),
            [
                Rule::new([a.clone(), c.clone()], b.contrary()),
                Rule::new([b.clone(), c.clone()], a.contrary()),
                Rule::new([a, b], c.contrary()),
            ]
            .into(),
        )
        .unwrap()
    }

    #[test]
    fn test_one_node_per_distinct_support() {
        let fw = three_way_framework();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));

        assert_eq!(graph.nodes().len(), 6);
        assert!(graph.node_index(&support(&[asm("a")])).is_some());
        assert!(graph
            .node_index(&support(&[asm("b"), asm("c")]))
            .is_some());
        assert!(graph.node_index(&support(&[asm("x")])).is_none());
    }

    #[test]
    fn test_both_kind_edge() {
        let fw = three_way_framework();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));

        let contra_a = graph.node_index(&support(&[asm("b"), asm("c")])).unwrap();
        let contra_b = graph.node_index(&support(&[asm("a"), asm("c")])).unwrap();
        let kinds: BTreeMap<(usize, usize), EdgeKind> =
            graph.edges().map(|(s, d, k)| ((s, d), k)).collect();
        // {b,c} carries a normal attack and a reverse attack onto {a,c}.
        assert_eq!(kinds[&(contra_a, contra_b)], EdgeKind::Both);
    }

    #[test]
    fn test_asp_facts_shape() {
        let (a, b) = (asm("a"), asm("b"));
        let fw = Framework::new(
            [a.clone(), b.clone()].into(),
            BTreeSet::new(),
            [Rule::new([a.clone()], b.contrary())].into(),
        )
        .unwrap();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));

        let facts = graph.asp_facts();
        for idx in 0..graph.nodes().len() {
            assert!(facts.contains(&format!("arg({idx}).")));
        }
        let src = graph.node_index(&support(&[a.clone()])).unwrap();
        let dst = graph.node_index(&support(&[b])).unwrap();
        assert!(facts.contains(&format!("att({src}, {dst}).")));
    }

    #[test]
    fn test_premises_translation() {
        let fw = three_way_framework();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));

        let idx_a = graph.node_index(&support(&[asm("a")])).unwrap();
        let idx_bc = graph.node_index(&support(&[asm("b"), asm("c")])).unwrap();
        let premises = graph.premises(&BTreeSet::from([idx_a, idx_bc]));
        assert_eq!(premises, support(&[asm("a"), asm("b"), asm("c")]));
    }

    #[test]
    fn test_dot_rendering_mentions_supports() {
        let fw = three_way_framework();
        let graph = ArgumentGraph::build(&derive_for_contraries(&fw));
        let dot = graph.dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("{a, c}"));
    }
}
