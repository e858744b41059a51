//! Captures and matches produced by the Tree-sitter Query Engine (§3).
//!
//! Both borrow from the parsed tree (`'tree`), so "no tree survives the
//! pass unless the caller explicitly retains it" (§3) is enforced by the
//! borrow checker: a `Match<'tree>` simply cannot outlive the
//! `tree_sitter::Tree` it was produced from.

use tree_sitter::Node as TsNode;

/// A named node bound by a query pattern (`@name` in the query source).
#[derive(Debug, Clone)]
pub struct Capture<'tree> {
    pub name: String,
    pub node: TsNode<'tree>,
}

/// One pattern firing, carrying every capture bound by that pattern.
#[derive(Debug, Clone)]
pub struct Match<'tree> {
    pub query_name: String,
    pub captures: Vec<Capture<'tree>>,
    /// Index into the query's pattern list; used to stabilize ordering
    /// alongside capture order, per §4.1 step 3.
    pub pattern_index: usize,
}

impl<'tree> Match<'tree> {
    /// First capture with this name, if any.
    pub fn capture(&self, name: &str) -> Option<&Capture<'tree>> {
        self.captures.iter().find(|c| c.name == name)
    }

    /// All captures with this name, in match order.
    pub fn captures_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Capture<'tree>> {
        self.captures.iter().filter(move |c| c.name == name)
    }

    /// The earliest start byte among this match's captures, used to sort
    /// matches into source-text order (§4.1 step 3).
    pub fn start_byte(&self) -> usize {
        self.captures
            .iter()
            .map(|c| c.node.start_byte())
            .min()
            .unwrap_or(0)
    }
}
