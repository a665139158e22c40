use crate::{decoder::Bundle, Descriptor, Route};

/// The mutable builder trie routes are inserted into.
///
/// Sibling edges are kept in insertion order and deduplicated by descriptor
/// equality, so the edge list both shares structure between routes with a
/// common prefix and records the precedence order the matcher scans in.
pub(crate) struct TrieNode<Res> {
    route: Option<Route<Res>>,
    edges: Vec<(Descriptor, TrieNode<Res>)>,
}

impl<Res> TrieNode<Res> {
    pub(crate) fn new() -> Self {
        Self {
            route: None,
            edges: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, route: Route<Res>) {
        let descriptors = route.descriptors().to_vec();
        let mut node = self;
        for descriptor in descriptors {
            let index = match node
                .edges
                .iter()
                .position(|(existing, _)| *existing == descriptor)
            {
                Some(index) => index,
                None => {
                    node.edges.push((descriptor, TrieNode::new()));
                    node.edges.len() - 1
                }
            };
            node = &mut node.edges[index].1;
        }
        if let Some(previous) = node.route.replace(route) {
            log::warn!("replacing existing handler for {previous}");
        }
    }

    pub(crate) fn compile(self) -> CompiledNode<Res> {
        CompiledNode {
            route: self.route,
            edges: self
                .edges
                .into_iter()
                .map(|(descriptor, child)| (descriptor, child.compile()))
                .collect(),
        }
    }
}

/// The frozen trie the router matches against. Edge lists are contiguous
/// arrays scanned left to right; nothing is mutated after compilation.
pub(crate) struct CompiledNode<Res> {
    route: Option<Route<Res>>,
    edges: Box<[(Descriptor, CompiledNode<Res>)]>,
}

impl<Res> CompiledNode<Res> {
    /// Walk the trie over a token stream, committing to the first accepting
    /// edge at every node.
    ///
    /// Commitment is final: when a committed subtree dead-ends, the walk
    /// reports no match for the whole URI rather than backtracking to a
    /// later sibling. This keeps matching linear in the length of the URI
    /// and makes precedence predictable from declaration order alone.
    pub(crate) fn find(&self, tokens: &[&str]) -> Option<(&Route<Res>, Bundle)> {
        let mut node = self;
        let mut remaining = tokens;
        let mut bundle = Bundle::new();
        loop {
            let Some((&token, rest)) = remaining.split_first() else {
                return node.route.as_ref().map(|route| (route, bundle));
            };
            let mut committed = None;
            for (descriptor, child) in &*node.edges {
                match descriptor {
                    Descriptor::Literal(text) => {
                        if &**text == token {
                            committed = Some((child, rest));
                            break;
                        }
                    }
                    Descriptor::Variable(decoder) => {
                        if let Some(value) = decoder.decode(token) {
                            bundle.push(value);
                            committed = Some((child, rest));
                            break;
                        }
                    }
                    Descriptor::TrailingSlash => {
                        if token.is_empty() {
                            committed = Some((child, rest));
                            break;
                        }
                    }
                    Descriptor::FullSplat => {
                        committed = Some((child, &[] as &[&str]));
                        break;
                    }
                }
            }
            let (child, rest) = committed?;
            node = child;
            remaining = rest;
        }
    }

    pub(crate) fn routes(&self) -> Vec<&Route<Res>> {
        let mut routes = Vec::new();
        self.collect(&mut routes);
        routes
    }

    fn collect<'a>(&'a self, into: &mut Vec<&'a Route<Res>>) {
        if let Some(route) = &self.route {
            into.push(route);
        }
        for (_, child) in &*self.edges {
            child.collect(into);
        }
    }
}
