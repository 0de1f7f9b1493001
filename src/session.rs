//! The single long-lived, mutable state behind an interactive front end.
//!
//! A [`Session`] owns the graph, the selected theorem and the user's picks. Every
//! mutation drops the cached verdict and bumps an epoch counter; a [`Playback`]
//! remembers the epoch it was created in and goes quiet once it moved on.

use crate::{
    graph::{self, random_graph, Edge, Graph, RandomMode},
    query::is_tree,
    theorem::{self, Selection, Step, TheoremId, Verdict},
    types::{VId, MAX_VERTICES},
};
use log::{debug, warn};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug)]
pub struct Session {
    graph: Graph,
    theorem: TheoremId,
    selection: Selection,
    // first half of a vertex pair being clicked
    pending: Option<VId>,
    verdict: Option<Verdict>,
    epoch: u64,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A session whose random graphs are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            graph: Graph::new(),
            theorem: TheoremId::OddDegree,
            selection: Selection::new(),
            pending: None,
            verdict: None,
            epoch: 0,
            rng,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn theorem(&self) -> TheoremId {
        self.theorem
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The verdict computed since the last mutation, if any.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Replaces the graph with `num_vertices` isolated vertices.
    ///
    /// A count above `MAX_VERTICES` resets to the empty graph and returns `false`.
    pub fn set_vertex_count(&mut self, num_vertices: usize) -> bool {
        let accepted = match self.graph.set_vertex_count(num_vertices) {
            Ok(()) => true,
            Err(err) => {
                warn!("{}, resetting to an empty graph", err);
                self.graph.clear();
                false
            }
        };
        self.selection = Selection::new();
        self.pending = None;
        self.invalidate();
        accepted
    }

    /// Like [`set_vertex_count`](#method.set_vertex_count) for raw user input;
    /// text that is not a count in `0..=MAX_VERTICES` resets to the empty graph.
    pub fn set_vertex_count_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<usize>() {
            Ok(num_vertices) => self.set_vertex_count(num_vertices),
            Err(_) => {
                warn!("invalid vertex count `{}`, resetting to an empty graph", input);
                self.set_vertex_count(0);
                false
            }
        }
    }

    pub fn add_edge(&mut self, u: VId, v: VId) -> graph::Result<bool> {
        let added = self.graph.add_edge(u, v)?;
        self.invalidate();
        Ok(added)
    }

    pub fn remove_edge(&mut self, u: VId, v: VId) -> graph::Result<bool> {
        let removed = self.graph.remove_edge(u, v)?;
        self.invalidate();
        Ok(removed)
    }

    /// Mirrors an adjacency checkbox: `checked` adds the edge, unchecked removes it.
    pub fn toggle_edge(&mut self, u: VId, v: VId, checked: bool) -> graph::Result<bool> {
        if checked {
            self.add_edge(u, v)
        } else {
            self.remove_edge(u, v)
        }
    }

    pub fn add_vertex(&mut self) -> graph::Result<VId> {
        let vid = self.graph.add_vertex()?;
        self.invalidate();
        Ok(vid)
    }

    /// Removes `vid`; vertex ids above it shift down, so picks are dropped.
    pub fn remove_vertex(&mut self, vid: VId) -> graph::Result<()> {
        self.graph.remove_vertex(vid)?;
        self.selection = Selection::new();
        self.pending = None;
        self.invalidate();
        Ok(())
    }

    pub fn set_label(&mut self, vid: VId, label: &str) -> graph::Result<()> {
        self.graph.set_label(vid, label)?;
        self.invalidate();
        Ok(())
    }

    /// Makes `theorem` the active one and prepares a graph it can talk about.
    ///
    /// Ramsey's theorem forces six vertices; the tree theorems replace a non-tree
    /// with a random tree of the same size.
    pub fn select_theorem(&mut self, theorem: TheoremId) {
        debug!("select theorem {}", theorem);
        self.theorem = theorem;
        self.selection = Selection::new();
        self.pending = None;
        self.invalidate();
        if let Some(required) = theorem.required_vertex_count() {
            if self.graph.num_vertices() != required {
                self.set_vertex_count(required);
            }
        }
        if theorem.is_tree_family() && !is_tree(&self.graph) {
            self.generate_random(Some(RandomMode::Tree));
        }
    }

    /// Records a vertex click and returns the pair once two distinct vertices were
    /// clicked. Clicking again after a complete pair starts a new one.
    pub fn select_vertex(&mut self, vid: VId) -> Option<(VId, VId)> {
        if !self.graph.contains_vertex(vid) {
            return None;
        }
        match self.pending {
            None => {
                self.pending = Some(vid);
                if self.selection.selected_vertices().is_some() {
                    self.selection.clear_vertices();
                    self.invalidate();
                }
                None
            }
            Some(first) if first == vid => None,
            Some(first) => {
                self.pending = None;
                self.selection = self.selection.vertices(first, vid);
                self.invalidate();
                Some((first, vid))
            }
        }
    }

    pub fn select_edge(&mut self, edge: Edge) {
        self.selection = self.selection.edge(edge);
        self.invalidate();
    }

    /// Replaces the graph with a random one of the current size.
    ///
    /// Without a mode, the tree theorems get a random tree and all others an
    /// unconstrained graph. Nothing happens on the empty graph.
    pub fn generate_random(&mut self, mode: Option<RandomMode>) {
        let num_vertices = self.graph.num_vertices();
        if num_vertices == 0 || num_vertices > MAX_VERTICES {
            debug!("no random graph on {} vertices", num_vertices);
            return;
        }
        let mode = mode.unwrap_or(if self.theorem.is_tree_family() {
            RandomMode::Tree
        } else {
            RandomMode::Unconstrained
        });
        match random_graph(&mut self.rng, num_vertices, mode) {
            Ok(graph) => self.graph = graph,
            Err(err) => warn!("random graph failed: {}", err),
        }
        self.selection = Selection::new();
        self.pending = None;
        self.invalidate();
    }

    /// Evaluates the active theorem, reusing the verdict until the next mutation.
    pub fn evaluate(&mut self) -> &Verdict {
        let (theorem, graph, selection) = (self.theorem, &self.graph, &self.selection);
        self.verdict
            .get_or_insert_with(|| theorem::evaluate_with(theorem, graph, selection))
    }

    /// A cursor over the steps of the current verdict.
    pub fn playback(&mut self) -> Playback {
        let steps = self.evaluate().steps().to_vec();
        Playback {
            epoch: self.epoch,
            steps,
            next: 0,
        }
    }
}

// private methods
impl Session {
    fn invalidate(&mut self) {
        self.verdict = None;
        self.epoch += 1;
        debug!("epoch {}: {}", self.epoch, self.graph);
    }
}

/// Hands out animation steps one at a time, at the caller's pace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    epoch: u64,
    steps: Vec<Step>,
    next: usize,
}

impl Playback {
    /// Whether the session changed since this playback was created.
    pub fn is_stale(&self, session: &Session) -> bool {
        self.epoch != session.epoch()
    }

    /// The next step, or `None` when done or when the session moved on.
    pub fn advance(&mut self, session: &Session) -> Option<Step> {
        if self.is_stale(session) {
            debug!("dropping step of stale epoch {}", self.epoch);
            return None;
        }
        let step = self.steps.get(self.next).cloned()?;
        self.next += 1;
        Some(step)
    }

    pub fn remaining(&self) -> usize {
        self.steps.len() - self.next
    }
}
