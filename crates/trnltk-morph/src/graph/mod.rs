// Suffix graph
//
// The morphotactic state machine. States are connected by suffix edges; a
// suffix owns its forms, and each form may carry a precondition, a
// postcondition and a post-derivative condition. The graph is assembled by
// a list of modules that register states, suffixes, edges and forms on a
// shared builder, then frozen into an immutable `SuffixGraph` that is shared
// by every parser.
//
// Modules are applied in order. A later module may add edges and forms to
// states and suffixes registered by an earlier one; when the default state
// of a root is resolved, later modules are consulted first.

mod basic;
mod condition;
mod copula;
mod numeral;
mod proper_noun;

pub use basic::BasicGraph;
pub use condition::Condition;
pub use copula::CopulaGraph;
pub use numeral::NumeralGraph;
pub use proper_noun::ProperNounGraph;

use std::fmt;

use hashbrown::HashMap;
use trnltk_core::{PrimaryPos, Root};

use crate::phonetics::SuffixFormSequence;

/// Error type for graph construction and predefined path creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("malformed suffix form '{form}': {reason}")]
    MalformedForm { form: String, reason: String },
    #[error("state '{0}' is registered twice")]
    DuplicateState(String),
    #[error("suffix '{0}' is registered twice")]
    DuplicateSuffix(String),
    #[error("unknown state '{0}'")]
    UnknownState(String),
    #[error("unknown suffix '{0}'")]
    UnknownSuffix(String),
    #[error("no default state for root '{0}'")]
    MissingDefaultState(String),
    #[error("predefined path for '{root}' cannot reach suffix '{suffix}' unambiguously")]
    AmbiguousPredefinedPath { root: String, suffix: String },
    #[error("root '{root}' matches {count} lexicon roots for a predefined path")]
    AmbiguousPredefinedRoot { root: String, count: usize },
    #[error("predefined path for '{root}' fails at suffix '{suffix}' with form '{form}'")]
    PredefinedPathStep {
        root: String,
        suffix: String,
        form: String,
    },
    #[error("predefined paths are used before they are built")]
    PredefinedPathsNotBuilt,
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Index of a state in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u16);

/// Index of a suffix in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuffixId(u16);

/// Index of a suffix group in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u16);

impl StateId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl SuffixId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl GroupId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// States, suffixes, forms
// ---------------------------------------------------------------------------

/// Role of a state in a parse.
///
/// Root states have no kind of their own. `NOUN_ROOT`, `VERB_ROOT` and the
/// like are transfer states (terminal ones such as `PUNC_ROOT_TERMINAL` for
/// parts of speech taking no suffix) marked with
/// [`SuffixGraphBuilder::add_root_state`]; a root finds its starting state
/// through [`SuffixGraph::default_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    /// Inflection continues; the state is not a valid end.
    Transfer,
    /// Suffixes leaving this state start a new derivation.
    Derivational,
    /// A parse may end here.
    Terminal,
}

/// An outgoing suffix edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub suffix: SuffixId,
    pub target: StateId,
}

#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub state_type: StateType,
    pub pos: PrimaryPos,
    pub edges: Vec<Edge>,
}

/// How a suffix shows up in analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind {
    Regular,
    /// Empty, unprinted transition between two states.
    Free,
    /// An empty free transition guarded by a precondition.
    ConditionalFree,
    /// Empty transition that changes the part of speech; printed as `Zero`.
    Zero,
}

impl SuffixKind {
    /// Whether transitions with this suffix are left out of analyses.
    pub fn is_free(self) -> bool {
        matches!(self, Self::Free | Self::ConditionalFree)
    }
}

/// Conditions attached to one suffix form.
#[derive(Debug, Clone, Default)]
pub struct FormConditions {
    pub pre: Option<Condition>,
    pub post: Option<Condition>,
    pub post_derivative: Option<Condition>,
}

impl FormConditions {
    pub fn pre(condition: Condition) -> Self {
        Self {
            pre: Some(condition),
            ..Self::default()
        }
    }

    pub fn post(condition: Condition) -> Self {
        Self {
            post: Some(condition),
            ..Self::default()
        }
    }

    pub fn with_post(mut self, condition: Condition) -> Self {
        self.post = Some(condition);
        self
    }

    pub fn with_post_derivative(mut self, condition: Condition) -> Self {
        self.post_derivative = Some(condition);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SuffixForm {
    pub sequence: SuffixFormSequence,
    pub conditions: FormConditions,
}

#[derive(Debug, Clone)]
pub struct Suffix {
    pub name: String,
    /// Name used in analyses (`A3sg`, `Dat`).
    pub pretty_name: String,
    pub group: Option<GroupId>,
    pub kind: SuffixKind,
    /// Whether the suffix may directly follow itself across a derivation.
    pub allow_repetition: bool,
    pub forms: Vec<SuffixForm>,
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

/// A unit of graph construction.
pub trait GraphModule: Send + Sync {
    /// Register states, suffixes, edges and forms.
    fn register(&self, b: &mut SuffixGraphBuilder) -> Result<(), GraphError>;

    /// The state a root starts from, if this module decides it.
    fn default_state(&self, root: &Root, graph: &SuffixGraph) -> Option<StateId>;
}

/// Which feature modules decorate the base graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    pub numerals: bool,
    pub proper_nouns: bool,
    pub copula: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            numerals: true,
            proper_nouns: true,
            copula: true,
        }
    }
}

impl GraphOptions {
    /// The base graph alone.
    pub fn basic() -> Self {
        Self {
            numerals: false,
            proper_nouns: false,
            copula: false,
        }
    }

    /// The modules to apply, base first.
    pub fn modules(&self) -> Vec<Box<dyn GraphModule>> {
        let mut modules: Vec<Box<dyn GraphModule>> = vec![Box::new(BasicGraph)];
        if self.numerals {
            modules.push(Box::new(NumeralGraph));
        }
        if self.proper_nouns {
            modules.push(Box::new(ProperNounGraph));
        }
        if self.copula {
            modules.push(Box::new(CopulaGraph));
        }
        modules
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Mutable graph under construction.
#[derive(Default)]
pub struct SuffixGraphBuilder {
    states: Vec<State>,
    state_names: HashMap<String, StateId>,
    suffixes: Vec<Suffix>,
    suffix_names: HashMap<String, SuffixId>,
    groups: Vec<String>,
    group_names: HashMap<String, GroupId>,
    root_states: Vec<StateId>,
}

impl SuffixGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(
        &mut self,
        name: &str,
        state_type: StateType,
        pos: PrimaryPos,
    ) -> Result<StateId, GraphError> {
        if self.state_names.contains_key(name) {
            return Err(GraphError::DuplicateState(name.to_string()));
        }
        let id = StateId(self.states.len() as u16);
        self.states.push(State {
            name: name.to_string(),
            state_type,
            pos,
            edges: Vec::new(),
        });
        self.state_names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a registered state.
    pub fn state(&self, name: &str) -> Result<StateId, GraphError> {
        self.state_names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownState(name.to_string()))
    }

    /// Look up several registered states at once.
    pub fn states<const N: usize>(&self, names: [&str; N]) -> Result<[StateId; N], GraphError> {
        let mut out = [StateId(0); N];
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self.state(name)?;
        }
        Ok(out)
    }

    /// Look up several registered suffixes at once.
    pub fn suffixes<const N: usize>(&self, names: [&str; N]) -> Result<[SuffixId; N], GraphError> {
        let mut out = [SuffixId(0); N];
        for (slot, name) in out.iter_mut().zip(names) {
            *slot = self.suffix(name)?;
        }
        Ok(out)
    }

    /// Mark a state as one roots may start from.
    pub fn add_root_state(&mut self, state: StateId) {
        if !self.root_states.contains(&state) {
            self.root_states.push(state);
        }
    }

    /// Register a group, or return the existing one with that name.
    pub fn group(&mut self, name: &str) -> GroupId {
        if let Some(&id) = self.group_names.get(name) {
            return id;
        }
        let id = GroupId(self.groups.len() as u16);
        self.groups.push(name.to_string());
        self.group_names.insert(name.to_string(), id);
        id
    }

    fn push_suffix(&mut self, suffix: Suffix) -> Result<SuffixId, GraphError> {
        if self.suffix_names.contains_key(&suffix.name) {
            return Err(GraphError::DuplicateSuffix(suffix.name));
        }
        let id = SuffixId(self.suffixes.len() as u16);
        self.suffix_names.insert(suffix.name.clone(), id);
        self.suffixes.push(suffix);
        Ok(id)
    }

    pub fn add_suffix(
        &mut self,
        name: &str,
        pretty_name: &str,
        group: Option<GroupId>,
    ) -> Result<SuffixId, GraphError> {
        self.push_suffix(Suffix {
            name: name.to_string(),
            pretty_name: pretty_name.to_string(),
            group,
            kind: SuffixKind::Regular,
            allow_repetition: false,
            forms: Vec::new(),
        })
    }

    /// A suffix whose pretty name equals its name.
    pub fn add_plain_suffix(&mut self, name: &str) -> Result<SuffixId, GraphError> {
        self.add_suffix(name, name, None)
    }

    /// Look up a registered suffix.
    pub fn suffix(&self, name: &str) -> Result<SuffixId, GraphError> {
        self.suffix_names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownSuffix(name.to_string()))
    }

    pub fn allow_repetition(&mut self, suffix: SuffixId) {
        self.suffixes[suffix.index()].allow_repetition = true;
    }

    fn add_empty_transition(
        &mut self,
        name: &str,
        pretty_name: &str,
        kind: SuffixKind,
        from: StateId,
        to: StateId,
        conditions: FormConditions,
    ) -> Result<SuffixId, GraphError> {
        let id = self.push_suffix(Suffix {
            name: name.to_string(),
            pretty_name: pretty_name.to_string(),
            group: None,
            kind,
            allow_repetition: false,
            forms: vec![SuffixForm {
                sequence: SuffixFormSequence::blank(),
                conditions,
            }],
        })?;
        self.add_edge(from, id, to);
        Ok(id)
    }

    pub fn add_free_transition(
        &mut self,
        name: &str,
        from: StateId,
        to: StateId,
    ) -> Result<SuffixId, GraphError> {
        self.add_empty_transition(name, name, SuffixKind::Free, from, to, FormConditions::default())
    }

    pub fn add_conditional_free_transition(
        &mut self,
        name: &str,
        from: StateId,
        to: StateId,
        precondition: Condition,
    ) -> Result<SuffixId, GraphError> {
        self.add_empty_transition(
            name,
            name,
            SuffixKind::ConditionalFree,
            from,
            to,
            FormConditions::pre(precondition),
        )
    }

    pub fn add_zero_transition(
        &mut self,
        name: &str,
        from: StateId,
        to: StateId,
    ) -> Result<SuffixId, GraphError> {
        self.add_empty_transition(name, "Zero", SuffixKind::Zero, from, to, FormConditions::default())
    }

    pub fn add_edge(&mut self, from: StateId, suffix: SuffixId, to: StateId) {
        self.states[from.index()].edges.push(Edge { suffix, target: to });
    }

    pub fn add_form(&mut self, suffix: SuffixId, form: &str) -> Result<(), GraphError> {
        self.add_form_with(suffix, form, FormConditions::default())
    }

    pub fn add_form_if(
        &mut self,
        suffix: SuffixId,
        form: &str,
        precondition: Condition,
    ) -> Result<(), GraphError> {
        self.add_form_with(suffix, form, FormConditions::pre(precondition))
    }

    pub fn add_form_with(
        &mut self,
        suffix: SuffixId,
        form: &str,
        conditions: FormConditions,
    ) -> Result<(), GraphError> {
        let sequence = SuffixFormSequence::parse(form)?;
        self.suffixes[suffix.index()].forms.push(SuffixForm {
            sequence,
            conditions,
        });
        Ok(())
    }

    /// Freeze the graph.
    pub fn build(self, modules: Vec<Box<dyn GraphModule>>) -> SuffixGraph {
        SuffixGraph {
            states: self.states,
            state_names: self.state_names,
            suffixes: self.suffixes,
            suffix_names: self.suffix_names,
            groups: self.groups,
            root_states: self.root_states,
            modules,
        }
    }
}

// ---------------------------------------------------------------------------
// Frozen graph
// ---------------------------------------------------------------------------

/// An immutable suffix graph.
pub struct SuffixGraph {
    states: Vec<State>,
    state_names: HashMap<String, StateId>,
    suffixes: Vec<Suffix>,
    suffix_names: HashMap<String, SuffixId>,
    groups: Vec<String>,
    root_states: Vec<StateId>,
    modules: Vec<Box<dyn GraphModule>>,
}

impl SuffixGraph {
    /// Build the graph with the modules selected by `options`.
    pub fn new(options: &GraphOptions) -> Result<Self, GraphError> {
        Self::with_modules(options.modules())
    }

    /// Build the graph by applying `modules` in order.
    pub fn with_modules(modules: Vec<Box<dyn GraphModule>>) -> Result<Self, GraphError> {
        let mut builder = SuffixGraphBuilder::new();
        for module in &modules {
            module.register(&mut builder)?;
        }
        let graph = builder.build(modules);
        log::debug!(
            "suffix graph built: {} states, {} suffixes",
            graph.states.len(),
            graph.suffixes.len()
        );
        Ok(graph)
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn suffix(&self, id: SuffixId) -> &Suffix {
        &self.suffixes[id.index()]
    }

    pub fn group_name(&self, id: GroupId) -> &str {
        &self.groups[id.index()]
    }

    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.state_names.get(name).copied()
    }

    pub fn suffix_by_name(&self, name: &str) -> Option<SuffixId> {
        self.suffix_names.get(name).copied()
    }

    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId(i as u16), s))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    pub fn root_states(&self) -> &[StateId] {
        &self.root_states
    }

    pub fn is_root_state(&self, id: StateId) -> bool {
        self.root_states.contains(&id)
    }

    /// The state `root` starts from. Later modules take precedence.
    pub fn default_state(&self, root: &Root) -> Option<StateId> {
        self.modules
            .iter()
            .rev()
            .find_map(|m| m.default_state(root, self))
    }

    /// Edges leaving `from` with the given suffix.
    pub fn edges_with_suffix(
        &self,
        from: StateId,
        suffix: SuffixId,
    ) -> impl Iterator<Item = &Edge> {
        self.state(from).edges.iter().filter(move |e| e.suffix == suffix)
    }
}

impl fmt::Debug for SuffixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixGraph")
            .field("states", &self.states.len())
            .field("suffixes", &self.suffixes.len())
            .field("root_states", &self.root_states.len())
            .field("modules", &self.modules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_rejects_duplicates_and_unknown_names() {
        let mut b = SuffixGraphBuilder::new();
        let root = b.add_state("ROOT", StateType::Transfer, PrimaryPos::Noun).unwrap();
        assert_eq!(
            b.add_state("ROOT", StateType::Terminal, PrimaryPos::Noun),
            Err(GraphError::DuplicateState("ROOT".to_string()))
        );
        b.add_plain_suffix("X").unwrap();
        assert!(matches!(b.add_plain_suffix("X"), Err(GraphError::DuplicateSuffix(_))));
        assert!(matches!(b.suffix("Y"), Err(GraphError::UnknownSuffix(_))));
        assert!(matches!(b.state("NOPE"), Err(GraphError::UnknownState(_))));
        assert_eq!(b.state("ROOT").unwrap(), root);
    }

    #[test]
    fn malformed_form_fails_the_build() {
        let mut b = SuffixGraphBuilder::new();
        let s = b.add_plain_suffix("X").unwrap();
        assert!(matches!(b.add_form(s, "lEr"), Err(GraphError::MalformedForm { .. })));
    }

    #[test]
    fn groups_are_shared_by_name() {
        let mut b = SuffixGraphBuilder::new();
        let g1 = b.group("Agreements");
        let g2 = b.group("Agreements");
        assert_eq!(g1, g2);
        assert_ne!(g1, b.group("Cases"));
    }

    #[test]
    fn full_graph_builds() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let basic = SuffixGraph::new(&GraphOptions::basic()).unwrap();
        assert!(graph.state_count() > basic.state_count());
        assert!(graph.suffix_count() > basic.suffix_count());

        for (_, state) in graph.states() {
            if state.state_type == StateType::Terminal {
                assert!(state.edges.is_empty(), "{} has outgoing edges", state.name);
            }
        }
        let noun_root = graph.state_by_name("NOUN_ROOT").unwrap();
        assert!(graph.is_root_state(noun_root));
        assert_eq!(graph.state(noun_root).state_type, StateType::Transfer);
        assert!(!graph.is_root_state(graph.state_by_name("NOUN_TERMINAL").unwrap()));
        let punc = graph.state_by_name("PUNC_ROOT_TERMINAL").unwrap();
        assert!(graph.is_root_state(punc));
        assert_eq!(graph.state(punc).state_type, StateType::Terminal);
        let a3sg = graph.suffix(graph.suffix_by_name("A3Sg_Noun").unwrap());
        assert_eq!(a3sg.pretty_name, "A3sg");
        assert_eq!(a3sg.group.map(|g| graph.group_name(g)), Some("Noun_Agreements_Group"));
    }

    #[test]
    fn every_suffix_on_an_edge_has_a_form_or_is_reached_by_predefined_paths() {
        let graph = SuffixGraph::new(&GraphOptions::default()).unwrap();
        let formless: Vec<&str> = graph
            .states()
            .flat_map(|(_, s)| s.edges.iter())
            .map(|e| graph.suffix(e.suffix))
            .filter(|s| s.forms.is_empty())
            .map(|s| s.name.as_str())
            .collect();
        for name in formless {
            assert!(
                name.ends_with("_Pron") || name.ends_with("_Ques"),
                "{name} has no forms"
            );
        }
    }
}
