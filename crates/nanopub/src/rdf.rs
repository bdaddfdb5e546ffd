//! Minimal RDF statement model.
//!
//! Just enough of the RDF data model to carry a nanopublication's four
//! graphs in memory: IRIs, blank nodes, optionally typed literals, and
//! statement sets. Serialization to concrete RDF formats is out of scope.

use serde::{Deserialize, Serialize};

/// A named node (absolute IRI).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iri(pub String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An anonymous node. The label is process-local and carries no meaning
/// outside the document that minted it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlankNode(pub String);

impl std::fmt::Display for BlankNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal value, optionally typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    pub datatype: Option<Iri>,
}

impl Literal {
    /// A plain string literal.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// A literal with an explicit datatype IRI.
    pub fn typed(value: impl Into<String>, datatype: Iri) -> Self {
        Self {
            value: value.into(),
            datatype: Some(datatype),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.datatype {
            Some(dt) => write!(f, "{:?}^^{}", self.value, dt),
            None => write!(f, "{:?}", self.value),
        }
    }
}

/// Any RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Blank(b) => b.fmt(f),
            Term::Literal(l) => l.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::Blank(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

/// A single subject–predicate–object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Statement {
    pub fn new(subject: impl Into<Term>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// A named graph: a set of statements.
///
/// `add` has set semantics: inserting a statement that is already
/// present is a no-op, so each statement appears at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    name: Iri,
    statements: Vec<Statement>,
}

impl Graph {
    pub fn new(name: Iri) -> Self {
        Self {
            name,
            statements: Vec::new(),
        }
    }

    /// The graph's own IRI.
    pub fn name(&self) -> &Iri {
        &self.name
    }

    /// Insert a statement. Returns false if it was already present.
    pub fn add(&mut self, statement: Statement) -> bool {
        if self.statements.contains(&statement) {
            return false;
        }
        self.statements.push(statement);
        true
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.statements.contains(statement)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Statements whose subject equals `subject`.
    pub fn statements_about<'a>(
        &'a self,
        subject: &'a Term,
    ) -> impl Iterator<Item = &'a Statement> {
        self.statements.iter().filter(move |s| &s.subject == subject)
    }

    /// Statements with the given predicate.
    pub fn statements_with<'a>(
        &'a self,
        predicate: &'a Iri,
    ) -> impl Iterator<Item = &'a Statement> {
        self.statements
            .iter()
            .filter(move |s| &s.predicate == predicate)
    }
}

/// Fresh blank-node label generator, scoped to a single document.
///
/// Labels are unique within the owning document only; two documents may
/// mint the same label without their nodes being related.
#[derive(Debug, Default)]
pub struct BlankNodeSeq {
    next: u32,
}

impl BlankNodeSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh blank node labelled `{hint}{n}`.
    pub fn fresh(&mut self, hint: &str) -> BlankNode {
        self.next += 1;
        BlankNode(format!("{hint}{}", self.next))
    }
}
