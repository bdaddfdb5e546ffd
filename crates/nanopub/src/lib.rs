//! Nanopub — nanopublication introduction builder.
//!
//! Builds identity-introduction nanopublications: documents whose
//! assertion declares that an RSA public key belongs to a researcher's
//! ORCID identifier. Covers profile handling, RSA key provisioning and
//! persistence, and assembly of the four-graph document; URI minting,
//! signing, and publishing are downstream concerns.

pub mod conf;
pub mod error;
pub mod intro;
pub mod keys;
pub mod nanopub;
pub mod profile;
pub mod rdf;
pub mod vocab;

// Re-export primary types
pub use conf::NanopubConf;
pub use error::{NanopubError, Result};
pub use intro::IntroBuilder;
pub use keys::{provision_keys, RsaKeyPair};
pub use nanopub::Nanopub;
pub use profile::Profile;
pub use rdf::{BlankNode, Graph, Iri, Literal, Statement, Term};
