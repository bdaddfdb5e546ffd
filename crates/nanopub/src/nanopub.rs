//! The nanopublication document container.
//!
//! A nanopublication is four named graphs: the head (wiring the other
//! three together), the assertion (the claimed statements), the
//! provenance (how the assertion came to be), and the publication info
//! (metadata about the document itself). Until a final URI is minted the
//! document lives under a temporary namespace; minting, signing, and
//! server submission happen outside this crate.

use chrono::{SecondsFormat, Utc};

use crate::conf::NanopubConf;
use crate::error::{NanopubError, Result};
use crate::profile::Profile;
use crate::rdf::{BlankNode, BlankNodeSeq, Graph, Iri, Literal, Statement, Term};
use crate::vocab;

/// An in-memory nanopublication document.
#[derive(Debug)]
pub struct Nanopub {
    uri: Iri,
    head: Graph,
    assertion: Graph,
    provenance: Graph,
    pubinfo: Graph,
    blank_seq: BlankNodeSeq,
}

impl Nanopub {
    /// Construct an empty document shell under the temporary namespace,
    /// wire the head graph, and apply the enrichment the configuration
    /// asks for.
    ///
    /// # Errors
    ///
    /// Returns `NanopubError::MalformedNanopub` if the configuration is
    /// contradictory.
    pub fn new(profile: &Profile, conf: &NanopubConf) -> Result<Self> {
        conf.validate()?;

        let ns = vocab::TEMP_NP_NAMESPACE;
        let uri = Iri::from(ns);
        let head = Graph::new(Iri::new(format!("{ns}Head")));
        let assertion = Graph::new(Iri::new(format!("{ns}assertion")));
        let provenance = Graph::new(Iri::new(format!("{ns}provenance")));
        let pubinfo = Graph::new(Iri::new(format!("{ns}pubinfo")));

        let mut np = Self {
            uri,
            head,
            assertion,
            provenance,
            pubinfo,
            blank_seq: BlankNodeSeq::new(),
        };
        np.wire_head();
        np.apply_conf(profile, conf);
        Ok(np)
    }

    /// Declare the document and link the three content graphs.
    fn wire_head(&mut self) {
        let uri = self.uri.clone();
        self.head.add(Statement::new(
            uri.clone(),
            Iri::from(vocab::RDF_TYPE),
            Iri::from(vocab::np::NANOPUBLICATION),
        ));
        self.head.add(Statement::new(
            uri.clone(),
            Iri::from(vocab::np::HAS_ASSERTION),
            self.assertion.name().clone(),
        ));
        self.head.add(Statement::new(
            uri.clone(),
            Iri::from(vocab::np::HAS_PROVENANCE),
            self.provenance.name().clone(),
        ));
        self.head.add(Statement::new(
            uri,
            Iri::from(vocab::np::HAS_PUBLICATION_INFO),
            self.pubinfo.name().clone(),
        ));
    }

    /// Add the provenance and pubinfo statements the configuration
    /// switches ask for.
    fn apply_conf(&mut self, profile: &Profile, conf: &NanopubConf) {
        let creation_time = Literal::typed(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            Iri::from(vocab::XSD_DATE_TIME),
        );
        let assertion_uri = self.assertion.name().clone();

        if conf.add_pubinfo_generated_time {
            self.pubinfo.add(Statement::new(
                self.uri.clone(),
                Iri::from(vocab::prov::GENERATED_AT_TIME),
                creation_time.clone(),
            ));
        }
        if conf.add_prov_generated_time {
            self.provenance.add(Statement::new(
                assertion_uri.clone(),
                Iri::from(vocab::prov::GENERATED_AT_TIME),
                creation_time,
            ));
        }

        let assertion_attributed_to = if conf.attribute_assertion_to_profile {
            Some(Iri::new(profile.orcid_id.clone()))
        } else {
            conf.assertion_attributed_to.clone()
        };
        if let Some(attributed_to) = assertion_attributed_to {
            self.provenance.add(Statement::new(
                assertion_uri.clone(),
                Iri::from(vocab::prov::WAS_ATTRIBUTED_TO),
                attributed_to,
            ));
        }

        if conf.attribute_publication_to_profile {
            let attributed_to = conf
                .publication_attributed_to
                .clone()
                .unwrap_or_else(|| Iri::new(profile.orcid_id.clone()));
            self.pubinfo.add(Statement::new(
                self.uri.clone(),
                Iri::from(vocab::prov::WAS_ATTRIBUTED_TO),
                attributed_to,
            ));
        }

        for source in &conf.derived_from {
            self.provenance.add(Statement::new(
                assertion_uri.clone(),
                Iri::from(vocab::prov::WAS_DERIVED_FROM),
                source.clone(),
            ));
        }
    }

    /// The document URI (temporary until minted).
    pub fn uri(&self) -> &Iri {
        &self.uri
    }

    pub fn head(&self) -> &Graph {
        &self.head
    }

    pub fn assertion(&self) -> &Graph {
        &self.assertion
    }

    pub fn provenance(&self) -> &Graph {
        &self.provenance
    }

    pub fn pubinfo(&self) -> &Graph {
        &self.pubinfo
    }

    /// Mutable access to the assertion graph for appending statements.
    pub fn assertion_mut(&mut self) -> &mut Graph {
        &mut self.assertion
    }

    pub fn provenance_mut(&mut self) -> &mut Graph {
        &mut self.provenance
    }

    pub fn pubinfo_mut(&mut self) -> &mut Graph {
        &mut self.pubinfo
    }

    /// Mint a blank node whose label is unique within this document.
    pub fn fresh_blank(&mut self, hint: &str) -> BlankNode {
        self.blank_seq.fresh(hint)
    }

    /// Total statements across all four graphs.
    pub fn statement_count(&self) -> usize {
        self.head.len() + self.assertion.len() + self.provenance.len() + self.pubinfo.len()
    }

    /// Structural validity checks: every graph populated, the provenance
    /// says something about the assertion graph, and the publication info
    /// says something about the document.
    pub fn validate(&self) -> Result<()> {
        if self.head.is_empty() {
            return Err(NanopubError::MalformedNanopub("the Head graph is empty".into()));
        }
        if self.assertion.is_empty() {
            return Err(NanopubError::MalformedNanopub(
                "the assertion graph is empty".into(),
            ));
        }
        if self.provenance.is_empty() {
            return Err(NanopubError::MalformedNanopub(
                "the provenance graph is empty".into(),
            ));
        }
        if self.pubinfo.is_empty() {
            return Err(NanopubError::MalformedNanopub(
                "the pubinfo graph is empty".into(),
            ));
        }

        let assertion_subject = Term::Iri(self.assertion.name().clone());
        if self.provenance.statements_about(&assertion_subject).count() == 0 {
            return Err(NanopubError::MalformedNanopub(format!(
                "the provenance graph must contain at least one statement about the assertion \
                 graph {}",
                self.assertion.name()
            )));
        }

        let np_subject = Term::Iri(self.uri.clone());
        if self.pubinfo.statements_about(&np_subject).count() == 0 {
            return Err(NanopubError::MalformedNanopub(format!(
                "the pubinfo graph must contain at least one statement about the document {}",
                self.uri
            )));
        }

        Ok(())
    }
}
