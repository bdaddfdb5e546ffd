//! Document construction configuration.

use serde::{Deserialize, Serialize};

use crate::error::{NanopubError, Result};
use crate::rdf::Iri;

/// Switches controlling the provenance and publication-info statements a
/// document is enriched with at construction time.
///
/// The assembler forwards this to the container unmodified; it reads
/// none of the switches itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NanopubConf {
    /// Add `prov:generatedAtTime` for the assertion graph to provenance.
    pub add_prov_generated_time: bool,
    /// Add `prov:generatedAtTime` for the document to publication info.
    pub add_pubinfo_generated_time: bool,
    /// Attribute the assertion to the profile's identifier.
    pub attribute_assertion_to_profile: bool,
    /// Attribute the publication to the profile's identifier.
    pub attribute_publication_to_profile: bool,
    /// Attribute the assertion to an explicit URI instead of the profile.
    /// Mutually exclusive with `attribute_assertion_to_profile`.
    pub assertion_attributed_to: Option<Iri>,
    /// Attribute the publication to an explicit URI. Only consulted when
    /// `attribute_publication_to_profile` is set.
    pub publication_attributed_to: Option<Iri>,
    /// Sources the assertion was derived from.
    pub derived_from: Vec<Iri>,
}

impl NanopubConf {
    /// The enrichment defaults used for introduction documents: publication
    /// timestamp plus assertion and publication attribution.
    pub fn introduction() -> Self {
        Self {
            add_prov_generated_time: false,
            add_pubinfo_generated_time: true,
            attribute_assertion_to_profile: true,
            attribute_publication_to_profile: true,
            ..Self::default()
        }
    }

    /// Reject contradictory switch combinations.
    pub fn validate(&self) -> Result<()> {
        if self.assertion_attributed_to.is_some() && self.attribute_assertion_to_profile {
            return Err(NanopubError::MalformedNanopub(
                "assertion_attributed_to and attribute_assertion_to_profile are mutually \
                 exclusive; unset one of them"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
