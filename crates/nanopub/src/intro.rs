//! Introduction documents — declaring a key pair for an identifier.
//!
//! An introduction is a nanopublication whose assertion declares that a
//! given RSA public key belongs to a researcher's identifier, so that
//! later publications signed with the matching private key can be
//! attributed to that identifier.

use crate::conf::NanopubConf;
use crate::error::Result;
use crate::keys;
use crate::nanopub::Nanopub;
use crate::profile::Profile;
use crate::rdf::{Iri, Literal, Statement};
use crate::vocab;

/// Algorithm name declared in the assertion.
const KEY_ALGORITHM: &str = "RSA";

/// Builder for an introduction nanopublication.
///
/// With no supplied public key, `build` provisions a fresh RSA pair and
/// persists it to the profile's key paths, overwriting whatever those
/// paths held. That invalidates any previously published introduction
/// for the same profile. Supplying a key skips generation and touches no
/// files. Concurrent builds against one profile race on the key files;
/// callers must serialize them.
pub struct IntroBuilder<'a> {
    profile: &'a Profile,
    conf: NanopubConf,
    public_key: Option<String>,
}

impl<'a> IntroBuilder<'a> {
    /// Start building an introduction for the given profile, with the
    /// introduction enrichment defaults.
    pub fn new(profile: &'a Profile) -> Self {
        Self {
            profile,
            conf: NanopubConf::introduction(),
            public_key: None,
        }
    }

    /// Replace the document configuration.
    pub fn conf(mut self, conf: NanopubConf) -> Self {
        self.conf = conf;
        self
    }

    /// Use this public key text verbatim instead of generating one.
    /// The text is treated as opaque; no format validation is performed.
    pub fn public_key(mut self, pem: impl Into<String>) -> Self {
        self.public_key = Some(pem.into());
        self
    }

    /// Assemble the document.
    ///
    /// Pipeline: validate the profile, construct the shell, resolve key
    /// material (the single blocking point: key generation plus two file
    /// writes), then emit the four-statement declaration into the
    /// assertion graph. Any failure aborts the whole build; no partial
    /// document is returned.
    ///
    /// # Errors
    ///
    /// `NanopubError::ProfileIncomplete` for a profile missing its
    /// identifier, name, or key paths (raised before any file is
    /// touched); `NanopubError::KeyGeneration` or
    /// `NanopubError::FilePersistence` from provisioning;
    /// `NanopubError::MalformedNanopub` for a contradictory conf.
    pub fn build(self) -> Result<Nanopub> {
        self.profile.validate()?;

        let mut np = Nanopub::new(self.profile, &self.conf)?;

        let public_key = match self.public_key {
            Some(pem) => pem,
            None => {
                log::info!(
                    "generating RSA key pair for {}",
                    self.profile.orcid_id
                );
                keys::provision_keys(self.profile)?
            }
        };

        let declaration = np.fresh_blank("keyDeclaration");
        let orcid = Iri::new(self.profile.orcid_id.clone());

        let assertion = np.assertion_mut();
        assertion.add(Statement::new(
            declaration.clone(),
            Iri::from(vocab::npx::DECLARED_BY),
            orcid.clone(),
        ));
        assertion.add(Statement::new(
            declaration.clone(),
            Iri::from(vocab::npx::HAS_ALGORITHM),
            Literal::plain(KEY_ALGORITHM),
        ));
        assertion.add(Statement::new(
            declaration,
            Iri::from(vocab::npx::HAS_PUBLIC_KEY),
            Literal::plain(public_key),
        ));
        assertion.add(Statement::new(
            orcid,
            Iri::from(vocab::foaf::NAME),
            Literal::plain(self.profile.name.clone()),
        ));

        Ok(np)
    }
}
