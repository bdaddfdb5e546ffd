//! Integration test: full introduction workflow.
//!
//! Covers the complete lifecycle:
//! 1. Store and load a profile
//! 2. Build an introduction with a generated key pair
//! 3. Check the persisted key files against the declaration
//! 4. Build an introduction from a supplied key (no file writes)
//! 5. Fail fast on an incomplete profile

use nanopub::rdf::{Iri, Literal, Statement, Term};
use nanopub::vocab;
use nanopub::{IntroBuilder, NanopubError, Profile};

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};

const ORCID: &str = "https://orcid.org/0000-0000-0000-0001";

#[test]
fn full_workflow_profile_to_introduction() {
    // ── Step 1: Store and load a profile ────────────────────────────────
    let dir = tempfile::tempdir().unwrap();
    let profile_path = dir.path().join("profile.yml");

    Profile::new(ORCID, "Jane Doe", dir.path())
        .to_file(&profile_path)
        .expect("profile should be written");

    let profile = Profile::from_file(&profile_path).expect("profile should load");
    assert_eq!(profile.orcid_id, ORCID);
    assert_eq!(profile.name, "Jane Doe");

    // ── Step 2: Build an introduction with a generated key pair ─────────
    let np = IntroBuilder::new(&profile)
        .build()
        .expect("introduction build should succeed");

    assert_eq!(
        np.assertion().len(),
        4,
        "the assertion graph must hold exactly the four declaration statements"
    );
    assert!(np.validate().is_ok(), "the document must be structurally valid");
    assert_eq!(np.head().len(), 4, "head graph must wire the three graphs");

    // ── Step 3: Check the persisted key files against the declaration ───
    assert!(profile.private_key.exists());
    assert!(profile.public_key.exists());

    let public_pem = std::fs::read_to_string(&profile.public_key).unwrap();
    let private_pem = std::fs::read_to_string(&profile.private_key).unwrap();

    // The file contents are well-formed key material and the halves match.
    let private = RsaPrivateKey::from_pkcs1_pem(&private_pem)
        .expect("persisted private key must be valid PKCS#1 PEM");
    let public = RsaPublicKey::from_public_key_pem(&public_pem)
        .expect("persisted public key must be valid SPKI PEM");
    assert_eq!(private.to_public_key(), public);

    // The declaration carries the persisted public key verbatim.
    let declaration = np
        .assertion()
        .statements_with(&Iri::from(vocab::npx::DECLARED_BY))
        .next()
        .expect("declaredBy statement present")
        .subject
        .clone();
    assert!(matches!(declaration, Term::Blank(_)));
    assert!(np.assertion().contains(&Statement::new(
        declaration.clone(),
        Iri::from(vocab::npx::HAS_PUBLIC_KEY),
        Literal::plain(public_pem.clone()),
    )));
    assert!(np.assertion().contains(&Statement::new(
        declaration.clone(),
        Iri::from(vocab::npx::HAS_ALGORITHM),
        Literal::plain("RSA"),
    )));
    assert!(np.assertion().contains(&Statement::new(
        declaration,
        Iri::from(vocab::npx::DECLARED_BY),
        Iri::from(ORCID),
    )));
    assert!(np.assertion().contains(&Statement::new(
        Iri::from(ORCID),
        Iri::from(vocab::foaf::NAME),
        Literal::plain("Jane Doe"),
    )));

    // ── Step 4: Build from a supplied key (no file writes) ──────────────
    let np2 = IntroBuilder::new(&profile)
        .public_key("supplied-key-text")
        .build()
        .expect("supplied-key build should succeed");

    let decl2 = np2
        .assertion()
        .statements_with(&Iri::from(vocab::npx::DECLARED_BY))
        .next()
        .unwrap()
        .subject
        .clone();
    assert!(np2.assertion().contains(&Statement::new(
        decl2,
        Iri::from(vocab::npx::HAS_PUBLIC_KEY),
        Literal::plain("supplied-key-text"),
    )));

    // The key files were left byte-identical.
    assert_eq!(
        std::fs::read_to_string(&profile.public_key).unwrap(),
        public_pem
    );
    assert_eq!(
        std::fs::read_to_string(&profile.private_key).unwrap(),
        private_pem
    );

    // ── Step 5: Fail fast on an incomplete profile ──────────────────────
    let fresh = tempfile::tempdir().unwrap();
    let incomplete = Profile::new(ORCID, "", fresh.path());

    let result = IntroBuilder::new(&incomplete).build();
    assert!(matches!(
        result,
        Err(NanopubError::ProfileIncomplete("name"))
    ));
    assert!(
        !incomplete.private_key.exists() && !incomplete.public_key.exists(),
        "an early failure must not touch the filesystem"
    );
}
