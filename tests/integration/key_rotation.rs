//! Integration test: re-provisioning replaces key material.
//!
//! Provisioning is deliberately not idempotent — every generation call
//! replaces both key files. These tests pin that down, including the
//! consequence that a second build breaks the binding declared by the
//! first.

use nanopub::rdf::{Iri, Literal, Statement};
use nanopub::vocab;
use nanopub::{provision_keys, IntroBuilder, Profile};

const ORCID: &str = "https://orcid.org/0000-0000-0000-0001";

#[test]
fn reprovisioning_replaces_both_key_files() {
    let dir = tempfile::tempdir().unwrap();
    let profile = Profile::new(ORCID, "Jane Doe", dir.path());

    let first_public = provision_keys(&profile).expect("first provisioning");
    let first_private = std::fs::read_to_string(&profile.private_key).unwrap();

    let second_public = provision_keys(&profile).expect("second provisioning");
    let second_private = std::fs::read_to_string(&profile.private_key).unwrap();

    assert_ne!(first_public, second_public, "key pairs must differ");
    assert_ne!(first_private, second_private);

    // The files hold only the second pair.
    assert_eq!(
        std::fs::read_to_string(&profile.public_key).unwrap(),
        second_public
    );
}

#[test]
fn second_build_invalidates_first_declaration() {
    let dir = tempfile::tempdir().unwrap();
    let profile = Profile::new(ORCID, "Jane Doe", dir.path());

    let first = IntroBuilder::new(&profile).build().expect("first build");
    let second = IntroBuilder::new(&profile).build().expect("second build");

    let key_of = |np: &nanopub::Nanopub| -> String {
        let stmt = np
            .assertion()
            .statements_with(&Iri::from(vocab::npx::HAS_PUBLIC_KEY))
            .next()
            .expect("hasPublicKey statement present")
            .clone();
        match stmt.object {
            nanopub::Term::Literal(Literal { value, .. }) => value,
            other => panic!("expected literal, got {other:?}"),
        }
    };

    let first_key = key_of(&first);
    let second_key = key_of(&second);
    assert_ne!(first_key, second_key);

    // On disk only the second key remains; the first introduction's
    // declaration no longer matches any persisted key.
    let on_disk = std::fs::read_to_string(&profile.public_key).unwrap();
    assert_eq!(on_disk, second_key);
    assert_ne!(on_disk, first_key);

    // Each document minted its own declaration node independently.
    let decl = |np: &nanopub::Nanopub| {
        np.assertion()
            .statements_with(&Iri::from(vocab::npx::DECLARED_BY))
            .next()
            .unwrap()
            .subject
            .clone()
    };
    assert!(first.assertion().contains(&Statement::new(
        decl(&first),
        Iri::from(vocab::npx::HAS_ALGORITHM),
        Literal::plain("RSA"),
    )));
    assert!(second.assertion().contains(&Statement::new(
        decl(&second),
        Iri::from(vocab::npx::HAS_ALGORITHM),
        Literal::plain("RSA"),
    )));
}
