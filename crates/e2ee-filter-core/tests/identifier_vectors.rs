//! Origin extraction vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use e2ee_filter_core::error::{ExtractionError, FilterError};
use e2ee_filter_core::identifier::{origin_of, parse, ServerName, Sigil};


fn error_name(e: &ExtractionError) -> &'static str {
    match e {
        ExtractionError::Empty => "Empty",
        ExtractionError::UnknownSigil(_) => "UnknownSigil",
        ExtractionError::MissingSeparator => "MissingSeparator",
        ExtractionError::EmptyLocalpart => "EmptyLocalpart",
        ExtractionError::InvalidServerName(_) => "InvalidServerName",
    }
}

#[test]
fn identifier_vectors() {
    for v in vector_loader::load("identifiers.json") {
        let res = parse(&v.input);

        if let Some(expected) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(error_name(&e), expected, "vector={}", v.description);
            continue;
        }

        let id = res.expect("expected ok identifier");
        assert_eq!(
            Some(id.origin.as_str()),
            v.expect_origin.as_deref(),
            "vector={}",
            v.description
        );
        assert_eq!(
            Some(id.localpart),
            v.expect_localpart.as_deref(),
            "vector={}",
            v.description
        );
    }
}

#[test]
fn sigils_are_recognised() {
    assert_eq!(parse("@a:x.org").unwrap().sigil, Sigil::User);
    assert_eq!(parse("!a:x.org").unwrap().sigil, Sigil::Room);
    assert_eq!(parse("#a:x.org").unwrap().sigil, Sigil::RoomAlias);
    assert_eq!(parse("$a:x.org").unwrap().sigil, Sigil::Event);
    assert_eq!(Sigil::Room.as_char(), '!');
}

#[test]
fn server_names_compare_case_insensitively() {
    let a = origin_of("@alice:Example.ORG").unwrap();
    let b = ServerName::parse("example.org").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_str(), "Example.ORG");
    assert_eq!(a.normalized(), "example.org");
}

#[test]
fn extraction_error_maps_to_stable_code() {
    let err: FilterError = origin_of("nonsense").unwrap_err().into();
    assert_eq!(err.code().as_str(), "MALFORMED_IDENTIFIER");
}
