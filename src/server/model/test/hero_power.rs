use crate::server::model::hero_power::Strength;

/// Tests that all three allowed strength ratings parse.
#[test]
fn parses_allowed_strengths() {
    assert_eq!(Strength::parse("Strong"), Ok(Strength::Strong));
    assert_eq!(Strength::parse("Weak"), Ok(Strength::Weak));
    assert_eq!(Strength::parse("Average"), Ok(Strength::Average));
}

/// Tests that parsing round-trips through the persisted string form.
#[test]
fn as_str_round_trips() {
    for value in ["Strong", "Weak", "Average"] {
        assert_eq!(Strength::parse(value).map(|s| s.as_str()), Ok(value));
    }
}

/// Tests that a value outside the allowed set is rejected with a message
/// naming the allowed values.
#[test]
fn rejects_unknown_strength() {
    let result = Strength::parse("Mediocre");

    assert!(result.is_err());
    let message = result.unwrap_err();
    assert!(message.contains("Strong"));
    assert!(message.contains("Weak"));
    assert!(message.contains("Average"));
}

/// Tests that matching is exact, with no case folding.
#[test]
fn rejects_wrong_case() {
    assert!(Strength::parse("strong").is_err());
    assert!(Strength::parse("AVERAGE").is_err());
}

/// Tests that the empty string is rejected.
#[test]
fn rejects_empty_strength() {
    assert!(Strength::parse("").is_err());
}
