#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GenError___unmapped_type___displays_type_and_column() {
    let err = GenError::unmapped("geography", "location");

    let display = err.to_string();

    assert_eq!(
        display,
        "unmapped database type 'geography' for column 'location'"
    );
}

#[test]
fn GenError___missing_required_option___displays_option_name() {
    let err = GenError::MissingRequiredOption("--connstr".into());

    assert_eq!(err.to_string(), "missing required option: --connstr");
}

#[test_case(GenError::MissingRequiredOption("x".into()), 2 ; "missing option")]
#[test_case(GenError::unmapped("x", "y"), 3 ; "unmapped type")]
#[test_case(GenError::Database("x".into()), 4 ; "database")]
#[test_case(GenError::TableNotFound("x".into()), 5 ; "table not found")]
#[test_case(GenError::Config("x".into()), 6 ; "config")]
#[test_case(GenError::AmbiguousTable { table: "x".into(), schemas: vec![] }, 7 ; "ambiguous table")]
fn GenError___variant___maps_to_exit_code(error: GenError, expected: u8) {
    assert_eq!(error.exit_code(), expected);
}

#[test]
fn GenError___all_variants___have_nonzero_unique_codes() {
    let errors = [
        GenError::MissingRequiredOption(String::new()),
        GenError::unmapped("", ""),
        GenError::Database(String::new()),
        GenError::TableNotFound(String::new()),
        GenError::Config(String::new()),
        GenError::AmbiguousTable {
            table: String::new(),
            schemas: Vec::new(),
        },
    ];

    let codes: std::collections::HashSet<u8> = errors.iter().map(|e| e.exit_code()).collect();

    assert_eq!(codes.len(), errors.len());
    assert!(!codes.contains(&0));
}

#[test]
fn GenError___ambiguous_table___lists_schemas_and_hint() {
    let err = GenError::AmbiguousTable {
        table: "users".into(),
        schemas: vec!["audit".into(), "dbo".into()],
    };

    assert_eq!(
        err.to_string(),
        "table 'users' exists in schemas audit, dbo; pass --schema to pick one"
    );
}
