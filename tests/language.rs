use std::fs;
use std::path::Path;

use picolang::{run, Error, Limits, SemanticError};
use walkdir::WalkDir;

/// Runs every `tests/programs/*.pico`. A sibling `.out` holds the expected
/// stdout, a sibling `.err` the expected error message.
#[test]
fn sample_programs() {
    let mut count = 0;

    for entry in WalkDir::new("tests/programs")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "pico"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_out = read_sibling(path, "out");
        let expected_err = read_sibling(path, "err");
        assert!(
            expected_out.is_some() || expected_err.is_some(),
            "{path:?} has neither a .out nor a .err file"
        );

        count += 1;
        let mut out = Vec::new();
        let result = run(&source, Limits::default(), &mut out);
        let stdout = String::from_utf8(out).unwrap();

        match (result, expected_err) {
            (Ok(_), None) => {}
            (Ok(_), Some(err)) => panic!("{path:?} succeeded, expected error: {}", err.trim()),
            (Err(e), None) => panic!("{path:?} failed: {e}"),
            (Err(e), Some(err)) => assert_eq!(e.to_string(), err.trim(), "{path:?}"),
        }
        if let Some(expected) = expected_out {
            assert_eq!(stdout, expected, "{path:?}");
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_sibling(path: &Path, ext: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(ext)).ok()
}

#[test]
fn hundred_and_first_variable_fails() {
    let mut source = String::new();
    for i in 0..100 {
        source.push_str(&format!("int v{i} = {i};\n"));
    }
    source.push_str("print(v99);\nint v0 = 7;\nprint(v0);\n");

    let mut out = Vec::new();
    let symbols = run(&source, Limits::default(), &mut out).unwrap();
    assert_eq!(symbols.len(), 100);
    assert_eq!(out, b"99\n7\n");

    source.push_str("int extra = 1;\nprint(extra);\n");
    let mut out = Vec::new();
    match run(&source, Limits::default(), &mut out) {
        Err(Error::Semantic {
            line: 104,
            error: SemanticError::TooManyVariables { limit: 100 },
        }) => {}
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(out, b"99\n7\n");
}

#[test]
fn expression_values_match_native_arithmetic() {
    let cases: &[(&str, i32)] = &[
        ("1 + 2 * 3 - 4 / 2", 1 + 2 * 3 - 4 / 2),
        ("100 / 7 * 7", 100 / 7 * 7),
        ("9 - 3 - 2 * 2", 9 - 3 - 2 * 2),
        ("12 / 5 + 12 / 4 * 3", 12 / 5 + 12 / 4 * 3),
        ("0 * 5 - 5", -5),
    ];
    for (expr, expected) in cases {
        let mut out = Vec::new();
        run(&format!("int r = {expr}; print(r);"), Limits::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{expected}\n"), "{expr}");
    }
}

#[test]
fn configured_lexeme_limit() {
    let limits = Limits {
        max_lexeme_len: 4,
        ..Limits::default()
    };
    let mut out = Vec::new();
    run("int abcd = 1234; print(abcd);", limits, &mut out).unwrap();
    assert_eq!(out, b"1234\n");

    let err = run("int abcde = 1;", limits, Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax Error (line 1): TOKEN_IDENTIFIER is 5 characters long, the limit is 4"
    );
}
