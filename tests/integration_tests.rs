//! Integration tests for the Vela compiler front end

use std::fs;
use std::path::Path;

use vela::frontend::check_source;
use vela::frontend::diagnostics::{Severity, format_diagnostic};

/// Helper to run the full pipeline on a source file
fn compile_file(path: &Path) -> Result<(), Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| vec![e.to_string()])?;
    let unit = check_source(&source);
    if unit.is_ok() {
        Ok(())
    } else {
        Err(unit
            .diagnostics
            .diagnostics()
            .iter()
            .map(|d| d.message.clone())
            .collect())
    }
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/valid");
    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map(|e| e == "vela").unwrap_or(false) {
            let result = compile_file(&path);
            assert!(
                result.is_ok(),
                "Expected {} to compile successfully, got errors: {:?}",
                path.display(),
                result.unwrap_err()
            );
        }
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let fixtures_dir = Path::new("tests/fixtures/invalid");
    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map(|e| e == "vela").unwrap_or(false) {
            let result = compile_file(&path);
            assert!(
                result.is_err(),
                "Expected {} to fail compilation, but it succeeded",
                path.display()
            );
        }
    }
}

#[test]
fn test_checked_module_keeps_its_declared_name() {
    let unit = check_source("MODULE Clock; VAR seconds: INTEGER; BEGIN seconds := 0 END Clock.");
    assert!(unit.is_ok());
    let module = unit.module.expect("module should be produced");
    assert_eq!(unit.ast.decl(module).name, "Clock");
}

#[test]
fn test_error_counter_drives_failure() {
    let unit = check_source("MODULE Broken; VAR flag: BOOLEAN; BEGIN flag := 3 END Broken.");
    assert!(!unit.is_ok());
    assert_eq!(unit.diagnostics.error_count(), 1);
    // A best-effort module is still handed to the caller.
    assert!(unit.module.is_some());
}

#[test]
fn test_diagnostics_carry_line_and_column() {
    let source = "MODULE Broken;\nVAR flag: BOOLEAN;\nBEGIN\n  flag := 3\nEND Broken.\n";
    let unit = check_source(source);
    let diag = &unit.diagnostics.diagnostics()[0];
    assert_eq!(diag.severity, Severity::Error);

    let rendered = format_diagnostic("broken.vela", source, diag);
    assert!(rendered.contains("broken.vela:4:3"), "{rendered}");
    assert!(rendered.contains("flag := 3"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}

#[test]
fn test_multiple_errors_are_all_reported() {
    // One undeclared name and one type mismatch in independent statements:
    // recovery and sentinel substitution keep both visible.
    let source = "MODULE Two;
        VAR x: INTEGER; flag: BOOLEAN;
        BEGIN
          x := missing;
          flag := 1
        END Two.";
    let unit = check_source(source);
    assert_eq!(unit.diagnostics.error_count(), 2);
}
