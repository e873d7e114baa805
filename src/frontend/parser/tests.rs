#[cfg(test)]
/// Parser + semantic-action unit tests.
///
/// These tests run the whole front end on small sources and assert on the
/// produced tree and the exact diagnostics, with particular attention to
/// error recovery (no cascades, siblings still checked).
mod tests {
    use super::*;
    use crate::frontend::ast::{DeclKind, ExprKind, ModuleDecl, ProcDecl, Stmt};
    use crate::frontend::diagnostics::Severity;
    use crate::frontend::lexer;

    struct Checked {
        ast: Ast,
        module: Option<DeclId>,
        diags: DiagnosticEngine,
    }

    fn check(source: &str) -> Checked {
        let mut diags = DiagnosticEngine::new();
        let tokens = lexer::tokenize(source, &mut diags);
        let (ast, module) = parse(&tokens, &mut diags);
        Checked { ast, module, diags }
    }

    fn error_ids(checked: &Checked) -> Vec<DiagId> {
        checked
            .diags
            .diagnostics()
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.id)
            .collect()
    }

    fn module_data(checked: &Checked) -> &ModuleDecl {
        let module = checked.module.expect("module header should be produced");
        let DeclKind::Module(m) = &checked.ast.decl(module).kind else {
            panic!("root declaration should be a module");
        };
        m
    }

    fn proc_data<'a>(checked: &'a Checked, name: &str) -> &'a ProcDecl {
        let m = module_data(checked);
        let proc = m
            .decls
            .iter()
            .copied()
            .find(|&d| checked.ast.decl(d).name == name)
            .expect("procedure should be declared");
        let DeclKind::Proc(p) = &checked.ast.decl(proc).kind else {
            panic!("'{}' should be a procedure", name);
        };
        p
    }

    // ========================================================================
    // Valid programs
    // ========================================================================

    #[test]
    fn test_valid_program_has_no_errors() {
        let checked = check(
            "MODULE Gcd;
             VAR a, b, t: INTEGER;
             PROCEDURE Rem(x, y: INTEGER): INTEGER;
             BEGIN
               WHILE x >= y DO x := x - y END;
               RETURN x
             END Rem;
             BEGIN
               a := 35; b := 14;
               WHILE b # 0 DO
                 t := Rem(a, b); a := b; b := t
               END
             END Gcd.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
        let module = checked.module.unwrap();
        assert_eq!(checked.ast.decl(module).name, "Gcd");
        // a, b, t and Rem.
        assert_eq!(module_data(&checked).decls.len(), 4);
        assert_eq!(module_data(&checked).stmts.len(), 3);
    }

    #[test]
    fn test_recursive_procedure_sees_its_own_header() {
        // The header is bound in the enclosing scope before the body is
        // parsed, so the recursive call resolves.
        let checked = check(
            "MODULE M;
             PROCEDURE f(n: INTEGER): INTEGER;
             BEGIN RETURN f(n) END f;
             END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    #[test]
    fn test_nested_procedure_reads_outer_local() {
        let checked = check(
            "MODULE M;
             PROCEDURE Outer;
               VAR x: INTEGER;
               PROCEDURE Inner(): INTEGER;
               BEGIN RETURN x END Inner;
             BEGIN x := Inner() END Outer;
             END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    #[test]
    fn test_true_and_false_are_predefined_constants() {
        let checked = check("MODULE M; VAR b: BOOLEAN; BEGIN b := TRUE; b := NOT FALSE END M.");
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    #[test]
    fn test_constant_declaration_types_from_expression() {
        let checked = check(
            "MODULE M;
             CONST answer = 6 * 7; truth = TRUE;
             VAR x: INTEGER; b: BOOLEAN;
             BEGIN x := answer; b := truth END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    #[test]
    fn test_var_parameter_accepts_variable_argument() {
        let checked = check(
            "MODULE M;
             VAR x: INTEGER;
             PROCEDURE Inc(VAR n: INTEGER);
             BEGIN n := n + 1 END Inc;
             BEGIN Inc(x) END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    // ========================================================================
    // Scopes and redeclaration
    // ========================================================================

    #[test]
    fn test_same_scope_redeclaration_reports_once_and_first_wins() {
        let checked = check(
            "MODULE M;
             VAR x: INTEGER;
             VAR x: BOOLEAN;
             BEGIN x := 1 END M.",
        );
        // Exactly one redeclaration error; `x := 1` resolves to the first
        // (INTEGER) declaration and is therefore well-typed.
        assert_eq!(error_ids(&checked), vec![DiagId::AlreadyDeclared]);
        // The second declaration is not bound into the module.
        let names: Vec<_> = module_data(&checked)
            .decls
            .iter()
            .map(|&d| checked.ast.decl(d).name.clone())
            .collect();
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn test_inner_declaration_shadows_outer_within_body_only() {
        let checked = check(
            "MODULE M;
             VAR x: INTEGER;
             PROCEDURE P;
               VAR x: BOOLEAN;
             BEGIN x := TRUE END P;
             BEGIN x := 1 END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));

        // Inside P the assignment targets the BOOLEAN shadow…
        let p = proc_data(&checked, "P");
        let Stmt::Assign(inner) = checked.ast.stmt(p.stmts[0]) else {
            panic!("expected assignment in P");
        };
        let DeclKind::Var(v) = &checked.ast.decl(inner.target).kind else {
            panic!("target should be a variable");
        };
        assert_eq!(v.ty, Ast::BOOLEAN);

        // …while the module body resolves to the outer INTEGER variable.
        let Stmt::Assign(outer) = checked.ast.stmt(module_data(&checked).stmts[0]) else {
            panic!("expected assignment in module body");
        };
        let DeclKind::Var(v) = &checked.ast.decl(outer.target).kind else {
            panic!("target should be a variable");
        };
        assert_eq!(v.ty, Ast::INTEGER);
    }

    // ========================================================================
    // Type checking
    // ========================================================================

    #[test]
    fn test_assignment_type_mismatch_still_produces_the_statement() {
        let checked = check("MODULE M; VAR x: BOOLEAN; BEGIN x := 1 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::AssignmentTypeMismatch]);
        // The assignment node is still in the tree.
        let stmts = &module_data(&checked).stmts;
        assert_eq!(stmts.len(), 1);
        assert!(matches!(checked.ast.stmt(stmts[0]), Stmt::Assign(_)));
    }

    #[test]
    fn test_constant_from_variable_is_rejected() {
        let checked = check("MODULE M; VAR x: INTEGER; CONST c = x; BEGIN END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::ConstantValueExpected]);
    }

    #[test]
    fn test_operator_type_mismatch_reports_once() {
        // The inner mismatch poisons the expression with the error type;
        // the outer addition and the assignment stay quiet.
        let checked = check("MODULE M; VAR x: INTEGER; BEGIN x := (1 + TRUE) + 2 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::OperatorOperandMismatch]);
    }

    #[test]
    fn test_conditions_must_be_boolean() {
        let checked = check(
            "MODULE M; VAR x: INTEGER;
             BEGIN
               IF 1 THEN x := 1 END;
               WHILE 2 DO x := 2 END
             END M.",
        );
        assert_eq!(
            error_ids(&checked),
            vec![DiagId::IfConditionNotBoolean, DiagId::WhileConditionNotBoolean]
        );
        assert_eq!(module_data(&checked).stmts.len(), 2);
    }

    #[test]
    fn test_relational_operands_must_match() {
        let checked = check("MODULE M; VAR b: BOOLEAN; BEGIN b := 1 = TRUE END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::OperatorOperandMismatch]);
    }

    #[test]
    fn test_prefix_operators_are_typed() {
        let checked = check("MODULE M; VAR b: BOOLEAN; BEGIN b := -TRUE END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::OperatorOperandMismatch]);
    }

    #[test]
    fn test_undeclared_name_reports_once_without_cascades() {
        let checked = check("MODULE M; VAR x: INTEGER; BEGIN x := y END M.");
        // One undeclared-name error; no follow-on assignment mismatch.
        assert_eq!(error_ids(&checked), vec![DiagId::Undeclared]);
    }

    #[test]
    fn test_type_position_requires_a_type_name() {
        let checked = check("MODULE M; VAR a: INTEGER; VAR x: a; BEGIN END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::TypeNameExpected]);
    }

    #[test]
    fn test_integer_literal_out_of_range() {
        let checked =
            check("MODULE M; VAR x: INTEGER; BEGIN x := 99999999999999999999 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::IntegerTooLarge]);
    }

    // ========================================================================
    // Calls
    // ========================================================================

    #[test]
    fn test_call_argument_checking() {
        let checked = check(
            "MODULE M;
             VAR x: INTEGER;
             PROCEDURE P(a: INTEGER; VAR out: INTEGER);
             BEGIN out := a END P;
             BEGIN
               P(1);
               P(TRUE, x);
               P(1, 2)
             END M.",
        );
        assert_eq!(
            error_ids(&checked),
            vec![
                DiagId::ArgumentCountMismatch,
                DiagId::ArgumentTypeMismatch,
                DiagId::VarArgumentNotVariable,
            ]
        );
    }

    #[test]
    fn test_function_called_as_statement_is_only_a_warning() {
        let checked = check(
            "MODULE M;
             PROCEDURE f(): INTEGER;
             BEGIN RETURN 1 END f;
             BEGIN f() END M.",
        );
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
        assert!(
            checked
                .diags
                .diagnostics()
                .iter()
                .any(|d| d.id == DiagId::DiscardedResult)
        );
    }

    #[test]
    fn test_proper_procedure_in_expression_is_an_error() {
        let checked = check(
            "MODULE M;
             VAR x: INTEGER;
             PROCEDURE P; END P;
             BEGIN x := P() END M.",
        );
        assert_eq!(error_ids(&checked), vec![DiagId::NoReturnValue]);
    }

    #[test]
    fn test_calling_a_variable_is_an_error() {
        let checked = check("MODULE M; VAR x: INTEGER; BEGIN x() END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::NotCallable]);
    }

    // ========================================================================
    // RETURN checking
    // ========================================================================

    #[test]
    fn test_return_value_in_proper_procedure() {
        let checked = check("MODULE M; PROCEDURE P; BEGIN RETURN 1 END P; END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::ReturnValueUnexpected]);
    }

    #[test]
    fn test_return_without_value_in_function() {
        let checked = check(
            "MODULE M; PROCEDURE f(): INTEGER; BEGIN RETURN END f; END M.",
        );
        assert_eq!(error_ids(&checked), vec![DiagId::ReturnValueMissing]);
    }

    #[test]
    fn test_return_type_mismatch() {
        let checked = check(
            "MODULE M; PROCEDURE f(): INTEGER; BEGIN RETURN TRUE END f; END M.",
        );
        assert_eq!(error_ids(&checked), vec![DiagId::ReturnTypeMismatch]);
    }

    // ========================================================================
    // Closing names and qualified identifiers
    // ========================================================================

    #[test]
    fn test_module_closing_name_must_match() {
        let checked = check("MODULE M; END N.");
        assert_eq!(error_ids(&checked), vec![DiagId::ModuleNameMismatch]);
        assert_eq!(checked.ast.decl(checked.module.unwrap()).name, "M");
    }

    #[test]
    fn test_procedure_closing_name_must_match() {
        let checked = check("MODULE M; PROCEDURE P; END Q; END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::ProcedureNameMismatch]);
    }

    #[test]
    fn test_dot_through_non_module_is_a_syntax_error() {
        // The qualident leaves the dot unconsumed; the statement then
        // reports a single syntax error and recovery keeps going.
        let checked = check("MODULE M; VAR x: INTEGER; BEGIN x.y := 1 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::Expected]);
    }

    #[test]
    fn test_module_qualified_self_reference() {
        // Member lists are attached when the module is finished, so a
        // qualified reference from inside the module body does not
        // resolve. The name reports once and stays quiet after.
        let checked = check("MODULE M; BEGIN M.x := 1 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::Undeclared]);
    }

    // ========================================================================
    // Imports
    // ========================================================================

    #[test]
    fn test_from_import_of_unknown_module_is_bounded() {
        // One error for the unknown module; the imported name binds the
        // error sentinel so its later use stays quiet.
        let checked = check("MODULE M; FROM Unknown IMPORT a; BEGIN a := 1 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::Undeclared]);
    }

    #[test]
    fn test_plain_import_of_unknown_name() {
        let checked = check("MODULE M; IMPORT a; BEGIN a := 1 END M.");
        assert_eq!(error_ids(&checked), vec![DiagId::Undeclared]);
    }

    #[test]
    fn test_from_import_through_non_module() {
        let checked = check(
            "MODULE M; VAR v: INTEGER; BEGIN END M.",
        );
        assert_eq!(checked.diags.error_count(), 0);
        let checked = check(
            "MODULE M; FROM INTEGER IMPORT a; BEGIN END M.",
        );
        assert_eq!(error_ids(&checked), vec![DiagId::QualifierNotModule]);
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    #[test]
    fn test_recovery_keeps_the_following_statement() {
        let checked = check(
            "MODULE M; VAR x: INTEGER;
             BEGIN
               x := ;
               x := 2
             END M.",
        );
        // One diagnostic for the malformed statement…
        assert_eq!(error_ids(&checked), vec![DiagId::Expected]);
        // …and the valid sibling is still in the tree.
        let stmts = &module_data(&checked).stmts;
        assert_eq!(stmts.len(), 1);
        let Stmt::Assign(assign) = checked.ast.stmt(stmts[0]) else {
            panic!("expected the second assignment to survive");
        };
        let ExprKind::IntegerLiteral(lit) = &checked.ast.expr(assign.value).kind else {
            panic!("expected a literal value");
        };
        assert_eq!(lit.value, 2);
    }

    #[test]
    fn test_recovery_keeps_the_following_declaration() {
        let checked = check(
            "MODULE M;
             VAR x: ;
             VAR y: INTEGER;
             BEGIN y := 1 END M.",
        );
        // The malformed declaration reports once; `y` is still declared
        // and usable.
        assert_eq!(error_ids(&checked), vec![DiagId::Expected]);
    }

    #[test]
    fn test_end_of_input_during_recovery_unwinds() {
        let checked = check("MODULE M; BEGIN x :=");
        // A best-effort module header is still returned.
        assert!(checked.module.is_some());
        assert!(checked.diags.has_errors());
    }

    #[test]
    fn test_empty_statement_sequences_are_tolerated() {
        let checked = check("MODULE M; VAR x: INTEGER; BEGIN x := 1; END M.");
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));

        let checked = check("MODULE M; BEGIN END M.");
        assert_eq!(checked.diags.error_count(), 0, "{:?}", error_ids(&checked));
    }

    #[test]
    fn test_garbage_input_produces_no_module() {
        let checked = check("x + 1");
        assert!(checked.module.is_none());
        assert!(checked.diags.has_errors());
    }
}
