/// Public parsing entrypoint.
///
/// Parse a token stream, driving name resolution and type checking inline.
/// Returns the node arena together with the root module declaration; the
/// module is `None` only when the module header itself could not be
/// recognized.
pub fn parse(tokens: &[Token], diags: &mut DiagnosticEngine) -> (Ast, Option<DeclId>) {
    Parser::new(tokens, diags).parse()
}
