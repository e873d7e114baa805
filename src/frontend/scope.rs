//! Scope chain for name resolution
//!
//! One [`Scope`] frame exists per lexical block (the global built-ins, the
//! module, and each procedure body). Frames are pushed when a block is
//! entered and popped when its parse completes; lookup walks the chain
//! innermost-first, so inner declarations shadow outer ones while
//! same-block redeclaration is rejected.

use std::collections::HashMap;

use crate::frontend::ast::DeclId;

/// A single lexical scope: the bindings of one block.
#[derive(Debug, Default)]
pub struct Scope {
    symbols: HashMap<String, DeclId>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` in this scope if it is not already bound here.
    ///
    /// Returns the previously bound declaration on conflict; reporting the
    /// redeclaration is the caller's responsibility.
    pub fn insert(&mut self, name: &str, decl: DeclId) -> Result<(), DeclId> {
        match self.symbols.get(name) {
            Some(&existing) => Err(existing),
            None => {
                self.symbols.insert(name.to_string(), decl);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<DeclId> {
        self.symbols.get(name).copied()
    }
}

/// Stack of nested scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopeChain {
    frames: Vec<Scope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new innermost scope.
    pub fn push(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Leave the innermost scope, discarding its bindings.
    pub fn pop(&mut self) {
        self.frames.pop();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bind `name` in the innermost scope. See [`Scope::insert`].
    pub fn insert(&mut self, name: &str, decl: DeclId) -> Result<(), DeclId> {
        let frame = self
            .frames
            .last_mut()
            .expect("INVARIANT: insert requires an active scope");
        frame.insert(name, decl)
    }

    /// Look up `name` walking the chain innermost-first.
    pub fn lookup(&self, name: &str) -> Option<DeclId> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::Ast;

    #[test]
    fn test_chained_lookup_and_shadowing() {
        let mut scopes = ScopeChain::new();
        scopes.push();
        scopes.insert("x", Ast::INTEGER).unwrap();

        scopes.push();
        // Outer binding visible through the chain.
        assert_eq!(scopes.lookup("x"), Some(Ast::INTEGER));

        // Shadowing across scopes is always permitted.
        scopes.insert("x", Ast::BOOLEAN).unwrap();
        assert_eq!(scopes.lookup("x"), Some(Ast::BOOLEAN));

        scopes.pop();
        // The shadow is gone with its scope.
        assert_eq!(scopes.lookup("x"), Some(Ast::INTEGER));
    }

    #[test]
    fn test_same_scope_redeclaration_is_rejected() {
        let mut scopes = ScopeChain::new();
        scopes.push();
        scopes.insert("x", Ast::INTEGER).unwrap();
        assert_eq!(scopes.insert("x", Ast::BOOLEAN), Err(Ast::INTEGER));
        // The first binding wins.
        assert_eq!(scopes.lookup("x"), Some(Ast::INTEGER));
    }

    #[test]
    fn test_lookup_after_pop_misses_inner_names() {
        let mut scopes = ScopeChain::new();
        scopes.push();
        scopes.push();
        scopes.insert("local", Ast::TRUE).unwrap();
        assert!(scopes.lookup("local").is_some());
        scopes.pop();
        assert!(scopes.lookup("local").is_none());
    }
}
