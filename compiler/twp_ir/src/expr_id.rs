//! Expression IDs and the arena that owns expression nodes.
//!
//! Expressions reference their children by `ExprId(u32)` rather than
//! `Box<Expr>`. An ID doubles as node identity: a rewrite can name the
//! node it replaces without holding a reference into the tree.

use std::fmt;

use crate::ast::Expr;

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Contiguous storage for every expression of one source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an expression and return its ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` expressions. The parser
    /// rejects sources larger than `u32::MAX` bytes first, and every
    /// expression consumes at least one byte.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena overflow"));
        self.exprs.push(expr);
        ExprId(index)
    }

    /// Look up an expression.
    ///
    /// # Panics
    /// Panics if `id` came from a different arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Drop every expression allocated at or after `len`.
    ///
    /// Discards a speculative parse; IDs at or past `len` must not be used
    /// afterwards.
    pub fn truncate(&mut self, len: usize) {
        self.exprs.truncate(len);
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
