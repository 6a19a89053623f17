//! Cells and containers.
//!
//! A [`Container`] is an insertion-ordered list of [`Cell`]s. Keys are
//! expressions, so lookup needs an evaluator and lives in `bibim_eval`;
//! this module only owns storage.
//!
//! # Borrowing
//!
//! Evaluating a key or value can reach back into the same container (a cell
//! that reads or writes its own program). Callers therefore never hold a
//! borrow of the container across evaluation: they read [`ContainerRef::len`]
//! once, then fetch each [`CellRef`] by index. Cells are never removed, so
//! indices below the snapshot stay valid while the container grows.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::value::MAX_DISPLAY_DEPTH;
use crate::{Expr, Span};

/// Shared handle to a cell.
pub type CellRef = Rc<Cell>;

/// A key/value pair of expressions.
///
/// The key is fixed at construction. The value expression is the only
/// mutable slot in the whole program graph; it changes through
/// [`Cell::set_expr`].
#[derive(Debug)]
pub struct Cell {
    key: Expr,
    value: RefCell<Expr>,
    span: Option<Span>,
}

impl Cell {
    pub fn new(key: Expr, value: Expr) -> Self {
        Cell {
            key,
            value: RefCell::new(value),
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn key(&self) -> &Expr {
        &self.key
    }

    /// Current value expression. Cheap: operator nodes are reference counted.
    pub fn value(&self) -> Expr {
        self.value.borrow().clone()
    }

    /// Replace the value expression in place.
    pub fn set_expr(&self, expr: Expr) {
        *self.value.borrow_mut() = expr;
    }

    /// Source location of the `[key; value]` form, if parsed from text.
    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

/// Insertion-ordered cell storage.
#[derive(Debug, Default)]
pub struct Container {
    cells: Vec<CellRef>,
}

impl Container {
    pub fn new() -> Self {
        Container { cells: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<CellRef> {
        self.cells.get(index).cloned()
    }

    /// Append a cell. Duplicate keys are kept; lookups return the first.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(Rc::new(cell));
    }
}

impl FromIterator<Cell> for Container {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Container {
            cells: iter.into_iter().map(Rc::new).collect(),
        }
    }
}

/// Shared, identity-compared handle to a [`Container`].
///
/// A container literal in source produces one `ContainerRef`; every
/// evaluation of that literal yields the same handle.
#[derive(Clone, Default)]
pub struct ContainerRef(Rc<RefCell<Container>>);

impl ContainerRef {
    pub fn new(container: Container) -> Self {
        ContainerRef(Rc::new(RefCell::new(container)))
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self::new(cells.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Cell at `index`. The returned handle is independent of the borrow.
    pub fn cell(&self, index: usize) -> Option<CellRef> {
        self.0.borrow().cell(index)
    }

    pub fn push(&self, cell: Cell) {
        self.0.borrow_mut().push(cell);
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &ContainerRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if depth > MAX_DISPLAY_DEPTH {
            return f.write_str("{...}");
        }
        f.write_str("{")?;
        for index in 0..self.len() {
            let Some(cell) = self.cell(index) else {
                break;
            };
            f.write_str("[")?;
            cell.key().fmt_at(f, depth + 1)?;
            f.write_str("; ")?;
            cell.value().fmt_at(f, depth + 1)?;
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

// Cells can reach the container they live in, so Debug stays shallow.
impl fmt::Debug for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerRef")
            .field("cells", &self.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

#[cfg(test)]
mod tests;
