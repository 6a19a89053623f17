use pretty_assertions::assert_eq;

use super::*;
use crate::Value;

#[test]
fn cells_keep_insertion_order() {
    let c = ContainerRef::from_cells([
        Cell::new(Expr::integer(2), Expr::integer(20)),
        Cell::new(Expr::integer(1), Expr::integer(10)),
    ]);
    assert_eq!(c.len(), 2);
    assert_eq!(c.cell(0).map(|cell| cell.key().clone()), Some(Expr::integer(2)));
    assert_eq!(c.cell(1).map(|cell| cell.key().clone()), Some(Expr::integer(1)));
    assert!(c.cell(2).is_none());
}

#[test]
fn set_expr_replaces_value_in_place() {
    let c = ContainerRef::from_cells([Cell::new(Expr::integer(0), Expr::integer(1))]);
    let Some(cell) = c.cell(0) else {
        panic!("missing cell");
    };
    cell.set_expr(Expr::integer(99));
    assert_eq!(c.cell(0).map(|cell| cell.value()), Some(Expr::integer(99)));
}

#[test]
fn push_while_holding_cell_handle() {
    let c = ContainerRef::default();
    c.push(Cell::new(Expr::integer(0), Expr::null()));
    let first = c.cell(0);
    c.push(Cell::new(Expr::integer(1), Expr::null()));
    assert_eq!(c.len(), 2);
    assert!(first.is_some());
}

#[test]
fn identity_equality() {
    let a = ContainerRef::default();
    let b = ContainerRef::default();
    assert_eq!(Value::Container(a.clone()), Value::Container(a.clone()));
    assert_ne!(Value::Container(a), Value::Container(b));
}

#[test]
fn display_and_debug() {
    let c = ContainerRef::from_cells([Cell::new(Expr::integer(0), Expr::integer(72))]);
    assert_eq!(c.to_string(), "{[0; 72]}");
    assert_eq!(format!("{c:?}"), "ContainerRef { cells: 1, .. }");
}

#[test]
fn span_is_optional() {
    let plain = Cell::new(Expr::integer(0), Expr::null());
    assert_eq!(plain.span(), None);
    let spanned = Cell::new(Expr::integer(0), Expr::null()).with_span(Span::new(3, 9));
    assert_eq!(spanned.span(), Some(Span::new(3, 9)));
}
