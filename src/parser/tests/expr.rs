//! Expression parsing tests.

use super::*;
use crate::ast::{BinaryOperator, UnaryOperator};

/// Extracts the initializer of `var x = <expr>;`.
fn parse_init(source: &str) -> crate::ast::Expr {
    let kind = parse_single_stmt(source);
    let StmtKind::VarDecl { init: Some(init), .. } = kind else {
        panic!("expected var decl with initializer in {:?}", source);
    };
    init
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let init = parse_init("var x = 2 + 3 * 4;");
    let ExprKind::Binary { op, right, .. } = init.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(
        right.kind,
        ExprKind::Binary {
            op: BinaryOperator::Mul,
            ..
        }
    ));
}

#[test]
fn test_left_associativity_of_subtraction() {
    let init = parse_init("var x = 10 - 3 - 2;");
    let ExprKind::Binary { left, op, .. } = init.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOperator::Sub,
            ..
        }
    ));
}

#[test]
fn test_comparison_binds_tighter_than_equality() {
    let init = parse_init("var x = a < b == c < d;");
    let ExprKind::Binary { op, .. } = init.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOperator::Equal);
}

#[test]
fn test_parenthesized_expression_overrides_precedence() {
    let init = parse_init("var x = (2 + 3) * 4;");
    let ExprKind::Binary { left, op, .. } = init.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOperator::Mul);
    assert!(matches!(
        left.kind,
        ExprKind::Binary {
            op: BinaryOperator::Add,
            ..
        }
    ));
}

#[test]
fn test_unary_not_and_neg() {
    let init = parse_init("var x = !flag;");
    assert!(matches!(
        init.kind,
        ExprKind::Unary {
            op: UnaryOperator::Not,
            ..
        }
    ));

    let init = parse_init("var x = -y;");
    assert!(matches!(
        init.kind,
        ExprKind::Unary {
            op: UnaryOperator::Neg,
            ..
        }
    ));
}

#[test]
fn test_array_literal() {
    let init = parse_init("var a = [10, 20, 30];");
    let ExprKind::ArrayLiteral(elements) = init.kind else {
        panic!("expected array literal");
    };
    assert_eq!(elements.len(), 3);
}

#[test]
fn test_empty_array_literal_parses() {
    let init = parse_init("var a = [];");
    assert!(matches!(init.kind, ExprKind::ArrayLiteral(ref e) if e.is_empty()));
}

#[test]
fn test_array_access() {
    let init = parse_init("var x = a[i + 1];");
    let ExprKind::ArrayAccess { array, index } = init.kind else {
        panic!("expected array access");
    };
    assert_eq!(array, "a");
    assert!(matches!(index.kind, ExprKind::Binary { .. }));
}

#[test]
fn test_struct_init_lookahead() {
    let init = parse_init("var p = P { x: 3, y: 4 };");
    let ExprKind::StructInit { name, fields } = init.kind else {
        panic!("expected struct init");
    };
    assert_eq!(name, "P");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].0, "x");
}

#[test]
fn test_member_access_chain() {
    let init = parse_init("var x = p.x;");
    let ExprKind::MemberAccess { object, field } = init.kind else {
        panic!("expected member access");
    };
    assert_eq!(field, "x");
    assert!(matches!(object.kind, ExprKind::Identifier(ref n) if n == "p"));
}

#[test]
fn test_call_with_arguments() {
    let init = parse_init("var x = add(1, 2 * 3);");
    let ExprKind::Call { callee, args } = init.kind else {
        panic!("expected call");
    };
    assert_eq!(callee, "add");
    assert_eq!(args.len(), 2);
}

#[test]
fn test_typeof_expression() {
    let init = parse_init("var t = typeof x;");
    let ExprKind::Typeof(inner) = init.kind else {
        panic!("expected typeof");
    };
    assert!(matches!(inner.kind, ExprKind::Identifier(ref n) if n == "x"));
}

#[test]
fn test_input_with_type_token_target() {
    let init = parse_init("var n = input('age: ', i32);");
    let ExprKind::Input { prompt, target } = init.kind else {
        panic!("expected input");
    };
    assert!(prompt.is_some());
    assert_eq!(target, "i32");
}

#[test]
fn test_input_with_string_target() {
    let init = parse_init("var n = input('x: ', \"f64\");");
    let ExprKind::Input { target, .. } = init.kind else {
        panic!("expected input");
    };
    assert_eq!(target, "f64");
}

#[test]
fn test_folded_negative_literal_in_expression() {
    // `a - 1` with spaces is subtraction; the lexer would fold `-1`
    // without them.
    let init = parse_init("var x = a - 1;");
    assert!(matches!(
        init.kind,
        ExprKind::Binary {
            op: BinaryOperator::Sub,
            ..
        }
    ));
}
