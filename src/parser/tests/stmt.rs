//! Statement parsing tests.

use super::*;
use crate::ast::{BinaryOperator, Type};

#[test]
fn test_var_decl_with_type_sets_static_flag() {
    let kind = parse_single_stmt("var x: i32 = 41;");
    let StmtKind::VarDecl {
        name,
        ty,
        static_type,
        init,
    } = kind
    else {
        panic!("expected var decl");
    };
    assert_eq!(name, "x");
    assert_eq!(ty, Type::I32);
    assert!(static_type);
    assert!(init.is_some());
}

#[test]
fn test_var_decl_without_type_is_dynamic() {
    let kind = parse_single_stmt("var x = 1;");
    let StmtKind::VarDecl {
        ty, static_type, ..
    } = kind
    else {
        panic!("expected var decl");
    };
    assert_eq!(ty, Type::Unknown);
    assert!(!static_type);
}

#[test]
fn test_var_decl_without_initializer() {
    let kind = parse_single_stmt("var x: f64;");
    let StmtKind::VarDecl { ty, init, .. } = kind else {
        panic!("expected var decl");
    };
    assert_eq!(ty, Type::F64);
    assert!(init.is_none());
}

#[test]
fn test_var_decl_f32_annotation_folds_to_f64() {
    let kind = parse_single_stmt("var x: f32;");
    let StmtKind::VarDecl { ty, .. } = kind else {
        panic!("expected var decl");
    };
    assert_eq!(ty, Type::F64);
}

#[test]
fn test_assignment() {
    let kind = parse_single_stmt("x = 3;");
    let StmtKind::Assign { name, index, .. } = kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, "x");
    assert!(index.is_none());
}

#[test]
fn test_indexed_assignment() {
    let kind = parse_single_stmt("a[2] = 9;");
    let StmtKind::Assign { name, index, .. } = kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, "a");
    assert!(index.is_some());
}

#[test]
fn test_compound_assignment_desugars() {
    let kind = parse_single_stmt("x += 2;");
    let StmtKind::Assign { name, value, .. } = kind else {
        panic!("expected assignment");
    };
    assert_eq!(name, "x");
    let ExprKind::Binary { left, op, .. } = value.kind else {
        panic!("expected desugared binary value");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(left.kind, ExprKind::Identifier(ref n) if n == "x"));
}

#[test]
fn test_statement_level_call() {
    let kind = parse_single_stmt("greet('hi', 2);");
    let StmtKind::Expr(expr) = kind else {
        panic!("expected expression statement");
    };
    let ExprKind::Call { callee, args } = expr.kind else {
        panic!("expected call");
    };
    assert_eq!(callee, "greet");
    assert_eq!(args.len(), 2);
}

#[test]
fn test_if_with_elif_and_else() {
    let kind = parse_single_stmt("if a < 1 { print(1); } elif a < 2 { print(2); } elif a < 3 { } else { print(3); }");
    let StmtKind::If {
        then_block,
        elifs,
        else_block,
        ..
    } = kind
    else {
        panic!("expected if");
    };
    assert_eq!(then_block.len(), 1);
    assert_eq!(elifs.len(), 2);
    assert!(elifs[1].block.is_empty());
    assert_eq!(else_block.len(), 1);
}

#[test]
fn test_if_condition_ending_in_identifier() {
    // The buffering sub-parser keeps `x {` from parsing as a struct
    // initializer.
    let kind = parse_single_stmt("if x { print(1); }");
    let StmtKind::If { condition, .. } = kind else {
        panic!("expected if");
    };
    assert!(matches!(condition.kind, ExprKind::Identifier(ref n) if n == "x"));
}

#[test]
fn test_for_ascending_literal_bounds_step_one() {
    let kind = parse_single_stmt("for i = 0 .. 3 { print(i); }");
    let StmtKind::For { var, step, .. } = kind else {
        panic!("expected for");
    };
    assert_eq!(var, "i");
    assert!(matches!(
        step.kind,
        ExprKind::Literal(LiteralValue::I32(1))
    ));
}

#[test]
fn test_for_descending_literal_bounds_step_minus_one() {
    let kind = parse_single_stmt("for i = 3 .. 0 { print(i); }");
    let StmtKind::For { step, .. } = kind else {
        panic!("expected for");
    };
    assert!(matches!(
        step.kind,
        ExprKind::Literal(LiteralValue::I32(-1))
    ));
}

#[test]
fn test_for_non_literal_bounds_assume_step_one() {
    let kind = parse_single_stmt("for i = a .. b { }");
    let StmtKind::For { step, .. } = kind else {
        panic!("expected for");
    };
    assert!(matches!(
        step.kind,
        ExprKind::Literal(LiteralValue::I32(1))
    ));
}

#[test]
fn test_return_with_and_without_value() {
    let kind = parse_single_stmt("return;");
    assert!(matches!(kind, StmtKind::Return(None)));

    let kind = parse_single_stmt("return 1 + 2;");
    assert!(matches!(kind, StmtKind::Return(Some(_))));
}

#[test]
fn test_fun_decl_params() {
    let kind = parse_single_stmt("fun add(a: i32, b) { return a + b; }");
    let StmtKind::FunctionDecl { name, params, body } = kind else {
        panic!("expected function decl");
    };
    assert_eq!(name, "add");
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].ty, Type::I32);
    assert!(params[0].static_type);
    assert_eq!(params[1].ty, Type::Unknown);
    assert!(!params[1].static_type);
    assert_eq!(body.len(), 1);
}

#[test]
fn test_struct_decl_fields() {
    let kind = parse_single_stmt("struct P { x: i32, y: i32 };");
    let StmtKind::StructDecl { name, fields } = kind else {
        panic!("expected struct decl");
    };
    assert_eq!(name, "P");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "x");
    assert_eq!(fields[1].ty, Type::I32);
}

#[test]
fn test_break_and_continue() {
    let program = parse_source("for i = 0 .. 3 { break; continue; }");
    let StmtKind::For { body, .. } = &program.statements[0].kind else {
        panic!("expected for");
    };
    assert!(matches!(body[0].kind, StmtKind::Break));
    assert!(matches!(body[1].kind, StmtKind::Continue));
}

#[test]
fn test_nested_blocks() {
    let program = parse_source("if a { if b { print(1); } }");
    let StmtKind::If { then_block, .. } = &program.statements[0].kind else {
        panic!("expected if");
    };
    assert!(matches!(then_block[0].kind, StmtKind::If { .. }));
}
