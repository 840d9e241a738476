//! End-to-end IR-shape tests for the Aiko compiler.
//!
//! Each test compiles a complete program and checks the structure of the
//! emitted IR. The programs mirror the language's core scenarios: typed
//! declarations, ranges, mixed-type arithmetic, array bounds, structs
//! and members, functions, and input.

mod common;

use common::compile_ok;

#[test]
fn test_typed_decl_and_arithmetic_print() {
    // var x: i32 = 41; print(x + 1); prints 42
    let ir = compile_ok("var x: i32 = 41; print(x + 1);");
    assert!(ir.contains("store i32 41"), "{}", ir);
    assert!(ir.contains("%d\\0A\\00"), "{}", ir);
}

#[test]
fn test_ascending_range_loop() {
    // for i = 0 .. 3 prints 0, 1, 2
    let ir = compile_ok("for i = 0 .. 3 { print(i); }");
    assert!(ir.contains("loop_cond"), "{}", ir);
    assert!(ir.contains("icmp sle i32"), "{}", ir);
    assert!(ir.contains("loop_end"), "{}", ir);
}

#[test]
fn test_descending_literal_range_is_empty_at_runtime() {
    // for i = 3 .. 0 infers step -1, but the condition compares
    // counter <= end - 1 = -1, so the loop body never runs.
    let ir = compile_ok("for i = 3 .. 0 { print(i); }");
    assert!(ir.contains("icmp sle i32"), "{}", ir);
    assert!(ir.contains("-1"), "{}", ir);
}

#[test]
fn test_mixed_type_binary_promotes() {
    // print(1 + 2.5) promotes to f64 and prints 3.500000
    let ir = compile_ok("print(1 + 2.5);");
    assert!(ir.contains("%f\\0A\\00"), "{}", ir);
}

#[test]
fn test_array_bounds_check_machinery() {
    // print(a[5]) on a 3-element array traps at runtime
    let ir = compile_ok("var a = [10, 20, 30]; print(a[5]);");
    assert!(
        ir.contains("Runtime Error: Array index out of bounds"),
        "{}",
        ir
    );
    assert!(ir.contains("call i32 @puts"), "{}", ir);
    assert!(ir.contains("call void @exit(i32 1)"), "{}", ir);
    assert!(ir.contains("unreachable"), "{}", ir);
}

#[test]
fn test_struct_and_member_sum() {
    // struct P { x, y }; P { x: 3, y: 4 }; p.x + p.y prints 7
    let ir = compile_ok(
        "struct P { x: i32, y: i32 };\nvar p = P { x: 3, y: 4 };\nprint(p.x + p.y);",
    );
    assert!(ir.contains("%P = type { i32, i32 }"), "{}", ir);
    assert!(ir.contains("getelementptr"), "{}", ir);
}

#[test]
fn test_function_declaration_call_and_return() {
    let ir = compile_ok(
        "fun square(n: i32) { return n * n; }\nvar result = square(9);\nprint(result);",
    );
    assert!(ir.contains("define i32 @square(i32 %0)"), "{}", ir);
    assert!(ir.contains("call i32 @square(i32 9)"), "{}", ir);
    assert!(ir.contains("mul"), "{}", ir);
}

#[test]
fn test_recursive_function_compiles() {
    let ir = compile_ok(
        "fun fact(n: i32) {\n    if n <= 1 { return 1; }\n    return n * fact(n - 1);\n}\nprint(fact(5));",
    );
    assert!(ir.contains("define i32 @fact(i32 %0)"), "{}", ir);
    assert!(ir.contains("call i32 @fact"), "{}", ir);
}

#[test]
fn test_input_program_shape() {
    let ir = compile_ok("var name = input('name: ', str);\nprint(name);\nvar age = input('age: ', i32);\nprint(age);");
    assert!(ir.contains("[256 x i8]"), "{}", ir);
    assert!(ir.contains("call void @runtime_input"), "{}", ir);
    assert!(ir.contains("call i32 @atoi"), "{}", ir);
}

#[test]
fn test_typeof_strings() {
    let ir = compile_ok(
        "var a: i32 = 1;\nvar b = 2.5;\nvar c = 'x';\nprint(typeof a);\nprint(typeof b);\nprint(typeof c);",
    );
    assert!(ir.contains("i32\\00"), "{}", ir);
    assert!(ir.contains("double\\00"), "{}", ir);
    assert!(ir.contains("str\\00"), "{}", ir);
}

#[test]
fn test_string_equality_program() {
    let ir = compile_ok(
        "var password = 'secret';\nvar guess = input('guess: ', str);\nif password == guess { print('ok'); } else { print('no'); }",
    );
    assert!(ir.contains("call i32 @strcmp"), "{}", ir);
}

#[test]
fn test_nested_loops_with_break() {
    let ir = compile_ok(
        "for i = 0 .. 3 {\n    for j = 0 .. 3 {\n        if j == 2 { break; }\n        print(i * 10 + j);\n    }\n}",
    );
    assert!(ir.contains("after_break"), "{}", ir);
}

#[test]
fn test_compound_assignment_program() {
    let ir = compile_ok("var total = 0;\nfor i = 1 .. 4 { total += i; }\nprint(total);");
    assert!(ir.contains("add i32"), "{}", ir);
}

#[test]
fn test_bool_and_not_program() {
    let ir = compile_ok("var flag = true;\nif !flag { print('off'); } else { print('on'); }");
    assert!(ir.contains("xor i1"), "{}", ir);
}

#[test]
fn test_elif_chain_program() {
    let ir = compile_ok(
        "var n = 2;\nif n == 0 { print('zero'); }\nelif n == 1 { print('one'); }\nelif n == 2 { print('two'); }\nelse { print('many'); }",
    );
    assert!(ir.contains("elif0_cond"), "{}", ir);
    assert!(ir.contains("elif1_cond"), "{}", ir);
    assert!(ir.contains("else_block"), "{}", ir);
}
