//! Integration tests for the whole front end.
//!
//! These drive source text through tokenization, parsing and semantic
//! analysis and check the diagnostics that come out.

use frontend::{
    ast::{ast::Program, items::PrimaryTagKind},
    check,
    config::FrontendConfig,
    errors::errors::{Error, ErrorKind},
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::type_checker::type_check,
};
use pretty_assertions::assert_eq;

const CONFORMANCE: &str = "enum E { };\n\
    struct S { a : i32; };\n\
    export func f(y : u32, z : f32) : i32 { x : u32 = 10; continue; }\n\
    const z : f32;";

fn kinds(source: &str) -> Vec<ErrorKind> {
    check(source, &FrontendConfig::default())
        .iter()
        .map(Error::kind)
        .collect()
}

#[test]
fn test_conformance_program() {
    let tokens = tokenize(CONFORMANCE).unwrap();
    assert!(tokens.len() > 1);

    let program = parse(&tokens, CONFORMANCE, &FrontendConfig::default()).unwrap();
    let root = program.ast.get(program.root);
    let tags: Vec<PrimaryTagKind> = program
        .ast
        .list(root.tags)
        .map(|tag| program.ast.get(tag).kind)
        .collect();

    assert_eq!(tags.len(), 4);
    assert!(matches!(tags[0], PrimaryTagKind::Enum(_)));
    assert!(matches!(tags[1], PrimaryTagKind::Struct(_)));
    assert!(matches!(tags[2], PrimaryTagKind::Function(_)));
    assert!(matches!(tags[3], PrimaryTagKind::Declaration(_)));

    let (_, errors) = type_check(&program, &FrontendConfig::default());
    assert_eq!(errors, vec![]);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("// nothing here\n"), vec![]);
}

#[test]
fn test_redeclaration_in_block() {
    assert_eq!(
        kinds("func f() : i32 { x : u32 = 1; x : u32 = 2; }"),
        vec![ErrorKind::Redeclaration]
    );
}

#[test]
fn test_shadowing_in_inner_block() {
    assert_eq!(
        kinds("func f() : i32 { x : u32 = 1; { x : u32 = 2; } }"),
        vec![]
    );
}

#[test]
fn test_widening_and_mismatch() {
    assert_eq!(kinds("x : u8 = 10;"), vec![]);
    assert_eq!(kinds("x : u32 = true;"), vec![ErrorKind::TypeMismatch]);
}

#[test]
fn test_struct_member_resolution() {
    let header = "struct S { a : i32; };\ns : S;\n";

    assert_eq!(kinds(&format!("{}t : i32 = s.a;", header)), vec![]);
    assert_eq!(
        kinds(&format!("{}t : i32 = s.b;", header)),
        vec![ErrorKind::InvalidMemberAccess]
    );
}

#[test]
fn test_function_calls() {
    let function = "func f(y : u32) : i32 { return 0; }\n";

    assert_eq!(kinds(&format!("{}x : i32 = f(1);", function)), vec![]);
    assert_eq!(
        kinds(&format!("{}x : i32 = f();", function)),
        vec![ErrorKind::ArityMismatch]
    );
    assert_eq!(
        kinds(&format!("{}x : i32 = f(1, 2);", function)),
        vec![ErrorKind::ArityMismatch]
    );
    assert_eq!(
        kinds(&format!("{}x : i32 = f(true);", function)),
        vec![ErrorKind::TypeMismatch]
    );
}

#[test]
fn test_mutual_recursion_through_forward_declaration() {
    let source = "func even(n : u32) : u32;\n\
        func odd(n : u32) : u32 { if n == 0 { return 0; } return even(n - 1); }\n\
        func even(n : u32) : u32 { if n == 0 { return 1; } return odd(n - 1); }";

    assert_eq!(kinds(source), vec![]);
}

#[test]
fn test_larger_program() {
    let source = r#"
        // Shapes and a counter.
        enum Shape { Circle, Square, Triangle };

        struct Point { x : f32; y : f32; };

        struct Counter {
            count : u32;
            shape : Shape;
            origin : Point;
        };

        mut total : u32 = 0;
        default_shape : Shape = Shape.Circle;

        export func bump(c : Counter, by : u32) : u32 {
            : bump_body;
            next : u32 = c.count + by;
            if next > 100 and c.origin.x > 0.5 {
                return 100;
            } else {
                total = total + 1;
            }
            while next > 10 {
                next = next - 10;
                if next == 50 { break; }
            }
            c.origin.x = 1.5;
            return next;
        }
    "#;

    assert_eq!(kinds(source), vec![]);
}

#[test]
fn test_errors_accumulate_in_order() {
    let source = "x : u32 = true;\n\
        func f() : i32 { return y; }\n\
        enum E { A };\n\
        e : E = E.B;";

    assert_eq!(
        kinds(source),
        vec![
            ErrorKind::TypeMismatch,
            ErrorKind::UnresolvedIdentifier,
            ErrorKind::InvalidMemberAccess,
        ]
    );

    let errors = check(source, &FrontendConfig::first_error_only());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_lex_error_invalid_token() {
    let errors = check("x : u32 = #;", &FrontendConfig::default());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::UnrecognisedToken);
    assert_eq!(errors[0].get_position(), 10);
}

#[test]
fn test_parse_error_missing_semicolon() {
    let errors = check("x : u32 = 1\ny : u32;", &FrontendConfig::default());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::UnexpectedToken);
}

#[test]
fn test_render_analysis_error() {
    let source = "func f() : i32 {\n    x : u32 = true;\n    return 0;\n}\n";
    let errors = check(source, &FrontendConfig::default());
    assert_eq!(errors.len(), 1);

    let rendered = render_error(&errors[0], source, "main.lang");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Error: TypeMismatch (Expected type `u32`, received `bool`)",
            "-> main.lang",
            "  |",
            "2 | x : u32 = true;",
            "  | ----------^",
        ]
    );
}

#[test]
fn test_program_borrows_source() {
    let source = String::from("s : u32 = 1;");
    let tokens = tokenize(&source).unwrap();
    let program: Program = parse(&tokens, &source, &FrontendConfig::default()).unwrap();

    assert_eq!(program.source, source.as_str());
    assert_eq!(program.token_text(frontend::ast::ast::TokenId(0)), "s");
}
