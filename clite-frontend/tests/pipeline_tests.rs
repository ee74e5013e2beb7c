//! End-to-end tests: source text through lexer, parser and type checker

use clite_common::{CompilerError, Diagnostic, ErrorHandler, Position, Stage};
use clite_frontend::*;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// Handler that records every diagnostic it receives
fn capture() -> (ErrorHandler, Rc<RefCell<Vec<Diagnostic>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handler: ErrorHandler = Rc::new(move |d: &Diagnostic| sink.borrow_mut().push(d.clone()));
    (handler, seen)
}

fn quiet() -> ErrorHandler {
    Rc::new(|_: &Diagnostic| {})
}

const FACTORIAL: &str = r#"
// compute n!
int main() {
    int n, i;
    float result;
    bool done;

    n = 10;
    i = 1;
    result = 1;
    done = false;
    while (!done) {
        result = result * float(i);
        i = i + 1;
        if (i > n) done = true else ;
    }
}
"#;

#[test]
fn test_minimal_program_round_trip() {
    let program = Frontend::check_source_with_handler("int main(){int a; a=1;}", quiet())
        .expect("program is valid");

    assert_eq!(program.declarations, vec![Decl::variable("a", Type::Int)]);
    assert_eq!(
        program.body,
        vec![Stmt::assign("a", Expr::Value(Value::Int(1))), Stmt::Skip]
    );
}

#[test]
fn test_factorial_program_checks() {
    let (handler, seen) = capture();
    let program =
        Frontend::check_source_with_handler(FACTORIAL, handler).expect("program is valid");

    assert!(seen.borrow().is_empty());
    assert_eq!(program.declarations.len(), 4);

    let type_map = TypeMap::build(&program).expect("no duplicates");
    assert_eq!(type_map.to_string(), "{n: int, i: int, result: float, done: bool}");
}

#[test]
fn test_duplicate_declaration_stops_before_statements() {
    let (handler, seen) = capture();
    let result = Frontend::check_source_with_handler("int main(){int a; int a; b = 1;}", handler);

    assert_eq!(
        result,
        Err(CompilerError::DuplicateDeclaration { name: "a".to_string() })
    );
    // `b` is undeclared, but no statement was ever checked
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_coercion_rules() {
    let source = "int main() { int a; char c; a = 'a'; c = 1; }";
    let program = Frontend::parse_source_with_handler(source, quiet()).expect("parses");

    let (handler, seen) = capture();
    let mut checker = TypeChecker::with_handler(&program, handler).expect("no duplicates");
    let report = checker.check(&program);

    assert_eq!(report.error_count, 1);
    assert_eq!(seen.borrow()[0].message, "Cannot assign int to `c` of type char");

    assert_eq!(
        Frontend::check_source_with_handler(source, quiet()),
        Err(CompilerError::rejected(Stage::TypeCheck, 1))
    );
}

#[test]
fn test_int_widens_to_float() {
    let result = Frontend::check_source_with_handler(
        "int main() { int i; float f; f = i; f = i + f; i = f; }",
        quiet(),
    );
    assert_eq!(result, Err(CompilerError::rejected(Stage::TypeCheck, 1)));
}

#[test]
fn test_check_twice_gives_same_result() {
    let program = Frontend::parse_source_with_handler(FACTORIAL, quiet()).expect("parses");
    let mut checker = TypeChecker::with_handler(&program, quiet()).expect("no duplicates");

    assert_eq!(checker.check(&program), CheckReport { error_count: 0 });
    assert_eq!(checker.check(&program), CheckReport { error_count: 0 });
}

#[test]
fn test_type_errors_are_all_reported() {
    let source = r#"
int main() {
    int i;
    bool b;
    i = b + 1;
    if (i) b = x;
    while (b == 1) i = -b;
}
"#;
    let program = Frontend::parse_source_with_handler(source, quiet()).expect("parses");
    let (handler, seen) = capture();
    let mut checker = TypeChecker::with_handler(&program, handler).expect("no duplicates");

    let report = checker.check(&program);
    let messages: Vec<String> = seen.borrow().iter().map(|d| d.message.clone()).collect();

    assert_eq!(
        messages,
        vec![
            "Operator `+` cannot be applied to bool and int",
            "Test of if statement must be bool, found int",
            "Undefined variable `x`",
            "Operator `==` cannot be applied to bool and int",
            "Invalid operand of type bool for `-`",
        ]
    );
    assert_eq!(report.error_count, 5);
}

#[test]
fn test_long_expression_checks() {
    let sum = vec!["a"; 5000].join(" + ");
    let source = format!("int main() {{ int a; a = {}; }}", sum);

    // parsing is iterative, but walking and dropping the tree recurse
    let worker = std::thread::Builder::new().stack_size(64 * 1024 * 1024);
    let result = worker
        .spawn(move || Frontend::check_source_with_handler(&source, quiet()).map(|p| p.body.len()))
        .expect("spawn frontend thread")
        .join()
        .expect("frontend thread");

    assert_eq!(result, Ok(2));
}

#[test]
fn test_syntax_errors_carry_positions() {
    let (handler, seen) = capture();
    let result = Frontend::parse_source_with_handler("int main() {\n  int a\n  a = 1;\n}", handler);

    assert_eq!(result, Err(CompilerError::rejected(Stage::Parse, 1)));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].message, "Expected ; in declaration, found IDENT `a`");
    assert_eq!(seen[0].position, Some(Position::new(23, 3, 3)));
}

#[test]
fn test_parser_recovers_and_keeps_going() {
    let mut parser = Parser::new(Lexer::with_handler(
        "int main() { int a; a = (1 + 2; a = 3; ) a = 4; }",
        quiet(),
    ));
    let program = parser.parse_program();

    // the missing `)` and the stray `)` are both reported
    assert_eq!(parser.error_count(), 2);
    assert_eq!(
        program.body,
        vec![
            Stmt::assign(
                "a",
                Expr::binary(BinaryOp::Add, Value::Int(1).into(), Value::Int(2).into()),
            ),
            Stmt::Skip,
            Stmt::assign("a", Value::Int(3).into()),
            Stmt::Skip,
            Stmt::assign("a", Value::Int(4).into()),
            Stmt::Skip,
        ]
    );
}

#[test]
fn test_truncated_source_terminates() {
    for source in [
        "",
        "int",
        "int main",
        "int main() {",
        "int main() { if (",
        "int main() { while (a) {",
    ] {
        let result = Frontend::parse_source_with_handler(source, quiet());
        assert!(
            matches!(result, Err(CompilerError::Rejected { stage: Stage::Parse, .. })),
            "{:?} should be rejected",
            source
        );
    }
}

#[test]
fn test_traversal_over_parsed_program() {
    let program = Frontend::parse_source_with_handler(FACTORIAL, quiet()).expect("parses");

    let mut loops = 0;
    let mut variables = Vec::new();
    inspect(Node::Program(&program), |node| {
        match node {
            Node::Stmt(Stmt::Loop { .. }) => loops += 1,
            Node::Variable(var) => variables.push(var.name().to_string()),
            _ => {}
        }
        true
    });

    assert_eq!(loops, 1);
    assert_eq!(
        variables,
        vec!["n", "i", "result", "done", "result", "i", "done"]
    );
}

#[test]
fn test_ast_serializes_to_json() {
    let program = Frontend::parse_source_with_handler(
        "int main() { bool b; if (b) b = !b; }",
        quiet(),
    )
    .expect("parses");

    let json = serde_json::to_value(&program).expect("AST serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "declarations": [
                { "Variable": { "name": "b", "ty": "Bool" } }
            ],
            "body": [
                {
                    "Conditional": {
                        "test": { "Variable": "b" },
                        "then_branch": {
                            "Assignment": {
                                "target": "b",
                                "source": {
                                    "Unary": { "op": "Not", "operand": { "Variable": "b" } }
                                }
                            }
                        },
                        "else_branch": null
                    }
                },
                "Skip"
            ]
        })
    );
}
