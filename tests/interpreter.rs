#[cfg(test)]
mod interpreter_tests {
    use emolang as emo;

    use emo::ast::{Node, UnaryOp};
    use emo::environment::{Context, DEFAULT_ALIASES};
    use emo::error::LangError;
    use emo::interpreter::Interpreter;
    use emo::parser::{Parser, MAX_TERMS};
    use emo::{run_source, DEMO_SOURCE};
    use emo::scanner::tokenize;
    use emo::token::{Token, TokenKind};
    use emo::value::Value;

    /// Runs `source` and returns everything it printed plus the final context.
    fn run(source: &str) -> (String, Context) {
        let mut out: Vec<u8> = Vec::new();
        let ctx = run_source(source, &mut out).expect("program should run");

        (String::from_utf8(out).unwrap(), ctx)
    }

    /// Runs `source` expecting a failure; returns the error and what was
    /// printed before it.
    fn run_err(source: &str) -> (LangError, String) {
        let tokens = tokenize(source).unwrap();
        let program = Parser::new(&tokens).parse().unwrap();

        let mut ctx = Context::new();
        let mut interpreter = Interpreter::new(Vec::new());
        let err = interpreter
            .run(&program, &mut ctx)
            .expect_err("program should fail");

        (err, String::from_utf8(interpreter.into_inner()).unwrap())
    }

    #[test]
    fn test_arithmetic_and_print() {
        let (out, _) = run("cat = 5 + 9 + (4 - 6)#; print cat#;");

        assert_eq!(out, "12\n");
    }

    #[test]
    fn test_alias_override_by_bare_name() {
        let (out, ctx) = run("ejkey cat 😺#; ejprint cat#;");

        assert_eq!(out, "😺\n");
        assert_eq!(ctx.aliases().get("cat"), Some("😺"));
        assert!(!ctx.scope().contains("cat"));
    }

    #[test]
    fn test_default_aliases_are_seeded() {
        let (out, _) = run("ejprint love#; ejprint santa#; ejprint slipe#; ejprint angry#; ejprint pumpkin#;");

        assert_eq!(out, "😍\n🎅\n💤\n🤬\n🎃\n");
        assert_eq!(Context::new().aliases().len(), DEFAULT_ALIASES.len());
    }

    #[test]
    fn test_unknown_alias_prints_its_key() {
        let (out, _) = run("ejprint somethingundefined#;");

        assert_eq!(out, "somethingundefined\n");
    }

    #[test]
    fn test_zero_is_a_defined_value() {
        let (out, ctx) = run("x = 0#; print x#;");

        assert_eq!(out, "0\n");
        assert_eq!(ctx.scope().get("x"), Some(&Value::Int(0)));
    }

    #[test]
    fn test_undefined_variable_halts_the_run() {
        let (err, out) = run_err("print missing#; print 1#;");

        assert!(matches!(err, LangError::UndefinedVariable { ref name } if name == "missing"));
        assert_eq!(out, "");
    }

    #[test]
    fn test_output_before_failure_is_kept() {
        let (err, out) = run_err("print 1#; y = nope + 1#; print 2#;");

        assert!(matches!(err, LangError::UndefinedVariable { .. }));
        assert_eq!(out, "1\n");
    }

    #[test]
    fn test_demo_program() {
        let (out, ctx) = run(DEMO_SOURCE);

        assert_eq!(out, "12\n😍\n🎅\n21\n😺\ni love you\n");
        assert_eq!(ctx.scope().get("pasha"), Some(&Value::Int(15)));
        assert_eq!(ctx.scope().len(), 2);
    }

    #[test]
    fn test_alias_value_from_bare_name_is_not_looked_up() {
        let (out, _) = run("dog = 7#; ejkey pet dog#; ejprint pet#;");

        assert_eq!(out, "dog\n");
    }

    #[test]
    fn test_ejprint_with_expression_key() {
        let (out, _) = run("ejprint \"love\"#; ejprint \"lo\" + \"ve\"#; ejprint 5#;");

        assert_eq!(out, "😍\n😍\n5\n");
    }

    #[test]
    fn test_ejprint_ignores_scope_binding() {
        let (out, _) = run("love = 3#; ejprint love#;");

        assert_eq!(out, "😍\n");
    }

    #[test]
    fn test_strings_print_unquoted_and_concatenate() {
        let (out, _) = run("s = \"ab\" + \"cd\"#; print s#; print \"\"#;");

        assert_eq!(out, "abcd\n\n");
    }

    #[test]
    fn test_reassignment_overwrites() {
        let (out, _) = run("x = 1#; x = x + 1#; print x#;");

        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_negative_results() {
        let (out, _) = run("print 1 - 5#;");

        assert_eq!(out, "-4\n");
    }

    #[test]
    fn test_mixed_operands_are_a_type_error() {
        let (err, _) = run_err("print 1 + \"a\"#;");
        assert!(matches!(err, LangError::Type { .. }));

        let (err, _) = run_err("print \"a\" - \"b\"#;");
        assert!(matches!(err, LangError::Type { .. }));
    }

    #[test]
    fn test_overflow_is_reported() {
        let (err, _) = run_err("print 9223372036854775807 + 1#;");

        assert!(matches!(err, LangError::Runtime(_)));
    }

    #[test]
    fn test_oversized_literal_is_reported() {
        let (err, _) = run_err("print 99999999999999999999#;");

        assert!(matches!(err, LangError::InvalidNumber { ref text } if text == "99999999999999999999"));
    }

    #[test]
    fn test_assignment_yields_stored_value() {
        let tokens = tokenize("x = 2 + 3#;").unwrap();
        let Node::Program(statements) = Parser::new(&tokens).parse().unwrap() else {
            panic!("root should be a program");
        };

        let mut ctx = Context::new();
        let mut interpreter = Interpreter::new(Vec::new());
        let value = interpreter.evaluate(&statements[0], &mut ctx).unwrap();

        assert_eq!(value, Some(Value::Int(5)));
        assert_eq!(ctx.scope().get("x"), Some(&Value::Int(5)));
    }

    #[test]
    fn test_statement_used_as_value_is_rejected() {
        let print = Token::new(TokenKind::PRINT, "print", 0, 1);
        let number = Token::new(TokenKind::NUMBER, "1", 6, 1);

        let inner = Node::unary(UnaryOp::Print, print, Node::Number(number));
        let outer = Node::unary(UnaryOp::Print, print, inner);

        let mut ctx = Context::new();
        let mut interpreter = Interpreter::new(Vec::new());
        let err = interpreter.run(&outer, &mut ctx).unwrap_err();

        assert!(matches!(err, LangError::Runtime(_)));
        assert_eq!(interpreter.into_inner(), b"1\n");
    }

    #[test]
    fn test_runs_are_deterministic() {
        let source = "a = 4#; ejkey a \"x\"#; print a + 1#; ejprint a#;";

        let (first_out, first_ctx) = run(source);
        let (second_out, second_ctx) = run(source);

        assert_eq!(first_out, "5\nx\n");
        assert_eq!(first_out, second_out);
        assert_eq!(first_ctx, second_ctx);
    }

    #[test]
    fn test_long_formula_runs_without_deep_recursion() {
        let chain = vec!["1"; MAX_TERMS].join(" + ");
        let (out, _) = run(&format!("x = {}#; print x - 1#;", chain));

        assert_eq!(out, format!("{}\n", MAX_TERMS - 1));
    }

    #[test]
    fn test_long_formula_evaluates_left_to_right() {
        let (err, _) = run_err("print 1 - 2 + a + b#;");

        assert!(matches!(err, LangError::UndefinedVariable { ref name } if name == "a"));

        let (out, _) = run("print 10 - 3 - 2 + 1 - 4#;");
        assert_eq!(out, "2\n");
    }
}
