use micro_c::CompileError;
use micro_c::compile;

#[test]
fn unrecognized_character_reports_its_offset() {
    let source = "1#2";
    match compile(source) {
        Err(error @ CompileError::LexError { offset, .. }) => {
            assert_eq!(offset, 1);
            assert_eq!(error.report(source), "1#2\n ^ unrecognized character '#'");
        }
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn unmatched_paren_reports_end_of_input() {
    let source = "(1+2";
    match compile(source) {
        Err(error @ CompileError::SyntaxError { offset, .. }) => {
            assert_eq!(offset, 4);
            assert_eq!(
                error.report(source),
                "(1+2\n    ^ expected \")\", found \"end of input\""
            );
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn trailing_operator_reports_the_missing_operand() {
    let source = "1+";
    match compile(source) {
        Err(CompileError::SyntaxError { offset, message }) => {
            assert_eq!(offset, 2);
            assert!(message.starts_with("expected a number, a variable, or '('"));
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn assignment_to_a_number_names_the_expected_construct() {
    match compile("1=2") {
        Err(CompileError::SyntaxError { offset, message }) => {
            assert_eq!(offset, 0);
            assert_eq!(message, "expected a variable on the left side of assignment");
        }
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn caret_is_counted_in_characters() {
    // Ошибка после пробелов: каретка стоит под самим символом
    let source = "  1 @ 2";
    match compile(source) {
        Err(error @ CompileError::LexError { offset, .. }) => {
            assert_eq!(offset, 4);
            assert_eq!(
                error.report(source),
                "  1 @ 2\n    ^ unrecognized character '@'"
            );
        }
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn twenty_seventh_variable_overflows_the_frame() {
    // a; b; ...; z укладываются в кадр, aa уже нет
    let mut source = (b'a'..=b'z')
        .map(|ch| (ch as char).to_string())
        .collect::<Vec<_>>()
        .join(";");
    source.push_str(";aa");

    match compile(&source) {
        Err(CompileError::CapacityExceeded { limit, offset }) => {
            assert_eq!(limit, 26);
            assert_eq!(offset, source.len() - 2);
        }
        other => panic!("expected a capacity error, got {other:?}"),
    }
}

#[test]
fn twenty_six_variables_still_fit() {
    let source = (b'a'..=b'z')
        .map(|ch| (ch as char).to_string())
        .collect::<Vec<_>>()
        .join(";");
    let asm = compile(&source).unwrap();
    // Самый глубокий слот лежит на границе зарезервированной области
    assert!(asm.contains("  sub rax, 208\n"));
}

#[test]
fn errors_yield_no_assembly_at_all() {
    for source in ["(1+2", "1+", "1#2", "1=2"] {
        assert!(compile(source).is_err(), "{source} should not compile");
    }
}
