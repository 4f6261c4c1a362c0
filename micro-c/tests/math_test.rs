use micro_c::compile;

const PROLOGUE: [&str; 6] = [
    ".intel_syntax noprefix",
    ".globl main",
    "main:",
    "  push rbp",
    "  mov rbp, rsp",
    "  sub rsp, 208",
];

const EPILOGUE: [&str; 3] = ["  mov rsp, rbp", "  pop rbp", "  ret"];

fn expected(body: &[&str]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    lines.extend(PROLOGUE);
    lines.extend_from_slice(body);
    lines.extend(EPILOGUE);
    lines.join("\n") + "\n"
}

#[test]
fn multiplication_is_emitted_before_addition() {
    let asm = compile("1+2*3").unwrap();
    assert_eq!(
        asm,
        expected(&[
            "  push 1",
            "  push 2",
            "  push 3",
            "  pop rdi",
            "  pop rax",
            "  imul rax, rdi",
            "  push rax",
            "  pop rdi",
            "  pop rax",
            "  add rax, rdi",
            "  push rax",
            "  pop rax",
        ])
    );
}

#[test]
fn parentheses_group_the_addition_first() {
    let asm = compile("(1+2)*3").unwrap();
    // Сложение уходит в код раньше умножения
    let add_at = asm.find("  add rax, rdi").unwrap();
    let mul_at = asm.find("  imul rax, rdi").unwrap();
    assert!(add_at < mul_at);
}

#[test]
fn division_uses_sign_extended_idiv() {
    let asm = compile("8/3").unwrap();
    assert!(
        asm.contains("  push 8\n  push 3\n  pop rdi\n  pop rax\n  cqo\n  idiv rdi\n  push rax\n")
    );
}

#[test]
fn unary_minus_compiles_as_zero_minus_operand() {
    let asm = compile("-8/3").unwrap();
    assert!(asm.contains("  push 0\n  push 8\n  pop rdi\n  pop rax\n  sub rax, rdi\n  push rax\n"));
}

#[test]
fn unary_plus_changes_nothing() {
    assert_eq!(compile("+7").unwrap(), compile("7").unwrap());
}

#[test]
fn comparisons_produce_exactly_zero_or_one() {
    for (source, set) in [
        ("1==2", "sete"),
        ("1!=2", "setne"),
        ("1<2", "setl"),
        ("1<=2", "setle"),
    ] {
        let asm = compile(source).unwrap();
        assert!(
            asm.contains(&format!("  cmp rax, rdi\n  {set} al\n  movzb rax, al\n")),
            "{source} should compile through {set}"
        );
    }
}

#[test]
fn greater_than_compiles_identically_to_flipped_less_than() {
    assert_eq!(compile("2>1").unwrap(), compile("1<2").unwrap());
    assert_eq!(compile("2>=1").unwrap(), compile("1<=2").unwrap());
    // И с переменными, если слоты заведены в одинаковом порядке
    assert_eq!(compile("x; y; x>y").unwrap(), compile("x; y; y<x").unwrap());
    assert_eq!(compile("x; y; x>=y").unwrap(), compile("x; y; y<=x").unwrap());
}

#[test]
fn whitespace_does_not_change_the_code() {
    assert_eq!(compile(" 1 + 2 * 3 ").unwrap(), compile("1+2*3").unwrap());
}

#[test]
fn single_number_compiles_to_push_and_pop() {
    assert_eq!(compile("7").unwrap(), expected(&["  push 7", "  pop rax"]));
}
