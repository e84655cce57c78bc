use tinystack_asm::assemble;
use tinystack_bytecode::{Colors, Program};

use super::trace::PrintTracer;
use super::vm::VM;

fn trace(program: &Program, input: &[u8], fuel: Option<u64>) -> String {
    let mut builder = VM::builder(program);
    if let Some(fuel) = fuel {
        builder = builder.exec_fuel(fuel);
    }
    let mut tracer = PrintTracer::new(Vec::new(), Colors::OFF);
    let mut output = Vec::new();
    let _ = builder.build().execute_with(input, &mut output, &mut tracer);
    String::from_utf8(tracer.finish().unwrap()).unwrap()
}

fn trace_source(source: &str, input: &[u8]) -> String {
    let program = assemble(source).unwrap().into_program().unwrap();
    trace(&program, input, None)
}

#[test]
fn print_and_halt() {
    let out = trace_source("CONST 72\nPRINT\nHALT", &[]);
    insta::assert_snapshot!(out, @r"
    pc   instr      io       stack
    0    CONST 72            [72]
    2    PRINT      >'H'
    3    HALT
    ");
}

#[test]
fn input_and_escaped_output() {
    let out = trace_source("READ\nPRINT\nCONST 10\nPRINT\nHALT", b"a");
    insta::assert_snapshot!(out, @r"
    pc   instr      io       stack
    0    READ       <'a'     [97]
    1    PRINT      >'a'
    2    CONST 10            [10]
    4    PRINT      >'\n'
    5    HALT
    ");
}

#[test]
fn fault_on_executing_instruction() {
    let out = trace_source("READ\nPRINT\nDROP", b"a");
    insta::assert_snapshot!(out, @r"
    pc   instr      io       stack
    0    READ       <'a'     [97]
    1    PRINT      >'a'
    2    DROP       stack underflow: DROP at address 2 needs 1 value(s), found 0
    ");
}

#[test]
fn fault_while_decoding() {
    let program = Program::from_bytes(vec![0x0c]).unwrap();
    insta::assert_snapshot!(trace(&program, &[], None), @r"
    pc   instr      io       stack
    0    illegal instruction 0x0c at address 0
    ");
}

#[test]
fn fuel_exhausted() {
    let program = assemble(".L\nJMP L").unwrap().into_program().unwrap();
    insta::assert_snapshot!(trace(&program, &[], Some(2)), @r"
    pc   instr      io       stack
    0    JMP 0
    0    JMP 0
    runtime execution limit exceeded (2 steps)
    ");
}

#[test]
fn colored_output_wraps_columns() {
    let program = assemble("CONST 1\nPRINT\nHALT").unwrap().into_program().unwrap();
    let mut tracer = PrintTracer::new(Vec::new(), Colors::ON);
    VM::new(&program)
        .execute_with(&[][..], Vec::new(), &mut tracer)
        .unwrap();
    let out = String::from_utf8(tracer.finish().unwrap()).unwrap();

    assert!(out.contains("\x1b[2m0  \x1b[0m"), "{out:?}");
    assert!(out.contains("\x1b[32m>'\\x01'"), "{out:?}");
}
