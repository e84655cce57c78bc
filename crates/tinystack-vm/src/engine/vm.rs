//! Virtual machine for executing tinystack programs.

use std::io::{self, Read, Write};

use tinystack_bytecode::{Flow, Instruction, Opcode, Program};

use super::error::RuntimeError;
use super::stack::OperandStack;
use super::trace::{NoopTracer, Tracer};

/// Value READ pushes once input is exhausted.
pub const EOF_BYTE: u8 = 0xFF;

/// Runtime limits. Both are unbounded unless set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of executed instructions.
    pub(crate) exec_fuel: Option<u64>,
    /// Maximum stack depth.
    pub(crate) stack_limit: Option<usize>,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    /// Set the stack depth limit.
    pub fn stack_limit(mut self, limit: usize) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u64> {
        self.exec_fuel
    }
    pub fn get_stack_limit(&self) -> Option<usize> {
        self.stack_limit
    }
}

/// Result of a program that reached HALT.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Instructions executed, HALT included.
    pub steps: u64,
    /// Stack contents at HALT, bottom first.
    pub stack: Vec<u8>,
}

/// Virtual machine state.
pub struct VM<'p> {
    program: &'p Program,
    pc: usize,
    stack: OperandStack,
    steps: u64,
    limits: Limits,
}

/// Builder for VM instances.
pub struct VMBuilder<'p> {
    program: &'p Program,
    limits: Limits,
}

impl<'p> VMBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            limits: Limits::default(),
        }
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the stack depth limit.
    pub fn stack_limit(mut self, limit: usize) -> Self {
        self.limits = self.limits.stack_limit(limit);
        self
    }

    pub fn build(self) -> VM<'p> {
        VM {
            program: self.program,
            pc: 0,
            stack: OperandStack::new(),
            steps: 0,
            limits: self.limits,
        }
    }
}

/// What the dispatch loop does after an instruction.
enum Step {
    Continue,
    Halt,
}

impl<'p> VM<'p> {
    pub fn builder(program: &'p Program) -> VMBuilder<'p> {
        VMBuilder::new(program)
    }

    /// VM with no limits.
    pub fn new(program: &'p Program) -> Self {
        Self::builder(program).build()
    }

    /// Run until HALT or a fault.
    ///
    /// Uses `NoopTracer`, which compiles away entirely.
    pub fn execute(self, input: impl Read, output: impl Write) -> Result<Outcome, RuntimeError> {
        self.execute_with(input, output, &mut NoopTracer)
    }

    /// Run until HALT or a fault, reporting each instruction to `tracer`.
    pub fn execute_with<R: Read, W: Write, T: Tracer>(
        mut self,
        mut input: R,
        mut output: W,
        tracer: &mut T,
    ) -> Result<Outcome, RuntimeError> {
        tracing::debug!(
            size = self.program.len(),
            fuel = ?self.limits.exec_fuel,
            stack_limit = ?self.limits.stack_limit,
            "starting execution"
        );

        let result = self.run(&mut input, &mut output, tracer);
        // Output already written stays visible even when the program faults.
        let flushed = output.flush();

        match result {
            Ok(()) => {
                flushed?;
                tracing::debug!(steps = self.steps, depth = self.stack.len(), "halted");
                Ok(Outcome {
                    steps: self.steps,
                    stack: self.stack.into_vec(),
                })
            }
            Err(err) => {
                tracer.trace_fault(&err);
                tracing::warn!(pc = self.pc, steps = self.steps, %err, "program faulted");
                Err(err)
            }
        }
    }

    fn run<R: Read, W: Write, T: Tracer>(
        &mut self,
        input: &mut R,
        output: &mut W,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        loop {
            if let Some(fuel) = self.limits.exec_fuel
                && self.steps >= fuel
            {
                return Err(RuntimeError::ExecFuelExhausted(fuel));
            }

            let pc = self.pc;
            let instr = self.program.decode(pc)?;
            tracer.trace_instruction(pc, &instr);

            let needed = instr.opcode.pops();
            if self.stack.len() < needed {
                return Err(RuntimeError::StackUnderflow {
                    pc,
                    opcode: instr.opcode,
                    needed,
                    depth: self.stack.len(),
                });
            }

            self.steps += 1;
            let step = self.step(pc, instr, input, output, tracer)?;
            tracer.trace_step(self.stack.as_slice());

            if let Step::Halt = step {
                return Ok(());
            }
        }
    }

    fn step<R: Read, W: Write, T: Tracer>(
        &mut self,
        pc: usize,
        instr: Instruction,
        input: &mut R,
        output: &mut W,
        tracer: &mut T,
    ) -> Result<Step, RuntimeError> {
        let next = pc + instr.size();
        let operand = instr.operand.unwrap_or_default();

        match instr.opcode.flow() {
            Flow::Halt => return Ok(Step::Halt),
            Flow::Jump => {
                self.pc = operand as usize;
                return Ok(Step::Continue);
            }
            Flow::Branch => {
                let taken = self.pop(pc, instr.opcode)? != 0;
                self.pc = if taken { operand as usize } else { next };
                return Ok(Step::Continue);
            }
            Flow::Next => {}
        }

        match instr.opcode {
            Opcode::Const => self.push(pc, operand)?,
            Opcode::Dup => {
                let top = self.pop(pc, instr.opcode)?;
                self.push(pc, top)?;
                self.push(pc, top)?;
            }
            Opcode::Drop => {
                self.pop(pc, instr.opcode)?;
            }
            Opcode::Read => {
                // Prompts written so far should be visible before blocking.
                output.flush()?;
                let byte = read_byte(input)?;
                tracer.trace_input(byte);
                self.push(pc, byte)?;
            }
            Opcode::Print => {
                let byte = self.pop(pc, instr.opcode)?;
                output.write_all(&[byte])?;
                tracer.trace_output(byte);
            }
            Opcode::Lss | Opcode::Add | Opcode::Sub | Opcode::Mul => {
                let b = self.pop(pc, instr.opcode)?;
                let a = self.pop(pc, instr.opcode)?;
                let value = match instr.opcode {
                    Opcode::Lss => u8::from(a < b),
                    Opcode::Add => a.wrapping_add(b),
                    Opcode::Sub => a.wrapping_sub(b),
                    _ => a.wrapping_mul(b),
                };
                self.push(pc, value)?;
            }
            Opcode::Halt | Opcode::Jmp | Opcode::Bnz => {
                unreachable!("{} handled by control flow", instr.opcode)
            }
        }

        self.pc = next;
        Ok(Step::Continue)
    }

    fn push(&mut self, pc: usize, value: u8) -> Result<(), RuntimeError> {
        if let Some(limit) = self.limits.stack_limit
            && self.stack.len() >= limit
        {
            return Err(RuntimeError::StackOverflow { pc, limit });
        }
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self, pc: usize, opcode: Opcode) -> Result<u8, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow {
            pc,
            opcode,
            needed: opcode.pops(),
            depth: 0,
        })
    }
}

/// Read one byte, mapping end of input to [`EOF_BYTE`].
fn read_byte(input: &mut impl Read) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(EOF_BYTE),
            Ok(_) => return Ok(buf[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
