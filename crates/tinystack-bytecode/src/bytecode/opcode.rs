//! Opcode definitions and the behavior table shared by every component.
//!
//! The assembler looks mnemonics up here, the VM reads stack effects and
//! control flow from here, and the disassembler reads operand kinds from here.
//! Adding an opcode means adding one variant and one table row.

use std::fmt;

/// What follows an opcode in the byte stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperandKind {
    /// Zero-operand instruction.
    None,
    /// One literal byte (CONST).
    Immediate,
    /// One byte holding a program address (JMP, BNZ).
    Address,
}

/// How an instruction moves the program counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    /// Falls through to the next instruction.
    Next,
    /// Stops the machine.
    Halt,
    /// Always transfers control to the address operand.
    Jump,
    /// Transfers control to the address operand when the popped value is nonzero.
    Branch,
}

/// Static metadata for one opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub operand: OperandKind,
    /// Values the instruction requires on the stack.
    pub pops: u8,
    /// Values the instruction leaves on the stack.
    pub pushes: u8,
    pub flow: Flow,
}

impl OpcodeInfo {
    const fn new(
        mnemonic: &'static str,
        operand: OperandKind,
        pops: u8,
        pushes: u8,
        flow: Flow,
    ) -> Self {
        Self {
            mnemonic,
            operand,
            pops,
            pushes,
            flow,
        }
    }
}

/// Instruction opcodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    Halt = 0,
    Const = 1,
    Dup = 2,
    Drop = 3,
    Read = 4,
    Print = 5,
    Jmp = 6,
    Bnz = 7,
    Lss = 8,
    Add = 9,
    Sub = 10,
    Mul = 11,
}

/// Indexed by opcode byte.
const TABLE: [OpcodeInfo; Opcode::COUNT] = [
    OpcodeInfo::new("HALT", OperandKind::None, 0, 0, Flow::Halt),
    OpcodeInfo::new("CONST", OperandKind::Immediate, 0, 1, Flow::Next),
    // DUP reads the top without removing it: one in, two out.
    OpcodeInfo::new("DUP", OperandKind::None, 1, 2, Flow::Next),
    OpcodeInfo::new("DROP", OperandKind::None, 1, 0, Flow::Next),
    OpcodeInfo::new("READ", OperandKind::None, 0, 1, Flow::Next),
    OpcodeInfo::new("PRINT", OperandKind::None, 1, 0, Flow::Next),
    OpcodeInfo::new("JMP", OperandKind::Address, 0, 0, Flow::Jump),
    OpcodeInfo::new("BNZ", OperandKind::Address, 1, 0, Flow::Branch),
    OpcodeInfo::new("LSS", OperandKind::None, 2, 1, Flow::Next),
    OpcodeInfo::new("ADD", OperandKind::None, 2, 1, Flow::Next),
    OpcodeInfo::new("SUB", OperandKind::None, 2, 1, Flow::Next),
    OpcodeInfo::new("MUL", OperandKind::None, 2, 1, Flow::Next),
];

impl Opcode {
    pub const COUNT: usize = 12;

    /// All opcodes in byte order.
    pub const ALL: [Opcode; Self::COUNT] = [
        Self::Halt,
        Self::Const,
        Self::Dup,
        Self::Drop,
        Self::Read,
        Self::Print,
        Self::Jmp,
        Self::Bnz,
        Self::Lss,
        Self::Add,
        Self::Sub,
        Self::Mul,
    ];

    /// Decode an opcode byte. Returns `None` for bytes outside the table.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.get(byte as usize).copied()
    }

    /// Look up an opcode by its exact (uppercase) mnemonic.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }

    #[inline]
    pub fn byte(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn info(self) -> &'static OpcodeInfo {
        &TABLE[self as usize]
    }

    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    pub fn operand(self) -> OperandKind {
        self.info().operand
    }

    pub fn has_operand(self) -> bool {
        self.operand() != OperandKind::None
    }

    /// Encoded size in bytes (opcode plus operand).
    pub fn size(self) -> usize {
        if self.has_operand() { 2 } else { 1 }
    }

    pub fn pops(self) -> usize {
        self.info().pops as usize
    }

    pub fn pushes(self) -> usize {
        self.info().pushes as usize
    }

    pub fn flow(self) -> Flow {
        self.info().flow
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
