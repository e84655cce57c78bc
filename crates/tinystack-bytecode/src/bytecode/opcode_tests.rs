//! Tests for the opcode table.

use super::opcode::{Flow, Opcode, OperandKind};

#[test]
fn opcode_bytes_follow_table_order() {
    for (i, op) in Opcode::ALL.iter().enumerate() {
        assert_eq!(op.byte() as usize, i);
        assert_eq!(Opcode::from_byte(i as u8), Some(*op));
    }
    assert_eq!(Opcode::Halt.byte(), 0);
    assert_eq!(Opcode::Mul.byte(), 11);
}

#[test]
fn from_byte_rejects_unknown() {
    assert_eq!(Opcode::from_byte(12), None);
    assert_eq!(Opcode::from_byte(0xff), None);
}

#[test]
fn mnemonic_lookup_is_exact() {
    assert_eq!(Opcode::from_mnemonic("CONST"), Some(Opcode::Const));
    assert_eq!(Opcode::from_mnemonic("BNZ"), Some(Opcode::Bnz));
    assert_eq!(Opcode::from_mnemonic("const"), None);
    assert_eq!(Opcode::from_mnemonic("CONS"), None);
    assert_eq!(Opcode::from_mnemonic("CONSTX"), None);
}

#[test]
fn mnemonics_roundtrip() {
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
        assert_eq!(op.to_string(), op.mnemonic());
    }
}

#[test]
fn operand_kinds() {
    assert_eq!(Opcode::Const.operand(), OperandKind::Immediate);
    assert_eq!(Opcode::Jmp.operand(), OperandKind::Address);
    assert_eq!(Opcode::Bnz.operand(), OperandKind::Address);

    let with_operand: Vec<_> = Opcode::ALL.into_iter().filter(|op| op.has_operand()).collect();
    assert_eq!(with_operand, [Opcode::Const, Opcode::Jmp, Opcode::Bnz]);
}

#[test]
fn sizes() {
    assert_eq!(Opcode::Halt.size(), 1);
    assert_eq!(Opcode::Const.size(), 2);
    assert_eq!(Opcode::Jmp.size(), 2);
    assert_eq!(Opcode::Add.size(), 1);
}

#[test]
fn stack_effects() {
    assert_eq!((Opcode::Dup.pops(), Opcode::Dup.pushes()), (1, 2));
    assert_eq!((Opcode::Print.pops(), Opcode::Print.pushes()), (1, 0));
    assert_eq!((Opcode::Bnz.pops(), Opcode::Bnz.pushes()), (1, 0));
    assert_eq!((Opcode::Jmp.pops(), Opcode::Jmp.pushes()), (0, 0));
    for op in [Opcode::Lss, Opcode::Add, Opcode::Sub, Opcode::Mul] {
        assert_eq!((op.pops(), op.pushes()), (2, 1), "{op}");
    }
}

#[test]
fn control_flow() {
    assert_eq!(Opcode::Halt.flow(), Flow::Halt);
    assert_eq!(Opcode::Jmp.flow(), Flow::Jump);
    assert_eq!(Opcode::Bnz.flow(), Flow::Branch);
    assert_eq!(Opcode::Const.flow(), Flow::Next);
}
