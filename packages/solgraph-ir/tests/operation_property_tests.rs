//! Property-based tests for the operation contracts
//!
//! Invariants that must hold for ALL inputs:
//! - can_send_eth <=> value rider present, over every setter sequence
//! - can_reenter is true for every raw call, whatever its shape
//! - read() length is 1 (destination) + riders + N scalar arguments
//! - declared argument counts are enforced at construction

use proptest::prelude::*;
use quickcheck_macros::quickcheck;

use solgraph_ir::{
    ConstantValue, ElementaryType, FunctionSymbols, LowLevelCallBuilder, LowLevelCallKind,
    Operand, SolgraphError, StorageLocation, Type,
};

fn call_parts(args: usize) -> (FunctionSymbols, Operand, Operand, Vec<Operand>) {
    let mut symbols = FunctionSymbols::new();
    let dest = symbols.add_variable("target", Type::address(), StorageLocation::Local);
    let sig = symbols.add_constant(
        ConstantValue::Str("f()".into()),
        Type::Elementary(ElementaryType::String),
    );
    let arguments = (0..args)
        .map(|i| {
            Operand::Variable(symbols.add_variable(
                format!("arg{}", i),
                Type::uint256(),
                StorageLocation::Local,
            ))
        })
        .collect();
    (
        symbols,
        Operand::Variable(dest),
        Operand::Constant(sig),
        arguments,
    )
}

fn kind_from(idx: u8) -> LowLevelCallKind {
    match idx % 3 {
        0 => LowLevelCallKind::Call,
        1 => LowLevelCallKind::DelegateCall,
        _ => LowLevelCallKind::StaticCall,
    }
}

#[quickcheck]
fn qc_can_send_eth_iff_value_set(set_value: bool, set_gas: bool, kind_idx: u8) -> bool {
    let (mut symbols, dest, sig, args) = call_parts(1);
    let amount = Operand::Variable(symbols.add_variable(
        "amount",
        Type::uint256(),
        StorageLocation::Local,
    ));
    let mut builder =
        LowLevelCallBuilder::new(dest, sig, args, 1, None, kind_from(kind_idx)).unwrap();
    if set_value {
        builder.set_call_value(amount);
    }
    if set_gas {
        builder.set_call_gas(amount);
    }
    let call = builder.build();
    call.can_send_eth() == set_value
}

#[quickcheck]
fn qc_setters_never_populate_call_id(set_value: bool, set_gas: bool) -> bool {
    let (mut symbols, dest, sig, args) = call_parts(0);
    let amount = Operand::Variable(symbols.add_variable(
        "amount",
        Type::uint256(),
        StorageLocation::Local,
    ));
    let mut builder =
        LowLevelCallBuilder::new(dest, sig, args, 0, None, LowLevelCallKind::Call).unwrap();
    if set_value {
        builder.set_call_value(amount);
    }
    if set_gas {
        builder.set_call_gas(amount);
    }
    builder.build().call_id().is_none()
}

proptest! {
    #[test]
    fn prop_read_length_counts_destination_riders_and_args(
        args in 0usize..8,
        set_value in any::<bool>(),
        set_gas in any::<bool>(),
        kind_idx in any::<u8>(),
    ) {
        let (mut symbols, dest, sig, arguments) = call_parts(args);
        let amount = Operand::Variable(symbols.add_variable(
            "amount",
            Type::uint256(),
            StorageLocation::Local,
        ));
        let mut builder = LowLevelCallBuilder::new(
            dest,
            sig,
            arguments,
            args,
            None,
            kind_from(kind_idx),
        )
        .unwrap();
        if set_value {
            builder.set_call_value(amount);
        }
        if set_gas {
            builder.set_call_gas(amount);
        }
        let call = builder.build();

        let riders = usize::from(set_value) + usize::from(set_gas);
        let read = call.read(&symbols);
        prop_assert_eq!(read.len(), 1 + riders + args);
        prop_assert_eq!(read[0], dest);
    }

    #[test]
    fn prop_raw_call_always_reenters(
        args in 0usize..4,
        set_value in any::<bool>(),
        kind_idx in any::<u8>(),
        stack_depth in 0usize..4,
    ) {
        let (mut symbols, dest, sig, arguments) = call_parts(args);
        let amount = Operand::Variable(symbols.add_variable(
            "amount",
            Type::uint256(),
            StorageLocation::Local,
        ));
        let mut builder = LowLevelCallBuilder::new(
            dest,
            sig,
            arguments,
            args,
            None,
            kind_from(kind_idx),
        )
        .unwrap();
        if set_value {
            builder.set_call_value(amount);
        }
        let call = builder.build();

        let stack: Vec<String> = (0..stack_depth).map(|i| format!("C.f{}()", i)).collect();
        prop_assert!(call.can_reenter(None));
        prop_assert!(call.can_reenter(Some(&stack)));
    }

    #[test]
    fn prop_argument_count_mismatch_rejected(
        args in 0usize..6,
        declared in 0usize..6,
    ) {
        let (_, dest, sig, arguments) = call_parts(args);
        let outcome = LowLevelCallBuilder::new(
            dest,
            sig,
            arguments,
            declared,
            None,
            LowLevelCallKind::Call,
        );
        if declared == args {
            prop_assert!(outcome.is_ok());
        } else {
            let err = outcome.unwrap_err();
            prop_assert!(
                matches!(err, SolgraphError::ArgumentCountMismatch { .. }),
                "unexpected error: {:?}",
                err
            );
        }
    }
}
