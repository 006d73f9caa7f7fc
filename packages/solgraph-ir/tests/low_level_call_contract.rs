//! End-to-end contract of the low-level call operation: construction,
//! enrichment, read/write sets, security facts, rendering.

use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use solgraph_ir::{
    CallRiders, ConstantValue, DraftBody, ElementaryType, EnrichCallsPass, FunctionSymbols,
    LowLevelCallBuilder, LowLevelCallKind, Operand, Operation, SolgraphError, StorageLocation,
    Type,
};

fn transfer_call_setup() -> (FunctionSymbols, Operand, Operand, Vec<Operand>) {
    let mut symbols = FunctionSymbols::new();
    let dest = symbols.add_variable("x", Type::address(), StorageLocation::Local);
    let sig = symbols.add_constant(
        ConstantValue::Str("transfer(address,uint256)".into()),
        Type::Elementary(ElementaryType::String),
    );
    let arg0 = symbols.add_variable("arg0", Type::address(), StorageLocation::Local);
    let arg1 = symbols.add_variable("arg1", Type::uint256(), StorageLocation::Local);
    (
        symbols,
        Operand::Variable(dest),
        Operand::Constant(sig),
        vec![Operand::Variable(arg0), Operand::Variable(arg1)],
    )
}

#[test]
fn bare_call_reads_destination_then_arguments() {
    let (symbols, dest, sig, args) = transfer_call_setup();
    let call = LowLevelCallBuilder::new(dest, sig, args.clone(), 2, None, LowLevelCallKind::Call)
        .unwrap()
        .build();

    assert_eq!(call.read(&symbols), {
        let mut expected = vec![dest];
        expected.extend(args);
        expected
    });
    assert!(!call.can_send_eth());
    assert!(call.can_reenter(None));
    assert_eq!(
        call.display(&symbols),
        "LOW_LEVEL_CALL, dest:x, function:transfer(address,uint256), arguments:[arg0, arg1]"
    );
}

#[test]
fn value_rider_flips_can_send_eth_and_joins_read_set() {
    let (mut symbols, dest, sig, args) = transfer_call_setup();
    let zero = Operand::Constant(symbols.add_constant(ConstantValue::Uint(0), Type::uint256()));

    let mut builder =
        LowLevelCallBuilder::new(dest, sig, args, 2, None, LowLevelCallKind::Call).unwrap();
    builder.set_call_value(zero);
    let call = builder.build();

    assert!(call.can_send_eth());
    assert!(call.read(&symbols).contains(&zero));
}

#[test]
fn constant_destination_is_a_builder_bug() {
    let (_, _, sig, args) = transfer_call_setup();
    let err = LowLevelCallBuilder::new(sig, sig, args, 2, None, LowLevelCallKind::Call)
        .expect_err("constant destination must be rejected");
    assert!(matches!(err, SolgraphError::InvalidDestination { .. }));
}

#[test]
fn variable_function_name_is_a_builder_bug() {
    let (_, dest, _, args) = transfer_call_setup();
    let err = LowLevelCallBuilder::new(dest, dest, args, 2, None, LowLevelCallKind::Call)
        .expect_err("non-constant function name must be rejected");
    assert!(matches!(err, SolgraphError::InvalidFunctionName { .. }));
}

#[test]
fn tuple_result_argument_flattens_into_components() {
    let (mut symbols, dest, sig, _) = transfer_call_setup();
    let ok = symbols.add_variable("ok", Type::bool(), StorageLocation::Temporary);
    let data = symbols.add_variable(
        "data",
        Type::Elementary(ElementaryType::Bytes),
        StorageLocation::Temporary,
    );
    let tup = symbols.add_tuple_temporary("TMP_0", vec![ok, data]);

    let call = LowLevelCallBuilder::new(
        dest,
        sig,
        vec![Operand::Variable(tup)],
        1,
        None,
        LowLevelCallKind::Call,
    )
    .unwrap()
    .build();

    // one tuple argument contributes two entries
    assert_eq!(
        call.read(&symbols),
        vec![dest, Operand::Variable(ok), Operand::Variable(data)]
    );
}

#[test]
fn enrichment_freezes_bodies_and_assigns_ids_only_with_riders() {
    let (symbols, dest, sig, args) = transfer_call_setup();
    let mut draft = DraftBody::new("Token.transferOut(address,uint256)", symbols);
    draft.push_low_level_call(
        LowLevelCallBuilder::new(dest, sig, args.clone(), 2, None, LowLevelCallKind::Call).unwrap(),
    );
    draft.push_low_level_call(
        LowLevelCallBuilder::new(dest, sig, args, 2, None, LowLevelCallKind::DelegateCall).unwrap(),
    );

    let mut riders = FxHashMap::default();
    riders.insert(
        1,
        CallRiders {
            value: None,
            gas: Some(Operand::Builtin(solgraph_ir::BuiltinVariable::Gasleft)),
        },
    );
    let body = EnrichCallsPass::new().run(draft, &riders);

    match (&body.instructions[0], &body.instructions[1]) {
        (Operation::LowLevelCall(plain), Operation::LowLevelCall(gassed)) => {
            assert_eq!(plain.call_id(), None);
            assert!(gassed.call_id().is_some());
            // gas alone never implies value movement
            assert!(!gassed.can_send_eth());
        }
        other => panic!("unexpected instructions: {:?}", other),
    }
}
