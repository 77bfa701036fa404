//! Opcode definitions.
//!
//! This module declares every opcode the interpreter knows about, together with its
//! [`OpCodeInfo`]: name, constant gas, optional dynamic gas function and handler.
//! Jump tables for each fork are assembled from these in [`table`].

/// Per-fork jump tables.
pub mod table;
pub use table::*;

use crate::core::{
    gas::{exp_cost, memory_expansion_cost, DynamicGasFn},
    vm::{
        handlers::{arithmetic, memory, stack},
        HandlerFn,
    },
};

/// Information about an opcode: its name, gas and the function implementing it.
#[derive(Debug, Clone, Copy)]
pub struct OpCodeInfo {
    /// Name
    name: &'static str,
    /// Gas charged on every execution, before any dynamic gas.
    constant_gas: u64,
    /// Gas depending on the state the opcode runs against.
    dynamic_gas: Option<DynamicGasFn>,
    /// The function applying the opcode's effect.
    handler: HandlerFn,
}

impl OpCodeInfo {
    /// Creates a new opcode info with the given name and handler and no gas.
    pub const fn new(name: &'static str, handler: HandlerFn) -> Self {
        Self { name, constant_gas: 0, dynamic_gas: None, handler }
    }

    /// Returns the name of the opcode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the constant gas charged for the opcode.
    #[inline]
    pub const fn constant_gas(&self) -> u64 {
        self.constant_gas
    }

    /// Returns the dynamic gas function, if the opcode has one.
    #[inline]
    pub const fn dynamic_gas(&self) -> Option<DynamicGasFn> {
        self.dynamic_gas
    }

    /// Returns the handler of the opcode.
    #[inline]
    pub const fn handler(&self) -> HandlerFn {
        self.handler
    }
}

/// Sets the constant gas of the opcode.
#[inline]
pub const fn constant_gas(mut op: OpCodeInfo, gas: u64) -> OpCodeInfo {
    op.constant_gas = gas;
    op
}

/// Sets the dynamic gas function of the opcode.
#[inline]
pub const fn dynamic_gas(mut op: OpCodeInfo, gas: DynamicGasFn) -> OpCodeInfo {
    op.dynamic_gas = Some(gas);
    op
}

macro_rules! opcodes {
    ($(
        $val:literal => $name:ident => $handler:path =>
            $($modifier:ident $(( $($modifier_arg:expr),* ))?),*
    );* $(;)?) => {
        // create a constant for each opcode
        $(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name),"\") opcode.")]
            pub const $name: u8 = $val;
        )*

        /// Maps each opcode to its info. Bytes without an entry are invalid opcodes.
        pub const OPCODE_INFO_TABLE: [Option<OpCodeInfo>; 256] = {
            let mut map = [None; 256];
            let mut prev: u8 = 0;
            $(
                let val: u8 = $val;
                assert!(val == 0 || val > prev, "opcodes must be sorted in ascending order");
                prev = val;
                let info = OpCodeInfo::new(stringify!($name), $handler);
                $(
                let info = $modifier(info, $($($modifier_arg),*)?);
                )*
                map[$val] = Some(info);
            )*
            let _ = prev;
            map
        };
    }
}

opcodes! {
    0x01 => ADD => arithmetic::add => constant_gas(3);
    0x02 => MUL => arithmetic::mul => constant_gas(5);
    0x05 => SDIV => arithmetic::sdiv => constant_gas(5);
    0x0a => EXP => arithmetic::exp => constant_gas(10), dynamic_gas(exp_cost);

    0x52 => MSTORE => memory::mstore => constant_gas(3), dynamic_gas(memory_expansion_cost);
    0x53 => MSTORE8 => memory::mstore8 => constant_gas(3), dynamic_gas(memory_expansion_cost);

    0x60 => PUSH1 => stack::push_n => constant_gas(3);
    0x61 => PUSH2 => stack::push_n => constant_gas(3);
    0x62 => PUSH3 => stack::push_n => constant_gas(3);
    0x7f => PUSH32 => stack::push_n => constant_gas(3);
}
