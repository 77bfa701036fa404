use crate::{
    core::{types::word_from_be_slice, vm::RunState},
    error::Error,
};

/// PUSH1-PUSH32 - Push N bytes onto stack
pub fn push_n(state: &mut RunState) -> Result<(), Error> {
    // Get the number of bytes to push
    let num_bytes = state.opcode.saturating_sub(0x5f) as usize;

    let value = word_from_be_slice(state.next_bytes(num_bytes)?)?;
    state.stack.push(value)?;

    // skip over the immediate
    state.pc += num_bytes;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use crate::{
        core::{
            constants::STACK_LIMIT,
            opcodes::{PUSH1, PUSH2, PUSH3, PUSH32},
            vm::{handlers::stack::push_n, RunState},
        },
        error::Error,
    };

    /// A state positioned right after `opcode`, with `immediate` as the rest of the code.
    fn state_with(opcode: u8, immediate: &[u8]) -> RunState {
        let mut code = vec![opcode];
        code.extend_from_slice(immediate);

        let mut state = RunState::new(code, u64::MAX);
        state.opcode = opcode;
        state.pc = 1;
        state
    }

    #[test]
    fn test_push_n() {
        let cases: [(u8, Vec<u8>, U256); 4] = [
            (PUSH1, vec![0x02], U256::from(2)),
            (PUSH2, vec![0x05, 0xff], U256::from(1535)),
            (PUSH3, vec![0x01, 0x02, 0x03], U256::from(66051)),
            (PUSH32, vec![0xff; 32], U256::MAX),
        ];

        for (opcode, immediate, expected) in cases {
            let mut state = state_with(opcode, &immediate);
            push_n(&mut state).unwrap();

            assert_eq!(state.stack.to_vec(), vec![expected]);
            assert_eq!(state.pc, 1 + immediate.len());
            assert!(state.is_done());
        }
    }

    #[test]
    fn test_push_n_leaves_trailing_code() {
        let mut state = state_with(PUSH1, &[0x01, 0x60, 0x02]);
        push_n(&mut state).unwrap();
        assert_eq!(state.pc, 2);
    }

    #[test]
    fn test_push_n_truncated_immediate() {
        let mut state = state_with(PUSH2, &[0xff]);
        assert_eq!(push_n(&mut state), Err(Error::NotEnoughBytesToRead(PUSH2)));
        assert!(state.stack.is_empty());
        assert_eq!(state.pc, 1);
    }

    #[test]
    fn test_push_n_full_stack() {
        let mut state = state_with(PUSH1, &[0x01]);
        for _ in 0..STACK_LIMIT {
            state.stack.push(U256::ZERO).unwrap();
        }

        assert_eq!(push_n(&mut state), Err(Error::StackOverflow));
        assert_eq!(state.pc, 1);
    }
}
