use std::{collections::VecDeque, fmt::Display};

use alloy::primitives::U256;

use crate::{core::constants::STACK_LIMIT, error::Error};

/// The [`Stack`] struct represents the interpreter's operand stack.
/// It is a LIFO data structure bounded to [`STACK_LIMIT`] words.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Stack {
    /// The words on the stack.
    ///
    /// The front of the deque represents the top of the stack.
    pub stack: VecDeque<U256>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Creates a new, empty [`Stack`].
    ///
    /// ```
    /// use lunar_vm::core::stack::Stack;
    ///
    /// let stack = Stack::new();
    /// assert_eq!(stack.size(), 0);
    /// ```
    pub fn new() -> Stack {
        Stack { stack: VecDeque::with_capacity(STACK_LIMIT) }
    }

    /// Push a value onto the stack.
    ///
    /// Fails with [`Error::StackOverflow`] once the stack already holds [`STACK_LIMIT`] words,
    /// leaving it unchanged.
    ///
    /// ```
    /// use lunar_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn push(&mut self, value: U256) -> Result<(), Error> {
        if self.stack.len() >= STACK_LIMIT {
            return Err(Error::StackOverflow);
        }

        self.stack.push_front(value);
        Ok(())
    }

    /// Pop a value off the stack.
    ///
    /// ```
    /// use lunar_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    ///
    /// assert_eq!(stack.pop(), Ok(U256::from(0x00)));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<U256, Error> {
        self.stack.pop_front().ok_or(Error::StackUnderflow)
    }

    /// Borrow the value `index` positions below the top of the stack, where 0 is the top.
    ///
    /// ```
    /// use lunar_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x01)).unwrap();
    /// stack.push(U256::from(0x02)).unwrap();
    ///
    /// // stack is now [0x02, 0x01]
    /// assert_eq!(stack.peek(0), Ok(&U256::from(0x02)));
    /// assert_eq!(stack.peek(1), Ok(&U256::from(0x01)));
    /// assert!(stack.peek(2).is_err());
    /// ```
    pub fn peek(&self, index: usize) -> Result<&U256, Error> {
        self.stack.get(index).ok_or(Error::StackUnderflow)
    }

    /// Mutably borrow the value `index` positions below the top of the stack.
    pub fn peek_mut(&mut self, index: usize) -> Result<&mut U256, Error> {
        self.stack.get_mut(index).ok_or(Error::StackUnderflow)
    }

    /// Returns the number of words on the stack.
    ///
    /// ```
    /// use lunar_vm::core::stack::Stack;
    /// use alloy::primitives::U256;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(U256::from(0x00)).unwrap();
    /// assert_eq!(stack.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Check if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Copies the stack into a vector, top first.
    pub fn to_vec(&self) -> Vec<U256> {
        self.stack.iter().copied().collect()
    }
}

impl Display for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.stack.iter().map(|value| format!("{value:#x}")).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use crate::{
        core::{constants::STACK_LIMIT, stack::Stack},
        error::Error,
    };

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new();
        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(2)).unwrap();
        assert_eq!(stack.pop().unwrap(), U256::from(2));
        assert_eq!(stack.pop().unwrap(), U256::from(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(Error::StackUnderflow));
    }

    #[test]
    fn test_push_past_limit_overflows() {
        let mut stack = Stack::new();
        for i in 0..STACK_LIMIT {
            stack.push(U256::from(i)).unwrap();
        }
        assert_eq!(stack.size(), STACK_LIMIT);

        assert_eq!(stack.push(U256::from(1)), Err(Error::StackOverflow));
        assert_eq!(stack.size(), STACK_LIMIT);
        assert_eq!(stack.peek(0), Ok(&U256::from(STACK_LIMIT - 1)));
    }

    #[test]
    fn test_peek() {
        let mut stack = Stack::new();
        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(2)).unwrap();
        stack.push(U256::from(3)).unwrap();

        assert_eq!(stack.peek(0), Ok(&U256::from(3)));
        assert_eq!(stack.peek(2), Ok(&U256::from(1)));
        assert_eq!(stack.peek(3), Err(Error::StackUnderflow));
        assert_eq!(stack.size(), 3);
    }

    #[test]
    fn test_peek_mut_writes_in_place() {
        let mut stack = Stack::new();
        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(2)).unwrap();

        *stack.peek_mut(1).unwrap() = U256::from(7);
        assert_eq!(stack.to_vec(), vec![U256::from(2), U256::from(7)]);
        assert_eq!(stack.peek_mut(2), Err(Error::StackUnderflow));
    }

    #[test]
    fn test_display() {
        let mut stack = Stack::new();
        assert_eq!(stack.to_string(), "[]");

        stack.push(U256::from(1)).unwrap();
        stack.push(U256::from(255)).unwrap();
        assert_eq!(stack.to_string(), "[0xff, 0x1]");
    }
}
