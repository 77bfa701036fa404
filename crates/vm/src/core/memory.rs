use alloy::primitives::U256;

use crate::{
    core::{
        constants::{MAX_MEMORY_SIZE, WORD_SIZE},
        types::ceil32,
    },
    error::Error,
};

/// The [`Memory`] struct represents the byte-addressed, volatile memory of a run.
///
/// Memory only ever grows, and always in whole 32-byte words. Newly exposed bytes are zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    /// Vector storing memory data
    pub memory: Vec<u8>,
}

impl Memory {
    /// Creates a new, empty [`Memory`].
    pub fn new() -> Memory {
        Memory { memory: Vec::new() }
    }

    /// Gets the current size of the memory in bytes.
    ///
    /// ```
    /// use lunar_vm::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.byte_len(), 0);
    /// ```
    pub fn byte_len(&self) -> u64 {
        self.memory.len() as u64
    }

    /// Gets the current size of the memory in words.
    pub fn word_len(&self) -> u64 {
        self.byte_len() / WORD_SIZE
    }

    /// Extends the memory with zeroes to `size` rounded up to the closest multiple of 32. \
    /// Memory which is already at least that large is left untouched.
    ///
    /// Sizes above [`MAX_MEMORY_SIZE`] fail with [`Error::GasUintOverflow`]. Anything below is
    /// allocated eagerly, so close to the bound this asks for about 128 GiB and aborts the
    /// process when the allocator cannot provide it. Only the gas limit keeps runs away from it.
    ///
    /// ```
    /// use lunar_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.extend(1).unwrap();
    /// assert_eq!(memory.byte_len(), 32);
    /// memory.extend(16).unwrap();
    /// assert_eq!(memory.byte_len(), 32);
    /// ```
    pub fn extend(&mut self, size: u64) -> Result<(), Error> {
        let new_size =
            ceil32(size).filter(|size| *size <= MAX_MEMORY_SIZE).ok_or(Error::GasUintOverflow)?;
        if new_size > self.byte_len() {
            let new_size = usize::try_from(new_size).map_err(|_| Error::GasUintOverflow)?;
            self.memory.resize(new_size, 0u8);
        }

        Ok(())
    }

    /// Stores `value` as 32 big-endian bytes starting at `offset`, left-padded with zeroes.
    /// May extend the memory if necessary.
    ///
    /// ```
    /// use lunar_vm::core::memory::Memory;
    /// use alloy::primitives::U256;
    ///
    /// let mut memory = Memory::new();
    /// memory.store_word(0, &U256::from(0xff)).unwrap();
    /// assert_eq!(memory.byte_len(), 32);
    /// assert_eq!(memory.as_slice()[31], 0xff);
    /// ```
    pub fn store_word(&mut self, offset: u64, value: &U256) -> Result<(), Error> {
        let end = offset.checked_add(WORD_SIZE).ok_or(Error::GasUintOverflow)?;
        self.extend(end)?;

        let offset = offset as usize;
        self.memory[offset..offset + WORD_SIZE as usize]
            .copy_from_slice(&value.to_be_bytes::<32>());
        Ok(())
    }

    /// Stores a single byte at `offset`. May extend the memory if necessary.
    pub fn store_byte(&mut self, offset: u64, value: u8) -> Result<(), Error> {
        let end = offset.checked_add(1).ok_or(Error::GasUintOverflow)?;
        self.extend(end)?;

        self.memory[offset as usize] = value;
        Ok(())
    }

    /// Borrow the raw memory bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.memory
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use crate::{
        core::{constants::MAX_MEMORY_SIZE, memory::Memory},
        error::Error,
    };

    #[test]
    fn test_extend_rejects_sizes_above_the_limit() {
        let mut memory = Memory::new();

        assert_eq!(memory.extend(MAX_MEMORY_SIZE + 1), Err(Error::GasUintOverflow));
        let result = memory.store_word(MAX_MEMORY_SIZE - 31, &U256::from(1));
        assert_eq!(result, Err(Error::GasUintOverflow));
        assert_eq!(memory.store_byte(MAX_MEMORY_SIZE, 1), Err(Error::GasUintOverflow));
        assert_eq!(memory.byte_len(), 0);
    }

    #[test]
    fn test_mstore_simple() {
        let mut memory = Memory::new();
        memory.store_word(0, &U256::from(1)).unwrap();

        let mut expected = vec![0u8; 32];
        expected[31] = 1;
        assert_eq!(memory.as_slice(), expected.as_slice());
        assert_eq!(memory.word_len(), 1);
    }

    #[test]
    fn test_mstore_unaligned_offset_extends_to_word_boundary() {
        let mut memory = Memory::new();
        memory.store_word(2, &U256::MAX).unwrap();

        assert_eq!(memory.byte_len(), 64);
        assert_eq!(&memory.as_slice()[..2], &[0, 0]);
        assert!(memory.as_slice()[2..34].iter().all(|byte| *byte == 0xff));
        assert!(memory.as_slice()[34..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_mstore_overwrites() {
        let mut memory = Memory::new();
        memory.store_word(0, &U256::MAX).unwrap();
        memory.store_word(0, &U256::from(2)).unwrap();

        assert_eq!(memory.byte_len(), 32);
        assert_eq!(memory.as_slice()[0], 0);
        assert_eq!(memory.as_slice()[31], 2);
    }

    #[test]
    fn test_mstore8() {
        let mut memory = Memory::new();
        memory.store_byte(16, 0x05).unwrap();

        assert_eq!(memory.byte_len(), 32);
        assert_eq!(memory.as_slice()[16], 0x05);
        assert_eq!(memory.as_slice().iter().filter(|byte| **byte != 0).count(), 1);
    }

    #[test]
    fn test_mstore8_at_word_boundary() {
        let mut memory = Memory::new();
        memory.store_byte(32, 0x01).unwrap();

        assert_eq!(memory.byte_len(), 64);
        assert_eq!(memory.word_len(), 2);
    }

    #[test]
    fn test_extend_never_shrinks() {
        let mut memory = Memory::new();
        memory.extend(128).unwrap();
        memory.extend(32).unwrap();
        memory.extend(0).unwrap();

        assert_eq!(memory.byte_len(), 128);
    }

    #[test]
    fn test_store_at_end_of_address_space() {
        let mut memory = Memory::new();
        assert_eq!(memory.store_word(u64::MAX - 16, &U256::ZERO), Err(Error::GasUintOverflow));
        assert_eq!(memory.store_byte(u64::MAX, 0), Err(Error::GasUintOverflow));
        assert_eq!(memory.byte_len(), 0);
    }
}
