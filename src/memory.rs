//! The byte-addressable bus interface the CPU core executes against.

/// Memory as seen by the CPU: a 65536-byte address space accessed one byte
/// at a time.
///
/// Implementations are total by contract. The CPU has no error channel, so a
/// bus that needs to represent an invalid access must substitute a defined
/// fallback byte (0xFF is conventional) rather than fail. Mapped I/O side
/// effects are the bus's business; the CPU only sees the returned byte.
pub trait MemoryBus {
    fn read_u8(&mut self, address: u16) -> u8;

    fn write_u8(&mut self, address: u16, value: u8);

    /// Reads a little-endian word: the byte at `address` forms the low byte
    /// of the result.
    fn read_u16(&mut self, address: u16) -> u16 {
        let bytes = [
            self.read_u8(address),
            self.read_u8(address.wrapping_add(1)),
        ];
        u16::from_le_bytes(bytes)
    }

    /// Writes a little-endian word: low byte at the lower address.
    fn write_u16(&mut self, address: u16, value: u16) {
        let bytes = value.to_le_bytes();
        self.write_u8(address, bytes[0]);
        self.write_u8(address.wrapping_add(1), bytes[1]);
    }
}

/// A flat 64 KiB memory with no mapping, used by tests and benchmarks.
#[derive(Clone)]
pub struct FlatMemory {
    pub data: [u8; 0x10000],
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self { data: [0; 0x10000] }
    }
}

impl FlatMemory {
    /// Copies `bytes` into memory starting at `offset`, wrapping at the top
    /// of the address space like the word helpers do.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.data[(offset as usize + i) & 0xffff] = byte;
        }
    }
}

impl MemoryBus for FlatMemory {
    fn read_u8(&mut self, address: u16) -> u8 {
        self.data[address as usize]
    }

    fn write_u8(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }
}
