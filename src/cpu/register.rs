/// The CPU's register file, minus the 16-bit SP and PC registers.
///
/// A, B, C, D and E are plain 8-bit registers. HL is kept as a single 16-bit
/// register because most instructions use it as an address; the instructions
/// that address its halves individually go through the `h`/`l` accessors.
/// B/C and D/E pair up into the 16-bit BC and DE registers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: FlagRegister,
    pub hl: u16,
}

/// Macro to generate a function that gets the value in a joint register.
macro_rules! get_joint_register {
    ($name:ident, $high:ident, $low:ident) => {
        #[doc = concat!("Gets the joint register ", stringify!($high), stringify!($low), ".")]
        pub fn $name(&self) -> u16 {
            (self.$high as u16) << 8 | (self.$low as u16)
        }
    };
}

/// Macro to generate a function that sets the value in a joint register.
macro_rules! set_joint_register {
    ($name:ident, $high:ident, $low:ident) => {
        #[doc = concat!("Sets the joint register ", stringify!($high), stringify!($low), ".")]
        pub fn $name(&mut self, value: u16) {
            self.$high = (value >> 8) as u8;
            self.$low = (value & 0xff) as u8;
        }
    };
}

impl Registers {
    // BC
    get_joint_register!(get_bc, b, c);
    set_joint_register!(set_bc, b, c);

    // DE
    get_joint_register!(get_de, d, e);
    set_joint_register!(set_de, d, e);

    pub fn get_hl(&self) -> u16 {
        self.hl
    }

    pub fn set_hl(&mut self, value: u16) {
        self.hl = value;
    }

    /// High byte of HL.
    pub fn h(&self) -> u8 {
        (self.hl >> 8) as u8
    }

    /// Low byte of HL.
    pub fn l(&self) -> u8 {
        (self.hl & 0xff) as u8
    }

    pub fn set_h(&mut self, value: u8) {
        self.hl = (self.hl & 0x00ff) | (value as u16) << 8;
    }

    pub fn set_l(&mut self, value: u8) {
        self.hl = (self.hl & 0xff00) | value as u16;
    }

    /// Gets the accumulator joined with the packed flag byte, as pushed by
    /// PUSH AF.
    pub fn get_af(&self) -> u16 {
        (self.a as u16) << 8 | u8::from(self.f) as u16
    }

    /// Sets the accumulator and flags from a packed AF word, as popped by
    /// POP AF. The low nibble of the flag byte is discarded.
    pub fn set_af(&mut self, value: u16) {
        self.a = (value >> 8) as u8;
        self.f = ((value & 0xff) as u8).into();
    }
}

/// The four condition flags.
///
/// The packed byte layout (bit 7 = zero, 6 = subtract, 5 = half-carry,
/// 4 = carry, low nibble always zero) is a wire contract: PUSH AF and POP AF
/// move flags through memory in exactly this form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlagRegister {
    /// Set when the result of a math op is zero, or when the two operands of
    /// a compare match.
    pub zero: bool,

    /// Set if the last math operation was a subtraction.
    pub subtract: bool,

    /// Set if a carry or borrow crossed the low-nibble boundary in the last
    /// math operation.
    pub half_carry: bool,

    /// Set if the last math operation overflowed, or if the accumulator was
    /// the smaller value in a compare.
    pub carry: bool,
}

const ZERO_FLAG_BYTE_POSITION: u8 = 7;
const SUBTRACT_FLAG_BYTE_POSITION: u8 = 6;
const HALF_CARRY_FLAG_BYTE_POSITION: u8 = 5;
const CARRY_FLAG_BYTE_POSITION: u8 = 4;

impl From<FlagRegister> for u8 {
    fn from(flag: FlagRegister) -> u8 {
        u8::from(flag.zero) << ZERO_FLAG_BYTE_POSITION
            | u8::from(flag.subtract) << SUBTRACT_FLAG_BYTE_POSITION
            | u8::from(flag.half_carry) << HALF_CARRY_FLAG_BYTE_POSITION
            | u8::from(flag.carry) << CARRY_FLAG_BYTE_POSITION
    }
}

impl From<u8> for FlagRegister {
    fn from(byte: u8) -> Self {
        Self {
            zero: (byte >> ZERO_FLAG_BYTE_POSITION) & 1 == 1,
            subtract: (byte >> SUBTRACT_FLAG_BYTE_POSITION) & 1 == 1,
            half_carry: (byte >> HALF_CARRY_FLAG_BYTE_POSITION) & 1 == 1,
            carry: (byte >> CARRY_FLAG_BYTE_POSITION) & 1 == 1,
        }
    }
}
