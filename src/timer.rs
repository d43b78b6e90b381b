//! GPRS timer decoding, 3GPP TS 24.008 10.5.7.4a and 10.5.7.3
//!
//! The network reports the assigned PSM timers in `+CEREG` as one byte
//! written out as 8 binary characters, e.g. `"00100100"`. Bits 8-6 select the
//! unit and bits 5-1 hold the binary coded timer value.

/// Number of bits of the unit part of a GPRS timer byte.
pub const TIMER_UNIT_LENGTH: usize = 3;

/// Number of characters of a binary written GPRS timer byte.
pub const ONE_BYTE_BINARY: usize = 8;

/// A GPRS timer byte split into unit code and magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GprsTimer {
    pub unit: u8,
    pub value: u8,
}

impl GprsTimer {
    /// Parse a binary written timer byte. Anything that is not exactly 8
    /// binary characters is treated as an absent timer.
    pub fn from_binary(s: &str) -> Option<Self> {
        if s.len() != ONE_BYTE_BINARY || !s.is_ascii() {
            return None;
        }

        let unit = binary_str_to_u8(&s[..TIMER_UNIT_LENGTH])?;
        let value = binary_str_to_u8(&s[TIMER_UNIT_LENGTH..])?;
        Some(Self { unit, value })
    }

    /// Active time (T3324) in seconds, GPRS Timer 2 units.
    pub fn active_time(&self) -> u32 {
        decode_active_time(self.unit, self.value)
    }

    /// Periodic TAU (T3412 extended) in seconds, GPRS Timer 3 units.
    pub fn periodic_tau(&self) -> u32 {
        decode_periodic_tau(self.unit, self.value)
    }
}

pub fn decode_active_time(unit: u8, value: u8) -> u32 {
    let value = u32::from(value);
    match unit {
        // multiples of 2 seconds
        0 => 2 * value,
        // multiples of 1 minute
        1 => 60 * value,
        // multiples of decihours
        2 => 6 * 60 * value,
        // timer is deactivated
        7 => 0,
        // other values shall be interpreted as multiples of 1 minute
        _ => 60 * value,
    }
}

pub fn decode_periodic_tau(unit: u8, value: u8) -> u32 {
    let value = u32::from(value);
    match unit {
        // multiples of 10 minutes
        0 => 10 * 60 * value,
        // multiples of 1 hour
        1 => 60 * 60 * value,
        // multiples of 10 hours
        2 => 10 * 60 * 60 * value,
        // multiples of 2 seconds
        3 => 2 * value,
        // multiples of 30 seconds
        4 => 30 * value,
        // multiples of 1 minute
        5 => 60 * value,
        // multiples of 320 hours
        6 => 320 * 60 * 60 * value,
        // timer is deactivated
        _ => 0,
    }
}

/// Active time in seconds from the binary written `<Active-Time>` field.
pub fn active_time_from_binary(s: &str) -> Option<u32> {
    GprsTimer::from_binary(s).map(|t| t.active_time())
}

/// Periodic TAU in seconds from the binary written `<Periodic-TAU>` field.
pub fn periodic_tau_from_binary(s: &str) -> Option<u32> {
    GprsTimer::from_binary(s).map(|t| t.periodic_tau())
}

fn binary_str_to_u8(s: &str) -> Option<u8> {
    s.bytes().try_fold(0u8, |acc, b| match b {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}
