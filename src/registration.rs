use atat::AtatResp;

use crate::command::network_service::types::{RadioAccessTechnology, RegistrationStatus};
use crate::command::reader::ResponseReader;
use crate::timer;

/// Registration domains reported by the network registration URCs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationDomain {
    /// EPS (Evolved Packet Switched), `+CEREG`
    Eps = 0,
    /// PSD (Packet Switched Data), `+CGREG`
    PacketSwitched = 1,
    /// CSD (Circuit Switched Data), `+CREG`
    CircuitSwitched = 2,
}

impl RegistrationDomain {
    pub const ALL: [Self; 3] = [Self::Eps, Self::PacketSwitched, Self::CircuitSwitched];

    pub fn entry(self) -> &'static RegistrationEntry {
        &REGISTRATION_TABLE[self as usize]
    }

    /// Find the domain whose URC prefix starts `line`.
    pub fn from_urc(line: &[u8]) -> Option<Self> {
        REGISTRATION_TABLE
            .iter()
            .find(|e| line.starts_with(e.urc_prefix.as_bytes()))
            .map(|e| e.domain)
    }
}

#[derive(Debug)]
pub struct RegistrationEntry {
    pub domain: RegistrationDomain,
    /// Command verb, without the leading `AT`
    pub cmd: &'static str,
    pub urc_prefix: &'static str,
    pub response_prefix: &'static str,
}

pub static REGISTRATION_TABLE: [RegistrationEntry; 3] = [
    RegistrationEntry {
        domain: RegistrationDomain::Eps,
        cmd: "+CEREG",
        urc_prefix: "+CEREG:",
        response_prefix: "+CEREG:",
    },
    RegistrationEntry {
        domain: RegistrationDomain::PacketSwitched,
        cmd: "+CGREG",
        urc_prefix: "+CGREG:",
        response_prefix: "+CGREG:",
    },
    RegistrationEntry {
        domain: RegistrationDomain::CircuitSwitched,
        cmd: "+CREG",
        urc_prefix: "+CREG:",
        response_prefix: "+CREG:",
    },
];

/// The `<n>` parameter of `+CREG`, `+CGREG` and `+CEREG`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationMode {
    /// • 0: network registration URC disabled
    Disabled = 0,
    /// • 1: network registration URC `<stat>` enabled
    Enabled = 1,
    /// • 2: network registration and location information URC enabled
    EnabledWithLocationInfo = 2,
    /// • 3: as 2, with the `<cause_type>` and `<reject_cause>` appended
    EnabledWithLocationAndCause = 3,
}

/// Registration parameters as reported by `+CREG`, `+CGREG` or `+CEREG`.
///
/// `None` marks a field the modem did not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegistrationParams {
    /// Domain of the last update, `None` until the first one.
    pub domain: Option<RegistrationDomain>,
    pub status: RegistrationStatus,
    /// Location area code (or tracking area code for EPS)
    pub lac: Option<u16>,
    pub cell_id: Option<u32>,
    pub act: RadioAccessTechnology,
    /// Assigned PSM active time in seconds
    pub active_time: Option<u32>,
    /// Assigned periodic TAU in seconds
    pub periodic_tau: Option<u32>,
}

impl AtatResp for RegistrationParams {}

impl Default for RegistrationParams {
    fn default() -> Self {
        Self::new()
    }
}

const TWO_BYTES_HEX: usize = 4;
const FOUR_BYTES_HEX: usize = 8;

impl RegistrationParams {
    pub const fn new() -> Self {
        Self {
            domain: None,
            status: RegistrationStatus::NotRegistered,
            lac: None,
            cell_id: None,
            act: RadioAccessTechnology::Unknown,
            active_time: None,
            periodic_tau: None,
        }
    }

    /// Read the registration fields following the `<n>` parameter:
    ///
    /// `<stat>[,[<lac>],[<ci>],[<AcT>][,[<cause_type>],[<reject_cause>][,[<Active-Time>],[<Periodic-TAU>]]]]`
    ///
    /// Fields missing on the wire are left absent. Only a missing `<stat>` is
    /// an error.
    pub fn read(
        reader: &mut ResponseReader<'_>,
        domain: RegistrationDomain,
    ) -> Result<Self, atat::Error> {
        let status = reader
            .read_int()
            .map(RegistrationStatus::from)
            .ok_or(atat::Error::Parse)?;

        let lac = reader
            .read_string::<TWO_BYTES_HEX>()
            .and_then(|s| u16::from_str_radix(&s, 16).ok());

        let cell_id = reader
            .read_string::<FOUR_BYTES_HEX>()
            .and_then(|s| u32::from_str_radix(&s, 16).ok());

        let act = reader
            .read_int()
            .map_or(RadioAccessTechnology::Unknown, RadioAccessTechnology::from);

        // Skip [<cause_type>],[<reject_cause>]
        reader.skip_param(2);

        let active_time = reader
            .read_string::<{ timer::ONE_BYTE_BINARY }>()
            .and_then(|s| timer::active_time_from_binary(&s));

        let periodic_tau = reader
            .read_string::<{ timer::ONE_BYTE_BINARY }>()
            .and_then(|s| timer::periodic_tau_from_binary(&s));

        trace!(
            "{:?}: stat {:?}, lac {:?}, ci {:?}, act {:?}",
            domain,
            status,
            lac,
            cell_id,
            act
        );

        Ok(Self {
            domain: Some(domain),
            status,
            lac,
            cell_id,
            act,
            active_time,
            periodic_tau,
        })
    }

    pub fn is_registered(&self) -> bool {
        self.status.is_registered()
    }
}
