//! AT Commands for cellular network registration\
//! Following [3GPP TS 27.007](https://www.3gpp.org/ftp/Specs/archive/27_series/27.007/)

pub mod network_service;
pub mod psn;
pub mod reader;

use atat::atat_derive::{AtatResp, AtatUrc};
use atat::digest::{ParseError, Parser};
use atat::AtatUrc;

use crate::registration::{RegistrationDomain, RegistrationParams};
use reader::ResponseReader;

#[derive(Debug, Clone, AtatResp)]
pub struct NoResponse;

pub const NO_CARRIER: &str = "NO CARRIER";
pub const PACKET_SWITCHED_EVENT: &str = "+CGEV:";

const REGISTRATION_PREFIXES: [&str; 3] = ["+CEREG:", "+CGREG:", "+CREG:"];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Urc {
    /// `+CREG`, `+CGREG` or `+CEREG`
    NetworkRegistration(RegistrationParams),
    Connection(ConnectionUrc),
}

/// URCs reporting on the packet data connection
#[derive(Debug, Clone, PartialEq, AtatUrc)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionUrc {
    #[at_urc("NO CARRIER")]
    NoCarrier,
    #[at_urc("+CGEV")]
    PacketSwitchedEvent(psn::urc::PacketSwitchedEvent),
}

impl Urc {
    /// The prefix this URC was routed on.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::NetworkRegistration(params) => params
                .domain
                .map_or("", |domain| domain.entry().urc_prefix),
            Self::Connection(ConnectionUrc::NoCarrier) => NO_CARRIER,
            Self::Connection(ConnectionUrc::PacketSwitchedEvent(_)) => PACKET_SWITCHED_EVENT,
        }
    }
}

impl AtatUrc for Urc {
    type Response = Urc;

    fn parse(resp: &[u8]) -> Option<Self::Response> {
        let Some(domain) = RegistrationDomain::from_urc(resp) else {
            return <ConnectionUrc as AtatUrc>::parse(resp).map(Self::Connection);
        };

        let mut reader = ResponseReader::new(resp);
        reader.resp_start(domain.entry().urc_prefix);
        match RegistrationParams::read(&mut reader, domain) {
            Ok(params) => Some(Self::NetworkRegistration(params)),
            Err(_) => {
                warn!("Malformed {:?} URC", domain);
                None
            }
        }
    }
}

impl Parser for Urc {
    fn parse(buf: &[u8]) -> Result<(&[u8], usize), ParseError> {
        match <ConnectionUrc as Parser>::parse(buf) {
            Err(ParseError::NoMatch) => {}
            result => return result,
        }

        let start = buf
            .iter()
            .position(|b| !matches!(b, b'\r' | b'\n' | b' '))
            .ok_or(ParseError::Incomplete)?;
        let line = &buf[start..];

        let prefix = REGISTRATION_PREFIXES
            .iter()
            .map(|p| p.as_bytes())
            .find(|p| line.starts_with(p) || p.starts_with(line));
        match prefix {
            None => return Err(ParseError::NoMatch),
            Some(p) if line.len() < p.len() => return Err(ParseError::Incomplete),
            Some(_) => {}
        }

        let end = line
            .windows(2)
            .position(|w| w == b"\r\n")
            .ok_or(ParseError::Incomplete)?;

        if is_registration_reply(&line[..end]) {
            return Err(ParseError::NoMatch);
        }

        Ok((&line[..end], start + end + 2))
    }
}

/// Read replies `+CxREG: <n>,<stat>[,...]` share the URC prefix. The URC
/// itself starts with `<stat>`, followed by the quoted `<lac>` if anything.
fn is_registration_reply(line: &[u8]) -> bool {
    let Some(colon) = line.iter().position(|&b| b == b':') else {
        return false;
    };

    let mut params = line[colon + 1..].split(|&b| b == b',').map(|param| {
        let start = param
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(param.len());
        &param[start..]
    });
    let is_int = |param: Option<&[u8]>| {
        param
            .and_then(|p| p.first())
            .is_some_and(u8::is_ascii_digit)
    };

    is_int(params.next()) && is_int(params.next())
}

/// Formats a command into the transmit buffer handed to
/// [`atat::AtatCmd::write`], terminating it with `\r\n`.
pub(crate) struct CmdWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> CmdWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub fn finish(mut self) -> usize {
        // A truncated command is rejected by the modem
        let _ = core::fmt::Write::write_str(&mut self, "\r\n");
        self.len
    }
}

/// Write a formatted command for a hand written [`atat::AtatCmd`] impl.
pub(crate) fn write_cmd(buf: &mut [u8], args: core::fmt::Arguments<'_>) -> usize {
    let mut w = CmdWriter::new(buf);
    if core::fmt::Write::write_fmt(&mut w, args).is_err() {
        error!("Command does not fit the {} byte buffer", w.buf.len());
    }
    w.finish()
}

impl core::fmt::Write for CmdWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let end = self.len + s.len();
        if end > self.buf.len() {
            return Err(core::fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
