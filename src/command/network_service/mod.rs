//! ### 7 - Network service

mod impl_;
pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;
use atat::{AtatCmd, InternalError};
use responses::*;
use types::*;

use super::reader::ResponseReader;
use super::{write_cmd, NoResponse};
use crate::registration::{RegistrationDomain, RegistrationMode, RegistrationParams};

/// 7.2 Signal quality +CSQ
///
/// Returns the received signal strength indication <rssi> and the channel bit
/// error rate <ber>. 99 marks a value that is not known or not detectable.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSQ", SignalQualityReport)]
pub struct GetSignalQuality;

/// 7.4 Extended signal quality +CESQ
///
/// Returns the received signal quality and level:
/// - If the current serving cell is not a GERAN cell, the <rxlev> and <ber> parameters are set to value 99
/// - If the current serving cell is not a UTRA FDD cell, the <rscp> and the <ecn0> parameters are set to 255
/// - If the current serving cell is not an E-UTRA cell, the <rsrq> and <rsrp> parameters are set to 255.
///
/// The Reference Signal Received Power (RSRP) is a LTE specific measure that averages the power received
/// on the subcarriers carrying the reference signal. The RSRP measurement bandwidth is equivalent to a
/// single LTE subcarrier: its value is therefore much lower than the total received power usually referred
/// to as RSSI. In LTE the RSSI depends on the currently allocated bandwidth, which is not pre-determined.
/// Therefore the RSSI is not useful to describe the signal level in the cell.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CESQ", ExtendedSignalQualityReport)]
pub struct GetExtendedSignalQuality;

/// 7.5 Operator selection +COPS
///
/// Forces an attempt to select and register with the GSM/UMTS/LTE network
/// operator, that can be chosen in the list of network operators returned by
/// the test command. Through <mode> parameter the network selection can
/// automatically be performed or forced by this command: the access
/// technology is indicated in <AcT> parameter.
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS", NoResponse, attempts = 1, timeout_ms = 180000)]
pub struct SetOperatorSelection<'a> {
    #[at_arg(position = 0)]
    pub mode: OperatorSelectionMode,
    #[at_arg(position = 1)]
    pub format: Option<OperatorFormat>,
    #[at_arg(position = 2, len = 24)]
    pub oper: Option<&'a str>,
}

/// 7.5 Operator selection +COPS
///
/// `+COPS: <mode>[,<format>,<oper>[,<AcT>]]`
#[derive(Clone, AtatCmd)]
#[at_cmd("+COPS?", OperatorSelection, attempts = 1, timeout_ms = 180000)]
pub struct GetOperatorSelection;

/// 7.5 Operator selection +COPS
///
/// The test command scans for networks and lists them as
/// `+COPS: [(<stat>,long <oper>,short <oper>,numeric <oper>[,<AcT>])[,(...)]],,(<modes>),(<formats>)`.
///
/// Operators whose access technology does not match `filter` are left out,
/// as are operators beyond the capacity `N`.
#[derive(Clone)]
pub struct ScanOperators<const N: usize> {
    pub filter: RadioAccessTechnology,
}

impl<const N: usize> AtatCmd for ScanOperators<N> {
    type Response = OperatorList<N>;

    const MAX_LEN: usize = 16;
    const MAX_TIMEOUT_MS: u32 = 180000;
    const CAN_ABORT: bool = true;

    fn write(&self, buf: &mut [u8]) -> usize {
        write_cmd(buf, format_args!("AT+COPS=?"))
    }

    fn parse(
        &self,
        resp: Result<&[u8], InternalError>,
    ) -> Result<Self::Response, atat::Error> {
        let resp = resp.map_err(atat::Error::from)?;
        let mut reader = ResponseReader::new(resp);
        reader.resp_start("+COPS:");
        Ok(OperatorList::read(&mut reader, self.filter))
    }
}

/// 7.19 Read operator names +COPN
///
/// Returns the list of operator names from the MT, one
/// `+COPN: <numeric>,<alpha>` line per operator.
#[derive(Clone)]
pub struct GetOperatorNames<const N: usize>;

impl<const N: usize> AtatCmd for GetOperatorNames<N> {
    type Response = OperatorNames<N>;

    const MAX_LEN: usize = 16;
    const MAX_TIMEOUT_MS: u32 = 10000;

    fn write(&self, buf: &mut [u8]) -> usize {
        write_cmd(buf, format_args!("AT+COPN"))
    }

    fn parse(
        &self,
        resp: Result<&[u8], InternalError>,
    ) -> Result<Self::Response, atat::Error> {
        let resp = resp.map_err(atat::Error::from)?;
        let mut reader = ResponseReader::new(resp);
        reader.resp_start("+COPN:");
        Ok(OperatorNames::read(&mut reader))
    }
}

/// 7.14 Network registration status +CREG\
/// 18.27 GPRS network registration status +CGREG\
/// 18.36 EPS network registration status +CEREG
///
/// Configures the network registration URC of `domain`. Depending on the <n>
/// parameter value, a URC can be issued:
/// • `<stat>` if <n>=1 and there is a change in the MT's network registration
/// status
/// • `<stat>[,<lac>,<ci>[,<AcT>]]` if <n>=2 and there is a change of the
/// network cell
/// The parameters <lac>, <ci> and <AcT> are provided only if available.
#[derive(Clone)]
pub struct SetRegistrationUrc {
    pub domain: RegistrationDomain,
    pub mode: RegistrationMode,
}

impl AtatCmd for SetRegistrationUrc {
    type Response = NoResponse;

    const MAX_LEN: usize = 16;

    fn write(&self, buf: &mut [u8]) -> usize {
        write_cmd(
            buf,
            format_args!("AT{}={}", self.domain.entry().cmd, self.mode as u8),
        )
    }

    fn parse(
        &self,
        resp: Result<&[u8], InternalError>,
    ) -> Result<Self::Response, atat::Error> {
        resp.map_err(atat::Error::from)?;
        Ok(NoResponse)
    }
}

/// 7.14 Network registration status +CREG\
/// 18.27 GPRS network registration status +CGREG\
/// 18.36 EPS network registration status +CEREG
///
/// The read command provides the same information issued by the URC together
/// with the current value of the <n> parameter.
#[derive(Clone)]
pub struct GetRegistrationStatus {
    pub domain: RegistrationDomain,
}

impl AtatCmd for GetRegistrationStatus {
    type Response = RegistrationParams;

    const MAX_LEN: usize = 16;

    fn write(&self, buf: &mut [u8]) -> usize {
        write_cmd(buf, format_args!("AT{}?", self.domain.entry().cmd))
    }

    fn parse(
        &self,
        resp: Result<&[u8], InternalError>,
    ) -> Result<Self::Response, atat::Error> {
        let resp = resp.map_err(atat::Error::from)?;
        let entry = self.domain.entry();
        let mut reader = ResponseReader::new(resp);
        if !reader.resp_start(entry.response_prefix) {
            return Err(atat::Error::Parse);
        }
        // Skip <n>
        reader.skip_param(1);
        RegistrationParams::read(&mut reader, self.domain)
    }
}
