//! ### 18 - Packet Switched Data Services Commands
//!
//! A PDP context can be either primary or secondary. In LTE, PS data
//! connections are referred to as EPS bearers: EPS bearers are conceptually
//! equivalent to the legacy PDP contexts, which are often referred to for sake
//! of simplicity. The initial EPS bearer established during LTE attach
//! procedure is actually a default EPS bearer.
//!
//! Only a single shared context is tracked, so context events are not told
//! apart by `<cid>`.

pub mod responses;
pub mod types;
pub mod urc;

use atat::atat_derive::AtatCmd;
use responses::{CiotOptimization, GPRSAttached, PDPContextState};
use types::{
    CiotOptimizationUrc, GPRSAttachedState, PSEventReportingMode, PreferredUeOptimization,
    SupportedUeOptimization,
};

use super::NoResponse;

/// 18.14 GPRS attach or detach +CGATT
///
/// Register (attach) the MT to, or deregister (detach) the MT from the GPRS
/// service. After this command the MT remains in AT command mode. If the MT
/// is already in the requested state, the command is ignored and OK is
/// returned. If the requested state cannot be reached, an error result code
/// is returned.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT", NoResponse, attempts = 1, timeout_ms = 180000)]
pub struct SetGPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// 18.14 GPRS attach or detach +CGATT
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGATT?", GPRSAttached, timeout_ms = 180000)]
pub struct GetGPRSAttached;

/// 18.16 PDP context activate or deactivate +CGACT
///
/// The read command lists `+CGACT: <cid>,<status>` for every defined context.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGACT?", heapless::Vec<PDPContextState, 11>, attempts = 1, timeout_ms = 150000)]
pub struct GetPDPContextState;

/// 18.26 Packet switched event reporting +CGEREP
///
/// Configures sending of URCs from MT to the DTE, in case of certain events
/// occurring in the packet switched MT or the network. By means of the <mode>
/// parameter, it is possible to control the processing of the URCs codes
/// specified within this command. The <bfr> parameter allows to control the
/// effect on buffered codes when the <mode> parameter is set to 1 (discard URCs
/// when V.24 link is reserved) or 2 (buffer URCs in the MT when link reserved
/// and flush them to the DTE when the link becomes available).
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGEREP", NoResponse)]
pub struct SetPacketSwitchedEventReporting {
    #[at_arg(position = 0)]
    pub mode: PSEventReportingMode,
    #[at_arg(position = 1)]
    pub bfr: Option<u8>,
}

/// 18.38 CIoT optimization configuration +CCIOTOPT
///
/// Configures the CIoT EPS optimizations the UE indicates as supported and
/// preferred in the ATTACH REQUEST and TRACKING AREA UPDATE REQUEST messages.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CCIOTOPT", NoResponse)]
pub struct SetCiotOptimization {
    #[at_arg(position = 0)]
    pub n: CiotOptimizationUrc,
    #[at_arg(position = 1)]
    pub supported: SupportedUeOptimization,
    #[at_arg(position = 2)]
    pub preferred: PreferredUeOptimization,
}

/// 18.38 CIoT optimization configuration +CCIOTOPT
///
/// `+CCIOTOPT: <n>,<supported_UE_opt>,<preferred_UE_opt>`
#[derive(Clone, AtatCmd)]
#[at_cmd("+CCIOTOPT?", CiotOptimization)]
pub struct GetCiotOptimization;
