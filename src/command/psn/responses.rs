//! Responses for Packet Switched Data Services Commands
use super::types::*;
use atat::atat_derive::AtatResp;

/// 18.14 GPRS attach or detach +CGATT
#[derive(Debug, Clone, AtatResp)]
pub struct GPRSAttached {
    #[at_arg(position = 0)]
    pub state: GPRSAttachedState,
}

/// 18.16 PDP context activate or deactivate +CGACT
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PDPContextState {
    #[at_arg(position = 0)]
    pub cid: u8,
    #[at_arg(position = 1)]
    pub status: PDPContextStatus,
}

impl PDPContextState {
    pub fn is_active(&self) -> bool {
        self.status == PDPContextStatus::Activated
    }
}

/// 18.38 CIoT optimization configuration +CCIOTOPT
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CiotOptimization {
    #[at_arg(position = 0)]
    pub n: CiotOptimizationUrc,
    #[at_arg(position = 1)]
    pub supported: SupportedUeOptimization,
    #[at_arg(position = 2)]
    pub preferred: PreferredUeOptimization,
}
