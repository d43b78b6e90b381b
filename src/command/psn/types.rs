//! Argument and parameter types used by Packet Switched Data Services Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GPRSAttachedState {
    Detached = 0,
    Attached = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PDPContextStatus {
    Deactivated = 0,
    Activated = 1,
}

/// The `<mode>` of `+CGEREP`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PSEventReportingMode {
    /// • 0 (default value): buffer URCs in the MT; if the MT buffer is full,
    /// the oldest ones are discarded
    BufferUnsolicitedResultCodes = 0,
    /// • 1: discard URCs when V.24 link is reserved (online data mode);
    /// otherwise forward them directly to the DTE
    DiscardUrcsWhenLinkReserved = 1,
    /// • 2: buffer URCs in the MT when link reserved (online data mode) and
    /// flush them to the DTE when the link becomes available
    BufferUrcsWhenLinkReserved = 2,
}

/// Packet domain events reported by `+CGEV`.
///
/// Only the events that tear down the shared PDP context are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketSwitchedEventReporting {
    /// `NW DETACH`
    NetworkDetach,
    /// `ME DETACH`
    MobileStationDetach,
    /// `NW DEACT`
    NetworkDeactivate,
    /// `ME DEACT`
    MobileStationDeactivate,
    /// `NW PDN DEACT`
    NetworkPDNDeactivate,
    /// `ME PDN DEACT`
    MobileStationPDNDeactivate,
}

impl PacketSwitchedEventReporting {
    pub const ALL: [Self; 6] = [
        Self::NetworkDetach,
        Self::MobileStationDetach,
        Self::NetworkDeactivate,
        Self::MobileStationDeactivate,
        Self::NetworkPDNDeactivate,
        Self::MobileStationPDNDeactivate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkDetach => "NW DETACH",
            Self::MobileStationDetach => "ME DETACH",
            Self::NetworkDeactivate => "NW DEACT",
            Self::MobileStationDeactivate => "ME DEACT",
            Self::NetworkPDNDeactivate => "NW PDN DEACT",
            Self::MobileStationPDNDeactivate => "ME PDN DEACT",
        }
    }
}

/// The `<n>` of `+CCIOTOPT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CiotOptimizationUrc {
    Disabled = 0,
    Enabled = 1,
}

/// CIoT EPS optimizations supported by the UE
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupportedUeOptimization {
    /// • 0: no support
    NoSupport = 0,
    /// • 1: control plane CIoT EPS optimization
    ControlPlane = 1,
    /// • 2: user plane EPS optimization
    UserPlane = 2,
    /// • 3: both control plane and user plane optimizations
    ControlPlaneAndUserPlane = 3,
}

/// Preferred CIoT EPS optimization of the UE
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PreferredUeOptimization {
    /// • 0: no preference
    NoPreference = 0,
    /// • 1: control plane CIoT EPS optimization
    ControlPlane = 1,
    /// • 2: user plane EPS optimization
    UserPlane = 2,
}
