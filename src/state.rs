use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Vec;

use crate::command::network_service::types::{RadioAccessTechnology, RegistrationStatus};
use crate::registration::RegistrationParams;

/// Coalesced device level connection status.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    #[default]
    Disconnected,
    Local,
}

/// Events delivered to the attached observer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellularEvent {
    ConnectionStatusChanged(ConnectionStatus),
    RadioAccessTechnologyChanged(RadioAccessTechnology),
    RegistrationStatusChanged(RegistrationStatus),
    CellIdChanged(u32),
}

/// Every URC prefix that can be routed: three registration domains,
/// `NO CARRIER` and `+CGEV:`.
pub(crate) const MAX_URC_PREFIXES: usize = 5;

pub struct State {
    shared: Mutex<NoopRawMutex, RefCell<Shared>>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(RefCell::new(Shared {
                registration: RegistrationParams::new(),
                connection_status: ConnectionStatus::Disconnected,
                access_technology: RadioAccessTechnology::Unknown,
                urc_prefixes: Vec::new(),
            })),
        }
    }

    pub fn registration(&self) -> RegistrationParams {
        self.shared.lock(|s| s.borrow().registration)
    }

    pub fn update_registration_with<R>(&self, f: impl FnOnce(&mut RegistrationParams) -> R) -> R {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            f(&mut s.registration)
        })
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.shared.lock(|s| s.borrow().connection_status)
    }

    /// Store `status`, returning whether it differs from the previous one.
    pub fn set_connection_status(&self, status: ConnectionStatus) -> bool {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            replace_if_changed(&mut s.connection_status, status)
        })
    }

    pub fn access_technology(&self) -> RadioAccessTechnology {
        self.shared.lock(|s| s.borrow().access_technology)
    }

    pub fn set_access_technology(&self, rat: RadioAccessTechnology) {
        self.shared.lock(|s| {
            s.borrow_mut().access_technology = rat;
        })
    }

    pub(crate) fn register_urc(&self, prefix: &'static str) {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            if !s.urc_prefixes.contains(&prefix) && s.urc_prefixes.push(prefix).is_err() {
                error!("No room to route URC {:?}", prefix);
            }
        })
    }

    pub(crate) fn deregister_urcs(&self) {
        self.shared.lock(|s| s.borrow_mut().urc_prefixes.clear())
    }

    pub(crate) fn is_urc_registered(&self, prefix: &str) -> bool {
        self.shared
            .lock(|s| s.borrow().urc_prefixes.iter().any(|p| *p == prefix))
    }
}

/// State shared between the command path and the URC path
pub(crate) struct Shared {
    /// Last known registration, shared by all domains
    registration: RegistrationParams,
    connection_status: ConnectionStatus,
    /// Access technology filter for operator scans, `Unknown` for none
    access_technology: RadioAccessTechnology,
    urc_prefixes: Vec<&'static str, MAX_URC_PREFIXES>,
}

pub(crate) fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
