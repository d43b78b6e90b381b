use core::cell::{Cell, RefCell};

use atat::blocking::AtatClient;
use atat::AtatCmd;

use crate::command::network_service::responses::{OperatorList, OperatorNames, OperatorSelection};
use crate::command::network_service::types::{
    ExtendedSignalQuality, OperatorSelectionMode, RadioAccessTechnology, SignalQuality,
};
use crate::command::network_service::{
    GetExtendedSignalQuality, GetOperatorNames, GetOperatorSelection, GetRegistrationStatus,
    GetSignalQuality, ScanOperators, SetOperatorSelection, SetRegistrationUrc,
};
use crate::command::psn::responses::{CiotOptimization, PDPContextState};
use crate::command::psn::types::{
    CiotOptimizationUrc, GPRSAttachedState, PSEventReportingMode, PreferredUeOptimization,
    SupportedUeOptimization,
};
use crate::command::psn::{
    GetCiotOptimization, GetGPRSAttached, GetPDPContextState, SetCiotOptimization,
    SetGPRSAttached, SetPacketSwitchedEventReporting,
};
use crate::command::{NO_CARRIER, PACKET_SWITCHED_EVENT};
use crate::config::CellularConfig;
use crate::error::Error;
use crate::registration::{RegistrationDomain, RegistrationMode, RegistrationParams};
use crate::state::{replace_if_changed, CellularEvent, ConnectionStatus, State};

/// Network registration and attach handling on top of an AT channel.
///
/// Every operation holds the channel for its whole command sequence. URCs
/// are fed in through [`Network::handle_urc`] or [`Network::process_urcs`]
/// and only touch the shared state, never the channel.
///
/// [`Network::new`] enables `+CGEREP` and routes the registration and
/// connection URCs. Dropping a `Network` undoes neither, since there is no
/// fallible `Drop` to send `AT+CGEREP=0` from. Call [`Network::release`] to
/// disable event reporting and get the client back.
pub struct Network<'a, C, CFG> {
    pub(crate) at: RefCell<C>,
    pub(crate) config: CFG,
    pub(crate) state: State,
    observer: Cell<Option<&'a dyn Fn(CellularEvent)>>,
}

fn transact<A: AtatClient, Cmd: AtatCmd>(
    client: &mut A,
    cmd: &Cmd,
) -> Result<Cmd::Response, Error> {
    client.send(cmd).map_err(|e| {
        debug!("AT transaction failed: {:?}", e);
        Error::Atat(e)
    })
}

impl<'a, C, CFG> Network<'a, C, CFG>
where
    C: AtatClient,
    CFG: CellularConfig,
{
    /// Route the URCs of every enabled domain and turn on packet domain
    /// event reporting.
    pub fn new(client: C, config: CFG) -> Self {
        let network = Self {
            at: RefCell::new(client),
            config,
            state: State::new(),
            observer: Cell::new(None),
        };

        for domain in RegistrationDomain::ALL {
            if network.config.is_enabled(domain) {
                network.state.register_urc(domain.entry().urc_prefix);
            }
        }
        network.state.register_urc(NO_CARRIER);
        network.state.register_urc(PACKET_SWITCHED_EVENT);

        if let Err(e) = network.send(&SetPacketSwitchedEventReporting {
            mode: PSEventReportingMode::DiscardUrcsWhenLinkReserved,
            bfr: None,
        }) {
            warn!("Failed to enable packet domain events: {:?}", e);
        }

        network
    }

    /// Turn packet domain event reporting off, stop routing URCs and hand
    /// the channel back. A failed `AT+CGEREP=0` is logged and the client is
    /// returned regardless.
    pub fn release(self) -> C {
        if let Err(e) = self.send(&SetPacketSwitchedEventReporting {
            mode: PSEventReportingMode::BufferUnsolicitedResultCodes,
            bfr: None,
        }) {
            warn!("Failed to disable packet domain events: {:?}", e);
        }
        self.state.deregister_urcs();
        self.at.into_inner()
    }

    /// Attach, replace or (with `None`) detach the single observer.
    pub fn attach_observer(&self, observer: Option<&'a dyn Fn(CellularEvent)>) {
        self.observer.set(observer);
    }

    fn emit(&self, event: CellularEvent) {
        if let Some(observer) = self.observer.get() {
            observer(event);
        }
    }

    fn send<Cmd: AtatCmd>(&self, cmd: &Cmd) -> Result<Cmd::Response, Error> {
        let mut at = self.at.try_borrow_mut()?;
        transact(&mut *at, cmd)
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.state.connection_status()
    }

    /// Publish `status`. The observer only hears about actual transitions.
    pub fn notify_connection_status(&self, status: ConnectionStatus) {
        if self.state.set_connection_status(status) {
            info!("Connection status: {:?}", status);
            self.emit(CellularEvent::ConnectionStatusChanged(status));
        }
    }

    /// Last known registration, whichever domain reported it.
    pub fn registration_params(&self) -> RegistrationParams {
        self.state.registration()
    }

    /// Diff URC delivered registration parameters against the snapshot and
    /// raise an event per changed field, RAT first, then status, then cell id.
    ///
    /// Without an observer nothing is tracked.
    pub(crate) fn reconcile(&self, params: &RegistrationParams) {
        if self.observer.get().is_none() {
            return;
        }

        self.state
            .update_registration_with(|r| r.domain = params.domain);

        if self
            .state
            .update_registration_with(|r| replace_if_changed(&mut r.act, params.act))
        {
            debug!("Radio access technology: {:?}", params.act);
            self.emit(CellularEvent::RadioAccessTechnologyChanged(params.act));
        }

        if self
            .state
            .update_registration_with(|r| replace_if_changed(&mut r.status, params.status))
        {
            if params.status.is_unavailable() {
                warn!("Network registration lost: {:?}", params.status);
            } else {
                info!("Network registration: {:?}", params.status);
            }
            self.emit(CellularEvent::RegistrationStatusChanged(params.status));
        }

        if let Some(cell_id) = params.cell_id {
            if self.state.update_registration_with(|r| {
                replace_if_changed(&mut r.cell_id, Some(cell_id))
            }) {
                debug!("Cell id: {:x}", cell_id);
                self.emit(CellularEvent::CellIdChanged(cell_id));
            }
        }
    }

    /// Turn the registration URC of `domain` on (with the configured mode) or
    /// off.
    pub fn set_registration_urc(&self, domain: RegistrationDomain, on: bool) -> Result<(), Error> {
        let mode = self.config.registration_mode(domain);
        if mode == RegistrationMode::Disabled {
            return Err(Error::Unsupported);
        }

        let mode = if on { mode } else { RegistrationMode::Disabled };
        self.send(&SetRegistrationUrc { domain, mode })?;
        Ok(())
    }

    pub fn get_network_registering_mode(&self) -> Result<OperatorSelectionMode, Error> {
        Ok(self.send(&GetOperatorSelection)?.mode)
    }

    /// Register automatically, or manually on `plmn` falling back to
    /// automatic selection if that fails.
    pub fn set_registration(&self, plmn: Option<&str>) -> Result<(), Error> {
        let mut at = self.at.try_borrow_mut()?;

        match plmn {
            Some(plmn) => {
                debug!("Manual network registration to {:?}", plmn);
                transact(
                    &mut *at,
                    &SetOperatorSelection {
                        mode: OperatorSelectionMode::ManualAutomatic,
                        format: Some(CFG::OPERATOR_FORMAT),
                        oper: Some(plmn),
                    },
                )?;
            }
            None => {
                if let Ok(OperatorSelection {
                    mode: OperatorSelectionMode::Automatic,
                    ..
                }) = transact(&mut *at, &GetOperatorSelection)
                {
                    return Ok(());
                }

                debug!("Automatic network registration");
                transact(
                    &mut *at,
                    &SetOperatorSelection {
                        mode: OperatorSelectionMode::Automatic,
                        format: None,
                        oper: None,
                    },
                )?;
            }
        }
        Ok(())
    }

    /// Attach to the packet domain, unless already attached.
    pub fn set_attach(&self) -> Result<(), Error> {
        let mut at = self.at.try_borrow_mut()?;

        if transact(&mut *at, &GetGPRSAttached)?.state == GPRSAttachedState::Attached {
            return Ok(());
        }

        debug!("Network attach");
        transact(
            &mut *at,
            &SetGPRSAttached {
                state: GPRSAttachedState::Attached,
            },
        )?;
        Ok(())
    }

    pub fn get_attach(&self) -> Result<GPRSAttachedState, Error> {
        Ok(self.send(&GetGPRSAttached)?.state)
    }

    /// Detach from the packet domain. The connection is reported as
    /// disconnected whatever the modem answers.
    pub fn detach(&self) -> Result<(), Error> {
        debug!("Network detach");
        let result = self.send(&SetGPRSAttached {
            state: GPRSAttachedState::Detached,
        });
        self.notify_connection_status(ConnectionStatus::Disconnected);
        result.map(drop)
    }

    /// Store `rat` as the operator scan filter and ask the modem to select it.
    pub fn set_access_technology(&self, rat: RadioAccessTechnology) -> Result<(), Error> {
        if rat == RadioAccessTechnology::Unknown {
            return Err(Error::Unsupported);
        }

        self.state.set_access_technology(rat);
        let mut at = self.at.try_borrow_mut()?;
        self.config.select_access_technology(&mut *at, rat)
    }

    /// Scan for operators, keeping those that match the access technology
    /// filter.
    pub fn scan_plmn<const N: usize>(&self) -> Result<OperatorList<N>, Error> {
        let filter = self.state.access_technology();
        let operators = self.send(&ScanOperators::<N> { filter })?;
        debug!("Found {} operators", operators.len());
        Ok(operators)
    }

    pub fn set_ciot_optimization_config(
        &self,
        supported: SupportedUeOptimization,
        preferred: PreferredUeOptimization,
    ) -> Result<(), Error> {
        self.send(&SetCiotOptimization {
            n: CiotOptimizationUrc::Disabled,
            supported,
            preferred,
        })?;
        Ok(())
    }

    pub fn get_ciot_optimization_config(&self) -> Result<CiotOptimization, Error> {
        self.send(&GetCiotOptimization)
    }

    pub fn get_extended_signal_quality(&self) -> Result<ExtendedSignalQuality, Error> {
        self.send(&GetExtendedSignalQuality)?.try_into()
    }

    pub fn get_signal_quality(&self) -> Result<SignalQuality, Error> {
        self.send(&GetSignalQuality)?.try_into()
    }

    pub fn get_operator_params(&self) -> Result<OperatorSelection, Error> {
        self.send(&GetOperatorSelection)
    }

    pub fn get_operator_names<const N: usize>(&self) -> Result<OperatorNames<N>, Error> {
        self.send(&GetOperatorNames::<N>)
    }

    /// Whether any PDP context is active. A failed query reads as inactive.
    pub fn is_active_context(&self) -> bool {
        self.send(&GetPDPContextState)
            .map(|states| states.iter().any(PDPContextState::is_active))
            .unwrap_or(false)
    }

    /// Query the registration of `domain` and make it the snapshot. No
    /// events are raised.
    pub fn get_registration_params(
        &self,
        domain: RegistrationDomain,
    ) -> Result<RegistrationParams, Error> {
        if !self.config.is_enabled(domain) {
            return Err(Error::Unsupported);
        }

        let params = self.send(&GetRegistrationStatus { domain })?;
        self.state.update_registration_with(|r| *r = params);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::network_service::types::RegistrationStatus;
    use crate::config::DefaultConfig;
    use crate::test_helpers::MockAtClient;
    use std::vec::Vec;

    struct NoEps;

    impl CellularConfig for NoEps {
        const EPS_REGISTRATION: RegistrationMode = RegistrationMode::Disabled;
    }

    fn sent<CFG: CellularConfig>(network: &Network<'_, MockAtClient, CFG>) -> Vec<String> {
        network.at.borrow().sent.clone()
    }

    #[test]
    fn construction_and_release_toggle_event_reporting() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        assert!(network.state.is_urc_registered("+CEREG:"));
        assert!(network.state.is_urc_registered("+CGREG:"));
        assert!(network.state.is_urc_registered("+CREG:"));
        assert!(network.state.is_urc_registered("NO CARRIER"));
        assert!(network.state.is_urc_registered("+CGEV:"));

        let client = network.release();
        assert_eq!(client.sent, ["AT+CGEREP=1", "AT+CGEREP=0"]);
    }

    #[test]
    fn disabled_domain_is_not_routed() {
        let network = Network::new(MockAtClient::new(), NoEps);
        assert!(!network.state.is_urc_registered("+CEREG:"));
        assert!(network.state.is_urc_registered("+CREG:"));
    }

    #[test]
    fn registration_diff_fires_in_order() {
        let events = RefCell::new(Vec::new());
        let observer = |e: CellularEvent| events.borrow_mut().push(e);

        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.attach_observer(Some(&observer));
        network
            .state
            .update_registration_with(|r| r.act = RadioAccessTechnology::Gsm);

        let params = RegistrationParams {
            domain: Some(RegistrationDomain::Eps),
            status: RegistrationStatus::RegisteredHome,
            lac: Some(0x10),
            cell_id: Some(4660),
            act: RadioAccessTechnology::EUtran,
            active_time: None,
            periodic_tau: None,
        };
        network.reconcile(&params);

        assert_eq!(
            *events.borrow(),
            [
                CellularEvent::RadioAccessTechnologyChanged(RadioAccessTechnology::EUtran),
                CellularEvent::RegistrationStatusChanged(RegistrationStatus::RegisteredHome),
                CellularEvent::CellIdChanged(4660),
            ]
        );

        let snapshot = network.registration_params();
        assert_eq!(snapshot.domain, params.domain);
        assert_eq!(snapshot.act, params.act);
        assert_eq!(snapshot.status, params.status);
        assert_eq!(snapshot.cell_id, params.cell_id);

        // Same parameters again change nothing
        network.reconcile(&params);
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn absent_cell_id_keeps_the_old_one() {
        let events = RefCell::new(Vec::new());
        let observer = |e: CellularEvent| events.borrow_mut().push(e);

        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.attach_observer(Some(&observer));
        network.state.update_registration_with(|r| {
            r.cell_id = Some(1);
            r.status = RegistrationStatus::SearchingOperator;
        });

        network.reconcile(&RegistrationParams {
            domain: Some(RegistrationDomain::CircuitSwitched),
            status: RegistrationStatus::SearchingOperator,
            ..RegistrationParams::new()
        });

        assert!(events.borrow().is_empty());
        assert_eq!(network.registration_params().cell_id, Some(1));
    }

    #[test]
    fn reconcile_without_observer_is_a_no_op() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.reconcile(&RegistrationParams {
            domain: Some(RegistrationDomain::Eps),
            status: RegistrationStatus::RegisteredHome,
            cell_id: Some(7),
            act: RadioAccessTechnology::Nb1,
            ..RegistrationParams::new()
        });
        assert_eq!(network.registration_params(), RegistrationParams::new());
    }

    #[test]
    fn connection_status_is_coalesced() {
        let events = RefCell::new(Vec::new());
        let observer = |e: CellularEvent| events.borrow_mut().push(e);

        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.attach_observer(Some(&observer));

        network.notify_connection_status(ConnectionStatus::Connected);
        network.notify_connection_status(ConnectionStatus::Connected);
        // Initial status is already disconnected
        network.attach_observer(None);
        network.notify_connection_status(ConnectionStatus::Disconnected);
        network.attach_observer(Some(&observer));
        network.notify_connection_status(ConnectionStatus::Disconnected);

        assert_eq!(
            *events.borrow(),
            [CellularEvent::ConnectionStatusChanged(ConnectionStatus::Connected)]
        );
        assert_eq!(network.connection_status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn attach_is_idempotent() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network
            .at
            .borrow_mut()
            .respond(b"+CGATT: 1")
            .respond(b"+CGATT: 1");

        assert_eq!(network.set_attach(), Ok(()));
        assert_eq!(network.set_attach(), Ok(()));
        assert_eq!(sent(&network), ["AT+CGEREP=1", "AT+CGATT?", "AT+CGATT?"]);
    }

    #[test]
    fn attach_when_detached() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.at.borrow_mut().respond(b"+CGATT: 0");

        assert_eq!(network.set_attach(), Ok(()));
        assert_eq!(sent(&network)[1..], ["AT+CGATT?", "AT+CGATT=1"]);
    }

    #[test]
    fn failed_attach_query_does_not_attach() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.at.borrow_mut().fail(atat::Error::Timeout);

        assert_eq!(network.set_attach(), Err(Error::Atat(atat::Error::Timeout)));
        assert_eq!(sent(&network)[1..], ["AT+CGATT?"]);
    }

    #[test]
    fn detach_always_disconnects() {
        let events = RefCell::new(Vec::new());
        let observer = |e: CellularEvent| events.borrow_mut().push(e);

        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.attach_observer(Some(&observer));
        network.notify_connection_status(ConnectionStatus::Connected);
        network.at.borrow_mut().fail(atat::Error::Error);

        assert_eq!(network.detach(), Err(Error::Atat(atat::Error::Error)));
        assert_eq!(network.connection_status(), ConnectionStatus::Disconnected);
        assert_eq!(sent(&network)[1..], ["AT+CGATT=0"]);
        assert_eq!(
            events.borrow().last(),
            Some(&CellularEvent::ConnectionStatusChanged(
                ConnectionStatus::Disconnected
            ))
        );
    }

    #[test]
    fn automatic_registration() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network
            .at
            .borrow_mut()
            .respond(b"+COPS: 0,0,\"Telia DK\",7")
            .respond(b"+COPS: 1,2,\"23820\",7")
            .respond(b"")
            .fail(atat::Error::Timeout)
            .respond(b"");

        // Already automatic
        assert_eq!(network.set_registration(None), Ok(()));
        // Manual, switch to automatic
        assert_eq!(network.set_registration(None), Ok(()));
        // Failed query, switch anyway
        assert_eq!(network.set_registration(None), Ok(()));

        assert_eq!(
            sent(&network)[1..],
            ["AT+COPS?", "AT+COPS?", "AT+COPS=0", "AT+COPS?", "AT+COPS=0"]
        );
    }

    #[test]
    fn manual_registration() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        assert_eq!(network.set_registration(Some("23820")), Ok(()));
        assert_eq!(sent(&network)[1..], ["AT+COPS=4,2,\"23820\""]);
    }

    #[test]
    fn registration_urc_subscription() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        assert_eq!(network.set_registration_urc(RegistrationDomain::Eps, true), Ok(()));
        assert_eq!(
            network.set_registration_urc(RegistrationDomain::CircuitSwitched, false),
            Ok(())
        );
        assert_eq!(sent(&network)[1..], ["AT+CEREG=2", "AT+CREG=0"]);

        let network = Network::new(MockAtClient::new(), NoEps);
        assert_eq!(
            network.set_registration_urc(RegistrationDomain::Eps, true),
            Err(Error::Unsupported)
        );
        assert_eq!(sent(&network).len(), 1);
    }

    #[test]
    fn explicit_registration_query() {
        let events = RefCell::new(Vec::new());
        let observer = |e: CellularEvent| events.borrow_mut().push(e);

        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.attach_observer(Some(&observer));
        network
            .at
            .borrow_mut()
            .respond(b"+CGREG: 2,5,\"00A1\",\"0000BEEF\",2")
            .fail(atat::Error::Timeout);

        let params = network
            .get_registration_params(RegistrationDomain::PacketSwitched)
            .unwrap();
        assert_eq!(params.domain, Some(RegistrationDomain::PacketSwitched));
        assert_eq!(params.status, RegistrationStatus::RegisteredRoaming);
        assert_eq!(params.lac, Some(0xA1));
        assert_eq!(params.cell_id, Some(0xBEEF));
        assert_eq!(params.act, RadioAccessTechnology::Utran);
        assert_eq!(network.registration_params(), params);
        assert!(events.borrow().is_empty());

        // A failed query leaves the snapshot alone
        assert_eq!(
            network.get_registration_params(RegistrationDomain::PacketSwitched),
            Err(Error::Atat(atat::Error::Timeout))
        );
        assert_eq!(network.registration_params(), params);
        assert_eq!(sent(&network)[1..], ["AT+CGREG?", "AT+CGREG?"]);
    }

    #[test]
    fn disabled_domain_query_is_unsupported() {
        let network = Network::new(MockAtClient::new(), NoEps);
        assert_eq!(
            network.get_registration_params(RegistrationDomain::Eps),
            Err(Error::Unsupported)
        );
        assert_eq!(sent(&network).len(), 1);
    }

    #[test]
    fn invalid_signal_quality_is_a_device_error() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network
            .at
            .borrow_mut()
            .respond(b"+CSQ: -1,99")
            .respond(b"+CSQ: 17,99")
            .respond(b"+CESQ: 99,99,255,255,-3,45");

        assert_eq!(network.get_signal_quality(), Err(Error::DeviceError));
        assert_eq!(
            network.get_signal_quality(),
            Ok(SignalQuality { rssi: 17, ber: 99 })
        );
        assert_eq!(network.get_extended_signal_quality(), Err(Error::DeviceError));
    }

    const SCAN: &[u8] = b"+COPS: (2,\"Telia DK\",\"Telia\",\"23820\",0),(1,\"TDC\",\"TDC\",\"23801\",7),(1,\"3 DK\",\"3\",\"23806\",2),,(0,1,2,3,4),(0,1,2)";

    #[test]
    fn scan_uses_the_access_technology_filter() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.at.borrow_mut().respond(SCAN).respond(SCAN);

        assert_eq!(network.scan_plmn::<8>().unwrap().len(), 3);

        // The generic modem cannot select a RAT, but the filter sticks
        assert_eq!(
            network.set_access_technology(RadioAccessTechnology::EUtran),
            Err(Error::Unsupported)
        );
        assert_eq!(
            network.set_access_technology(RadioAccessTechnology::Unknown),
            Err(Error::Unsupported)
        );

        let operators = network.scan_plmn::<8>().unwrap();
        assert_eq!(operators.len(), 1);
        assert_eq!(operators.operators[0].numeric.as_str(), "23801");
        assert_eq!(sent(&network)[1..], ["AT+COPS=?", "AT+COPS=?"]);
    }

    #[test]
    fn ciot_optimization_config() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network.at.borrow_mut().respond(b"").respond(b"+CCIOTOPT: 0,1,1");

        assert_eq!(
            network.set_ciot_optimization_config(
                SupportedUeOptimization::ControlPlaneAndUserPlane,
                PreferredUeOptimization::ControlPlane
            ),
            Ok(())
        );
        let config = network.get_ciot_optimization_config().unwrap();
        assert_eq!(config.supported, SupportedUeOptimization::ControlPlane);
        assert_eq!(sent(&network)[1..], ["AT+CCIOTOPT=0,3,1", "AT+CCIOTOPT?"]);
    }

    #[test]
    fn operator_queries() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network
            .at
            .borrow_mut()
            .respond(b"+COPS: 0,1,\"Telia\",7")
            .respond(b"+COPS: 0")
            .respond(b"+COPN: \"23820\",\"Telia DK\"\r\n+COPN: \"23801\",\"TDC\"");

        let operator = network.get_operator_params().unwrap();
        assert_eq!(operator.name.unwrap().as_str(), "Telia");
        assert_eq!(
            network.get_network_registering_mode(),
            Ok(OperatorSelectionMode::Automatic)
        );
        let names = network.get_operator_names::<4>().unwrap();
        assert_eq!(names.names.len(), 2);
        assert_eq!(names.names[1].alpha.as_str(), "TDC");
    }

    #[test]
    fn active_context() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        network
            .at
            .borrow_mut()
            .respond(b"+CGACT: 1,0\r\n+CGACT: 2,1")
            .respond(b"+CGACT: 1,0")
            .fail(atat::Error::Timeout);

        assert!(network.is_active_context());
        assert!(!network.is_active_context());
        assert!(!network.is_active_context());
    }

    #[test]
    fn channel_is_exclusive() {
        let network = Network::new(MockAtClient::new(), DefaultConfig);
        let _guard = network.at.borrow_mut();
        assert_eq!(network.get_attach(), Err(Error::Busy));
    }
}
