use atat::blocking::AtatClient;
use atat::UrcSubscription;

use crate::command::{ConnectionUrc, Urc};
use crate::config::CellularConfig;
use crate::network::Network;
use crate::state::ConnectionStatus;

impl<C, CFG> Network<'_, C, CFG>
where
    C: AtatClient,
    CFG: CellularConfig,
{
    /// Drain every URC currently queued on `subscription`.
    pub fn process_urcs<const CAPACITY: usize, const SUBSCRIBERS: usize>(
        &self,
        subscription: &mut UrcSubscription<'_, Urc, CAPACITY, SUBSCRIBERS>,
    ) {
        while let Some(urc) = subscription.try_next_message_pure() {
            self.handle_urc(urc);
        }
    }

    /// Dispatch a single URC. URCs whose prefix is not routed are ignored.
    pub fn handle_urc(&self, urc: Urc) {
        if !self.state.is_urc_registered(urc.prefix()) {
            trace!("Unrouted URC {:?}", urc.prefix());
            return;
        }

        match urc {
            Urc::NetworkRegistration(params) => self.reconcile(&params),
            Urc::Connection(ConnectionUrc::NoCarrier) => {
                warn!("No carrier");
                self.notify_connection_status(ConnectionStatus::Disconnected);
            }
            Urc::Connection(ConnectionUrc::PacketSwitchedEvent(event)) => match event.classify() {
                Some(kind) => {
                    warn!("Packet domain event: {:?}", kind.as_str());
                    self.notify_connection_status(ConnectionStatus::Disconnected);
                }
                None => debug!("Packet domain event {:?}", event.text.as_str()),
            },
        }
    }
}
