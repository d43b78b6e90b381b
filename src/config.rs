use atat::blocking::AtatClient;

use crate::command::network_service::types::{OperatorFormat, RadioAccessTechnology};
use crate::error::Error;
use crate::registration::{RegistrationDomain, RegistrationMode};

pub trait CellularConfig {
    /// URC mode of `+CEREG`. [`RegistrationMode::Disabled`] turns the EPS
    /// domain off entirely.
    const EPS_REGISTRATION: RegistrationMode = RegistrationMode::EnabledWithLocationInfo;
    const PS_REGISTRATION: RegistrationMode = RegistrationMode::EnabledWithLocationInfo;
    const CS_REGISTRATION: RegistrationMode = RegistrationMode::EnabledWithLocationInfo;

    /// Format of the `<oper>` given to manual operator selection.
    const OPERATOR_FORMAT: OperatorFormat = OperatorFormat::Numeric;

    fn registration_mode(&self, domain: RegistrationDomain) -> RegistrationMode {
        match domain {
            RegistrationDomain::Eps => Self::EPS_REGISTRATION,
            RegistrationDomain::PacketSwitched => Self::PS_REGISTRATION,
            RegistrationDomain::CircuitSwitched => Self::CS_REGISTRATION,
        }
    }

    fn is_enabled(&self, domain: RegistrationDomain) -> bool {
        self.registration_mode(domain) != RegistrationMode::Disabled
    }

    /// Force the modem onto `rat`. There is no standard command for this, so
    /// modems that can must override it.
    fn select_access_technology<A: AtatClient>(
        &self,
        _client: &mut A,
        _rat: RadioAccessTechnology,
    ) -> Result<(), Error> {
        Err(Error::Unsupported)
    }
}

/// Every domain enabled with location info, no access technology selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConfig;

impl CellularConfig for DefaultConfig {}
