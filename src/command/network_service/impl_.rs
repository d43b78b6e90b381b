use super::responses::{ExtendedSignalQualityReport, SignalQualityReport};
use super::types::*;
use crate::error::Error;

impl RegistrationStatus {
    pub fn is_registered(&self) -> bool {
        matches!(
            self,
            Self::RegisteredHome
                | Self::RegisteredRoaming
                | Self::RegisteredForSmsOnlyHome
                | Self::RegisteredForSmsOnlyRoaming
                | Self::RegisteredForCsfbNotPreferredHome
                | Self::RegisteredForCsfbNotPreferredRoaming
                | Self::AlreadyRegistered
        )
    }

    /// Statuses worth a warning when the network reports them.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NotRegistered | Self::RegistrationDenied | Self::Unknown
        )
    }
}

impl OperatorNameFormat {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Long(s) => s,
            Self::Short(s) => s,
            Self::Numeric(s) => s,
        }
    }
}

fn metric(value: Option<i32>) -> Result<u8, Error> {
    value
        .and_then(|v| u8::try_from(v).ok())
        .ok_or(Error::DeviceError)
}

impl TryFrom<SignalQualityReport> for SignalQuality {
    type Error = Error;

    fn try_from(report: SignalQualityReport) -> Result<Self, Self::Error> {
        Ok(Self {
            rssi: metric(report.rssi)?,
            ber: metric(report.ber)?,
        })
    }
}

impl TryFrom<ExtendedSignalQualityReport> for ExtendedSignalQuality {
    type Error = Error;

    fn try_from(report: ExtendedSignalQualityReport) -> Result<Self, Self::Error> {
        Ok(Self {
            rxlev: metric(report.rxlev)?,
            ber: metric(report.ber)?,
            rscp: metric(report.rscp)?,
            ecno: metric(report.ecno)?,
            rsrq: metric(report.rsrq)?,
            rsrp: metric(report.rsrp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_metric_is_a_device_error() {
        let report = SignalQualityReport {
            rssi: Some(-1),
            ber: Some(99),
        };
        assert_eq!(SignalQuality::try_from(report), Err(Error::DeviceError));

        let report = SignalQualityReport {
            rssi: Some(20),
            ber: None,
        };
        assert_eq!(SignalQuality::try_from(report), Err(Error::DeviceError));
    }

    #[test]
    fn unknown_markers_pass_through() {
        let report = ExtendedSignalQualityReport {
            rxlev: Some(99),
            ber: Some(99),
            rscp: Some(255),
            ecno: Some(255),
            rsrq: Some(20),
            rsrp: Some(45),
        };
        let quality = ExtendedSignalQuality::try_from(report).unwrap();
        assert_eq!(quality.rxlev, 99);
        assert_eq!(quality.rsrq, 20);
        assert_eq!(quality.rsrp, 45);
    }

    #[test]
    fn registered_statuses() {
        assert!(RegistrationStatus::RegisteredHome.is_registered());
        assert!(RegistrationStatus::RegisteredRoaming.is_registered());
        assert!(!RegistrationStatus::SearchingOperator.is_registered());
        assert!(RegistrationStatus::Unknown.is_unavailable());
        assert!(!RegistrationStatus::AttachedEmergencyOnly.is_unavailable());
    }
}
