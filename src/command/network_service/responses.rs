//! Responses for Network service Commands
use super::types::*;
use crate::command::reader::ResponseReader;
use atat::atat_derive::AtatResp;
use atat::AtatResp;
use heapless::{String, Vec};

/// 7.2 Signal quality +CSQ, as reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
pub struct SignalQualityReport {
    #[at_arg(position = 0)]
    pub rssi: Option<i32>,
    #[at_arg(position = 1)]
    pub ber: Option<i32>,
}

/// 7.4 Extended signal quality +CESQ, as reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatResp)]
pub struct ExtendedSignalQualityReport {
    #[at_arg(position = 0)]
    pub rxlev: Option<i32>,
    #[at_arg(position = 1)]
    pub ber: Option<i32>,
    #[at_arg(position = 2)]
    pub rscp: Option<i32>,
    #[at_arg(position = 3)]
    pub ecno: Option<i32>,
    #[at_arg(position = 4)]
    pub rsrq: Option<i32>,
    #[at_arg(position = 5)]
    pub rsrp: Option<i32>,
}

/// 7.5 Operator selection +COPS
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatorSelection {
    #[at_arg(position = 0)]
    pub mode: OperatorSelectionMode,
    /// `<format>` and `<oper>`
    #[at_arg(position = 1)]
    pub name: Option<OperatorNameFormat>,
    #[at_arg(position = 2)]
    pub act: Option<RadioAccessTechnology>,
}

/// One entry of the `+COPS=?` operator list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Operator {
    pub status: OperatorStatus,
    pub long_name: String<24>,
    pub short_name: String<10>,
    pub numeric: String<8>,
    pub act: RadioAccessTechnology,
}

impl Operator {
    fn read(reader: &mut ResponseReader<'_>) -> Self {
        Self {
            status: reader.read_int().map(OperatorStatus::from).unwrap_or_default(),
            long_name: reader.read_string().unwrap_or_default(),
            short_name: reader.read_string().unwrap_or_default(),
            numeric: reader.read_string().unwrap_or_default(),
            act: reader
                .read_int()
                .map_or(RadioAccessTechnology::Unknown, RadioAccessTechnology::from),
        }
    }

    /// Whether the operator passes the access technology filter. `Unknown`
    /// filters nothing, and an operator listed without `<AcT>` only passes
    /// that.
    pub fn matches(&self, filter: RadioAccessTechnology) -> bool {
        filter == RadioAccessTechnology::Unknown || self.act == filter
    }
}

/// Operators found by a network scan, in the order the modem listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorList<const N: usize> {
    pub operators: Vec<Operator, N>,
}

impl<const N: usize> AtatResp for OperatorList<N> {}

impl<const N: usize> OperatorList<N> {
    pub(crate) fn read(
        reader: &mut ResponseReader<'_>,
        filter: RadioAccessTechnology,
    ) -> Self {
        let mut list = Self::default();
        while reader.info_elem(b'(') {
            let candidate = Operator::read(reader);
            if !candidate.matches(filter) {
                trace!(
                    "Skipping operator {:?}, act {:?}",
                    candidate.numeric.as_str(),
                    candidate.act
                );
                continue;
            }
            if list.operators.push(candidate).is_err() {
                warn!("Operator list full, dropping the rest of the scan");
                break;
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Operator> {
        self.operators.iter()
    }
}

/// 7.19 Read operator names +COPN
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatorName {
    pub numeric: String<8>,
    pub alpha: String<24>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorNames<const N: usize> {
    pub names: Vec<OperatorName, N>,
}

impl<const N: usize> AtatResp for OperatorNames<N> {}

impl<const N: usize> OperatorNames<N> {
    pub(crate) fn read(reader: &mut ResponseReader<'_>) -> Self {
        let mut list = Self::default();
        while reader.info_resp() {
            let name = OperatorName {
                numeric: reader.read_string().unwrap_or_default(),
                alpha: reader.read_string().unwrap_or_default(),
            };
            if list.names.push(name).is_err() {
                warn!("Operator name list full");
                break;
            }
        }
        list
    }
}
