//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;
use heapless::String;

/// Is used to chose whether the network selection is automatically done by the
/// MT or is forced by this command to the operator <oper> given in the format
/// <format>
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorSelectionMode {
    /// • 0 (default value and factory-programmed value): automatic (<oper> field is ignored)
    Automatic = 0,
    /// • 1: manual
    Manual = 1,
    /// • 2: deregister from network
    Deregister = 2,
    /// • 3: set only <format>
    FormatOnly = 3,
    /// • 4: manual/automatic
    ManualAutomatic = 4,

    #[at_arg(default)]
    Unknown,
}

/// The `<format>` of the `<oper>` field in `+COPS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorFormat {
    Long = 0,
    Short = 1,
    Numeric = 2,
}

/// `<format>` followed by `<oper>` in that format
#[derive(Debug, Clone, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorNameFormat {
    #[at_arg(value = 0)]
    Long(String<24>),
    #[at_arg(value = 1)]
    Short(String<10>),
    #[at_arg(value = 2)]
    Numeric(String<8>),
}

/// Indicates the radio access technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioAccessTechnology {
    /// • 0: GSM
    Gsm = 0,
    /// • 1: GSM COMPACT
    GsmCompact = 1,
    /// • 2: UTRAN
    Utran = 2,
    /// • 3: GSM/GPRS with EDGE availability
    Edge = 3,
    /// • 4: UTRAN with HSDPA availability
    Hsdpa = 4,
    /// • 5: UTRAN with HSUPA availability
    Hsupa = 5,
    /// • 6: UTRAN with HSDPA and HSUPA availability
    HsdpaHsupa = 6,
    /// • 7: E-UTRAN
    EUtran = 7,
    /// • 8: E-UTRAN (Cat-M1)
    CatM1 = 8,
    /// • 9: E-UTRAN (NB-S1 mode)
    Nb1 = 9,
    #[at_arg(default)]
    Unknown = 10,
}

impl From<i32> for RadioAccessTechnology {
    fn from(act: i32) -> Self {
        match act {
            0 => Self::Gsm,
            1 => Self::GsmCompact,
            2 => Self::Utran,
            3 => Self::Edge,
            4 => Self::Hsdpa,
            5 => Self::Hsupa,
            6 => Self::HsdpaHsupa,
            7 => Self::EUtran,
            8 => Self::CatM1,
            9 => Self::Nb1,
            _ => Self::Unknown,
        }
    }
}

/// The `<stat>` of `+CREG`, `+CGREG` and `+CEREG`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationStatus {
    /// • 0: not registered, the MT is not currently searching a new operator to register to
    NotRegistered = 0,
    /// • 1: registered, home network
    RegisteredHome = 1,
    /// • 2: not registered, but the MT is currently searching a new operator to register to
    SearchingOperator = 2,
    /// • 3: registration denied
    RegistrationDenied = 3,
    /// • 4: unknown (e.g. out of GERAN/UTRAN/E-UTRAN coverage)
    Unknown = 4,
    /// • 5: registered, roaming
    RegisteredRoaming = 5,
    /// • 6: registered for "SMS only", home network
    RegisteredForSmsOnlyHome = 6,
    /// • 7: registered for "SMS only", roaming
    RegisteredForSmsOnlyRoaming = 7,
    /// • 8: attached for emergency bearer services only
    AttachedEmergencyOnly = 8,
    /// • 9: registered for "CSFB not preferred", home network
    RegisteredForCsfbNotPreferredHome = 9,
    /// • 10: registered for "CSFB not preferred", roaming
    RegisteredForCsfbNotPreferredRoaming = 10,
    /// • 11: already registered on the requested operator
    AlreadyRegistered = 11,
}

impl From<i32> for RegistrationStatus {
    fn from(stat: i32) -> Self {
        match stat {
            0 => Self::NotRegistered,
            1 => Self::RegisteredHome,
            2 => Self::SearchingOperator,
            3 => Self::RegistrationDenied,
            5 => Self::RegisteredRoaming,
            6 => Self::RegisteredForSmsOnlyHome,
            7 => Self::RegisteredForSmsOnlyRoaming,
            8 => Self::AttachedEmergencyOnly,
            9 => Self::RegisteredForCsfbNotPreferredHome,
            10 => Self::RegisteredForCsfbNotPreferredRoaming,
            11 => Self::AlreadyRegistered,
            _ => Self::Unknown,
        }
    }
}

/// The `<stat>` of an operator in the `+COPS=?` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatorStatus {
    #[default]
    Unknown = 0,
    Available = 1,
    Current = 2,
    Forbidden = 3,
}

impl From<i32> for OperatorStatus {
    fn from(stat: i32) -> Self {
        match stat {
            1 => Self::Available,
            2 => Self::Current,
            3 => Self::Forbidden,
            _ => Self::Unknown,
        }
    }
}

/// 7.2 Signal quality +CSQ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalQuality {
    /// Received signal strength indication, 99 if not known
    pub rssi: u8,
    /// Channel bit error rate, 99 if not known
    pub ber: u8,
}

/// 7.4 Extended signal quality +CESQ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtendedSignalQuality {
    /// Received signal strength level, 99 if not known
    pub rxlev: u8,
    /// Channel bit error rate, 99 if not known
    pub ber: u8,
    /// Received signal code power, 255 if not known
    pub rscp: u8,
    /// Ratio of the received energy per PN chip to the total received power
    /// spectral density, 255 if not known
    pub ecno: u8,
    /// Reference signal received quality, 255 if not known
    pub rsrq: u8,
    /// Reference signal received power, 255 if not known
    pub rsrp: u8,
}
