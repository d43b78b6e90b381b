//! Unsolicited responses for Packet Switched Data Services Commands
use super::types::PacketSwitchedEventReporting;
use crate::command::PACKET_SWITCHED_EVENT;
use atat::serde_at::serde::{de, Deserialize, Deserializer};
use heapless::String;

/// Longest event text that is inspected, `"ME PDN DEACT"` plus one.
pub const EVENT_TEXT_LEN: usize = 13;

/// Shorter texts carry no recognisable event.
pub const MIN_EVENT_TEXT_LEN: usize = 8;

/// 18.26 Packet switched event reporting +CGEV
///
/// Carries the first characters of the event text, e.g. `NW PDN DEACT 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketSwitchedEvent {
    pub text: String<EVENT_TEXT_LEN>,
}

impl PacketSwitchedEvent {
    /// Keep the first [`EVENT_TEXT_LEN`] characters of an event text. Texts
    /// shorter than [`MIN_EVENT_TEXT_LEN`] are dropped as malformed.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut kept = String::new();
        for c in text.trim().chars() {
            if kept.push(c).is_err() {
                break;
            }
        }

        if kept.len() < MIN_EVENT_TEXT_LEN {
            debug!("Ignoring short +CGEV text {:?}", kept.as_str());
            return None;
        }

        Some(Self { text: kept })
    }

    /// Match the text against the context teardown events.
    pub fn classify(&self) -> Option<PacketSwitchedEventReporting> {
        PacketSwitchedEventReporting::ALL
            .into_iter()
            .find(|event| self.text.starts_with(event.as_str()))
    }
}

impl<'de> Deserialize<'de> for PacketSwitchedEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventVisitor;

        impl<'de> de::Visitor<'de> for EventVisitor {
            type Value = PacketSwitchedEvent;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a +CGEV event text")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let text = v
                    .strip_prefix(PACKET_SWITCHED_EVENT.as_bytes())
                    .unwrap_or(v);
                let text = core::str::from_utf8(text)
                    .map_err(|_| E::invalid_value(de::Unexpected::Bytes(v), &self))?;
                PacketSwitchedEvent::from_text(text)
                    .ok_or_else(|| E::invalid_length(text.len(), &self))
            }
        }

        // The text runs to the end of the line, commas and quotes included,
        // which only the length delimited path of `serde_at` hands over.
        deserializer.deserialize_tuple(1, EventVisitor)
    }
}
