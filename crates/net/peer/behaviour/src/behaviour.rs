//! Reportable peer behaviour tags.
//!
//! Both sets are closed and carry no payload. Their numeric codes live in
//! disjoint ranges (errors from 0, good behaviour from 100) so a code alone
//! identifies its tag, although the two sets are never compared.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Observable erroneous behaviour of a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr, strum::AsRefStr)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[derive(IntoPrimitive, TryFromPrimitive)] // From<ErrorBehaviour> for i32, TryFrom<i32>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "kebab-case")]
#[repr(i32)]
pub enum ErrorBehaviour {
    /// Reserved for future behaviour categories. Nothing reports it today.
    Unknown = 0,
    /// The peer sent a message that failed to decode or validate.
    BadMessage = 1,
    /// The peer sent messages out of causal order.
    MessageOutOfOrder = 2,
}

// Manual Default implementation to avoid conflict with TryFromPrimitive
impl Default for ErrorBehaviour {
    #[inline]
    fn default() -> Self {
        Self::Unknown
    }
}

impl ErrorBehaviour {
    /// Numeric tag of this behaviour.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Whether this is the reserved placeholder tag.
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Positive contribution made by a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr, strum::AsRefStr)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[derive(IntoPrimitive, TryFromPrimitive)] // From<GoodBehaviour> for i32, TryFrom<i32>
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "kebab-case")]
#[repr(i32)]
pub enum GoodBehaviour {
    /// The peer contributed a valid vote.
    Vote = 100,
    /// The peer contributed a valid block part.
    BlockPart = 101,
}

impl GoodBehaviour {
    /// Numeric tag of this behaviour.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ErrorBehaviour::Unknown.code(), 0);
        assert_eq!(ErrorBehaviour::BadMessage.code(), 1);
        assert_eq!(ErrorBehaviour::MessageOutOfOrder.code(), 2);
        assert_eq!(GoodBehaviour::Vote.code(), 100);
        assert_eq!(GoodBehaviour::BlockPart.code(), 101);

        assert_eq!(i32::from(ErrorBehaviour::BadMessage), 1);
        assert_eq!(i32::from(GoodBehaviour::BlockPart), 101);
    }

    #[test]
    fn test_code_spaces_are_disjoint() {
        for error in ErrorBehaviour::iter() {
            assert!(GoodBehaviour::try_from(error.code()).is_err());
        }
        for good in GoodBehaviour::iter() {
            assert!(ErrorBehaviour::try_from(good.code()).is_err());
        }
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(
            ErrorBehaviour::try_from(2_i32).ok(),
            Some(ErrorBehaviour::MessageOutOfOrder)
        );
        assert_eq!(GoodBehaviour::try_from(100_i32).ok(), Some(GoodBehaviour::Vote));
        assert!(ErrorBehaviour::try_from(3_i32).is_err());
        assert!(GoodBehaviour::try_from(-1_i32).is_err());
    }

    #[test]
    fn test_default_is_reserved() {
        let default = ErrorBehaviour::default();
        assert_eq!(default, ErrorBehaviour::Unknown);
        assert!(default.is_reserved());
        assert!(!ErrorBehaviour::BadMessage.is_reserved());
        assert!(!ErrorBehaviour::MessageOutOfOrder.is_reserved());
    }

    #[test]
    fn test_names() {
        assert_eq!(ErrorBehaviour::BadMessage.to_string(), "bad-message");
        assert_eq!(
            ErrorBehaviour::MessageOutOfOrder.as_ref(),
            "message-out-of-order"
        );
        let name: &'static str = GoodBehaviour::BlockPart.into();
        assert_eq!(name, "block-part");
    }

    #[test]
    fn test_counts() {
        assert_eq!(ErrorBehaviour::COUNT, 3);
        assert_eq!(GoodBehaviour::COUNT, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ErrorBehaviour::MessageOutOfOrder).unwrap();
        assert_eq!(json, "\"message_out_of_order\"");

        let good: GoodBehaviour = serde_json::from_str("\"block_part\"").unwrap();
        assert_eq!(good, GoodBehaviour::BlockPart);
    }
}
