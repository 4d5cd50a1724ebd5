//! String-backed enum types for the hq domain model.
//!
//! Each enum has:
//! - Custom Serialize (as its wire string, e.g. `"in-progress"`)
//! - Custom Deserialize (known variants + catch-all Custom(String))
//! - `as_str()`, `is_default()`, `Display` impl
//!
//! The `Custom` fallback exists so that records carrying an unrecognized
//! status or stage can still be loaded; the pipeline layer decides what to
//! do with them (it omits them from every group rather than failing).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Macro: defines an enum with known string variants + a Custom(String) fallback.
// ---------------------------------------------------------------------------
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, custom_variant = $custom_variant:ident,
        variants: [
            $( ($variant:ident, $str:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            $custom_variant(String),
        }

        impl $name {
            /// Returns the string representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $str, )+
                    Self::$custom_variant(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is the default variant.
            pub fn is_default(&self) -> bool {
                *self == Self::$default
            }

            /// Returns `true` if this is a built-in (non-custom) variant.
            pub fn is_builtin(&self) -> bool {
                !matches!(self, Self::$custom_variant(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s.as_str()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $str => Self::$variant, )+
                    other => Self::$custom_variant(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $str => Self::$variant, )+
                    _ => Self::$custom_variant(s),
                }
            }
        }
    };
}

// ===========================================================================
// TaskStatus
// ===========================================================================

define_enum! {
    /// Board column a task sits in.
    TaskStatus, default = Todo, custom_variant = Custom,
    variants: [
        (Todo, "todo"),
        (InProgress, "in-progress"),
        (Done, "done"),
    ]
}

// ===========================================================================
// ContentStage
// ===========================================================================

define_enum! {
    /// Production stage of a content item.
    ContentStage, default = Ideas, custom_variant = Custom,
    variants: [
        (Ideas, "ideas"),
        (Script, "script"),
        (Thumbnail, "thumbnail"),
        (Filming, "filming"),
        (Published, "published"),
    ]
}

// ===========================================================================
// Assignee
// ===========================================================================

define_enum! {
    /// Who a task is assigned to: the human owner or the agent team.
    Assignee, default = Me, custom_variant = Custom,
    variants: [
        (Me, "me"),
        (Agent, "agent"),
    ]
}

// ===========================================================================
// EventKind
// ===========================================================================

define_enum! {
    /// Categorises calendar entries.
    EventKind, default = Event, custom_variant = Custom,
    variants: [
        (Task, "task"),
        (Cron, "cron"),
        (Event, "event"),
    ]
}

// ===========================================================================
// AgentStatus
// ===========================================================================

define_enum! {
    /// Self-reported state of a team agent.
    AgentStatus, default = Idle, custom_variant = Custom,
    variants: [
        (Idle, "idle"),
        (Working, "working"),
    ]
}
