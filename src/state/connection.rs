//! Channel connection lifecycle state and its badge presentation.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Realtime channel connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No subscription attempt has started yet.
    #[default]
    Idle,
    /// Socket handshake or channel attach is in progress.
    Connecting,
    /// Channel is attached; publishing is permitted.
    Connected,
    /// Socket is closed; a reconnect may follow.
    Disconnected,
    /// The last connection attempt failed.
    Error,
}

/// Display triple for a connection status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub badge_class: &'static str,
    pub icon: StatusIcon,
}

/// Icon shown next to the status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Signal,
    WifiOff,
}

impl ConnectionStatus {
    /// Parse a status value reported by the channel collaborator.
    ///
    /// The collaborator owns this vocabulary, so the mapping must be total:
    /// anything outside the five known values falls back to `Idle`.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "connecting" => Self::Connecting,
            "connected" => Self::Connected,
            "disconnected" => Self::Disconnected,
            "error" => Self::Error,
            _ => Self::Idle,
        }
    }

    /// Badge presentation for this status. Pure and total.
    pub fn presentation(self) -> StatusPresentation {
        match self {
            Self::Connected => StatusPresentation {
                label: "Online",
                badge_class: "status-badge--connected",
                icon: StatusIcon::Signal,
            },
            Self::Connecting => StatusPresentation {
                label: "Conectando",
                badge_class: "status-badge--connecting",
                icon: StatusIcon::Signal,
            },
            Self::Disconnected => StatusPresentation {
                label: "Offline",
                badge_class: "status-badge--disconnected",
                icon: StatusIcon::WifiOff,
            },
            Self::Error => StatusPresentation {
                label: "Erro",
                badge_class: "status-badge--error",
                icon: StatusIcon::WifiOff,
            },
            Self::Idle => StatusPresentation {
                label: "Aguardando",
                badge_class: "status-badge--idle",
                icon: StatusIcon::Signal,
            },
        }
    }
}
