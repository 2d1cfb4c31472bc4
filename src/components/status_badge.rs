//! Connection status badge for the chat header.

use leptos::prelude::*;

use crate::state::connection::{ConnectionStatus, StatusIcon};

/// Small badge showing the channel connection status.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<ConnectionStatus>) -> impl IntoView {
    let badge_class = move || {
        format!(
            "status-badge {}",
            status.get().presentation().badge_class
        )
    };

    let icon_class = move || match status.get().presentation().icon {
        StatusIcon::Signal => "status-badge__icon status-badge__icon--signal",
        StatusIcon::WifiOff => "status-badge__icon status-badge__icon--wifi-off",
    };

    let label = move || status.get().presentation().label;

    view! {
        <span class=badge_class>
            <span class=icon_class></span>
            {label}
        </span>
    }
}
