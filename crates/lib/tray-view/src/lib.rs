//! What the tray shows for a given device status.

use std::fmt::Write as _;

use device_state::{Battery, ConnectionStatus, DeviceState, PartState};

/// Which icon the tray should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconChoice {
    /// The static application icon.
    Default,

    /// The composed icon with a battery badge.
    Battery(Battery),
}

impl IconChoice {
    /// The composition request for this choice, if it needs composing.
    pub fn request(self, size: u32) -> Option<icon_render::IconRequest> {
        match self {
            Self::Default => None,
            Self::Battery(level) => {
                Some(icon_render::IconRequest::with_badge(size, level.to_string()))
            }
        }
    }
}

/// The tray tooltip and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayView {
    /// Multi-line tooltip text.
    pub tooltip: String,

    /// The icon to show.
    pub icon: IconChoice,
}

impl TrayView {
    /// Build the view for a connection status.
    ///
    /// `battery_in_icon` enables the battery badge on the icon.
    pub fn for_status(
        display_name: &str,
        status: &ConnectionStatus,
        battery_in_icon: bool,
    ) -> Self {
        match status {
            ConnectionStatus::Connected(state) => {
                Self::connected(display_name, state, battery_in_icon)
            }
            ConnectionStatus::Disconnected => Self::plain("Disconnected"),
            ConnectionStatus::Unavailable => Self::plain("Unavailable"),
            ConnectionStatus::Unbound => Self::plain("Waiting for Binding"),
        }
    }

    /// A view with just a tooltip and the default icon.
    fn plain(tooltip: &str) -> Self {
        Self {
            tooltip: tooltip.to_owned(),
            icon: IconChoice::Default,
        }
    }

    /// The view of a connected device.
    fn connected(display_name: &str, state: &DeviceState, battery_in_icon: bool) -> Self {
        let mut tooltip = display_name.to_owned();
        push_part(&mut tooltip, "Left", &state.left);
        push_part(&mut tooltip, "Right", &state.right);
        push_part(&mut tooltip, "Case", &state.case_box);

        let icon = match state.min_pod_battery() {
            Some(level) if battery_in_icon => IconChoice::Battery(level),
            _ => IconChoice::Default,
        };

        Self { tooltip, icon }
    }
}

/// Append a tooltip line for a part that reports its battery.
fn push_part(tooltip: &mut String, label: &str, part: &PartState) {
    let Some(battery) = part.battery else {
        return;
    };
    let charging = if part.charging { " (charging)" } else { "" };
    let _ = write!(tooltip, "\n{label}: {battery}%{charging}");
}

/// A one-time hint pointing the user at the tray icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome {
    /// Notification title.
    pub title: &'static str,

    /// Notification body.
    pub body: &'static str,
}

/// The hint to show on startup, only on the first run.
pub fn welcome(first_run: bool) -> Option<Welcome> {
    first_run.then_some(Welcome {
        title: "You can find me in the system tray",
        body: "Click the icon to view battery information, right-click to customize settings or quit.",
    })
}
