//! Menu actions and their menu IDs.

/// An action triggered from the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Toggle the battery badge on the tray icon.
    ToggleBatteryOnIcon,

    /// Open the settings.
    Settings,

    /// Quit the application.
    Quit,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Self; 3] = [Self::ToggleBatteryOnIcon, Self::Settings, Self::Quit];

    /// The stable menu ID of the action.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ToggleBatteryOnIcon => "battery-on-icon",
            Self::Settings => "settings",
            Self::Quit => "quit",
        }
    }
}

impl From<Action> for tray_icon::menu::MenuId {
    fn from(value: Action) -> Self {
        tray_icon::menu::MenuId(value.id().to_owned())
    }
}

/// A menu ID that belongs to no known action.
#[derive(Debug, thiserror::Error)]
#[error("unknown menu id: {0}")]
pub struct UnknownAction(String);

impl TryFrom<&tray_icon::menu::MenuId> for Action {
    type Error = UnknownAction;

    fn try_from(value: &tray_icon::menu::MenuId) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|action| action.id() == value.0)
            .ok_or_else(|| UnknownAction(value.0.clone()))
    }
}
