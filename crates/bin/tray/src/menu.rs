//! Menu module.

use tray_icon::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem};

use crate::action::Action;

/// The tray menu and the items whose state is read back.
pub struct TrayMenu {
    /// The menu itself.
    pub menu: Menu,

    /// The "show battery on icon" toggle.
    pub battery_on_icon: CheckMenuItem,
}

/// Build the tray menu.
pub fn build_menu(battery_on_icon: bool) -> Result<TrayMenu, tray_icon::menu::Error> {
    let menu = Menu::new();

    let battery_item = CheckMenuItem::with_id(
        Action::ToggleBatteryOnIcon,
        "Show battery on icon",
        true,
        battery_on_icon,
        None,
    );
    menu.append(&battery_item)?;
    menu.append(&MenuItem::with_id(Action::Settings, "Settings", true, None))?;
    menu.append(&PredefinedMenuItem::separator())?;
    menu.append(&MenuItem::with_id(Action::Quit, "Quit", true, None))?;

    Ok(TrayMenu {
        menu,
        battery_on_icon: battery_item,
    })
}
