//! Tray icon showing the battery of a pair of wireless earbuds.

use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::sync::mpsc;

use device_state::ConnectionStatus;
use tray_icon::menu::MenuEvent;
use tray_icon::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};
use tray_view::TrayView;

mod action;
mod feed;
mod icon;
mod menu;

use action::Action;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<core::convert::Infallible> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let loaded = config_load::with_default_env_var().await?;
    let first_run = loaded.is_first_run();
    let config = loaded.config;

    let event_loop = tao::event_loop::EventLoopBuilder::<UserEvent>::with_user_event().build();

    let render_tasks = spawn_render_loop(config.font_family.clone(), event_loop.create_proxy())?;

    tokio::spawn({
        let proxy = event_loop.create_proxy();
        async move {
            let notify = move |status| {
                let _ = proxy.send_event(UserEvent::StateChanged(status));
            };
            if let Err(error) = feed::run(notify).await {
                tracing::error!(message = "State feed failed", %error);
            }
        }
    });

    tracing::info!(message = "Starting tray...");

    let proxy = event_loop.create_proxy();
    tray_icon::TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::TrayIcon(event));
    }));

    let proxy = event_loop.create_proxy();
    tray_icon::menu::MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));

    let default_icon = icon::default_icon(config.icon_size)?;
    let tray_menu = menu::build_menu(config.tray_icon_battery)?;

    let mut app = App {
        config,
        status: ConnectionStatus::Disconnected,
        first_run,
        tray_icon: None,
        default_icon,
        tray_menu,
        render_tasks,
        generation: 0,
        in_flight: VecDeque::new(),
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = tao::event_loop::ControlFlow::Wait;

        match event {
            tao::event::Event::NewEvents(tao::event::StartCause::Init) => {
                let tray_icon = TrayIconBuilder::new()
                    .with_menu(Box::new(app.tray_menu.menu.clone()))
                    .with_icon(app.default_icon.clone())
                    .build();
                match tray_icon {
                    Ok(tray_icon) => {
                        app.tray_icon = Some(tray_icon);
                        app.refresh();
                        app.welcome();
                    }
                    Err(error) => {
                        tracing::error!(message = "Unable to create the tray icon", %error);
                        *control_flow = tao::event_loop::ControlFlow::Exit;
                    }
                }
            }
            tao::event::Event::UserEvent(UserEvent::StateChanged(status)) => {
                app.on_battery_state_changed(status);
            }
            tao::event::Event::UserEvent(UserEvent::Rendered(rendered)) => {
                app.on_rendered(rendered);
            }
            tao::event::Event::UserEvent(UserEvent::TrayIcon(event)) => {
                if let TrayIconEvent::Click {
                    button: MouseButton::Left | MouseButton::Middle,
                    button_state: MouseButtonState::Up,
                    ..
                }
                | TrayIconEvent::DoubleClick { .. } = event
                {
                    tracing::info!(message = "Showing the detail window", status = ?app.status);
                }
            }
            tao::event::Event::UserEvent(UserEvent::Menu(event)) => {
                match Action::try_from(&event.id) {
                    Ok(Action::ToggleBatteryOnIcon) => {
                        let enabled = app.tray_menu.battery_on_icon.is_checked();
                        app.on_tray_icon_battery_changed(enabled);
                    }
                    Ok(Action::Settings) => {
                        tracing::info!(message = "Showing the settings window", config = ?app.config);
                    }
                    Ok(Action::Quit) => {
                        *control_flow = tao::event_loop::ControlFlow::Exit;
                    }
                    Err(error) => {
                        tracing::warn!(message = "Ignoring menu event", %error);
                    }
                }
            }
            _ => {}
        }
    });
}

/// User events for the event loop.
#[derive(Debug)]
enum UserEvent {
    /// The device status changed.
    StateChanged(ConnectionStatus),

    /// An icon came back from the render loop.
    Rendered(icon_render_loop::Rendered),

    /// Tray icon event.
    TrayIcon(TrayIconEvent),

    /// Menu event.
    Menu(MenuEvent),
}

/// Start the render loop on its own thread.
///
/// The composer and its font fits live on that thread only.
fn spawn_render_loop(
    font_family: String,
    proxy: tao::event_loop::EventLoopProxy<UserEvent>,
) -> std::io::Result<mpsc::Sender<icon_render_loop::Task>> {
    let (task_sender, task_receiver) = mpsc::channel();

    std::thread::Builder::new()
        .name("icon-render".to_owned())
        .spawn(move || {
            let composer = match icon_render::Composer::new(font_family) {
                Ok(composer) => composer,
                Err(error) => {
                    tracing::error!(message = "Unable to start icon rendering", %error);
                    return;
                }
            };

            icon_render_loop::run(icon_render_loop::Params {
                composer,
                render_task_receiver: move || task_receiver.recv().ok(),
                rendered_data_sender: move |rendered| {
                    match proxy.send_event(UserEvent::Rendered(rendered)) {
                        Ok(()) => ControlFlow::Continue(()),
                        Err(_) => ControlFlow::Break(()),
                    }
                },
            });
        })?;

    Ok(task_sender)
}

/// The tray application state, owned by the event loop.
struct App {
    /// Loaded configuration, including the live badge toggle.
    config: config_core::Config,

    /// The latest device status.
    status: ConnectionStatus,

    /// No config file existed at startup.
    first_run: bool,

    /// The tray icon, once created.
    tray_icon: Option<TrayIcon>,

    /// The icon shown when no badge is composed.
    default_icon: tray_icon::Icon,

    /// The tray menu.
    tray_menu: menu::TrayMenu,

    /// Requests to the render loop.
    render_tasks: mpsc::Sender<icon_render_loop::Task>,

    /// Bumped on every refresh; only the latest refresh may set the icon.
    generation: u64,

    /// Generations of the requests sent to the render loop, oldest first.
    in_flight: VecDeque<u64>,
}

impl App {
    /// A new device status arrived.
    fn on_battery_state_changed(&mut self, status: ConnectionStatus) {
        self.status = status;
        self.refresh();
    }

    /// The battery badge was toggled.
    fn on_tray_icon_battery_changed(&mut self, enabled: bool) {
        self.config.tray_icon_battery = enabled;
        self.refresh();
    }

    /// Bring the tooltip and icon in line with the current status.
    fn refresh(&mut self) {
        let Some(tray_icon) = &self.tray_icon else {
            return;
        };

        let view = TrayView::for_status(
            &self.config.display_name,
            &self.status,
            self.config.tray_icon_battery,
        );

        if let Err(error) = tray_icon.set_tooltip(Some(&view.tooltip)) {
            tracing::warn!(message = "Unable to set the tray tooltip", %error);
        }

        self.generation += 1;

        let Some(request) = view.icon.request(self.config.icon_size) else {
            self.show_default_icon();
            return;
        };

        match self.render_tasks.send(request) {
            Ok(()) => self.in_flight.push_back(self.generation),
            Err(_) => {
                tracing::warn!(message = "Render loop is gone, using the default icon");
                self.show_default_icon();
            }
        }
    }

    /// A composed icon came back.
    fn on_rendered(&mut self, rendered: icon_render_loop::Rendered) {
        let generation = self.in_flight.pop_front();
        if generation != Some(self.generation) {
            return;
        }

        let icon = match rendered {
            Ok(data) => icon::from_icon_data(data),
            Err(error) => {
                tracing::warn!(message = "Icon composition failed, using the default icon", %error);
                self.show_default_icon();
                return;
            }
        };

        match icon {
            Ok(icon) => self.set_icon(icon),
            Err(error) => {
                tracing::warn!(message = "Composed icon rejected, using the default icon", %error);
                self.show_default_icon();
            }
        }
    }

    /// Point a first-time user at the tray icon.
    fn welcome(&self) {
        let Some(welcome) = tray_view::welcome(self.first_run) else {
            return;
        };
        tracing::info!(
            message = "Showing the first-run notification",
            title = welcome.title,
            body = welcome.body
        );
    }

    /// Show the static default icon.
    fn show_default_icon(&self) {
        self.set_icon(self.default_icon.clone());
    }

    /// Replace the tray icon image.
    fn set_icon(&self, icon: tray_icon::Icon) {
        let Some(tray_icon) = &self.tray_icon else {
            return;
        };
        if let Err(error) = tray_icon.set_icon(Some(icon)) {
            tracing::warn!(message = "Unable to set the tray icon", %error);
        }
    }
}
