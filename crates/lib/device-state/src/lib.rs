//! Battery state of a pair of wireless earbuds and their case.

/// A battery level, in percent.
pub type Battery = u8;

/// State of one battery-powered part: a pod or the case.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartState {
    /// Battery level, if reported.
    pub battery: Option<Battery>,

    /// Whether the part is charging.
    pub charging: bool,
}

/// State of the whole device.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Model name as reported by the device.
    #[cfg_attr(feature = "serde", serde(default))]
    pub model: String,

    /// The left pod.
    #[cfg_attr(feature = "serde", serde(default))]
    pub left: PartState,

    /// The right pod.
    #[cfg_attr(feature = "serde", serde(default))]
    pub right: PartState,

    /// The charging case.
    #[cfg_attr(feature = "serde", serde(default, rename = "case"))]
    pub case_box: PartState,
}

impl DeviceState {
    /// The lowest battery level among the pods that report one.
    ///
    /// The case is not considered.
    pub fn min_pod_battery(&self) -> Option<Battery> {
        [self.left.battery, self.right.battery]
            .into_iter()
            .flatten()
            .min()
    }
}

/// Connection status of the tracked device.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "snake_case", tag = "status", content = "state")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Connected, with the latest reported state.
    Connected(DeviceState),

    /// A device is bound but not connected.
    Disconnected,

    /// Bluetooth is not available.
    Unavailable,

    /// No device has been bound yet.
    Unbound,
}
