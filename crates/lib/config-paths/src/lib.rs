//! Where earbud-tray looks for its configuration file.

use std::path::PathBuf;

use either::Either;

/// Name of the application directory and file stem.
const APP: &str = "earbud-tray";

/// Candidate config files, most specific first.
///
/// Per-user files under the platform config directory come first
/// (`earbud-tray/config.yaml`, then `earbud-tray.yaml`), then dotfiles in
/// the home directory, and finally `/etc/earbud-tray/config.yaml`.
/// Directories the platform does not report are skipped.
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let config_dir = dirs::config_dir().into_iter().flat_map(|dir| {
        [
            dir.join(APP).join("config.yaml"),
            dir.join(format!("{APP}.yaml")),
        ]
    });
    let home_dir = dirs::home_dir().into_iter().flat_map(|dir| {
        [
            dir.join(format!(".{APP}.yaml")),
            dir.join(format!(".{APP}")).join("config.yaml"),
        ]
    });
    let system = std::iter::once_with(|| PathBuf::from(format!("/etc/{APP}/config.yaml")));

    config_dir.chain(home_dir).chain(system)
}

/// The config files to try: only `override_path` when the user set one,
/// the [`defaults`] otherwise.
pub fn resolve(override_path: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match override_path {
        Some(path) => Either::Left(std::iter::once(path)),
        None => Either::Right(defaults()),
    }
}
