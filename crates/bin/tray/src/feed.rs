//! Device state updates read from stdin, one document per line.

use device_state::ConnectionStatus;
use tokio::io::AsyncBufReadExt as _;

/// Parse a single feed line. Blank lines carry no update.
pub fn parse_line(line: &str) -> Option<Result<ConnectionStatus, serde_yaml_bw::Error>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_yaml_bw::from_str(line))
}

/// Read updates from stdin until it closes, passing each to `notify`.
///
/// Malformed lines are logged and skipped.
pub async fn run<Notify>(mut notify: Notify) -> std::io::Result<()>
where
    Notify: FnMut(ConnectionStatus),
{
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Some(Ok(status)) => (notify)(status),
            Some(Err(error)) => {
                tracing::warn!(message = "Ignoring malformed state update", %error, %line);
            }
            None => {}
        }
    }

    tracing::info!(message = "State feed closed");
    Ok(())
}
