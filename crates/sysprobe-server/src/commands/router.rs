//! Command Router Module
//!
//! Routes incoming command requests to the matching `Backend` method.
//! Every transport funnels through [`route_command`], so argument decoding
//! and validation behave the same however a request arrives.

use serde::Serialize;
use serde_json::Value;
use sysprobe_domain::{Backend, BackendError, Command, CommandRequest, PathArgs};
use tracing::debug;
use validator::Validate;

/// Route a command request to the appropriate backend method
///
/// Backend failures are returned as-is, only gaining the command name when
/// they lack one.
pub async fn route_command(
    request: CommandRequest,
    backend: &dyn Backend,
) -> Result<Value, BackendError> {
    let command = request.command()?;
    debug!(command = %command, "Routing backend command");

    let result = match command {
        Command::GetSysInfo => to_json(command, backend.get_sys_info().await),
        Command::Get4kReadSpeed => {
            let args = parse_path_args(command, &request)?;
            to_json(command, backend.get_4k_read_speed(&args.path).await)
        }
        Command::Get4kWriteSpeed => {
            let args = parse_path_args(command, &request)?;
            to_json(command, backend.get_4k_write_speed(&args.path).await)
        }
        Command::GetReadDelay => {
            let args = parse_path_args(command, &request)?;
            to_json(command, backend.get_read_delay(&args.path).await)
        }
        Command::GetWriteDelay => {
            let args = parse_path_args(command, &request)?;
            to_json(command, backend.get_write_delay(&args.path).await)
        }
    };
    result.map_err(|e| e.with_command(command.as_str()))
}

/// Parse and validate the `{ path }` parameter bag
fn parse_path_args(command: Command, request: &CommandRequest) -> Result<PathArgs, BackendError> {
    let args: PathArgs = serde_json::from_value(Value::Object(request.args.clone()))
        .map_err(|e| BackendError::dispatch(command.as_str(), format!("Invalid arguments: {e}")))?;
    args.validate()
        .map_err(|e| BackendError::dispatch(command.as_str(), format!("Invalid arguments: {e}")))?;
    Ok(args)
}

fn to_json<T: Serialize>(
    command: Command,
    result: Result<T, BackendError>,
) -> Result<Value, BackendError> {
    let value = result?;
    serde_json::to_value(value).map_err(|e| BackendError::execution(command.as_str(), e.to_string()))
}
