//! One module per subcommand. Each `run` takes the resolved config directory.

pub mod init;
pub mod list;
pub mod pull;
pub mod status;
pub mod sync;
pub mod target;
