use clap::Parser;
use std::path::PathBuf;

/// A terminal form for signing up for an account
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// The account service to talk to. Should only be the protocol and
    /// domain (and port, if needed.)
    #[clap(long, env = "SIGNUP_SERVER", default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Where should we write logs?
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    /// Get either the configured or a default log directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("dev", "signup", "signup")
                    .map(|dirs| dirs.data_local_dir().join("logs"))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_local_server() {
        let config = Config::try_parse_from(["signup"]).unwrap();

        assert_eq!(config.server, "http://127.0.0.1:3000");
    }

    #[test]
    fn explicit_log_dir_wins() {
        let config =
            Config::try_parse_from(["signup", "--log-dir", "/tmp/signup-logs"]).unwrap();

        assert_eq!(config.log_dir(), PathBuf::from("/tmp/signup-logs"));
    }

    #[test]
    fn server_can_be_overridden() {
        let config =
            Config::try_parse_from(["signup", "--server", "https://accounts.example.com"])
                .unwrap();

        assert_eq!(config.server, "https://accounts.example.com");
    }
}
