//! The impls and functions.
//!
use std::{collections::HashMap, env::{self, VarError}, fs, io::Write, path::Path};
use log::*;
use anyhow::{bail, Context, Result};
use crate::config::{ApiConfig, Opts, Settings};
use crate::config::{DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_PREFIX, DEFAULT_USERNAME};
use crate::config::{ENV_HOST, ENV_PASSWORD, ENV_PORT, ENV_PREFIX, ENV_USERNAME};

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ApiConfig {
    /// The root of the management API, `http://<host>:<port>/api`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }
}

impl Settings {
    /// Resolve every setting from the command line, the environment or the defaults.
    ///
    /// Settings that did not come from the defaults are recorded in `changed_options`.
    pub fn from_opts(
        options: &Opts,
        changed_options: &mut HashMap<&'static str, String>,
    ) -> Result<Settings>
    {
        let prefix = set_setting(&options.prefix, ENV_PREFIX, DEFAULT_PREFIX, changed_options)?;
        let host = set_setting(&options.host, ENV_HOST, DEFAULT_HOST, changed_options)?;
        let port = set_setting(&options.port, ENV_PORT, &DEFAULT_PORT.to_string(), changed_options)?;
        let username = set_setting(&options.username, ENV_USERNAME, DEFAULT_USERNAME, changed_options)?;
        let password = set_setting(&options.password, ENV_PASSWORD, DEFAULT_PASSWORD, changed_options)?;

        let port: u16 = port.parse()
            .with_context(|| format!("Invalid port: {}", port))?;

        Ok(Settings {
            prefix,
            api: ApiConfig { host, port, username, password },
        })
    }
}

/// Returns the value of a setting.
///
/// The command line option wins, then the environment variable `env_key`, then `default`.
/// An environment variable that is not valid unicode is an error.
pub fn set_setting(
    option: &Option<String>,
    env_key: &'static str,
    default: &str,
    changed_options: &mut HashMap<&'static str, String>,
) -> Result<String>
{
    match option {
        Some(value) => {
            info!("{} argument set: using: {}", env_key, loggable(env_key, value));
            changed_options.insert(env_key, value.to_string());
            Ok(value.to_string())
        },
        None => match env::var(env_key) {
            Ok(set_var) => {
                info!("{} not set: set via .env: {}", env_key, loggable(env_key, &set_var));
                changed_options.insert(env_key, set_var.to_owned());
                Ok(set_var)
            },
            Err(VarError::NotPresent) => {
                info!("{} not set: and not set via .env: using default: {}", env_key, loggable(env_key, default));
                Ok(default.to_string())
            },
            Err(VarError::NotUnicode(_)) => {
                bail!("Environment variable {} is not valid unicode", env_key)
            },
        },
    }
}

/// The password is never logged.
fn loggable<'a>(env_key: &str, value: &'a str) -> &'a str {
    if env_key == ENV_PASSWORD { "********" } else { value }
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&'static str, String>,
    dotenv_file: &Path,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file: {}", dotenv_file.display());
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(dotenv_file)
            .with_context(|| format!("Error writing .env file: {}", dotenv_file.display()))?;

        // sorted, so the file does not change between runs with the same settings.
        let mut settings: Vec<_> = changed_options.into_iter().collect();
        settings.sort();
        for (key, value) in settings {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, loggable(key, &value));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use clap::Parser;

    /// Keeps every logged message, so tests can check what was logged.
    struct CaptureLogger {
        messages: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool { true }
        fn log(&self, record: &log::Record) {
            self.messages.lock().unwrap().push(record.args().to_string());
        }
        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger { messages: Mutex::new(Vec::new()) };

    fn captured_messages(containing: &str) -> Vec<String> {
        // only the first call installs the logger, other tests may have done so already.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Info);
        LOGGER.messages.lock().unwrap().iter()
            .filter(|message| message.contains(containing))
            .cloned()
            .collect()
    }

    #[test]
    fn unit_option_wins_over_environment() {
        env::set_var("RABBITMQ_STATS_TEST_OPTION_WINS", "from_env");
        let mut changed_options = HashMap::new();
        let value = set_setting(&Some("from_option".to_string()), "RABBITMQ_STATS_TEST_OPTION_WINS", "default", &mut changed_options).unwrap();
        assert_eq!(value, "from_option");
        assert_eq!(changed_options.get("RABBITMQ_STATS_TEST_OPTION_WINS").map(String::as_str), Some("from_option"));
    }

    #[test]
    fn unit_environment_wins_over_default() {
        env::set_var("RABBITMQ_STATS_TEST_ENV_WINS", "from_env");
        let mut changed_options = HashMap::new();
        let value = set_setting(&None, "RABBITMQ_STATS_TEST_ENV_WINS", "default", &mut changed_options).unwrap();
        assert_eq!(value, "from_env");
        assert_eq!(changed_options.len(), 1);
    }

    #[test]
    fn unit_default_is_not_recorded() {
        let mut changed_options = HashMap::new();
        let value = set_setting(&None, "RABBITMQ_STATS_TEST_NEVER_SET", "default", &mut changed_options).unwrap();
        assert_eq!(value, "default");
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_password_is_not_logged() {
        captured_messages("");
        let mut changed_options = HashMap::new();
        let value = set_setting(&Some("s3cr3t".to_string()), ENV_PASSWORD, DEFAULT_PASSWORD, &mut changed_options).unwrap();
        assert_eq!(value, "s3cr3t");

        let dotenv_file = env::temp_dir().join(format!("rabbitmq_stats_dotenv_password_{}", std::process::id()));
        dotenv_writer(true, changed_options, &dotenv_file).unwrap();
        let contents = fs::read_to_string(&dotenv_file).unwrap();
        fs::remove_file(&dotenv_file).unwrap();
        assert_eq!(contents, "RABBITMQ_STATS_PASSWORD=s3cr3t\n");

        assert!(captured_messages("s3cr3t").is_empty());
        let password_messages = captured_messages(ENV_PASSWORD);
        assert!(password_messages.contains(&"RABBITMQ_STATS_PASSWORD argument set: using: ********".to_string()));
        assert!(password_messages.contains(&"RABBITMQ_STATS_PASSWORD=********".to_string()));
    }

    #[test]
    fn unit_other_settings_are_logged() {
        captured_messages("");
        let mut changed_options = HashMap::new();
        set_setting(&Some("broker-logged".to_string()), ENV_HOST, DEFAULT_HOST, &mut changed_options).unwrap();
        assert!(captured_messages("broker-logged").contains(&"RABBITMQ_STATS_HOST argument set: using: broker-logged".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn unit_environment_not_unicode() {
        use std::{ffi::OsString, os::unix::ffi::OsStringExt};
        env::set_var("RABBITMQ_STATS_TEST_NOT_UNICODE", OsString::from_vec(vec![0x66, 0xff]));
        let mut changed_options = HashMap::new();
        let result = set_setting(&None, "RABBITMQ_STATS_TEST_NOT_UNICODE", "default", &mut changed_options);
        assert!(result.is_err());
        assert!(changed_options.is_empty());
    }

    #[test]
    fn unit_parse_command_line() {
        let options = Opts::try_parse_from(["rabbitmq_stats", "--prefix", "foo", "--port", "15673", "--write-dotenv"]).unwrap();
        assert_eq!(options.prefix.as_deref(), Some("foo"));
        assert_eq!(options.port.as_deref(), Some("15673"));
        assert_eq!(options.host, None);
        assert_eq!(options.password, None);
        assert!(options.write_dotenv);

        let options = Opts::try_parse_from(["rabbitmq_stats"]).unwrap();
        assert_eq!(options.prefix, None);
        assert!(!options.write_dotenv);

        assert!(Opts::try_parse_from(["rabbitmq_stats", "--no-such-flag"]).is_err());
    }

    #[test]
    fn unit_settings_from_options() {
        let options = Opts {
            prefix: Some("foo".to_string()),
            host: Some("broker1".to_string()),
            port: Some("15673".to_string()),
            username: Some("monitor".to_string()),
            password: Some("secret".to_string()),
            write_dotenv: false,
        };
        let mut changed_options = HashMap::new();
        let settings = Settings::from_opts(&options, &mut changed_options).unwrap();
        assert_eq!(settings.prefix, "foo");
        assert_eq!(settings.api.base_url(), "http://broker1:15673/api");
        assert_eq!(settings.api.username, "monitor");
        assert_eq!(settings.api.password, "secret");
        assert_eq!(changed_options.len(), 5);
    }

    #[test]
    fn unit_settings_invalid_port() {
        let options = Opts {
            prefix: Some("foo".to_string()),
            host: Some("broker1".to_string()),
            port: Some("not_a_port".to_string()),
            username: Some("monitor".to_string()),
            password: Some("secret".to_string()),
            write_dotenv: false,
        };
        let mut changed_options = HashMap::new();
        let result = Settings::from_opts(&options, &mut changed_options);
        assert!(result.is_err());
    }

    #[test]
    fn unit_default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url(), "http://localhost:15672/api");
        assert_eq!(api.username, "guest");
        assert_eq!(api.password, "guest");
    }

    #[test]
    fn unit_dotenv_writer_writes_sorted_settings() {
        let dotenv_file = env::temp_dir().join(format!("rabbitmq_stats_dotenv_{}", std::process::id()));
        let mut changed_options = HashMap::new();
        changed_options.insert(ENV_PORT, "15673".to_string());
        changed_options.insert(ENV_HOST, "broker1".to_string());

        dotenv_writer(true, changed_options, &dotenv_file).unwrap();

        let contents = fs::read_to_string(&dotenv_file).unwrap();
        fs::remove_file(&dotenv_file).unwrap();
        assert_eq!(contents, "RABBITMQ_STATS_HOST=broker1\nRABBITMQ_STATS_PORT=15673\n");
    }

    #[test]
    fn unit_dotenv_writer_disabled() {
        let dotenv_file = env::temp_dir().join(format!("rabbitmq_stats_dotenv_disabled_{}", std::process::id()));
        let mut changed_options = HashMap::new();
        changed_options.insert(ENV_HOST, "broker1".to_string());

        dotenv_writer(false, changed_options, &dotenv_file).unwrap();

        assert!(!dotenv_file.exists());
    }
}
