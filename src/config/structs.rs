use clap::Parser;

pub const DEFAULT_PREFIX: &str = "rabbitmq";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 15672;
pub const DEFAULT_USERNAME: &str = "guest";
pub const DEFAULT_PASSWORD: &str = "guest";

pub const ENV_PREFIX: &str = "RABBITMQ_STATS_PREFIX";
pub const ENV_HOST: &str = "RABBITMQ_STATS_HOST";
pub const ENV_PORT: &str = "RABBITMQ_STATS_PORT";
pub const ENV_USERNAME: &str = "RABBITMQ_STATS_USERNAME";
pub const ENV_PASSWORD: &str = "RABBITMQ_STATS_PASSWORD";

/// The command line options.
#[derive(Debug, Parser, Default)]
#[command(version, about = "Print RabbitMQ overview and node statistics as graphite metric lines")]
pub struct Opts {
    /// prefix for every metric name
    #[arg(long, value_name = "prefix")]
    pub prefix: Option<String>,
    /// hostname of the RabbitMQ management API
    #[arg(long, value_name = "hostname")]
    pub host: Option<String>,
    /// port of the RabbitMQ management API
    #[arg(long, value_name = "port")]
    pub port: Option<String>,
    /// user for basic authentication
    #[arg(long, value_name = "username")]
    pub username: Option<String>,
    /// password for basic authentication
    #[arg(long, value_name = "password")]
    pub password: Option<String>,
    /// write the settings that were set to .env
    #[arg(long)]
    pub write_dotenv: bool,
}

/// Where and how to reach the management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// The resolved settings of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub prefix: String,
    pub api: ApiConfig,
}
