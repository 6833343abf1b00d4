use std::net::IpAddr;

use clap::Parser;

/// Runtime settings, taken from flags or environment variables.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "quiz-web", about = "Quiz web application")]
pub struct Config {
    /// Tracing filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "quiz_web=info,warp=error")]
    pub log_level: String,
    /// Connection string of the PostgreSQL store.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
    /// Address the server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1")]
    pub bind: IpAddr,
    /// Port the server listens on.
    #[arg(long, env = "PORT", default_value_t = 3030)]
    pub port: u16,
}
