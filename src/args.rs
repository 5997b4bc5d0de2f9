use clap::Parser;

/// Turn pasted github issue/PR links into formatted markdown
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Github token attached as a bearer authorization header
    /// (anonymous requests when empty)
    #[arg(short, long, env = "I2M_TOKEN", default_value = "")]
    pub token: String,

    /// Template applied to each resolved link; placeholders: {title},
    /// {number}, {repo}, {owner}, {url}
    #[arg(
        short = 'T',
        long,
        env = "I2M_TEMPLATE",
        default_value = "[{title} #{number}]({url})"
    )]
    pub template: String,

    /// Base URL of the issues API (any github-compatible endpoint)
    #[arg(long, env = "I2M_API_BASE", default_value = "https://api.github.com")]
    pub api_base: String,

    /// File to read links from (rather than from standard input)
    #[arg(short, long, env = "I2M_FILE")]
    pub file: Option<String>,

    /// Log-level (error, warn, info, debug, trace)
    #[arg(short, long, env = "I2M_LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}
