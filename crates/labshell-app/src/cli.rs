use std::path::PathBuf;

use clap::Parser;

/// labshell: headless lab shell driving the split layout, tool tabs and
/// expiration countdown from line commands on stdin.
#[derive(Parser, Debug)]
#[command(name = "labshell", version, about)]
pub struct Args {
    /// Lab config file, used when no inline payload is given and watched
    /// for newly added tools.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Inline lab payload baked into the page (JSON).
    #[arg(long)]
    pub inline: Option<String>,

    /// Shell settings file override.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Initial viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Persist session storage to this file instead of keeping it in memory.
    #[arg(long)]
    pub session_file: Option<PathBuf>,

    /// Page URL that root-relative tool URLs resolve against.
    #[arg(long, default_value = "http://localhost/")]
    pub base_url: String,

    /// Host name the shell is served from (`<sandbox-uuid>.<domain>`).
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Log directive override (e.g. `debug`, `labshell_layout=trace`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["labshell"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert!((args.width - 1280.0).abs() < f64::EPSILON);
        assert_eq!(args.host, "localhost");
        assert!(args.session_file.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "labshell",
            "--config",
            "/srv/lab/config.json",
            "--inline",
            "{}",
            "--settings",
            "s.toml",
            "--width",
            "600",
            "--session-file",
            "/tmp/session.json",
            "--base-url",
            "https://x.example.com/lab/",
            "--host",
            "x.example.com",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.inline.as_deref(), Some("{}"));
        assert_eq!(args.settings, Some(PathBuf::from("s.toml")));
        assert!((args.width - 600.0).abs() < f64::EPSILON);
        assert_eq!(args.session_file, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(args.base_url, "https://x.example.com/lab/");
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
