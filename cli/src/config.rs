use std::ffi::OsString;
use std::time::Duration;

use animales_core::{Route, ViewSettings};
use clap::Parser;

pub const DEFAULT_BASE_URL: &str = "https://698a05f7c04d974bc6a11fd5.mockapi.io/animales";

#[derive(Parser, Debug)]
#[command(version, about = "Terminal client for the animales API", long_about = None)]
struct ClapArgs {
    /// Collection URL of the animales API.
    #[arg(long, env = "ANIMALES_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Path to open first, e.g. /animales/crear.
    #[arg(long, default_value = "/animales")]
    route: String,

    /// How long list notices stay on screen, in milliseconds.
    #[arg(long, env = "ANIMALES_NOTICE_MS", default_value_t = 3000)]
    notice_ms: u64,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    route: Route,
    notice_window: Duration,
    log_json: bool,
}

impl Config {
    pub fn parse() -> Self {
        Self::from_args(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_args(ClapArgs::parse_from(itr))
    }

    fn from_args(args: ClapArgs) -> Self {
        Self {
            base_url: args.base_url,
            route: Route::parse(&args.route),
            notice_window: Duration::from_millis(args.notice_ms),
            log_json: args.log_json,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn log_json(&self) -> bool {
        self.log_json
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            notice_window: self.notice_window,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::parse_from(["animales"]);
        assert_eq!(config.route(), &Route::List);
        assert_eq!(config.view_settings(), ViewSettings::default());
        assert!(!config.log_json());
    }

    #[test]
    fn test_parse_args() {
        let config = Config::parse_from([
            "animales",
            "--base-url",
            "http://localhost:3000/animales",
            "--route",
            "/animales/editar/4",
            "--notice-ms",
            "500",
            "--log-json",
        ]);
        assert_eq!(config.base_url(), "http://localhost:3000/animales");
        assert_eq!(config.route(), &Route::edit("4"));
        assert_eq!(
            config.view_settings().notice_window,
            Duration::from_millis(500)
        );
        assert!(config.log_json());
    }

    #[test]
    fn test_unknown_route_falls_back_to_list() {
        let config = Config::parse_from(["animales", "--route", "/nowhere"]);
        assert_eq!(config.route(), &Route::List);
    }
}
