use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::Path;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROUTE: &str = "helloWorld";

const CONFIG_KEYS: [&str; 3] = ["HOST", "PORT", "FUNCTION_ROUTE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub route: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            route: DEFAULT_ROUTE.to_string(),
        }
    }
}

impl Config {
    /// Startup config: `path` if it exists, with process environment variables
    /// taking precedence over the file.
    pub fn load(path: &str) -> Result<Self, Error> {
        Self::load_with(path, process_vars())
    }

    /// Same as [`Config::load`], with `env_vars` standing in for the process environment.
    pub fn load_with(path: &str, env_vars: HashMap<String, String>) -> Result<Self, Error> {
        let mut vars = if Path::new(path).exists() {
            load_dotenv(path)?
        } else {
            HashMap::new()
        };
        vars.extend(env_vars);

        Self::from_vars(&vars)
    }

    pub fn from_env_file(path: &str) -> Result<Self, Error> {
        Self::from_vars(&load_dotenv(path)?)
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(&process_vars())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, Error> {
        let host = vars
            .get("HOST")
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match vars.get("PORT").filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("PORT must be a port number, got {raw:?}: {e}"),
                )
            })?,
            None => DEFAULT_PORT,
        };

        let route = match vars.get("FUNCTION_ROUTE") {
            Some(raw) => validate_route(raw)?,
            None => DEFAULT_ROUTE.to_string(),
        };

        Ok(Config { host, port, route })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_route(raw: &str) -> Result<String, Error> {
    let route = raw.trim_matches('/');

    if route.contains(|c: char| c.is_whitespace() || c == '{' || c == '}') {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("FUNCTION_ROUTE contains invalid characters: {raw:?}"),
        ));
    }

    // axum refuses `:` and `*` at the start of a segment
    if route
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("FUNCTION_ROUTE segments must not start with `:` or `*`: {raw:?}"),
        ));
    }

    Ok(route.to_string())
}

fn process_vars() -> HashMap<String, String> {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| env::var(key).ok().map(|value| (key.to_string(), value)))
        .collect()
}

fn load_dotenv(path: &str) -> Result<HashMap<String, String>, Error> {
    let mut vars: HashMap<String, String> = HashMap::new();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }

    Ok(vars)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    value
}
