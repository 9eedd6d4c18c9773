use pledges_states::{State, state_assign_impl};
use serde::Deserialize;
use std::any::Any;
use std::env::vars;
use ustr::Ustr;

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    data_url: Ustr,
}

// Every variable is optional, unset ones fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    pledges_data_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(data_url: impl AsRef<str>) -> Self {
        Self {
            data_url: Ustr::from(data_url.as_ref()),
        }
    }

    pub fn data_url(&self) -> Ustr {
        self.data_url
    }

    /// Reads `PLEDGES_DATA_URL` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(
            vars.into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        )?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.pledges_data_url {
            Some(url) if !url.trim().is_empty() => {
                log::info!("Using PLEDGES_DATA_URL: {url}");
                Self::new(url.trim())
            }
            _ => Self::default(),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
