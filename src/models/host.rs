use percent_encoding::percent_decode_str;
use serde::Deserialize;
use tracing::{info, warn};

/// Identity leaf of the host container's init data. Only `id` is consumed
/// here; the remaining fields arrive with the payload regardless.
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebAppInitData {
    pub user: Option<WebAppUser>,
    pub auth_date: Option<i64>,
    pub query_id: Option<String>,
}

/// Contract of the embedding application: two one-shot lifecycle signals and
/// a nested, possibly-absent identity structure.
pub trait HostContainer: Send + Sync {
    fn expand(&self);
    fn ready(&self);
    fn init_data(&self) -> Option<&WebAppInitData>;

    /// Walks init data -> user -> id, stopping at the first absent link.
    fn user_id(&self) -> Option<i64> {
        self.init_data()?.user.as_ref().map(|user| user.id)
    }
}

pub struct TelegramWebApp {
    init_data: Option<WebAppInitData>,
}

impl TelegramWebApp {
    /// Returns the host container only when its environment is detectable.
    pub fn detect() -> Option<Self> {
        let raw = std::env::var("TELEGRAM_INIT_DATA").ok()?;
        Some(Self::from_init_data(&raw))
    }

    pub fn from_init_data(raw: &str) -> Self {
        Self {
            init_data: Some(parse_init_data(raw)),
        }
    }
}

impl HostContainer for TelegramWebApp {
    fn expand(&self) {
        info!("Host container signal: expand");
    }

    fn ready(&self) {
        info!("Host container signal: ready");
    }

    fn init_data(&self) -> Option<&WebAppInitData> {
        self.init_data.as_ref()
    }
}

/// Parses the Mini-App init-data payload: a `&`-separated, percent-encoded
/// key/value string whose `user` value is a JSON object. Fields that fail to
/// decode are left absent; the payload carries more keys than are read here.
pub fn parse_init_data(raw: &str) -> WebAppInitData {
    let mut data = WebAppInitData::default();

    for pair in raw.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };

        let value = match percent_decode_str(value).decode_utf8() {
            Ok(value) => value,
            Err(e) => {
                warn!("Skipping undecodable init data field '{}': {}", key, e);
                continue;
            }
        };

        match key {
            "user" => match serde_json::from_str(&value) {
                Ok(user) => data.user = Some(user),
                Err(e) => warn!("Malformed user object in init data: {}", e),
            },
            "auth_date" => data.auth_date = value.parse().ok(),
            "query_id" => data.query_id = Some(value.into_owned()),
            _ => {}
        }
    }

    data
}
