use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Colour scheme for every rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Name shown in the hero banner.
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub theme: ThemeMode,
    /// Sentences cycled by the typewriter on the home page.
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
}

/// Typewriter cadence in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay between typed characters (default: 100).
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Delay between deleted characters (default: 50).
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    /// Hold on a fully typed phrase (default: 1500).
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// Pause before typing the next phrase (default: 200).
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

/// Client side of the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Full URL of the contact endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds (default: 15).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// How long the success banner stays up (default: 5000).
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: u64,
}

/// Contact endpoint service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Mailbox receiving contact form submissions.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    /// HTTP mail relay the composed message is handed to.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
}

fn default_owner() -> String {
    "Chaveen Dias".to_string()
}

pub fn default_phrases() -> Vec<String> {
    vec![
        "Passionate about DevOps and Machine Learning.".to_string(),
        "AI Enthusiast.".to_string(),
        "Learning and growing as a software engineer.".to_string(),
    ]
}

fn default_type_ms() -> u64 {
    100
}

fn default_delete_ms() -> u64 {
    50
}

fn default_hold_ms() -> u64 {
    1500
}

fn default_pause_ms() -> u64 {
    200
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8787/api/contact".to_string()
}

fn default_timeout_seconds() -> u32 {
    15
}

fn default_success_reset_ms() -> u64 {
    5000
}

fn default_bind_addr() -> String {
    "127.0.0.1:8787".to_string()
}

fn default_recipient() -> String {
    "chaveendias@gmail.com".to_string()
}

fn default_relay_url() -> String {
    "http://127.0.0.1:8025/send".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            theme: ThemeMode::default(),
            phrases: default_phrases(),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            hold_ms: default_hold_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            success_reset_ms: default_success_reset_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            recipient: default_recipient(),
            relay_url: default_relay_url(),
        }
    }
}
