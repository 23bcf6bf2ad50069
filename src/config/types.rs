use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub page: PageConfig,
}

/// Hero slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Auto-advance period in milliseconds (default: 3000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Responsive layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Widths at or below this value use the compact layout (default: 768).
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u32,
    /// Pixel width assumed per terminal column when the terminal
    /// does not report its pixel size (default: 8).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
}

/// Which document store implementation to read vehicles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Firestore,
    File,
}

/// Vehicle collection location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Firestore project id.
    #[serde(default = "default_project_id")]
    pub project_id: String,
    /// Collection holding one document per vehicle (default: "cars").
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Web API key, sent as the `key` query parameter when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// REST endpoint root (default: "https://firestore.googleapis.com/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Documents requested per page while assembling the batch (default: 300).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// JSON fixture file for `kind = "file"`.
    #[serde(default)]
    pub path: Option<String>,
}

/// Static contact actions shown on every card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Phone number dialed by the call action.
    #[serde(default = "default_phone")]
    pub phone: String,
    /// International number (digits only) for the messaging action.
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,
}

/// Page copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_highlights")]
    pub highlights: Vec<String>,
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_compact_breakpoint() -> u32 {
    768
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_project_id() -> String {
    "kirklareli-arac-kiralama".to_string()
}

fn default_collection() -> String {
    "cars".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_page_size() -> u32 {
    300
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_phone() -> String {
    "05522523997".to_string()
}

fn default_whatsapp() -> String {
    "905522523997".to_string()
}

fn default_title() -> String {
    "Kırklareli Araç Kiralama".to_string()
}

fn default_tagline() -> String {
    "Hızlı, Güvenli, Konforlu Araç Kiralama'nın Adresi".to_string()
}

fn default_highlights() -> Vec<String> {
    [
        "Bakımlı Araçlar",
        "Uygun Fiyat",
        "Güvenilir Hizmet",
        "Acil Durumlar İçin Hızlı Hizmet",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
            cell_width_px: default_cell_width_px(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            project_id: default_project_id(),
            collection: default_collection(),
            api_key: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout_seconds(),
            path: None,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            whatsapp: default_whatsapp(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            highlights: default_highlights(),
        }
    }
}

impl ContactConfig {
    /// `tel:` URI for the call action.
    pub fn phone_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// Messaging-app URI for the chat action.
    pub fn whatsapp_uri(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }
}
