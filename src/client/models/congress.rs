//! Congress registration models

use serde::{Deserialize, Serialize};

use crate::client::models::de;

/// A congress registration submitted through the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CongressParticipant {
    pub id: i64,
    /// Full name as entered at registration
    pub name: String,
    #[serde(default)]
    pub vocation: Option<String>,
    /// Institution the participant works for
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Payment flag, stored loosely server-side
    #[serde(default, deserialize_with = "de::flexible_bool")]
    pub paid: bool,
    /// Uploaded congress paper, when one was attached
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
