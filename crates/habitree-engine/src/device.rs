//! User-agent sniffing.
//!
//! Works on the raw `User-Agent` header so the same checks run on the server
//! and in any client that can hand over its agent string.

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").unwrap()
});

static IOS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"iPad|iPhone|iPod").unwrap());

/// Coarse device class derived from a user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Ios,
    Android,
    OtherMobile,
    Desktop,
}

impl DeviceKind {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if is_ios(user_agent) {
            DeviceKind::Ios
        } else if is_android(user_agent) {
            DeviceKind::Android
        } else if is_mobile(user_agent) {
            DeviceKind::OtherMobile
        } else {
            DeviceKind::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self != DeviceKind::Desktop
    }
}

/// Case-insensitive match against the common mobile platform markers.
pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE_RE.is_match(user_agent)
}

pub fn is_ios(user_agent: &str) -> bool {
    IOS_RE.is_match(user_agent)
}

pub fn is_android(user_agent: &str) -> bool {
    user_agent.contains("Android")
}
