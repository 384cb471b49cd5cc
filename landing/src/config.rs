//! Page configuration.
//!
//! Two layers: build-time environment (`LANDING_BRAND`, `LANDING_LOG`, read
//! with `option_env!`) and the `?brand=` query parameter, which wins for the
//! page view it appears on. Bad values are logged and ignored.

use std::str::FromStr;

use tracing::Level;

use crate::content::Brand;
use crate::reveal::RevealTable;

/// Build-time default brand.
pub const BRAND_ENV: Option<&str> = option_env!("LANDING_BRAND");
/// Build-time max log level.
pub const LOG_ENV: Option<&str> = option_env!("LANDING_LOG");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    pub brand: Brand,
    pub reveal: RevealTable,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(BRAND_ENV),
            reveal: RevealTable::DEFAULT,
        }
    }
}

impl LandingConfig {
    /// Applies a `?brand=` override on top of the build-time defaults.
    pub fn resolve(query_brand: Option<&str>) -> Self {
        Self::default().with_override(query_brand)
    }

    pub fn with_override(mut self, query_brand: Option<&str>) -> Self {
        if let Some(raw) = query_brand.filter(|s| !s.trim().is_empty()) {
            match Brand::from_str(raw) {
                Ok(brand) => self.brand = brand,
                Err(err) => tracing::warn!(%err, fallback = %self.brand, "ignoring ?brand="),
            }
        }
        self
    }
}

/// Brand from the build environment, `imed` when unset or unknown.
pub fn default_brand(env: Option<&str>) -> Brand {
    match env.map(Brand::from_str) {
        Some(Ok(brand)) => brand,
        Some(Err(err)) => {
            tracing::warn!(%err, "LANDING_BRAND not recognised, using default");
            Brand::default()
        }
        None => Brand::default(),
    }
}

/// Max log level from the build environment, `INFO` when unset or unknown.
pub fn log_level(env: Option<&str>) -> Level {
    env.and_then(|raw| Level::from_str(raw.trim()).ok())
        .unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_overrides_default() {
        let base = LandingConfig {
            brand: Brand::Imed,
            reveal: RevealTable::DEFAULT,
        };
        assert_eq!(base.with_override(Some("autinosis")).brand, Brand::Autinosis);
    }

    #[test]
    fn bad_or_empty_query_is_ignored() {
        let base = LandingConfig {
            brand: Brand::Autinosis,
            reveal: RevealTable::DEFAULT,
        };
        assert_eq!(base.with_override(Some("nope")).brand, Brand::Autinosis);
        assert_eq!(base.with_override(Some("  ")).brand, Brand::Autinosis);
        assert_eq!(base.with_override(None).brand, Brand::Autinosis);
    }

    #[test]
    fn env_brand_falls_back_to_imed() {
        assert_eq!(default_brand(None), Brand::Imed);
        assert_eq!(default_brand(Some("???")), Brand::Imed);
        assert_eq!(default_brand(Some("autinosis")), Brand::Autinosis);
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(log_level(None), Level::INFO);
        assert_eq!(log_level(Some("debug")), Level::DEBUG);
        assert_eq!(log_level(Some("WARN")), Level::WARN);
        assert_eq!(log_level(Some("loud")), Level::INFO);
    }
}
