//! Brand content datasets.
//!
//! Both brands share every component; they differ only in the data loaded
//! here. Each dataset is a JSON file embedded at build time, deserialized
//! once per page view and checked by [`SiteContent::validate`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ContentError;

/// Placeholder replaced by the current year in the copyright line.
pub const YEAR_PLACEHOLDER: &str = "{year}";

const IMED_JSON: &str = include_str!("../content/imed.json");
const AUTINOSIS_JSON: &str = include_str!("../content/autinosis.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Brand {
    #[default]
    Imed,
    Autinosis,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Imed, Brand::Autinosis];

    pub fn slug(self) -> &'static str {
        match self {
            Brand::Imed => "imed",
            Brand::Autinosis => "autinosis",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Brand::Imed => IMED_JSON,
            Brand::Autinosis => AUTINOSIS_JSON,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Brand {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imed" => Ok(Brand::Imed),
            "autinosis" => Ok(Brand::Autinosis),
            other => Err(ContentError::UnknownBrand(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BrandIdentity {
    pub name: String,
    /// Single glyph shown in the logo tile
    pub mark: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// A labelled navigation target, internal route or absolute URL.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub href: String,
}

impl LinkItem {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub highlight: String,
    pub lead: String,
    pub primary: LinkItem,
    pub secondary: LinkItem,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionHeader {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TestimonialItem {
    pub quote: String,
    pub author: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button: LinkItem,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub region: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub handle: String,
    pub networks: Vec<String>,
}

impl SocialLinks {
    /// `(network, profile URL)` pairs, in declaration order.
    pub fn profiles(&self) -> Vec<(String, String)> {
        self.networks
            .iter()
            .map(|net| (net.clone(), format!("https://{}.com/{}", net, self.handle)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterContent {
    pub links_title: String,
    pub links: Vec<LinkItem>,
    pub contact_title: String,
    pub contact: ContactInfo,
    pub social_title: String,
    pub social: SocialLinks,
    /// Must contain `{year}` exactly once
    pub copyright: String,
    pub legal: Vec<LinkItem>,
}

impl FooterContent {
    pub fn copyright_line(&self, year: u32) -> String {
        self.copyright
            .replacen(YEAR_PLACEHOLDER, &year.to_string(), 1)
    }
}

/// Everything a brand variant supplies to the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: BrandIdentity,
    pub meta: PageMeta,
    pub hero: HeroContent,
    pub features_header: SectionHeader,
    pub features: Vec<FeatureItem>,
    pub call_to_action: CallToAction,
    pub testimonials_header: SectionHeader,
    pub testimonials: Vec<TestimonialItem>,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Parses and validates the embedded dataset for `brand`.
    pub fn load(brand: Brand) -> Result<Self, ContentError> {
        Self::parse(brand.slug(), brand.source())
    }

    pub fn parse(name: &'static str, json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json).map_err(|source| {
            ContentError::Parse {
                brand: name,
                source,
            }
        })?;
        content.validate(name)?;
        Ok(content)
    }

    pub fn validate(&self, name: &'static str) -> Result<(), ContentError> {
        let invalid = |reason: String| ContentError::Invalid {
            brand: name,
            reason,
        };

        if self.features.is_empty() {
            return Err(invalid("feature list is empty".into()));
        }
        if self.testimonials.is_empty() {
            return Err(invalid("testimonial list is empty".into()));
        }
        if self.footer.copyright.matches(YEAR_PLACEHOLDER).count() != 1 {
            return Err(invalid(format!(
                "copyright must contain {} exactly once",
                YEAR_PLACEHOLDER
            )));
        }
        if let Some(link) = self.links().find(|l| l.href.trim().is_empty()) {
            return Err(invalid(format!("link '{}' has no target", link.label)));
        }
        if let Some(t) = self.testimonials.iter().find(|t| t.quote.contains('"')) {
            return Err(invalid(format!(
                "testimonial by '{}' carries its own quotation marks",
                t.author
            )));
        }
        Ok(())
    }

    /// Every navigation target on the page.
    pub fn links(&self) -> impl Iterator<Item = &LinkItem> {
        [
            &self.hero.primary,
            &self.hero.secondary,
            &self.call_to_action.button,
        ]
        .into_iter()
        .chain(self.footer.links.iter())
        .chain(self.footer.legal.iter())
    }
}

/// Pairs each item with its index, the identity it keeps across renders.
pub fn indexed<T>(items: &[T]) -> impl Iterator<Item = (usize, &T)> {
    items.iter().enumerate()
}
