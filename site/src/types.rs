//! Data types for the page content.
//!
//! Everything here is plain, `Copy`-able data over `&'static str`: the page
//! content is literal and never mutated after definition, so components can
//! take entries by value without cloning strings.
//!
//! # Example
//!
//! ```rust
//! use devagency_site::types::{IconKind, Service};
//!
//! let service = Service {
//!     icon: IconKind::Code,
//!     title: "Web Development",
//!     description: "Custom websites and web applications.",
//! };
//! assert_eq!(service.icon.name(), "code");
//! ```

/// Closed set of glyphs used on the page.
///
/// Each variant maps to pre-registered SVG path data in
/// [`crate::components::icon_path`], so an entry stores an identifier rather
/// than a renderable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Angle brackets
    Code,
    /// Phone outline
    Smartphone,
    /// Lightning bolt
    Zap,
    /// Globe with meridian
    Globe,
    /// Right arrow (hero call to action)
    ArrowRight,
    /// Hamburger (mobile menu closed)
    Menu,
    /// Cross (mobile menu open)
    Close,
}

impl IconKind {
    /// Every glyph, in declaration order.
    pub const ALL: [IconKind; 7] = [
        IconKind::Code,
        IconKind::Smartphone,
        IconKind::Zap,
        IconKind::Globe,
        IconKind::ArrowRight,
        IconKind::Menu,
        IconKind::Close,
    ];

    /// Stable kebab-case name, used as a `data-icon` attribute.
    pub const fn name(self) -> &'static str {
        match self {
            IconKind::Code => "code",
            IconKind::Smartphone => "smartphone",
            IconKind::Zap => "zap",
            IconKind::Globe => "globe",
            IconKind::ArrowRight => "arrow-right",
            IconKind::Menu => "menu",
            IconKind::Close => "close",
        }
    }
}

/// A service card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// Glyph shown in the card badge
    pub icon: IconKind,
    /// Card heading
    pub title: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
}

/// Two-stop diagonal gradient used as a project card accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    /// Start colour (CSS hex)
    pub from: &'static str,
    /// End colour (CSS hex)
    pub to: &'static str,
}

impl Gradient {
    /// CSS `background` value for the accent layer.
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

/// A project card in the showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Project name
    pub name: &'static str,
    /// Technology list, shown verbatim
    pub tech: &'static str,
    /// Card background accent
    pub accent: Gradient,
}

/// A figure in the stats band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Display value, rendered verbatim (e.g. "500+")
    pub value: &'static str,
    /// Caption under the value
    pub label: &'static str,
}

/// An in-page navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Link text
    pub label: &'static str,
    /// Target element id, without the leading `#`
    pub anchor: &'static str,
}

impl NavItem {
    /// `href` attribute value.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// A footer link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Network name
    pub label: &'static str,
    /// Link target
    pub href: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_are_unique() {
        let mut names: Vec<_> = IconKind::ALL.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), IconKind::ALL.len());
    }

    #[test]
    fn gradient_css_is_diagonal() {
        let g = Gradient {
            from: "#a855f7",
            to: "#ec4899",
        };
        assert_eq!(g.css(), "linear-gradient(135deg, #a855f7, #ec4899)");
    }

    #[test]
    fn nav_href_prefixes_hash() {
        let item = NavItem {
            label: "Contact",
            anchor: "contact",
        };
        assert_eq!(item.href(), "#contact");
    }
}
