//! Page copy and the fixed content lists.
//!
//! All lists are fixed-size arrays so their length is part of the type.

use crate::types::{Gradient, IconKind, NavItem, Project, Service, SocialLink, Stat};

/// Brand shown in the nav bar and footer.
pub const BRAND: &str = "DevAgency";

/// Hero headline.
pub const HERO_TITLE: &str = "Build Digital Excellence";

/// Hero subtext.
pub const HERO_SUBTITLE: &str =
    "We craft exceptional digital experiences that transform your vision into reality";

/// Footer copyright line.
pub const COPYRIGHT: &str = "© 2025 DevAgency. All rights reserved.";

/// Navigation links, shared by the desktop bar and the mobile overlay.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Services",
        anchor: "services",
    },
    NavItem {
        label: "Projects",
        anchor: "projects",
    },
    NavItem {
        label: "About",
        anchor: "about",
    },
    NavItem {
        label: "Contact",
        anchor: "contact",
    },
];

/// Element ids of the sections the page actually renders.
///
/// `about` is linked from the nav but has no section.
pub const SECTION_IDS: [&str; 3] = ["services", "projects", "contact"];

/// Services grid, in display order.
pub const SERVICES: [Service; 4] = [
    Service {
        icon: IconKind::Code,
        title: "Web Development",
        description: "Custom websites and web applications built with cutting-edge technologies.",
    },
    Service {
        icon: IconKind::Smartphone,
        title: "Mobile Apps",
        description: "Native and cross-platform mobile applications for iOS and Android.",
    },
    Service {
        icon: IconKind::Zap,
        title: "Performance Optimization",
        description: "Lightning-fast websites optimized for speed, SEO, and user experience.",
    },
    Service {
        icon: IconKind::Globe,
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and deployment solutions for your business.",
    },
];

/// Projects showcase, in display order.
pub const PROJECTS: [Project; 4] = [
    Project {
        name: "E-Commerce Platform",
        tech: "Next.js, Stripe, PostgreSQL",
        accent: Gradient {
            from: "#a855f7",
            to: "#ec4899",
        },
    },
    Project {
        name: "SaaS Dashboard",
        tech: "React, TypeScript, Tailwind",
        accent: Gradient {
            from: "#3b82f6",
            to: "#06b6d4",
        },
    },
    Project {
        name: "Mobile Banking App",
        tech: "React Native, Node.js",
        accent: Gradient {
            from: "#22c55e",
            to: "#10b981",
        },
    },
    Project {
        name: "AI Content Platform",
        tech: "Next.js, OpenAI, Python",
        accent: Gradient {
            from: "#f97316",
            to: "#ef4444",
        },
    },
];

/// Stats band.
pub const STATS: [Stat; 4] = [
    Stat {
        value: "500+",
        label: "Projects Completed",
    },
    Stat {
        value: "250+",
        label: "Happy Clients",
    },
    Stat {
        value: "50+",
        label: "Team Members",
    },
    Stat {
        value: "15+",
        label: "Countries Served",
    },
];

/// Footer links.
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Twitter",
        href: "#",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
    },
    SocialLink {
        label: "GitHub",
        href: "#",
    },
    SocialLink {
        label: "Dribbble",
        href: "#",
    },
];

/// Nav anchors with no matching section on the page.
pub fn dangling_anchors() -> Vec<&'static str> {
    NAV_ITEMS
        .iter()
        .map(|item| item.anchor)
        .filter(|anchor| !SECTION_IDS.contains(anchor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn services_keep_their_order_and_icons() {
        let pairs: Vec<_> = SERVICES.iter().map(|s| (s.title, s.icon)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Web Development", IconKind::Code),
                ("Mobile Apps", IconKind::Smartphone),
                ("Performance Optimization", IconKind::Zap),
                ("Cloud Solutions", IconKind::Globe),
            ]
        );
    }

    #[test]
    fn only_about_is_dangling() {
        assert_eq!(dangling_anchors(), vec!["about"]);
    }

    #[test]
    fn stats_pair_values_with_labels() {
        assert_eq!(STATS[0].value, "500+");
        assert_eq!(STATS[0].label, "Projects Completed");
        assert_eq!(STATS[3].value, "15+");
        assert_eq!(STATS[3].label, "Countries Served");
    }
}
