//! Static content of the page and the structure it exposes to the
//! interaction layer.

use contactpage_core::{CountryOption, NavLink, PageRoot};

pub const SITE_NAME: &str = "Nexo Digital";

/// A service card shown in the services section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "card-web",
        icon: "\u{1F310}",
        title: "Desarrollo web",
        description: "Sitios rápidos, accesibles y fáciles de mantener.",
    },
    Service {
        id: "card-apps",
        icon: "\u{1F4F1}",
        title: "Aplicaciones móviles",
        description: "Apps nativas e híbridas para iOS y Android.",
    },
    Service {
        id: "card-seo",
        icon: "\u{1F50E}",
        title: "Posicionamiento SEO",
        description: "Más visitas orgánicas con contenido y técnica.",
    },
    Service {
        id: "card-ecommerce",
        icon: "\u{1F6D2}",
        title: "Comercio electrónico",
        description: "Tiendas online con pagos y logística integrados.",
    },
    Service {
        id: "card-consultoria",
        icon: "\u{1F4A1}",
        title: "Consultoría",
        description: "Estrategia digital a la medida de tu negocio.",
    },
    Service {
        id: "card-soporte",
        icon: "\u{1F6E0}",
        title: "Soporte",
        description: "Mantenimiento y soporte técnico continuo.",
    },
];

/// Countries served; the first is the markup's default.
pub const COUNTRIES: &[(&str, &str, &str)] = &[
    ("pais-es", "\u{1F1EA}\u{1F1F8}", "España"),
    ("pais-mx", "\u{1F1F2}\u{1F1FD}", "México"),
    ("pais-ar", "\u{1F1E6}\u{1F1F7}", "Argentina"),
    ("pais-co", "\u{1F1E8}\u{1F1F4}", "Colombia"),
    ("pais-cl", "\u{1F1E8}\u{1F1F1}", "Chile"),
];

/// Header navigation, in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#servicios", "Servicios"),
    ("#paises", "Países"),
    ("#contacto", "Contacto"),
    ("#lang", "ES"),
];

/// Flag shown next to a country option
pub fn country_flag(id: &str) -> &'static str {
    COUNTRIES
        .iter()
        .find(|(option_id, _, _)| *option_id == id)
        .map(|(_, flag, _)| *flag)
        .unwrap_or("")
}

/// Structure of the rendered page.
pub fn page_root() -> PageRoot {
    let country_options = COUNTRIES
        .iter()
        .enumerate()
        .map(|(index, (id, _, label))| {
            let option = CountryOption::new(*id, *label);
            if index == 0 {
                option.initially_selected()
            } else {
                option
            }
        })
        .collect();

    PageRoot {
        contact_form: true,
        country_options,
        nav_links: NAV_LINKS
            .iter()
            .map(|(href, label)| NavLink::new(*href, *label))
            .collect(),
        search_button: true,
        cards: SERVICES.iter().map(|s| s.id.to_string()).collect(),
    }
}
