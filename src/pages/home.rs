//! Home page - the single marketing/contact page.
//!
//! Sections are addressed by the header's fragment links:
//! `#inicio`, `#servicios`, `#paises`, `#contacto`.

use dioxus::prelude::*;

use crate::components::{ContactFormSection, CountryPicker, ServiceCards, SiteHeader};
use crate::content::SITE_NAME;

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}

        main { class: "home",
            section { id: "inicio", class: "hero",
                h1 { class: "page-title", "{SITE_NAME}" }
                p { class: "tagline",
                    "Soluciones digitales para empresas que quieren crecer"
                }
                a { class: "btn-enter", href: "#contacto", "Hablemos" }
            }

            section { id: "servicios", class: "section",
                h2 { class: "section-header", "Servicios" }
                p { class: "body-text",
                    "Todo lo que tu proyecto necesita, de la idea al lanzamiento."
                }
                ServiceCards {}
            }

            section { id: "paises", class: "section",
                h2 { class: "section-header", "¿Desde dónde nos escribes?" }
                p { class: "body-text", "Selecciona tu país para atenderte mejor." }
                CountryPicker {}
            }

            section { id: "contacto", class: "section contact-section",
                h2 { class: "section-header", "Contacto" }
                p { class: "body-text",
                    "Déjanos tus datos y te responderemos en menos de 24 horas."
                }
                ContactFormSection {}
            }
        }

        footer { class: "footer",
            p { "© {SITE_NAME}. Todos los derechos reservados." }
        }
    }
}
