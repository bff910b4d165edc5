//! Built-in route tables of the site.
//!
//! Canonical paths are English. `localroute.toml` may replace this list
//! with its own `[[routes]]`.

use super::table::{RouteDecl, RouteTables, TableError};
use crate::core::Language::{Es, Fr};

/// Declared routes, static and dynamic interleaved as the site lists them.
pub fn builtin_routes() -> Vec<RouteDecl> {
    vec![
        RouteDecl::new("/").with(Es, "/").with(Fr, "/"),
        RouteDecl::new("/about")
            .with(Es, "/nosotros")
            .with(Fr, "/a-propos"),
        RouteDecl::new("/services")
            .with(Es, "/servicios")
            .with(Fr, "/prestations"),
        RouteDecl::new("/services/:slug")
            .with(Es, "/servicios/:slug")
            .with(Fr, "/prestations/:slug"),
        RouteDecl::new("/clients")
            .with(Es, "/clientes")
            .with(Fr, "/references"),
        RouteDecl::new("/blog")
            .with(Es, "/noticias")
            .with(Fr, "/actualites"),
        RouteDecl::new("/blog/:slug")
            .with(Es, "/noticias/:slug")
            .with(Fr, "/actualites/:slug"),
        RouteDecl::new("/gallery")
            .with(Es, "/galeria")
            .with(Fr, "/galerie"),
        RouteDecl::new("/gallery/:id")
            .with(Es, "/galeria/:id")
            .with(Fr, "/galerie/:id"),
        RouteDecl::new("/search")
            .with(Es, "/buscar")
            .with(Fr, "/recherche"),
        RouteDecl::new("/contact")
            .with(Es, "/contacto")
            .with(Fr, "/nous-contacter"),
        RouteDecl::new("/privacy")
            .with(Es, "/privacidad")
            .with(Fr, "/confidentialite"),
    ]
}

impl RouteTables {
    /// Tables built from [`builtin_routes`].
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_routes(builtin_routes())
    }
}
