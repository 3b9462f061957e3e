//! Static content tables for the marketing site.
//!
//! Testimonials and service offerings are fixed editorial content, kept as
//! data tables rather than anything persisted.

use crate::domain::PermitCategory;
use serde::Serialize;

/// A student testimonial shown on the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub nombre: &'static str,
    pub rol: &'static str,
    pub texto: &'static str,
    pub permiso: PermitCategory,
    pub fecha: &'static str,
}

/// A course the school offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub titulo: &'static str,
    pub descripcion: &'static str,
    pub icono: &'static str,
    pub precio: u32,
    pub caracteristicas: Vec<&'static str>,
    #[serde(rename = "tipoPermiso")]
    pub tipo_permiso: PermitCategory,
}

/// The testimonial table.
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1",
            nombre: "María García",
            rol: "Alumna",
            texto: "Excelente experiencia. Aprobé a la primera gracias a los profesores.",
            permiso: PermitCategory::B,
            fecha: "2023-10-15",
        },
        Testimonial {
            id: "2",
            nombre: "Carlos Rodríguez",
            rol: "Alumno",
            texto: "Las clases prácticas son muy completas. Recomendaría esta autoescuela sin duda.",
            permiso: PermitCategory::A,
            fecha: "2023-11-20",
        },
    ]
}

/// The service offering table.
pub fn services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            id: "1",
            titulo: "Permiso B",
            descripcion: "Formación completa para conducir turismos",
            icono: "coche",
            precio: 650,
            caracteristicas: vec![
                "Manual teórico actualizado",
                "Clases teóricas presenciales",
                "Prácticas en ciudad y carretera",
            ],
            tipo_permiso: PermitCategory::B,
        },
        ServiceOffering {
            id: "2",
            titulo: "Permiso A",
            descripcion: "Aprende a conducir motocicletas con seguridad",
            icono: "moto",
            precio: 500,
            caracteristicas: vec![
                "Equipamiento incluido",
                "Prácticas en circuito cerrado",
                "Técnicas de conducción segura",
            ],
            tipo_permiso: PermitCategory::A,
        },
    ]
}
