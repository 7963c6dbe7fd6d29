use crate::models::{Listing, PlatformReview, Review};
use tracing::info;

/// Listings shown before anyone publishes anything
pub fn initial_listings() -> Vec<Listing> {
    info!("📋 Loading initial listings");

    vec![
        Listing {
            id: "1".to_string(),
            title: "Estudio moderno en el corazón de Madrid".to_string(),
            description: "Habitación espaciosa y recién reformada con cama doble de alta gama, escritorio ergonómico para teletrabajo y balcón privado con vistas a la calle principal. Perfecta para estancias de media y larga duración.".to_string(),
            price: 450.0,
            location: "Madrid, Centro-Sol".to_string(),
            image: "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?auto=format&fit=crop&q=80&w=1200".to_string(),
            amenities: vec![
                "Wifi 600Mb".to_string(),
                "Balcón".to_string(),
                "Escritorio".to_string(),
                "Cama Doble".to_string(),
                "Limpieza semanal".to_string(),
            ],
            owner_name: "Carlos Ruiz".to_string(),
            phone: "612 345 678".to_string(),
            reviews: vec![Review {
                id: "r1".to_string(),
                user_name: "Lucía M.".to_string(),
                rating: 5,
                comment: "Increíble estancia, Carlos es muy atento y el sistema de pago es genial.".to_string(),
                date: "2024-03-15".to_string(),
            }],
        },
        Listing {
            id: "2".to_string(),
            title: "Suite minimalista en Gràcia con baño propio".to_string(),
            description: "Ambiente extremadamente silencioso y acogedor, perfecto para profesionales que buscan tranquilidad. Incluye baño privado recién reformado.".to_string(),
            price: 520.0,
            location: "Barcelona, Barrio de Gràcia".to_string(),
            image: "https://images.unsplash.com/photo-1513694203232-719a280e022f?auto=format&fit=crop&q=80&w=1200".to_string(),
            amenities: vec![
                "Wifi".to_string(),
                "Gastos incluidos".to_string(),
                "Aire acondicionado".to_string(),
                "Baño privado".to_string(),
            ],
            owner_name: "Elena Martínez".to_string(),
            phone: "623 456 789".to_string(),
            reviews: vec![],
        },
        Listing {
            id: "3".to_string(),
            title: "Habitación luminosa junto al Parque del Turia".to_string(),
            description: "Habitación muy luminosa en piso compartido con gente joven. Zona inmejorable.".to_string(),
            price: 310.0,
            location: "Valencia, Ruzafa".to_string(),
            image: "https://images.unsplash.com/photo-1598928506311-c55ded91a20c?auto=format&fit=crop&q=80&w=1200".to_string(),
            amenities: vec![
                "Vistas al parque".to_string(),
                "Ascensor".to_string(),
                "Cocina equipada".to_string(),
            ],
            owner_name: "Ricardo Sanz".to_string(),
            phone: "634 567 890".to_string(),
            reviews: vec![],
        },
    ]
}

pub fn initial_platform_reviews() -> Vec<PlatformReview> {
    vec![PlatformReview {
        id: "p1".to_string(),
        user_name: "Marta Jiménez".to_string(),
        user_role: "Inquilina".to_string(),
        rating: 5,
        comment: "Encontré mi habitación ideal y pagué el primer mes con total seguridad. ¡Súper recomendado!".to_string(),
        avatar: "https://i.pravatar.cc/150?u=marta".to_string(),
    }]
}
