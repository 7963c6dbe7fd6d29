//! Persona instructions and the fixed texts each persona falls back to.

use crate::models::Listing;

pub const HELP_INSTRUCTION: &str = "Eres el asistente oficial de \"Roomy\", una plataforma de alquiler de habitaciones. \nTu objetivo es ayudar a los usuarios a publicar sus habitaciones de forma atractiva.\nPuedes dar consejos sobre fotos, descripciones, precios y dudas de la app.\nMantén un tono profesional y amable en español.";

pub const HELP_GREETING: &str = "¡Hola! Soy el asistente de Roomy. ¿En qué puedo ayudarte con tu anuncio?";

/// Who the model is asked to play
#[derive(Debug, Clone, PartialEq)]
pub enum Persona {
    /// Platform help assistant
    Help,
    /// Owner of a specific listing
    Host(Listing),
}

impl Persona {
    pub fn instruction(&self) -> String {
        match self {
            Persona::Help => HELP_INSTRUCTION.to_string(),
            Persona::Host(listing) => host_instruction(listing),
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            Persona::Help => 0.7,
            Persona::Host(_) => 0.8,
        }
    }

    /// Used when the service answers without any text
    pub fn empty_reply(&self) -> &'static str {
        match self {
            Persona::Help => "Lo siento, tuve un problema.",
            Persona::Host(_) => "Hola, perdona, ¿puedes repetir?",
        }
    }

    /// Used when the remote call fails for any reason
    pub fn apology(&self) -> &'static str {
        match self {
            Persona::Help => "Hubo un error al conectar con el asistente.",
            Persona::Host(_) => "Lo siento, ahora mismo no puedo contestar. Inténtalo más tarde.",
        }
    }

    /// First message shown when a chat with this persona opens
    pub fn greeting(&self) -> String {
        match self {
            Persona::Help => HELP_GREETING.to_string(),
            Persona::Host(listing) => format!(
                "¡Hola! Soy {}, el propietario. ¿Qué te parece el cuarto? Si tienes dudas sobre los gastos o las normas, pregúntame lo que quieras.",
                listing.owner_name
            ),
        }
    }
}

fn host_instruction(listing: &Listing) -> String {
    format!(
        "Actúa como {owner}, el dueño de la habitación \"{title}\" ubicada en {location}. \n\
         Detalles de la habitación: {description}. Precio: {price}. Servicios: {amenities}.\n\
         Tu objetivo es ser amable con el posible inquilino, responder sus dudas sobre el cuarto y tratar de cerrar el trato. \n\
         Sé natural, habla como una persona real y no como un robot. Responde siempre en español.",
        owner = listing.owner_name,
        title = listing.title,
        location = listing.location,
        description = listing.description,
        price = listing.price,
        amenities = listing.amenities.join(", "),
    )
}
