use thiserror::Error;

/// Rejections of user input. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Por favor sube una foto de la habitación")]
    MissingPhoto,

    #[error("El campo '{0}' es obligatorio")]
    MissingField(&'static str),

    #[error("Precio no válido: {0}")]
    InvalidPrice(String),

    #[error("No existe ningún anuncio con ID {0}")]
    ListingNotFound(String),

    #[error("No hay ningún anuncio abierto")]
    NoListingOpen,

    #[error("El chat no está abierto")]
    ChatClosed,

    #[error("No hay ningún pago en curso")]
    NoCheckout,
}

pub type Result<T> = std::result::Result<T, FormError>;
