use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown staff role: {role}")]
    UnknownRole { role: String },

    #[error("No staff member at index {index}")]
    StaffIndexOutOfRange { index: usize },

    #[error("Unknown product: {product}")]
    UnknownProduct { product: String },

    #[error("Game already finished after {max_turns} turns")]
    GameFinished { max_turns: u32 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
