use crate::catalog::{CastMember, MovieDetail};
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Started,
    Loaded {
        movie: MovieDetail,
        cast: Vec<CastMember>,
    },
    Failed {
        message: String,
    },
    Reset,
}

impl Intent for DetailIntent {}
