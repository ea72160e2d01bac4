use crate::catalog::{CastMember, MovieDetail};
use crate::store::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub movie: Option<MovieDetail>,
    pub cast: Vec<CastMember>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for DetailState {}
