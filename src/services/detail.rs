use crate::models::Movie;

/// Where the "more like this" strip of an open detail view comes from
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarSource {
    /// Opened from a result grid: the other results are already at hand
    Provided(Vec<Movie>),
    /// Opened from a genre row: similar titles have to be fetched
    Fetch,
}

/// What the renderer needs to draw an open detail view
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub movie: Movie,
    pub similar: SimilarSource,
}

/// Detail view state: the movie currently on display, if any.
///
/// Owned by whoever drives the view; opening replaces the previous movie.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    current: Option<Movie>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `movie`, replacing whatever was open
    pub fn open(&mut self, movie: Movie, similar: Option<Vec<Movie>>) -> ModalView {
        tracing::debug!(title = %movie.title, "Opening detail view");
        self.current = Some(movie.clone());
        ModalView {
            movie,
            similar: similar.map_or(SimilarSource::Fetch, SimilarSource::Provided),
        }
    }

    /// Opens a movie picked from a result grid; the rest of the grid becomes
    /// its similar strip
    pub fn open_from_grid(&mut self, grid: &[Movie], index: usize) -> Option<ModalView> {
        let movie = grid.get(index)?.clone();
        let others = grid
            .iter()
            .filter(|m| !m.same_id(&movie))
            .cloned()
            .collect();
        Some(self.open(movie, Some(others)))
    }

    /// Opens a movie picked from a genre row; its similar strip still has to
    /// be fetched
    pub fn open_from_row(&mut self, row: &[Movie], index: usize) -> Option<ModalView> {
        let movie = row.get(index)?.clone();
        Some(self.open(movie, None))
    }

    /// Hides the view and hands back the movie it held
    pub fn close(&mut self) -> Option<Movie> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Movie> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
