pub mod browse;
pub mod detail;
pub mod providers;
pub mod query;

pub use browse::{BrowseService, GenreSection};
pub use detail::{DetailModal, ModalView, SimilarSource};
pub use providers::{HttpRecommendationProvider, RecommendationProvider};
pub use query::synthesize;
