pub mod actor_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use film_repo::FilmRepo;
