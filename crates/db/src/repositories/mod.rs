mod media_repo;

pub use media_repo::MediaRepo;
