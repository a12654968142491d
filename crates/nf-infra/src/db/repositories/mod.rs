mod article_repo;

pub use article_repo::DieselArticleRepository;
