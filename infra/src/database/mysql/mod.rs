//! MySQL implementations of the core persistence traits

pub mod unit_of_work_impl;
pub mod user_repository_impl;

pub use unit_of_work_impl::MySqlUnitOfWork;
pub use user_repository_impl::MySqlUserRepository;
