//! Repository and unit-of-work interfaces for the persistence boundary.

pub mod unit_of_work;
pub mod user;

pub use unit_of_work::{MockUnitOfWork, UnitOfWork};
pub use user::{MockUserRepository, UserRepository};
