//! Stored nutrition profiles: record shape, repository boundary and the
//! services that create, edit and plan from them.

pub mod dto;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use dto::{NewProfileRequest, ProfilePatch};
pub use repo::{InMemoryProfileRepository, PatchOutcome, ProfileRepository};
pub use repo_types::{BudgetLevel, NutritionProfile};
