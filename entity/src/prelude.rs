pub use super::account::Entity as Account;
pub use super::application::Entity as Application;
pub use super::offer::Entity as Offer;
pub use super::placement::Entity as Placement;
