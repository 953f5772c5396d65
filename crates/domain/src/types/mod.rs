//! Domain types and models

pub mod product;
pub mod state;
pub mod store;
pub mod token;

pub use product::{expiration_date_from, Channel, Price, Product, ProductsListResponse};
pub use state::HandleState;
pub use store::{Credentials, StoreId};
pub use token::AccessToken;
