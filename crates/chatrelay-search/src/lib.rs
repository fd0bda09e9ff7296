pub mod client;
pub mod errors;
pub mod gateway;

pub mod prelude {
    pub use crate::client::{SearchBackend, SearchClient, SearchConfig};
    pub use crate::errors::RetrievalError;
    pub use crate::gateway::{Retrieve, RetrievalGateway, MAX_RESULTS};
}
