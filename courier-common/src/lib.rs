pub mod address;
pub mod draft;
pub mod error;
pub mod logging;
pub mod message;
pub mod status;

pub use address::{ALLOWED_DOMAIN_SUFFIXES, Address, AddressList};
pub use draft::{Draft, RawRecipients};
pub use error::{AddressError, MessageError};
pub use message::Message;
pub use status::Status;
pub use tracing;
