pub mod codec;
pub mod declaration;
pub mod descriptor;
pub mod error;

pub use codec::{decode, encode, try_decode};
pub use declaration::{
    IndexDeclaration, IndexDeclarationBuilder, ProviderOptions, WithProviderOptions,
};
pub use descriptor::IndexDescriptor;
pub use error::DeclarationError;

pub(crate) use declaration::deserialize_options;
