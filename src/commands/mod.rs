pub mod common;
pub mod generate;
pub mod latest;
pub mod serve;
pub mod vocab;

pub use generate::handle_generate;
pub use latest::handle_latest;
pub use serve::handle_serve;
pub use vocab::handle_vocab;
