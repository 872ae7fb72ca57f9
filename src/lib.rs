mod wav;
pub use wav::*;
pub mod codegen;
pub mod downmix;
pub mod ident;
pub mod structs;
