pub mod canvas;
pub mod controls;
pub mod protocol;
pub mod request;
pub mod selection;
pub mod symbology;
pub mod synchronizer;

pub use canvas::*;
pub use controls::*;
pub use protocol::*;
pub use request::*;
pub use selection::*;
pub use synchronizer::*;
