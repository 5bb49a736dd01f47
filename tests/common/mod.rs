pub mod fakes;
pub mod logging;
