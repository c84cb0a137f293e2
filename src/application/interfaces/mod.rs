/// Device listing and lookup
pub mod device;
/// Events, recordings and archived streams
pub mod event;
/// Image and video exports
pub mod export;
/// ATOM camera settings
pub mod settings;
