/* src/client/rust/src/lib.rs */

pub mod boot;

// Public API re-exports
pub use boot::{MountedApp, SetupContext, boot};
