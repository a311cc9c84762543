//! Bridge between a message-passing UI layer and the Locus Map application.
//!
//! Locus Map is an external mapping application that can be remote-controlled
//! by other applications on the same device: it displays points and tracks
//! sent to it, navigates, records tracks, imports geodata files. This crate
//! is the part of such a remote control that is independent of any one
//! platform. It receives loosely typed `(operation, arguments)` calls the way
//! channel-based UI frameworks deliver them, validates the arguments into the
//! typed geodata values of the `locus-remote-types` crate, and forwards each
//! call through the [`vendor::VendorApi`] seam that a host integration
//! implements on top of the vendor SDK.
//!
//! # Dispatching calls
//!
//! The whole surface is one [`Dispatcher`]. A host integration constructs it
//! around its vendor seam and hands it every call coming off the channel:
//!
//! ```no_run
//! # fn forward(vendor: impl locus_remote::vendor::VendorApi) {
//! use locus_remote::{Dispatcher, Foreground, MethodCall};
//!
//! let dispatcher = Dispatcher::new(vendor);
//!
//! let mut call = MethodCall::new("displayPoint");
//! call.arguments.insert("name".into(), "Cafe".into());
//! call.arguments.insert("latitude".into(), 50.08.into());
//! call.arguments.insert("longitude".into(), 14.43.into());
//!
//! let outcome = dispatcher.dispatch(Some(Foreground::new(1)), &call);
//! let response = outcome.to_wire();
//! # }
//! ```
//!
//! Every call produces exactly one [`Outcome`]: a success value, a failure
//! with a stable error code, or `NotImplemented` for operation names outside
//! the contract. Failures never cross the dispatch boundary as panics.
//!
//! # Foreground handling
//!
//! Operations that open vendor screens or send window-bound requests need the
//! host to be in the foreground. The host integration expresses that by
//! passing `Some(Foreground)` while it has a visible window and `None`
//! otherwise; there is no process-global UI state inside the bridge.

pub mod error;
pub mod vendor;

mod call;
mod config;
mod decoded_image;
mod dispatcher;
mod foreground;
mod image_loader;
mod ops;
mod outcome;
mod pack;

#[cfg(test)]
mod tests;

pub use call::MethodCall;
pub use config::BridgeConfig;
pub use decoded_image::DecodedImage;
pub use dispatcher::Dispatcher;
pub use error::{BridgeError, VendorError};
pub use foreground::Foreground;
pub use image_loader::{AssetReader, DirAssetReader, ImageLoader, NoAssets};
pub use locus_remote_types as types;
pub use outcome::Outcome;
pub use pack::PointPack;
