//! Shared event payloads exchanged between the stream's services.
//!
//! Every family is a closed set of variants encoded as one JSON object: a `type`
//! discriminant, a few fixed envelope fields and a single nested payload for the active
//! variant. Decoding a discriminant this build doesn't know yields an `Unrecognized`
//! variant rather than an error, so producers can add variants ahead of consumers.
//!
//! ```
//! use stream_schemas::codec::Wire;
//! use stream_schemas::twitch::{self, Payload, ViewerRaided};
//! use stream_schemas::Viewer;
//!
//! let ev = twitch::Event::new(Viewer::new("1234", "Cool_User"), Payload::ViewerRaided(ViewerRaided { num_raiders: 9001 }));
//! let bytes = ev.to_json_bytes().unwrap();
//! assert_eq!(twitch::Event::from_json_bytes(&bytes).unwrap(), ev);
//! ```

pub mod broadcast;
pub mod codec;
pub mod common;
pub mod config;
pub mod genreq;
pub mod onscreen;
pub mod twitch;

pub use codec::{CodecError, Wire};
pub use common::{State, Viewer};
pub use config::DecodeConfig;
