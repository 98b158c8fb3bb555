//! Probe variant implementations.
//!
//! Each variant implements the [`Probe`](crate::domain::ports::Probe) port.
//! `setup` resolves whatever the probe targets and fails fast when that is
//! impossible; `start` spawns a detached loop that runs the check every
//! `frequency_secs`. Failures inside the loop are logged and do not stop it.
//!
//! | Probe        | Clients            | Report sink |
//! |--------------|--------------------|-------------|
//! | Broadcast    | speaker + listener | yes         |
//! | ChannelJoin  | one                | no          |
//! | Ping         | one                | no          |
//! | Search       | one                | yes         |
//! | Login        | one per user       | no          |
//! | ApiPing      | one                | no          |

pub mod api_ping;
pub mod broadcast;
pub mod channel_join;
pub mod login;
pub mod ping;
pub mod search;
pub mod ticker;

pub use api_ping::ApiPingProbe;
pub use broadcast::{BroadcastProbe, BROADCAST_MESSAGE_PREFIX};
pub use channel_join::ChannelJoinProbe;
pub use login::LoginProbe;
pub use ping::PingProbe;
pub use search::SearchProbe;
