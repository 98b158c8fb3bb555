pub mod chat;
pub mod config;
pub mod report;

pub use chat::{Channel, Post, Team, User};
pub use config::{
    ApiPingProbeConfig, BroadcastProbeConfig, ChannelJoinProbeConfig, ClientConfig, Config,
    LoggingConfig, LoginProbeConfig, PingProbeConfig, SearchProbeConfig, UserConfig,
};
pub use report::{Report, ReportMetric, ReportReceiver, ReportSink};
