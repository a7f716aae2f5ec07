//! Snapshot backend over HTTP.
//! 基于 HTTP 的快照后端。

mod classify;
mod time_machine_api;

pub use time_machine_api::TimeMachineHttpApi;
