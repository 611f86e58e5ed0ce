//! 服务层模块

mod dispatcher;
mod registry;

pub use dispatcher::{
    Completion, CompletionReceiver, Dispatch, SubmissionDispatcher, SubmitRequest,
};
pub use registry::{SectionRegistry, SubmitOutcome};
