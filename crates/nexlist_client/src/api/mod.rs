pub mod client;
mod memo_handler;
mod todos_handler;

pub(crate) use memo_handler::MemoHandler;
pub(crate) use todos_handler::TodosHandler;
