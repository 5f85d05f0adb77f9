pub mod debounce;
pub mod topic;
