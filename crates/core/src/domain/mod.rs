pub mod contract;
pub mod lottery;
pub mod preferences;
pub mod recommendation;
