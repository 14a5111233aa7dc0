pub mod check;
pub mod complete;
pub mod graph;
pub mod onboard;
pub mod packets;
pub mod remind;
pub mod show;
pub mod slots;
pub mod status;
