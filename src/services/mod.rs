pub mod intake;
pub mod newsletter;
