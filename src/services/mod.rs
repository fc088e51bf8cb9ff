pub mod providers;
pub mod recommendations;
pub mod stylist;

pub use recommendations::recommend;
pub use stylist::StylistService;
