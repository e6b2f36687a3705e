//! Tournament core: standings and Swiss pairings.

mod pairing;
mod standings;

pub use pairing::generate_pairings;
pub use standings::compute_standings;
