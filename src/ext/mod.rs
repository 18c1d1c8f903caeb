//! Stateless helper functions, grouped by the kind of value they operate on.
//!
//! - `bytes`: Base64/hex/UTF conversions and array plumbing
//! - `collect`: pagination, random selection, joining, bulk mutation
//! - `compress`: Deflate and GZip round-trips
//! - `io`: reader/writer conveniences
//! - `net`: blocking HTTP downloads and URL query building
//! - `meta`: display-name/description lookup
//!
//! Helpers validate their arguments at entry; every other failure propagates
//! unchanged from the underlying call. Nothing here retains state between
//! calls.

pub mod bytes;
pub mod collect;
pub mod compress;
pub mod io;
pub mod meta;
pub mod net;

pub use collect::SliceExt;
pub use meta::Describe;
