//! Client-side data model for the EC2 Auto Scaling API.
//!
//! This crate only holds the request, response and nested configuration
//! types exchanged with the service. Transport, signing, retries and
//! pagination belong to whatever client drives these types; nothing in
//! here performs I/O or validates field constraints, the service does
//! that on its side.
//!
//! Every entity is an immutable-shaped struct built through its
//! `derive_builder` companion:
//!
//! ```
//! use autoscaling_types::types::EbsBuilder;
//!
//! let mut eb = EbsBuilder::default();
//! let ebs = eb
//!     .snapshot_id("snap-123")
//!     .volume_size(100)
//!     .volume_type("gp2")
//!     .build()
//!     .unwrap();
//! assert_eq!(ebs.volume_size, Some(100));
//! ```

pub mod enums;
pub mod requests;
pub mod responses;
pub mod types;

/// Renders a type as its serialized wire form: field-declaration ordered,
/// absent fields omitted. Shared by every entity in the crate.
macro_rules! display_json {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match ::serde_json::to_string(self) {
                    Ok(rendered) => f.write_str(&rendered),
                    Err(_) => Err(::std::fmt::Error),
                }
            }
        }
    )+};
}
pub(crate) use display_json;
