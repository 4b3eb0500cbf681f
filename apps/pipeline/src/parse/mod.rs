// Resume parsing: wrap repair, section segmentation, contact extraction,
// and the full-profile orchestrator. Pure functions over caller-supplied
// text; no file or network I/O in this module tree.

pub mod contact;
pub mod normalize;
pub mod profile;
pub mod section;
