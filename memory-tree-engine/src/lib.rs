//! Interactive memory tree: a 3D Christmas tree of foliage, lights, ornaments
//! and photo panels that morphs between a dispersed cloud and a formed cone.

pub mod engine;
pub mod rpc;
pub mod tools;
