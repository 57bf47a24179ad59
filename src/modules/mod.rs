pub mod auth;
pub mod bucketlist;
pub mod item;
