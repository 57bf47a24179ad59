pub mod bucketlist_use_cases;
pub mod ports;
pub mod service;
